use std::collections::{BTreeSet, HashMap};

use alias_metadata::{Catalog, Error, FieldSelector, Selection};

const ABSENT: Option<Vec<&str>> = None;

fn selector() -> FieldSelector {
    FieldSelector::new(Catalog::new(["role_name"], ["remote_addr"]))
}

fn login(selector: &FieldSelector, selection: &Selection) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    selector.populate(
        selection,
        HashMap::from([
            ("role_name", "admin"),
            ("remote_addr", "1.2.3.4"),
            ("extra", "x"),
        ]),
        &mut metadata,
    );
    metadata
}

fn keys(metadata: &HashMap<String, String>) -> BTreeSet<&str> {
    metadata.keys().map(String::as_str).collect()
}

#[test_log::test]
fn test_config_lifecycle() {
    let selector = selector();
    let mut stored = Selection::Unset;

    // never configured
    assert_eq!(keys(&login(&selector, &stored)), BTreeSet::from(["role_name"]));

    // a request not touching the field
    assert_eq!(selector.update(&mut stored, ABSENT), Ok(false));
    assert!(stored.is_unset());

    assert_eq!(
        selector.update(&mut stored, Some(vec!["default", "remote_addr"])),
        Ok(true)
    );
    assert_eq!(
        login(&selector, &stored),
        HashMap::from([
            ("role_name".to_string(), "admin".to_string()),
            ("remote_addr".to_string(), "1.2.3.4".to_string()),
        ])
    );

    // explicit opt-out
    assert_eq!(selector.update(&mut stored, Some(Vec::<&str>::new())), Ok(true));
    assert!(login(&selector, &stored).is_empty());

    assert!(matches!(
        selector.update(&mut stored, Some(vec!["bogus_field"])),
        Err(Error::InvalidField { field, .. }) if field == "bogus_field"
    ));
    assert!(login(&selector, &stored).is_empty());
    assert!(!stored.is_unset());
}

#[test_log::test]
fn test_default_expansion_is_stored() {
    let selector = selector();
    let selection = selector.parse(Some(["default"])).unwrap().unwrap();

    assert_eq!(
        selection.selected(),
        Some(&BTreeSet::from(["role_name".to_string()]))
    );
}

#[test_log::test]
fn test_empty_catalog() {
    let selector = FieldSelector::new(Catalog::default());

    assert!(selector.effective_fields(&Selection::Unset).is_empty());
    assert!(login(&selector, &Selection::Unset).is_empty());

    let err = selector.parse(Some(["role_name"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"role_name\" is not an available field, please select from: "
    );
}

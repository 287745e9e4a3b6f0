use alias_metadata::Catalog;
use indoc::indoc;

#[test_log::test]
fn test_catalog() {
    let catalog = Catalog::from_toml(indoc! {r#"
        [alias-metadata]
        default = ["role_name"]
        available-to-add = ["remote_addr", "user_agent"]
    "#})
    .unwrap();

    assert_eq!(catalog.default, ["role_name"]);
    assert_eq!(catalog.available_to_add, ["remote_addr", "user_agent"]);
}

#[test_log::test]
fn test_defaults_only() {
    let catalog = Catalog::from_toml(indoc! {r#"
        [alias-metadata]
        default = ["role_name"]
    "#})
    .unwrap();

    assert!(catalog.available_to_add.is_empty());
}

#[test_log::test]
fn test_unknown_key_rejected() {
    let result = Catalog::from_toml(indoc! {r#"
        [alias-metadata]
        default = ["role_name"]
        optional = ["remote_addr"]
    "#});

    assert!(result.is_err());
}

#[test_log::test]
fn test_overlap_rejected() {
    let err = Catalog::from_toml(indoc! {r#"
        [alias-metadata]
        default = ["role_name"]
        available-to-add = ["role_name", "remote_addr"]
    "#})
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "\"role_name\" is declared both as a default field and as available to add"
    );
}

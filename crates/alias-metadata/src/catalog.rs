//! Field catalogs declared by plugins.

use serde::Deserialize;

/// The alias metadata fields a plugin offers to operators.
///
/// The two lists are expected to be disjoint.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Fields included when the operator has made no selection, or selects `default`.
    ///
    /// Every change to an alias' metadata can incur a storage write,
    /// so these fields should have a low rate of change.
    #[serde(default)]
    pub default: Vec<String>,

    /// Fields not included by default, which the operator may add.
    #[serde(default, rename = "available-to-add")]
    pub available_to_add: Vec<String>,
}

impl Catalog {
    /// Create a new catalog from default and additionally available field names.
    pub fn new<D, A>(
        default: impl IntoIterator<Item = D>,
        available_to_add: impl IntoIterator<Item = A>,
    ) -> Self
    where
        D: Into<String>,
        A: Into<String>,
    {
        Self {
            default: default.into_iter().map(Into::into).collect(),
            available_to_add: available_to_add.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the field is part of the catalog, either as a default or as an addable field.
    pub fn contains(&self, field: &str) -> bool {
        self.default
            .iter()
            .chain(&self.available_to_add)
            .any(|candidate| candidate == field)
    }

    /// Find a field declared both as default and as addable, if any.
    pub fn overlapping_field(&self) -> Option<&str> {
        self.default
            .iter()
            .find(|field| self.available_to_add.contains(field))
            .map(String::as_str)
    }

    /// A verbose, human-readable description of how to use the `alias_metadata` field.
    pub fn description(&self) -> String {
        let mut desc =
            String::from("The metadata to include on the aliases generated by this plugin.");

        if !self.default.is_empty() {
            desc.push_str(&format!(
                " When set to 'default', includes: {}.",
                self.default.join(", ")
            ));
        }

        if !self.available_to_add.is_empty() {
            desc.push_str(&format!(
                " These fields are available to add: {}.",
                self.available_to_add.join(", ")
            ));
        }

        desc.push_str(concat!(
            " Not editing this field means the 'default' fields are included.",
            " Explicitly setting this field to empty overrides the 'default' and means no alias metadata will be included.",
            " Add fields by sending, 'default,field1,field2'.",
            " We advise only including fields that change rarely because each change triggers a storage write.",
        ));

        desc
    }
}

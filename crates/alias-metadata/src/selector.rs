//! Parsing, validation and application of alias metadata selections.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::{Catalog, Error, Selection, DEFAULT_KEYWORD};

/// Interprets [Selection]s against the [Catalog] of a plugin.
///
/// The selector holds no selection state of its own.
/// The plugin's configuration stores the [Selection], and passes it to the selector explicitly.
#[derive(Clone, Debug)]
pub struct FieldSelector {
    catalog: Catalog,
}

impl FieldSelector {
    /// Create a new selector for the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog of this selector.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A verbose, human-readable description of how to use the `alias_metadata` field.
    pub fn description(&self) -> String {
        self.catalog.description()
    }

    /// The fields that the given selection actually includes.
    ///
    /// An unset selection means the catalog defaults.
    /// Otherwise the explicit selection is returned as-is, even if it is empty.
    pub fn effective_fields<'a>(&'a self, selection: &'a Selection) -> BTreeSet<&'a str> {
        match selection {
            Selection::Unset => self.catalog.default.iter().map(String::as_str).collect(),
            Selection::Selected(fields) => fields.iter().map(String::as_str).collect(),
        }
    }

    /// Parse the operator's raw list of field names into a new [Selection].
    ///
    /// `None` means the field was absent from the request, and results in `Ok(None)`: nothing should change.
    /// A present but empty list results in an empty selection, which opts out of alias metadata.
    ///
    /// The `default` keyword is replaced by the catalog's default fields, and duplicates collapse.
    pub fn parse<I, S>(&self, raw: Option<I>) -> Result<Option<Selection>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let mut fields = BTreeSet::new();

        for field in raw {
            let field = field.as_ref();

            if field == DEFAULT_KEYWORD {
                fields.extend(self.catalog.default.iter().cloned());
            } else if self.catalog.contains(field) {
                fields.insert(field.to_string());
            } else {
                warn!(field, "rejected alias metadata field");

                return Err(Error::InvalidField {
                    field: field.to_string(),
                    available: self.catalog.available_to_add.clone(),
                });
            }
        }

        debug!(?fields, "parsed alias metadata selection");

        Ok(Some(Selection::Selected(fields)))
    }

    /// Parse the raw list of field names, and replace the stored selection with the result.
    ///
    /// Returns whether the selection was replaced.
    /// On error, or when the field was absent, the stored selection is left untouched.
    pub fn update<I, S>(&self, selection: &mut Selection, raw: Option<I>) -> Result<bool, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.parse(raw)? {
            Some(parsed) => {
                *selection = parsed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Copy the selected fields of the available data into the destination alias metadata.
    pub fn populate<K, V>(
        &self,
        selection: &Selection,
        available: impl IntoIterator<Item = (K, V)>,
        destination: &mut impl Extend<(String, String)>,
    ) where
        K: AsRef<str> + Into<String>,
        V: Into<String>,
    {
        apply_selection(&self.effective_fields(selection), available, destination);
    }
}

/// Copy every entry of `available` whose key is one of the `effective` fields into `destination`.
///
/// Effective fields missing from the available data are skipped.
/// Entries are only ever added to (or overwritten in) the destination.
pub fn apply_selection<K, V>(
    effective: &BTreeSet<&str>,
    available: impl IntoIterator<Item = (K, V)>,
    destination: &mut impl Extend<(String, String)>,
) where
    K: AsRef<str> + Into<String>,
    V: Into<String>,
{
    destination.extend(
        available
            .into_iter()
            .filter(|(field, _)| effective.contains(field.as_ref()))
            .map(|(field, value)| (field.into(), value.into())),
    );
}

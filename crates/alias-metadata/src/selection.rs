//! The persisted alias metadata selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An operator's alias metadata selection, as stored in a plugin's configuration.
///
/// A selection is serialized as a nullable list of field names.
/// `null` means [Selection::Unset], and any list (also an empty one) means [Selection::Selected].
///
/// The stored field names never include the `default` keyword.
/// It is expanded into the catalog's default fields when the selection is parsed.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub enum Selection {
    /// No selection has ever been made, the catalog defaults apply.
    #[default]
    Unset,

    /// An explicit selection, possibly empty.
    ///
    /// An empty selection opts out of alias metadata entirely.
    Selected(BTreeSet<String>),
}

impl Selection {
    /// Whether self is [Self::Unset].
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The explicitly selected fields, if any selection was made.
    pub fn selected(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Unset => None,
            Self::Selected(fields) => Some(fields),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::Selected(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.selected().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Option::<BTreeSet<String>>::deserialize(deserializer)? {
            None => Self::Unset,
            Some(fields) => Self::Selected(fields),
        })
    }
}

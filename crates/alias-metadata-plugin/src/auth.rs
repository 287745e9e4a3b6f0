//! Authentication results.

use fnv::FnvHashMap;
use serde::Serialize;

/// The result of a successful login.
#[derive(Clone, Default, Serialize, Debug)]
pub struct Auth {
    /// The identity alias of the authenticated caller.
    pub alias: Alias,
}

/// An identity alias, produced by authentication.
#[derive(Clone, Default, Serialize, Debug)]
pub struct Alias {
    /// The name of the alias.
    pub name: String,

    /// Metadata for later policy or audit use.
    ///
    /// The alias metadata selection only ever adds entries to this map.
    pub metadata: FnvHashMap<String, String>,
}

impl Auth {
    /// Create a new auth result for the named alias, with no metadata.
    pub fn new(alias_name: impl Into<String>) -> Self {
        Self {
            alias: Alias {
                name: alias_name.into(),
                metadata: Default::default(),
            },
        }
    }
}

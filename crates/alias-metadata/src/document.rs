//! Catalog declarations in TOML documents.

use serde::Deserialize;

use crate::Catalog;

/// A TOML document declaring the alias metadata catalog of a plugin.
///
/// ```toml
/// [alias-metadata]
/// default = ["role_name"]
/// available-to-add = ["remote_addr"]
/// ```
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// The declared catalog.
    #[serde(rename = "alias-metadata")]
    pub alias_metadata: Catalog,
}

impl Catalog {
    /// Load a catalog from a TOML [CatalogDocument].
    ///
    /// Fails if a field is declared both as default and as available to add.
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        let document: CatalogDocument = toml::from_str(toml)?;
        let catalog = document.alias_metadata;

        if let Some(field) = catalog.overlapping_field() {
            anyhow::bail!("{field:?} is declared both as a default field and as available to add");
        }

        Ok(catalog)
    }
}

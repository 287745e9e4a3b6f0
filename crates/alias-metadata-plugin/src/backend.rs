//! Reference plugin backend.

use std::sync::Arc;

use alias_metadata::{Catalog, FieldSelector, Selection, FIELD_NAME};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    auth::Auth,
    field::{FieldData, FieldSchema},
    storage::{Storage, StorageEntry},
    Error,
};

/// The storage key of the plugin configuration.
pub const CONFIG_KEY: &str = "config";

/// The login field naming the role to authenticate as.
pub const ROLE_NAME: &str = "role_name";

/// The available-data field carrying the caller's remote address.
pub const REMOTE_ADDR: &str = "remote_addr";

/// The stored plugin configuration.
///
/// The alias metadata [Selection] is kept as a named field, and interpreted by the backend's [FieldSelector].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct PluginConfig {
    /// The operator's alias metadata selection.
    #[serde(default)]
    pub alias_metadata: Selection,
}

/// Information about the connection a request arrived on.
#[derive(Clone, Debug)]
pub struct Connection {
    /// The address of the caller.
    pub remote_addr: String,
}

/// A plugin backend exposing a `config` path and a `login` path.
#[derive(Clone)]
pub struct Backend {
    selector: FieldSelector,
    storage: Arc<dyn Storage + Send + Sync>,
}

impl Backend {
    /// The catalog of alias metadata fields this backend offers.
    ///
    /// The role name would rarely change, since the alias is named after it,
    /// while the remote address is likely to change with every caller.
    pub fn default_catalog() -> Catalog {
        Catalog::new([ROLE_NAME], [REMOTE_ADDR])
    }

    /// Create a new backend using the given catalog and storage.
    pub fn new(catalog: Catalog, storage: Arc<dyn Storage + Send + Sync>) -> Self {
        Self {
            selector: FieldSelector::new(catalog),
            storage,
        }
    }

    /// The alias metadata field selector of this backend.
    pub fn selector(&self) -> &FieldSelector {
        &self.selector
    }

    /// The fields accepted by the `config` path.
    pub fn config_fields(&self) -> FnvHashMap<&'static str, FieldSchema> {
        FnvHashMap::from_iter([(FIELD_NAME, FieldSchema::alias_metadata(&self.selector))])
    }

    /// The fields accepted by the `login` path.
    pub fn login_fields(&self) -> FnvHashMap<&'static str, FieldSchema> {
        FnvHashMap::from_iter([(
            ROLE_NAME,
            FieldSchema::string("The role to log in as.", true),
        )])
    }

    /// Load the stored configuration, or the default one if nothing was stored yet.
    pub async fn load_config(&self) -> Result<PluginConfig, Error> {
        match self.storage.get(CONFIG_KEY).await? {
            Some(entry) => entry.decode_json(),
            None => Ok(PluginConfig::default()),
        }
    }

    /// Read the configuration.
    ///
    /// The response always reports the effective alias metadata fields,
    /// so an unconfigured backend shows what the defaults are.
    pub async fn read_config(&self) -> Result<serde_json::Map<String, serde_json::Value>, Error> {
        let config = self.load_config().await?;
        let effective = self.selector.effective_fields(&config.alias_metadata);

        Ok(serde_json::Map::from_iter([(
            FIELD_NAME.to_string(),
            serde_json::Value::from_iter(effective),
        )]))
    }

    /// Create or update the configuration.
    ///
    /// Invalid alias metadata fields reject the whole request, and nothing is stored.
    pub async fn update_config(&self, data: &FieldData) -> Result<(), Error> {
        let raw = data.get_comma_string_slice(FIELD_NAME)?;
        let Some(alias_metadata) = self.selector.parse(raw)? else {
            debug!("alias metadata not part of request, config unchanged");
            return Ok(());
        };

        let mut config = self.load_config().await?;
        config.alias_metadata = alias_metadata;

        self.storage
            .put(StorageEntry::json(CONFIG_KEY, &config)?)
            .await?;

        debug!(alias_metadata = ?config.alias_metadata, "stored config");

        Ok(())
    }

    /// Log in as a role.
    ///
    /// The alias is named after the role, and its metadata is populated from the role name
    /// and the caller's remote address, as far as the configured selection allows.
    pub async fn login(
        &self,
        data: &FieldData,
        connection: Option<&Connection>,
    ) -> Result<Auth, Error> {
        let role_name = data.require_string(ROLE_NAME)?;
        let config = self.load_config().await?;

        let mut available = FnvHashMap::from_iter([(ROLE_NAME, role_name)]);
        if let Some(connection) = connection {
            available.insert(REMOTE_ADDR, connection.remote_addr.as_str());
        }

        let mut auth = Auth::new(role_name);
        self.selector
            .populate(&config.alias_metadata, available, &mut auth.alias.metadata);

        debug!(
            alias = %auth.alias.name,
            metadata_fields = auth.alias.metadata.len(),
            "populated alias metadata"
        );

        Ok(auth)
    }
}

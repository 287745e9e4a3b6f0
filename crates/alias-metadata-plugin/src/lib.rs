//! `alias-metadata-plugin` wires the alias metadata [FieldSelector](alias_metadata::FieldSelector)
//! into an authentication plugin backend.
//!
//! The [Backend](backend::Backend) in this crate is the reference integration:
//! it stores the operator's selection in its configuration, and populates alias metadata at login.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod backend;
pub mod field;
pub mod storage;

/// Errors that can happen while handling plugin requests.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The operator selected an invalid alias metadata field.
    #[error("{0}")]
    AliasMetadata(#[from] alias_metadata::Error),

    /// A request field could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A required request field was not present.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A problem with the plugin storage.
    #[error("storage error: {0}")]
    Storage(anyhow::Error),

    /// A problem encoding or decoding stored data.
    #[error("encoding error: {0}")]
    Codec(anyhow::Error),
}

impl Error {
    /// Whether the error was caused by the request itself.
    ///
    /// Such errors should be returned to the caller as a bad request, and never retried.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::AliasMetadata(_) | Self::InvalidRequest(_) | Self::MissingField(_)
        )
    }
}

pub(crate) mod err {
    use super::*;

    pub fn codec(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::Codec(anyhow::Error::from(err))
    }
}

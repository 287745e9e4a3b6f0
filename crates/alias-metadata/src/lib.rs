//! `alias-metadata` lets authentication plugins expose an operator-configurable
//! selection of the fields attached to the metadata of the aliases they produce.
//!
//! A plugin declares a [Catalog] of default and optional field names once, at registration.
//! Operators then pick fields through the `alias_metadata` configuration field, which is
//! parsed into a [Selection] by a [FieldSelector]. At login, the selector filters the data
//! the plugin has available down to the selected fields.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(feature = "unstable-doc-cfg", feature(doc_auto_cfg))]

pub mod catalog;
pub mod selection;
pub mod selector;

#[cfg(feature = "document")]
pub mod document;

mod error;

pub use catalog::Catalog;
pub use error::Error;
pub use selection::Selection;
pub use selector::{apply_selection, FieldSelector};

/// The user-facing name of the configuration field.
pub const FIELD_NAME: &str = "alias_metadata";

/// The selection keyword that expands to the catalog's default fields.
pub const DEFAULT_KEYWORD: &str = "default";

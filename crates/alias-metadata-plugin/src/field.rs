//! Request field schemas and raw field data.

use alias_metadata::{FieldSelector, DEFAULT_KEYWORD, FIELD_NAME};
use serde::Serialize;
use serde_json::Value;

use crate::Error;

/// The type of a request field.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// A single string.
    String,

    /// A list of strings, given either as a JSON array or as one comma-separated string.
    CommaStringSlice,
}

/// Attributes used for presenting a field to operators.
#[derive(Clone, Serialize, Debug)]
pub struct DisplayAttributes {
    /// The display name.
    pub name: String,

    /// An example value.
    pub value: String,
}

/// Describes a request field accepted by a backend path.
#[derive(Clone, Serialize, Debug)]
pub struct FieldSchema {
    /// The type of the field.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Human-readable description.
    pub description: String,

    /// Whether requests must include the field.
    pub required: bool,

    /// Presentation hints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_attrs: Option<DisplayAttributes>,

    /// The value assumed when the field is not specified at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldSchema {
    /// Schema of a plain string field.
    pub fn string(description: impl Into<String>, required: bool) -> Self {
        Self {
            field_type: FieldType::String,
            description: description.into(),
            required,
            display_attrs: None,
            default: None,
        }
    }

    /// Schema of the `alias_metadata` field, describing the selector's catalog.
    pub fn alias_metadata(selector: &FieldSelector) -> Self {
        Self {
            field_type: FieldType::CommaStringSlice,
            description: selector.description(),
            required: false,
            display_attrs: Some(DisplayAttributes {
                name: FIELD_NAME.to_string(),
                value: "default,field1,field2".to_string(),
            }),
            default: Some(Value::from(vec![DEFAULT_KEYWORD])),
        }
    }
}

/// The raw fields of a request.
///
/// Keeps track of which fields were present in the request at all,
/// which is different from a field being present with an empty value.
#[derive(Clone, Default, Debug)]
pub struct FieldData {
    raw: serde_json::Map<String, Value>,
}

impl FieldData {
    /// Create field data from raw request fields.
    pub fn new(raw: serde_json::Map<String, Value>) -> Self {
        Self { raw }
    }

    /// Get the raw value of a field, if it was present in the request.
    ///
    /// An explicit JSON `null` counts as not present.
    pub fn get_raw(&self, name: &str) -> Option<&Value> {
        self.raw.get(name).filter(|value| !value.is_null())
    }

    /// Get a string field, if present.
    pub fn get_string(&self, name: &str) -> Result<Option<&str>, Error> {
        match self.get_raw(name) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(Error::InvalidRequest(format!(
                "field {name:?} must be a string"
            ))),
        }
    }

    /// Get a required string field.
    pub fn require_string(&self, name: &'static str) -> Result<&str, Error> {
        self.get_string(name)?.ok_or(Error::MissingField(name))
    }

    /// Get a comma-separated string slice field, if present.
    ///
    /// Only the exact empty string yields an empty list. Otherwise items are trimmed and kept,
    /// so a stray comma produces an empty item for the caller to reject.
    pub fn get_comma_string_slice(&self, name: &str) -> Result<Option<Vec<String>>, Error> {
        let Some(value) = self.get_raw(name) else {
            return Ok(None);
        };

        let items: Vec<&str> = match value {
            Value::String(value) if value.is_empty() => vec![],
            Value::String(value) => value.split(',').collect(),
            Value::Array(values) => values
                .iter()
                .map(|value| {
                    value.as_str().ok_or_else(|| {
                        Error::InvalidRequest(format!("field {name:?} must only contain strings"))
                    })
                })
                .collect::<Result<_, _>>()?,
            _ => {
                return Err(Error::InvalidRequest(format!(
                    "field {name:?} must be a comma-separated string or a list of strings"
                )))
            }
        };

        Ok(Some(
            items
                .into_iter()
                .map(|item| item.trim().to_string())
                .collect(),
        ))
    }
}

impl From<serde_json::Map<String, Value>> for FieldData {
    fn from(raw: serde_json::Map<String, Value>) -> Self {
        Self::new(raw)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

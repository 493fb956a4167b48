use tracing::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Model, Result};

/// How the codec treats fields the schema marks as required
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Accept models with required fields unset
    #[default]
    Lenient,
    /// Reject models with required fields unset, on both encode and decode
    RequireFields,
}

/// Encodes models to, and decodes models from, their JSON wire form.
///
/// # Example
/// ```
/// # use ldapi_models::{CustomProperty, Error, FieldPolicy, JsonCodec};
/// let codec = JsonCodec::new().with_policy(FieldPolicy::RequireFields);
///
/// let err = codec.decode_str::<CustomProperty>(r#"{"value": []}"#).unwrap_err();
/// assert!(matches!(err, Error::MissingField { field: "name", .. }));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    policy: FieldPolicy,
}

impl JsonCodec {
    /// Create a new [`JsonCodec`] with the [`FieldPolicy::Lenient`] policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for required fields
    pub fn with_policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The policy for required fields
    pub fn policy(&self) -> FieldPolicy {
        self.policy
    }

    /// Encode `model` as a JSON string
    pub fn encode<T: Model + Serialize>(&self, model: &T) -> Result<String> {
        self.check(model)?;
        let json = serde_json::to_string(model).map_err(|source| Error::Encode {
            model: T::NAME,
            source,
        })?;
        debug!(model = T::NAME, bytes = json.len(), "encoded model");
        Ok(json)
    }

    /// Encode `model` as JSON bytes
    pub fn encode_to_vec<T: Model + Serialize>(&self, model: &T) -> Result<Vec<u8>> {
        self.encode(model).map(String::into_bytes)
    }

    /// Decode a model from JSON bytes
    ///
    /// Absent and `null` members decode as unset; unknown members are ignored.
    pub fn decode<T: Model + DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let model: T = serde_json::from_slice(bytes).map_err(|source| {
            warn!(model = T::NAME, error = %source, "failed to decode model");
            Error::Decode {
                model: T::NAME,
                source,
            }
        })?;
        self.check(&model)?;
        debug!(model = T::NAME, bytes = bytes.len(), "decoded model");
        Ok(model)
    }

    /// Decode a model from a JSON string
    pub fn decode_str<T: Model + DeserializeOwned>(&self, json: &str) -> Result<T> {
        self.decode(json.as_bytes())
    }

    fn check<T: Model>(&self, model: &T) -> Result<()> {
        match self.policy {
            FieldPolicy::Lenient => Ok(()),
            FieldPolicy::RequireFields => model.validate().inspect_err(|e| {
                if let Error::MissingField { field, .. } = e {
                    warn!(model = T::NAME, field, "required field is unset");
                }
            }),
        }
    }
}

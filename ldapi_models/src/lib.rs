#![warn(missing_docs, clippy::explicit_iter_loop, clippy::use_self)]

//! # ldapi_models
//!
//! Data-transfer models for a Rust client to the [LaunchDarkly REST API][api]
//! (schema version 2.0.9).
//!
//! Each model is a plain value type with structural equality, hashing, a
//! `Display` form in the style of the generated API client, and a JSON
//! mapping. [`JsonCodec`] moves models on and off the wire and can optionally
//! enforce the fields the schema marks as required.
//!
//! ```
//! use ldapi_models::{CustomProperty, CustomPropertyValues, JsonCodec};
//!
//! # fn main() -> ldapi_models::Result<()> {
//! let property = CustomProperty::new()
//!     .with_name("Jira issues")
//!     .with_value(CustomPropertyValues::from_iter(["APP-1", "APP-2"]));
//!
//! let codec = JsonCodec::new();
//! let json = codec.encode(&property)?;
//! assert_eq!(json, r#"{"name":"Jira issues","value":["APP-1","APP-2"]}"#);
//! assert_eq!(codec.decode_str::<CustomProperty>(&json)?, property);
//! # Ok(())
//! # }
//! ```
//!
//! [api]: https://apidocs.launchdarkly.com/

mod codec;
pub mod models;

pub use codec::{FieldPolicy, JsonCodec};
pub use models::{CustomProperty, CustomPropertyValues, Model};

/// Primary error type for encoding, decoding and validating models
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model could not be serialized to JSON
    #[error("failed to encode {model} as JSON: {source}")]
    Encode {
        /// Schema name of the model
        model: &'static str,
        /// Underlying serializer error
        #[source]
        source: serde_json::Error,
    },

    /// The input was not a valid JSON form of the model
    #[error("failed to decode {model} from JSON: {source}")]
    Decode {
        /// Schema name of the model
        model: &'static str,
        /// Underlying deserializer error
        #[source]
        source: serde_json::Error,
    },

    /// A field the schema marks as required is unset
    #[error("{model} is missing required field '{field}'")]
    MissingField {
        /// Schema name of the model
        model: &'static str,
        /// Name of the unset field, as it appears on the wire
        field: &'static str,
    },
}

impl Error {
    pub(crate) fn missing_field<M: Model>(field: &'static str) -> Self {
        Self::MissingField {
            model: M::NAME,
            field,
        }
    }
}

/// A specialized `Result` for `ldapi_models` errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_model_and_field() {
        let err = Error::missing_field::<CustomProperty>("name");
        assert_eq!(
            err.to_string(),
            "CustomProperty is missing required field 'name'"
        );
    }

    #[test]
    fn encode_error_keeps_source() {
        let source = <serde_json::Error as serde::ser::Error>::custom("unsupported value");
        let err = Error::Encode {
            model: CustomProperty::NAME,
            source,
        };
        assert_eq!(
            err.to_string(),
            "failed to encode CustomProperty as JSON: unsupported value"
        );
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("unsupported value".to_string())
        );
    }

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Decode {
            model: CustomPropertyValues::NAME,
            source,
        };
        assert!(
            err.to_string()
                .starts_with("failed to decode CustomPropertyValues from JSON: ")
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}

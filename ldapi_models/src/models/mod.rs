//! Models exchanged with the REST API

use std::{any::Any, fmt};

mod custom_property;
pub use self::custom_property::CustomProperty;
mod custom_property_values;
pub use self::custom_property_values::CustomPropertyValues;

use crate::Result;

/// Behaviour shared by every API model.
pub trait Model: fmt::Debug + fmt::Display + Any {
    /// Name of the model in the API schema
    const NAME: &'static str;

    /// Check the fields the schema marks as required.
    ///
    /// Models are never validated on construction or mutation; callers (or a
    /// [`JsonCodec`](crate::JsonCodec) with
    /// [`FieldPolicy::RequireFields`](crate::FieldPolicy::RequireFields))
    /// decide when required-ness matters.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Compare against a value of unknown type.
    ///
    /// Returns `true` for the same reference, `false` for any other concrete
    /// type, and structural equality otherwise.
    fn eq_any(&self, other: &dyn Any) -> bool
    where
        Self: PartialEq + Sized,
    {
        match other.downcast_ref::<Self>() {
            Some(other) => std::ptr::eq(self, other) || self == other,
            None => false,
        }
    }
}

/// Render an optional field for a model's `Display` form.
///
/// Unset renders as `null`; every line after the first is indented by four
/// spaces so nested models line up under their field.
pub(crate) fn indented<T: fmt::Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string().replace('\n', "\n    "),
        None => "null".to_string(),
    }
}

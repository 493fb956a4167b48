//! CustomProperty

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{IgnoredAny, MapAccess, Visitor},
};

use super::{CustomPropertyValues, Model, indented};
use crate::{Error, Result};

/// A name and value describing a custom property.
///
/// Decodes from a JSON object only. Absent and `null` members are unset and
/// unknown members are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CustomProperty {
    /// The name of the property. Required by the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Values the property may take
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<CustomPropertyValues>,
}

impl CustomProperty {
    /// Returns instance of CustomProperty with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name, returning the instance for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the value, returning the instance for chaining.
    pub fn with_value(mut self, value: CustomPropertyValues) -> Self {
        self.value = Some(value);
        self
    }

    /// The name of the property, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Unsets the name, returning the previous one.
    pub fn take_name(&mut self) -> Option<String> {
        self.name.take()
    }

    /// The values of the property, if set.
    pub fn value(&self) -> Option<&CustomPropertyValues> {
        self.value.as_ref()
    }

    /// Mutable access to the values of the property, if set.
    pub fn value_mut(&mut self) -> Option<&mut CustomPropertyValues> {
        self.value.as_mut()
    }

    /// Replaces the values.
    pub fn set_value(&mut self, value: CustomPropertyValues) {
        self.value = Some(value);
    }

    /// Unsets the values, returning the previous ones.
    pub fn take_value(&mut self) -> Option<CustomPropertyValues> {
        self.value.take()
    }
}

impl Model for CustomProperty {
    const NAME: &'static str = "CustomProperty";

    fn validate(&self) -> Result<()> {
        if self.name.is_none() {
            return Err(Error::missing_field::<Self>("name"));
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for CustomProperty {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CustomPropertyVisitor)
    }
}

struct CustomPropertyVisitor;

impl<'de> Visitor<'de> for CustomPropertyVisitor {
    type Value = CustomProperty;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a CustomProperty object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut property = CustomProperty::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => property.name = map.next_value()?,
                "value" => property.value = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(property)
    }
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class {} {{", Self::NAME)?;
        writeln!(f, "    name: {}", indented(self.name()))?;
        writeln!(f, "    value: {}", indented(self.value()))?;
        write!(f, "}}")
    }
}

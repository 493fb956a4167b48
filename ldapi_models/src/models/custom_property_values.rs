//! CustomPropertyValues

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

use super::Model;

/// Values of a custom property.
///
/// Serialized as a bare JSON array of strings. Derefs to the underlying
/// `Vec<String>` so it can be read and edited like one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomPropertyValues(Vec<String>);

impl CustomPropertyValues {
    /// Returns an empty instance of CustomPropertyValues
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value, returning the instance for chaining.
    pub fn with(mut self, value: impl Into<String>) -> Self {
        self.0.push(value.into());
        self
    }

    /// Consumes the wrapper, returning the values.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for CustomPropertyValues {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<S: Into<String>> FromIterator<S> for CustomPropertyValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for CustomPropertyValues {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CustomPropertyValues {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Deref for CustomPropertyValues {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CustomPropertyValues {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Model for CustomPropertyValues {
    const NAME: &'static str = "CustomPropertyValues";
}

impl fmt::Display for CustomPropertyValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = format!("[{}]", self.0.join(", "));

        writeln!(f, "class {} {{", Self::NAME)?;
        writeln!(f, "    {}", super::indented(Some(list.as_str())))?;
        write!(f, "}}")
    }
}

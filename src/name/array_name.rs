use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{validate_name, NameError};

/// The name of an array local to its group.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArrayName(String);

impl ArrayName {
    /// Create a new array name from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidArrayName`] if `name` is empty, contains `/`, or is composed only of periods.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if validate_name(&name) {
            Ok(Self(name))
        } else {
            Err(NameError::InvalidArrayName(name))
        }
    }

    /// Extracts a string slice containing the array name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ArrayName {
    type Error = NameError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for ArrayName {
    type Error = NameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<ArrayName> for String {
    fn from(name: ArrayName) -> Self {
        name.0
    }
}

impl std::borrow::Borrow<str> for ArrayName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

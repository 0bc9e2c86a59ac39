use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{validate_name, NameError};

/// The name of a group in the root catalog.
///
/// Group names are immutable once listed by a [`Catalog`](crate::catalog::Catalog).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Create a new group name from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidGroupName`] if `name` is empty, contains `/`, or is composed only of periods.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if validate_name(&name) {
            Ok(Self(name))
        } else {
            Err(NameError::InvalidGroupName(name))
        }
    }

    /// Extracts a string slice containing the group name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for GroupName {
    type Error = NameError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for GroupName {
    type Error = NameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_name() {
        assert_eq!(GroupName::new("amc").unwrap().as_str(), "amc");
        assert!(GroupName::new("").is_err());
        assert!(GroupName::new("..").is_err());
        assert_eq!(
            GroupName::new("amc/ip"),
            Err(NameError::InvalidGroupName("amc/ip".to_string()))
        );
    }
}

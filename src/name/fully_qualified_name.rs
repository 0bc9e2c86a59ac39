use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{ArrayName, GroupName, NameError};

/// A `<group>/<array>` name identifying an array across all groups.
///
/// It is derived from its [`GroupName`] and [`ArrayName`] and is never stored independently of them.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize, Deserialize)]
#[display("{group}/{array}")]
#[serde(try_from = "String", into = "String")]
pub struct FullyQualifiedName {
    group: GroupName,
    array: ArrayName,
}

impl FullyQualifiedName {
    /// Create a new fully qualified name from its parts.
    #[must_use]
    pub fn new(group: GroupName, array: ArrayName) -> Self {
        Self { group, array }
    }

    /// Returns the group name.
    #[must_use]
    pub fn group(&self) -> &GroupName {
        &self.group
    }

    /// Returns the array name local to the group.
    #[must_use]
    pub fn array(&self) -> &ArrayName {
        &self.array
    }
}

impl FromStr for FullyQualifiedName {
    type Err = NameError;

    /// Splits `name` on the first `/`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let (group, array) = name
            .split_once('/')
            .ok_or_else(|| NameError::MissingSeparator(name.to_string()))?;
        Ok(Self::new(GroupName::new(group)?, ArrayName::new(array)?))
    }
}

impl TryFrom<&str> for FullyQualifiedName {
    type Error = NameError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl TryFrom<String> for FullyQualifiedName {
    type Error = NameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<FullyQualifiedName> for String {
    fn from(name: FullyQualifiedName) -> Self {
        name.to_string()
    }
}

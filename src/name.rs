//! Identifiers for groups and arrays.
//!
//! A dataset is a two level hierarchy: the root holds named groups, and each group holds named arrays.
//! - A [`GroupName`] identifies a group in the catalog, e.g. `amc`.
//! - An [`ArrayName`] identifies an array within its group, e.g. `ip`.
//! - A [`FullyQualifiedName`] identifies an array across all groups, e.g. `amc/ip`.

mod array_name;
mod fully_qualified_name;
mod group_name;

pub use array_name::ArrayName;
pub use fully_qualified_name::FullyQualifiedName;
pub use group_name::GroupName;

use thiserror::Error;

/// An invalid name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// An invalid group name.
    #[error("invalid group name {0:?}")]
    InvalidGroupName(String),
    /// An invalid array name.
    #[error("invalid array name {0:?}")]
    InvalidArrayName(String),
    /// A fully qualified name without a `/` separator.
    #[error("fully qualified name {0:?} is not of the form <group>/<array>")]
    MissingSeparator(String),
}

/// Validates a single level name. It
/// - must not be the empty string,
/// - must not include the character `/`, and
/// - must not be a string composed only of period characters, e.g. `.` or `..`.
fn validate_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.replace('.', "").is_empty()
}

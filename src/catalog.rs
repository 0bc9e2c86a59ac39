//! The remote catalog of groups.
//!
//! A [`Catalog`] lists the groups of a dataset and opens them into [`GroupDataset`]s.
//! [`ZarrCatalog`] is a catalog of a Zarr V2 hierarchy with consolidated metadata in any [`zarrs_storage`] store.
//!
//! Opening a group may block on network I/O.
//! Callers needing non-blocking behaviour should wrap catalog calls themselves.

mod zarr_catalog;

pub use zarr_catalog::ZarrCatalog;

use thiserror::Error;
use zarrs_storage::StorageError;

use crate::{
    dataset::GroupDataset,
    metadata::MetadataError,
    name::{GroupName, NameError},
};

/// Traits for a catalog of groups.
pub trait Catalog: Send + Sync {
    /// List the groups of the dataset.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the groups cannot be listed.
    fn list_groups(&self) -> Result<Vec<GroupName>, CatalogError>;

    /// Open `group`, materializing its arrays and their metadata.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the group does not exist or cannot be fetched.
    fn open_group(&self, group: &GroupName) -> Result<GroupDataset, CatalogError>;

    /// Returns the URL of the dataset, if the catalog is remote.
    fn url(&self) -> Option<&str> {
        None
    }
}

/// A catalog error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A storage error.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// The store has no consolidated metadata.
    #[error("the store has no consolidated metadata (.zmetadata)")]
    MissingConsolidatedMetadata,
    /// Invalid metadata.
    #[error(transparent)]
    MetadataError(#[from] MetadataError),
    /// An invalid group or array name in the hierarchy.
    #[error(transparent)]
    NameError(#[from] NameError),
    /// The group is not in the catalog.
    #[error("group {0} is not in the catalog")]
    GroupNotFound(GroupName),
    /// An invalid http store.
    #[cfg(feature = "http")]
    #[error(transparent)]
    HTTPStoreCreateError(#[from] zarrs_http::HTTPStoreCreateError),
}

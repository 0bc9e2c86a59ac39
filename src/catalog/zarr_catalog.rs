use std::time::Instant;

use zarrs_storage::{ReadableStorage, StorageError, StoreKey};

use crate::{
    dataset::GroupDataset,
    metadata::{ConsolidatedMetadataV2, ZMETADATA},
    name::{GroupName, NameError},
};

use super::{Catalog, CatalogError};

/// A catalog of a Zarr V2 hierarchy with consolidated metadata.
///
/// The consolidated metadata (`.zmetadata`) is read once when the catalog is opened.
/// Groups are then listed and opened from the consolidated metadata without listing the store,
/// so read-only stores without listing support (e.g. http) are sufficient.
///
/// ```rust
/// # use std::sync::Arc;
/// # use zarrs_storage::{store::MemoryStore, StoreKey, WritableStorageTraits};
/// use zarrs_dashboard::{
///     catalog::{Catalog, ZarrCatalog},
///     name::GroupName,
/// };
///
/// let store = Arc::new(MemoryStore::new());
/// store.set(
///     &StoreKey::new(".zmetadata")?,
///     br#"{"zarr_consolidated_format": 1, "metadata": {"amc/.zgroup": {"zarr_format": 2}}}"#
///         .to_vec()
///         .into(),
/// )?;
/// let catalog = ZarrCatalog::open(store)?;
/// assert_eq!(catalog.list_groups()?, vec![GroupName::new("amc")?]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ZarrCatalog {
    metadata: ConsolidatedMetadataV2,
    url: Option<String>,
}

impl core::fmt::Debug for ZarrCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ZarrCatalog")
            .field("url", &self.url)
            .field("groups", &self.metadata.groups())
            .finish_non_exhaustive()
    }
}

impl ZarrCatalog {
    /// Open the catalog of the hierarchy at the root of `storage`.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the consolidated metadata is missing, invalid, or cannot be read.
    pub fn open(storage: ReadableStorage) -> Result<Self, CatalogError> {
        let start = Instant::now();
        let key = StoreKey::new(ZMETADATA).map_err(StorageError::from)?;
        let bytes = storage
            .get(&key)?
            .ok_or(CatalogError::MissingConsolidatedMetadata)?;
        let metadata = ConsolidatedMetadataV2::from_slice(&bytes)?;
        tracing::info!(
            elapsed = ?start.elapsed(),
            keys = metadata.metadata.len(),
            "opened catalog"
        );
        Ok(Self {
            metadata,
            url: None,
        })
    }

    /// Open the catalog of the hierarchy at `url` over http.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if `url` is invalid or the catalog cannot be opened.
    #[cfg(feature = "http")]
    pub fn open_http(url: &str) -> Result<Self, CatalogError> {
        let store = zarrs_http::HTTPStore::new(url)?;
        Ok(Self::open(std::sync::Arc::new(store))?.with_url(url))
    }

    /// Open the catalog of the dataset in the [global configuration](crate::config::global_config).
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if the catalog cannot be opened.
    #[cfg(feature = "http")]
    pub fn open_from_config() -> Result<Self, CatalogError> {
        let url = crate::config::global_config().dataset_url();
        Self::open_http(&url)
    }

    /// Set the URL of the dataset reported by [`Catalog::url`].
    ///
    /// This is set by [`open_http`](ZarrCatalog::open_http), and is otherwise unset.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the consolidated metadata.
    #[must_use]
    pub fn metadata(&self) -> &ConsolidatedMetadataV2 {
        &self.metadata
    }
}

impl Catalog for ZarrCatalog {
    fn list_groups(&self) -> Result<Vec<GroupName>, CatalogError> {
        Ok(self
            .metadata
            .groups()
            .into_iter()
            .map(GroupName::new)
            .collect::<Result<Vec<_>, NameError>>()?)
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn open_group(&self, group: &GroupName) -> Result<GroupDataset, CatalogError> {
        if !self.metadata.contains_group(group.as_str()) {
            return Err(CatalogError::GroupNotFound(group.clone()));
        }
        let arrays = self.metadata.group_arrays(group.as_str())?;
        tracing::debug!(%group, arrays = arrays.len(), "opened group");
        Ok(GroupDataset::from_consolidated(group.clone(), arrays)?)
    }
}

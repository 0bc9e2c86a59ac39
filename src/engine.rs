//! The selection engine.
//!
//! An [`Engine`] owns the state shared by every plot of a session:
//!  - the group cache: each group is opened from the [`Catalog`] at most once and never evicted, and
//!  - the [`UnitIndex`]: the units of every data variable of the loaded groups.
//!
//! Both are written only by [`Engine::ensure_loaded`] and read by candidate enumeration ([`Engine::data_arrays`]) and array resolution ([`Engine::get_arrays`]).
//! A group is recorded as loaded only after its fetch succeeds, so a failed fetch is retried on the next request.
//!
//! Callers must only pass names the engine itself produced.
//! A name whose group was never loaded, or whose units are unknown, is a contract violation and is returned as an [`EngineError`].

mod compatibility;
mod unit_index;

pub use compatibility::filter_compatible;
pub use unit_index::UnitIndex;

use std::{collections::HashMap, sync::Arc, time::Instant};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    dataset::{DataArray, GroupDataset},
    name::{FullyQualifiedName, GroupName},
    render::RenderError,
};

/// An engine error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalog error, such as a failure to fetch a group.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// An array was resolved before its group was loaded.
    #[error("group {0} has not been loaded")]
    GroupNotLoaded(GroupName),
    /// An array is not a data variable of its group.
    #[error("array {0} does not exist")]
    ArrayNotFound(FullyQualifiedName),
    /// A selected array has no entry in the unit index.
    #[error("array {0} has no entry in the unit index")]
    UnknownUnits(FullyQualifiedName),
    /// A plot slot index is out of range.
    #[error("plot slot {index} does not exist, there are {len} slots")]
    SlotOutOfRange {
        /// The requested slot index.
        index: usize,
        /// The number of slots.
        len: usize,
    },
    /// The explorer view failed to render an array.
    #[error(transparent)]
    RenderError(#[from] RenderError),
}

/// The group cache and unit index of a session, and the operations over them.
pub struct Engine {
    catalog: Arc<dyn Catalog>,
    groups: RwLock<HashMap<GroupName, Arc<GroupDataset>>>,
    units: RwLock<UnitIndex>,
    loading: Mutex<()>,
}

impl core::fmt::Debug for Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("groups", &self.groups.read().len())
            .field("units", &self.units.read().len())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Create a new engine with an empty cache over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            groups: RwLock::default(),
            units: RwLock::default(),
            loading: Mutex::default(),
        }
    }

    /// List the groups of the catalog.
    ///
    /// # Errors
    /// Returns [`EngineError::CatalogError`] if the groups cannot be listed.
    pub fn groups(&self) -> Result<Vec<GroupName>, EngineError> {
        Ok(self.catalog.list_groups()?)
    }

    /// Returns the URL of the dataset, if the catalog is remote.
    #[must_use]
    pub fn catalog_url(&self) -> Option<&str> {
        self.catalog.url()
    }

    /// Returns the dataset of `group`, opening it from the catalog if it has not been loaded.
    ///
    /// Opening a group inserts the units of each of its data variables into the unit index before the group is cached.
    /// Subsequent calls return the identical cached dataset without any catalog access.
    ///
    /// # Errors
    /// Returns [`EngineError::CatalogError`] if the group cannot be opened. Nothing is cached in that case.
    pub fn ensure_loaded(&self, group: &GroupName) -> Result<Arc<GroupDataset>, EngineError> {
        if let Some(dataset) = self.cached(group) {
            tracing::debug!(%group, "group cache hit");
            return Ok(dataset);
        }

        let _loading = self.loading.lock();
        if let Some(dataset) = self.cached(group) {
            tracing::debug!(%group, "group cache hit");
            return Ok(dataset);
        }
        tracing::debug!(%group, "group cache miss");
        let start = Instant::now();
        let dataset = Arc::new(self.catalog.open_group(group)?);
        {
            let mut units = self.units.write();
            for array in dataset.data_vars().values() {
                units.insert(array.name().clone(), array.units());
            }
        }
        self.groups.write().insert(group.clone(), dataset.clone());
        tracing::info!(
            %group,
            elapsed = ?start.elapsed(),
            arrays = dataset.data_vars().len(),
            "loaded group"
        );
        Ok(dataset)
    }

    fn cached(&self, group: &GroupName) -> Option<Arc<GroupDataset>> {
        self.groups.read().get(group).cloned()
    }

    /// Returns true if `group` has been loaded.
    #[must_use]
    pub fn is_loaded(&self, group: &GroupName) -> bool {
        self.groups.read().contains_key(group)
    }

    /// Returns the units of the array `name`, or [`None`] if its group has not been loaded.
    #[must_use]
    pub fn units(&self, name: &FullyQualifiedName) -> Option<String> {
        self.units.read().get(name).map(str::to_string)
    }

    /// Returns the arrays that can be selected given the `selected_groups` and the `current_selection` of a plot.
    ///
    /// Each group is loaded if needed and contributes its data variables, in group order then dataset order.
    /// Duplicate groups contribute duplicate candidates.
    /// If `current_selection` is non-empty, only arrays with the same units as its first array are returned.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if a group cannot be loaded, or [`EngineError::UnknownUnits`] if the first array of `current_selection` is not in the unit index.
    pub fn data_arrays(
        &self,
        selected_groups: &[GroupName],
        current_selection: &[FullyQualifiedName],
    ) -> Result<Vec<FullyQualifiedName>, EngineError> {
        let mut candidates = Vec::new();
        for group in selected_groups {
            candidates.extend(self.ensure_loaded(group)?.qualified_names());
        }
        filter_compatible(candidates, current_selection, &self.units.read())
    }

    /// Resolve each name of `selection` to its array, preserving order.
    ///
    /// Resolution never loads a group.
    ///
    /// # Errors
    /// Returns [`EngineError::GroupNotLoaded`] if the group of a name has not been loaded, or [`EngineError::ArrayNotFound`] if the array is not a data variable of its group.
    pub fn get_arrays(
        &self,
        selection: &[FullyQualifiedName],
    ) -> Result<Vec<Arc<DataArray>>, EngineError> {
        let groups = self.groups.read();
        selection
            .iter()
            .map(|name| {
                groups
                    .get(name.group())
                    .ok_or_else(|| EngineError::GroupNotLoaded(name.group().clone()))?
                    .data_var(name.array().as_str())
                    .cloned()
                    .ok_or_else(|| EngineError::ArrayNotFound(name.clone()))
            })
            .collect()
    }
}

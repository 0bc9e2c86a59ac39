//! Group datasets and their data arrays.
//!
//! A [`GroupDataset`] is the materialized view of a group: its data variables and coordinates, each a [`DataArray`].
//! Arrays are classified the way `xarray` opens a Zarr group:
//!  - the dimensions of an array are named by its `_ARRAY_DIMENSIONS` attribute,
//!  - an array named after one of its own dimensions is an index coordinate,
//!  - an array named in the `coordinates` attribute of another array is a non-index coordinate, and
//!  - every other array is a data variable.
//!
//! Only data variables are offered for selection.

mod data_array;
mod data_array_builder;
mod group_dataset;

pub use data_array::DataArray;
pub use data_array_builder::DataArrayBuilder;
pub use group_dataset::GroupDataset;

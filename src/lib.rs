//! A reactive selection, caching, and unit compatibility engine for exploring remote [Zarr](https://zarr.dev) datasets.
//!
//! `zarrs_dashboard` drives an interactive viewer over a hierarchical dataset of named, unit-tagged arrays grouped into namespaces.
//! Users incrementally select groups and arrays and build up one or more plots, comparing only arrays sharing physical units.
//!
//! The crate is the engine behind such a viewer, independent of any UI toolkit or plotting library:
//!  - [`catalog`]: the remote catalog seam. [`ZarrCatalog`](catalog::ZarrCatalog) reads a Zarr V2 hierarchy with consolidated metadata from any [`zarrs_storage`] store.
//!  - [`engine`]: the group cache, unit index, candidate enumeration with unit filtering, and array resolution.
//!  - [`slot`]: a monotonically growing collection of independent plot selections.
//!  - [`render`]: the renderer boundary, with partial failure tolerance when overlaying arrays.
//!  - [`dashboard`]: a session host which recomputes derived state on each user event.
//!
//! ## Example
//! ```rust
//! # use std::sync::Arc;
//! # use zarrs_storage::{store::MemoryStore, StoreKey, WritableStorageTraits};
//! use zarrs_dashboard::{
//!     catalog::ZarrCatalog, dashboard::Dashboard, engine::Engine, name::GroupName,
//!     render::PlotSpecRenderer,
//! };
//!
//! # let store = Arc::new(MemoryStore::new());
//! # store.set(&StoreKey::new(".zmetadata")?, r#"{
//! #     "zarr_consolidated_format": 1,
//! #     "metadata": {
//! #         ".zgroup": {"zarr_format": 2},
//! #         "amc/.zgroup": {"zarr_format": 2},
//! #         "amc/ip/.zarray": {"zarr_format": 2, "shape": [4], "chunks": [4], "dtype": "<f4",
//! #             "compressor": null, "fill_value": null, "order": "C", "filters": null},
//! #         "amc/ip/.zattrs": {"_ARRAY_DIMENSIONS": ["time"], "units": "A"}
//! #     }
//! # }"#.as_bytes().to_vec().into())?;
//! let catalog = ZarrCatalog::open(store)?;
//! let mut dashboard = Dashboard::new(Engine::new(Arc::new(catalog)), PlotSpecRenderer)?;
//! dashboard.select_groups(vec![GroupName::new("amc")?])?;
//! let candidates = dashboard.slot(0)?.candidates().to_vec();
//! dashboard.select_arrays(0, candidates)?;
//! let view = dashboard.slot_view(0)?;
//! println!("{}", view.plot);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Features
//!  - `http`: open a catalog with [`ZarrCatalog::open_http`](catalog::ZarrCatalog::open_http) using [`zarrs_http`].
//!
//! ## Licence
//! `zarrs_dashboard` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

#![warn(unused_variables)]
#![warn(dead_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod engine;
pub mod metadata;
pub mod name;
pub mod render;
pub mod slot;

//! Zarr V2 metadata documents.
//!
//! A Zarr V2 hierarchy stores metadata in JSON documents alongside the data:
//!  - `.zgroup`: marks a group,
//!  - `.zarray`: the [array metadata](ArrayMetadataV2) (shape, chunks, data type, ...),
//!  - `.zattrs`: user [attributes](ArrayAttributes), such as `units` and `_ARRAY_DIMENSIONS`, and
//!  - `.zmetadata`: the [consolidated metadata](ConsolidatedMetadataV2) of the entire hierarchy, stored at the root.
//!
//! See <https://zarr-specs.readthedocs.io/en/latest/v2/v2.0.html>.

mod array_attributes;
mod array_metadata_v2;
mod consolidated_metadata_v2;

pub use array_attributes::ArrayAttributes;
pub use array_metadata_v2::{ArrayMetadataV2, ArrayMetadataV2DataType, ArrayMetadataV2Order};
pub use consolidated_metadata_v2::{ConsolidatedArrayMetadata, ConsolidatedMetadataV2};

use thiserror::Error;

/// The key of the group metadata document.
pub const ZGROUP: &str = ".zgroup";

/// The key of the array metadata document.
pub const ZARRAY: &str = ".zarray";

/// The key of the attributes document.
pub const ZATTRS: &str = ".zattrs";

/// The key of the consolidated metadata document.
pub const ZMETADATA: &str = ".zmetadata";

/// A metadata error.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A metadata document is not valid JSON or does not match its expected structure.
    #[error("invalid metadata for {key}: {source}")]
    InvalidJSON {
        /// The metadata key.
        key: String,
        /// The underlying error.
        source: serde_json::Error,
    },
}

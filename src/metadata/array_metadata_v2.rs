use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Zarr array metadata (storage specification v2).
///
/// An example `JSON` document for a Zarr V2 array:
/// ```json
/// {
///     "chunks": [
///         5000
///     ],
///     "compressor": {
///         "id": "zstd",
///         "level": 3
///     },
///     "dtype": "<f8",
///     "fill_value": "NaN",
///     "filters": null,
///     "order": "C",
///     "shape": [
///         30000
///     ],
///     "zarr_format": 2
/// }
/// ```
///
/// Codec metadata is retained as JSON, it is not needed to browse a hierarchy.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Display)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct ArrayMetadataV2 {
    /// An integer defining the version of the storage specification to which the array adheres. Must be `2`.
    pub zarr_format: monostate::MustBe!(2u64),
    /// An array of integers providing the length of each dimension of the Zarr array.
    pub shape: Vec<u64>,
    /// A list of integers defining the length of each dimension of a chunk of the array.
    pub chunks: Vec<u64>,
    /// The data type of the Zarr array.
    pub dtype: ArrayMetadataV2DataType,
    /// A JSON object identifying the primary compression codec, or null if no compressor is to be used.
    #[serde(default)]
    pub compressor: Option<serde_json::Value>,
    /// A scalar value providing the default value to use for uninitialized portions of the array, or null.
    #[serde(default)]
    pub fill_value: serde_json::Value,
    /// Either “C” or “F”, defining the layout of bytes within each chunk of the array.
    pub order: ArrayMetadataV2Order,
    /// A list of JSON objects providing codec configurations, or null if no filters are to be applied.
    #[serde(default)]
    pub filters: Option<Vec<serde_json::Value>>,
    /// Additional fields, such as `dimension_separator`.
    #[serde(flatten)]
    pub additional_fields: serde_json::Map<String, serde_json::Value>,
}

/// Zarr V2 data type metadata.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(untagged)]
pub enum ArrayMetadataV2DataType {
    /// A simple data type, e.g. `<f8`.
    Simple(String),
    /// A structured data type.
    Structured(Vec<serde_json::Value>),
}

impl ArrayMetadataV2DataType {
    /// Returns the `numpy` name of the data type, e.g. `float64` for `<f8`.
    ///
    /// Unrecognised simple data types are returned verbatim, and structured data types are named `structured`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Simple(data_type) => {
                let data_type = data_type.trim_start_matches(['<', '>', '|', '=']);
                let (kind, size) = data_type.split_at(data_type.len().min(1));
                let bits = size.parse::<u64>().ok().map(|size| size * 8);
                match (kind, bits) {
                    ("b", _) => "bool".to_string(),
                    ("i", Some(bits)) => format!("int{bits}"),
                    ("u", Some(bits)) => format!("uint{bits}"),
                    ("f", Some(bits)) => format!("float{bits}"),
                    ("c", Some(bits)) => format!("complex{bits}"),
                    ("O", _) => "object".to_string(),
                    _ => data_type.to_string(),
                }
            }
            Self::Structured(_) => "structured".to_string(),
        }
    }
}

/// The layout of bytes within each chunk of the array.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum ArrayMetadataV2Order {
    /// Row-major order. The last dimension varies fastest.
    C,
    /// Column-major order. The first dimension varies fastest.
    F,
}

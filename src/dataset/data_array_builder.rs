use crate::name::{ArrayName, FullyQualifiedName};

use super::DataArray;

/// A [`DataArray`] builder.
///
/// The builder is initialised from a name and shape.
///  - Units are empty (dimensionless).
///  - Dimensions are named `dim_0`, `dim_1`, ... as in `xarray`.
///  - The chunk shape is the array shape.
///  - The data type is `float64`.
///  - Coordinates and attributes are empty.
///
/// For example:
/// ```rust
/// # use zarrs_dashboard::dataset::DataArray;
/// let array = DataArray::builder("amc/plasma_current".parse()?, vec![30000])
///     .units("A")
///     .dimensions(vec!["time".to_string()])
///     .build();
/// assert_eq!(array.to_string(), "amc/plasma_current (time: 30000) float64 [A]");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DataArrayBuilder {
    array: DataArray,
}

impl DataArrayBuilder {
    /// Create a new data array builder for an array `name` with `shape`.
    #[must_use]
    pub fn new(name: FullyQualifiedName, shape: Vec<u64>) -> Self {
        let dimensions = (0..shape.len()).map(|i| format!("dim_{i}")).collect();
        Self {
            array: DataArray {
                name,
                units: String::new(),
                dimensions,
                chunks: shape.clone(),
                shape,
                data_type: "float64".to_string(),
                coordinates: Vec::new(),
                attributes: serde_json::Map::new(),
            },
        }
    }

    /// Set the units.
    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.array.units = units.into();
        self
    }

    /// Set the dimension names.
    ///
    /// Dimension names are ignored if their number does not match the dimensionality of the array.
    #[must_use]
    pub fn dimensions(mut self, dimensions: Vec<String>) -> Self {
        if dimensions.len() == self.array.shape.len() {
            self.array.dimensions = dimensions;
        }
        self
    }

    /// Set the chunk shape.
    #[must_use]
    pub fn chunks(mut self, chunks: Vec<u64>) -> Self {
        self.array.chunks = chunks;
        self
    }

    /// Set the data type name.
    #[must_use]
    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.array.data_type = data_type.into();
        self
    }

    /// Set the coordinate names.
    #[must_use]
    pub fn coordinates(mut self, coordinates: Vec<ArrayName>) -> Self {
        self.array.coordinates = coordinates;
        self
    }

    /// Set the attributes.
    #[must_use]
    pub fn attributes(mut self, attributes: serde_json::Map<String, serde_json::Value>) -> Self {
        self.array.attributes = attributes;
        self
    }

    /// Build into a [`DataArray`].
    #[must_use]
    pub fn build(self) -> DataArray {
        self.array
    }
}

use itertools::Itertools;

use crate::name::{ArrayName, FullyQualifiedName};

use super::DataArrayBuilder;

/// A named, unit-tagged multidimensional array.
///
/// Use [`DataArrayBuilder`] to create a data array.
#[derive(Clone, PartialEq, Debug)]
pub struct DataArray {
    pub(super) name: FullyQualifiedName,
    pub(super) units: String,
    pub(super) dimensions: Vec<String>,
    pub(super) shape: Vec<u64>,
    pub(super) chunks: Vec<u64>,
    pub(super) data_type: String,
    pub(super) coordinates: Vec<ArrayName>,
    pub(super) attributes: serde_json::Map<String, serde_json::Value>,
}

impl DataArray {
    /// Create a [`DataArrayBuilder`] for an array `name` with `shape`.
    #[must_use]
    pub fn builder(name: FullyQualifiedName, shape: Vec<u64>) -> DataArrayBuilder {
        DataArrayBuilder::new(name, shape)
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn name(&self) -> &FullyQualifiedName {
        &self.name
    }

    /// Returns the units. Dimensionless arrays have empty units.
    #[must_use]
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Returns the dimension names.
    #[must_use]
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Returns the shape.
    #[must_use]
    pub fn shape(&self) -> &[u64] {
        &self.shape
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.shape.len()
    }

    /// Returns the chunk shape.
    #[must_use]
    pub fn chunks(&self) -> &[u64] {
        &self.chunks
    }

    /// Returns the `numpy` name of the data type, e.g. `float64`.
    #[must_use]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Returns the names of the coordinates of this array within its group.
    #[must_use]
    pub fn coordinates(&self) -> &[ArrayName] {
        &self.coordinates
    }

    /// Returns the attributes.
    #[must_use]
    pub fn attributes(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.attributes
    }
}

/// A summary in the manner of the `xarray` repr.
///
/// For example:
/// ```text
/// amc/plasma_current (time: 30000) float64 [A]
/// Coordinates: time
/// Attributes:
///     long_name: "Plasma current"
/// ```
impl std::fmt::Display for DataArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dimensions = self
            .dimensions
            .iter()
            .zip(&self.shape)
            .map(|(dimension, length)| format!("{dimension}: {length}"))
            .join(", ");
        write!(f, "{} ({dimensions}) {}", self.name, self.data_type)?;
        if !self.units.is_empty() {
            write!(f, " [{}]", self.units)?;
        }
        if !self.coordinates.is_empty() {
            write!(f, "\nCoordinates: {}", self.coordinates.iter().join(", "))?;
        }
        let attributes = self
            .attributes
            .iter()
            .filter(|(key, _)| *key != "units")
            .collect::<Vec<_>>();
        if !attributes.is_empty() {
            write!(f, "\nAttributes:")?;
            for (key, value) in attributes {
                write!(f, "\n    {key}: {value}")?;
            }
        }
        Ok(())
    }
}

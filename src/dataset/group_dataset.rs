use std::{collections::HashSet, sync::Arc};

use indexmap::IndexMap;

use crate::{
    metadata::ConsolidatedArrayMetadata,
    name::{ArrayName, FullyQualifiedName, GroupName, NameError},
};

use super::DataArray;

/// The materialized arrays of a group.
#[derive(Clone, Debug)]
pub struct GroupDataset {
    name: GroupName,
    data_vars: IndexMap<ArrayName, Arc<DataArray>>,
    coords: IndexMap<ArrayName, Arc<DataArray>>,
}

impl GroupDataset {
    /// Create a new group dataset from its data variables and coordinates.
    #[must_use]
    pub fn new(
        name: GroupName,
        data_vars: IndexMap<ArrayName, Arc<DataArray>>,
        coords: IndexMap<ArrayName, Arc<DataArray>>,
    ) -> Self {
        Self {
            name,
            data_vars,
            coords,
        }
    }

    /// Create a group dataset from consolidated array metadata, classifying arrays into data variables and coordinates.
    ///
    /// # Errors
    /// Returns a [`NameError`] if an array name is invalid.
    pub fn from_consolidated(
        name: GroupName,
        arrays: Vec<ConsolidatedArrayMetadata>,
    ) -> Result<Self, NameError> {
        let coordinate_names: HashSet<String> = arrays
            .iter()
            .flat_map(|array| {
                let dimensions = array.attributes.dimensions().unwrap_or_default();
                let index = dimensions
                    .contains(&array.name)
                    .then(|| array.name.clone());
                array
                    .attributes
                    .coordinates()
                    .into_iter()
                    .map(str::to_string)
                    .chain(index)
                    .collect::<Vec<_>>()
            })
            .collect();
        let present: HashSet<&str> = arrays.iter().map(|array| array.name.as_str()).collect();

        let mut data_vars = IndexMap::new();
        let mut coords = IndexMap::new();
        for array in &arrays {
            let array_name = ArrayName::new(array.name.as_str())?;
            let dimensions = array.attributes.dimensions().unwrap_or_default();
            let coordinates = dimensions
                .iter()
                .map(String::as_str)
                .chain(array.attributes.coordinates())
                .filter(|coordinate| {
                    *coordinate != array.name
                        && present.contains(coordinate)
                        && coordinate_names.contains(*coordinate)
                })
                .map(ArrayName::new)
                .collect::<Result<Vec<_>, _>>()?;
            let data_array = DataArray::builder(
                FullyQualifiedName::new(name.clone(), array_name.clone()),
                array.metadata.shape.clone(),
            )
            .units(array.attributes.units().unwrap_or_default())
            .dimensions(dimensions)
            .chunks(array.metadata.chunks.clone())
            .data_type(array.metadata.dtype.name())
            .coordinates(coordinates)
            .attributes(
                array
                    .attributes
                    .user_attributes()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            )
            .build();
            if coordinate_names.contains(&array.name) {
                coords.insert(array_name, Arc::new(data_array));
            } else {
                data_vars.insert(array_name, Arc::new(data_array));
            }
        }
        Ok(Self::new(name, data_vars, coords))
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Returns the data variables, in dataset order.
    #[must_use]
    pub fn data_vars(&self) -> &IndexMap<ArrayName, Arc<DataArray>> {
        &self.data_vars
    }

    /// Returns the coordinates, in dataset order.
    #[must_use]
    pub fn coords(&self) -> &IndexMap<ArrayName, Arc<DataArray>> {
        &self.coords
    }

    /// Returns the data variable `name`, or [`None`] if it does not exist.
    #[must_use]
    pub fn data_var(&self, name: &str) -> Option<&Arc<DataArray>> {
        self.data_vars.get(name)
    }

    /// Returns the fully qualified names of the data variables, in dataset order.
    pub fn qualified_names(&self) -> impl Iterator<Item = FullyQualifiedName> + '_ {
        self.data_vars
            .keys()
            .map(|array| FullyQualifiedName::new(self.name.clone(), array.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ConsolidatedMetadataV2;

    const JSON: &str = r#"{
        "zarr_consolidated_format": 1,
        "metadata": {
            "amc/.zgroup": {"zarr_format": 2},
            "amc/time/.zarray": {"zarr_format": 2, "shape": [3], "chunks": [3], "dtype": "<f8", "compressor": null, "fill_value": "NaN", "order": "C", "filters": null},
            "amc/time/.zattrs": {"_ARRAY_DIMENSIONS": ["time"], "units": "s"},
            "amc/shot_id/.zarray": {"zarr_format": 2, "shape": [], "chunks": [], "dtype": "<i4", "compressor": null, "fill_value": 0, "order": "C", "filters": null},
            "amc/shot_id/.zattrs": {"_ARRAY_DIMENSIONS": []},
            "amc/plasma_current/.zarray": {"zarr_format": 2, "shape": [3], "chunks": [3], "dtype": "<f8", "compressor": null, "fill_value": "NaN", "order": "C", "filters": null},
            "amc/plasma_current/.zattrs": {"_ARRAY_DIMENSIONS": ["time"], "units": "A", "coordinates": "shot_id", "long_name": "Plasma current"},
            "amc/toroidal_field/.zarray": {"zarr_format": 2, "shape": [3], "chunks": [3], "dtype": "<f4", "compressor": null, "fill_value": "NaN", "order": "C", "filters": null},
            "amc/toroidal_field/.zattrs": {"_ARRAY_DIMENSIONS": ["time"], "units": "T"}
        }
    }"#;

    fn dataset() -> GroupDataset {
        let metadata = ConsolidatedMetadataV2::from_slice(JSON.as_bytes()).unwrap();
        GroupDataset::from_consolidated(
            GroupName::new("amc").unwrap(),
            metadata.group_arrays("amc").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn group_dataset_classification() {
        let dataset = dataset();
        let data_vars: Vec<&str> = dataset.data_vars().keys().map(ArrayName::as_str).collect();
        assert_eq!(data_vars, vec!["plasma_current", "toroidal_field"]);
        let coords: Vec<&str> = dataset.coords().keys().map(ArrayName::as_str).collect();
        assert_eq!(coords, vec!["time", "shot_id"]);
        let names: Vec<String> = dataset.qualified_names().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["amc/plasma_current", "amc/toroidal_field"]);
    }

    #[test]
    fn group_dataset_data_array() {
        let dataset = dataset();
        let ip = dataset.data_var("plasma_current").unwrap();
        assert_eq!(ip.units(), "A");
        assert_eq!(ip.dimensions(), ["time"]);
        assert_eq!(ip.data_type(), "float64");
        let coordinates: Vec<&str> = ip.coordinates().iter().map(ArrayName::as_str).collect();
        assert_eq!(coordinates, vec!["time", "shot_id"]);
        assert!(ip.attributes().get("coordinates").is_none());
        assert!(dataset.data_var("time").is_none());
    }
}

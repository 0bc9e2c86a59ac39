use serde::{Deserialize, Serialize};

use super::{ArrayAttributes, ArrayMetadataV2, MetadataError, ZARRAY, ZATTRS, ZGROUP, ZMETADATA};

/// Consolidated metadata of a Zarr V2 hierarchy, stored in `.zmetadata` at the root.
///
/// Maps every metadata key in the hierarchy (e.g. `amc/ip/.zarray`) to its document,
/// so a hierarchy can be browsed with a single read and without listing the store.
/// Keys retain their document order.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ConsolidatedMetadataV2 {
    /// The consolidated metadata format version. Must be `1`.
    pub zarr_consolidated_format: monostate::MustBe!(1u64),
    /// The metadata documents keyed by their store key.
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// The metadata of an array in a [`ConsolidatedMetadataV2`] document.
#[derive(Clone, PartialEq, Debug)]
pub struct ConsolidatedArrayMetadata {
    /// The name of the array within its group.
    pub name: String,
    /// The `.zarray` metadata.
    pub metadata: ArrayMetadataV2,
    /// The `.zattrs` attributes. Empty if absent.
    pub attributes: ArrayAttributes,
}

impl ConsolidatedMetadataV2 {
    /// Parse consolidated metadata from the bytes of a `.zmetadata` document.
    ///
    /// # Errors
    /// Returns [`MetadataError::InvalidJSON`] if the document is invalid.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MetadataError> {
        serde_json::from_slice(bytes).map_err(|source| MetadataError::InvalidJSON {
            key: ZMETADATA.to_string(),
            source,
        })
    }

    /// Returns the sorted names of the groups which are direct children of the root.
    #[must_use]
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self
            .metadata
            .keys()
            .filter_map(|key| key.strip_suffix(ZGROUP)?.strip_suffix('/'))
            .filter(|group| !group.is_empty() && !group.contains('/'))
            .map(str::to_string)
            .collect();
        groups.sort();
        groups
    }

    /// Returns true if `group` is a direct child group of the root.
    #[must_use]
    pub fn contains_group(&self, group: &str) -> bool {
        !group.is_empty()
            && !group.contains('/')
            && self.metadata.contains_key(&format!("{group}/{ZGROUP}"))
    }

    /// Returns the arrays which are direct children of `group`, in document order.
    ///
    /// # Errors
    /// Returns [`MetadataError::InvalidJSON`] if the `.zarray` or `.zattrs` document of an array is invalid.
    pub fn group_arrays(&self, group: &str) -> Result<Vec<ConsolidatedArrayMetadata>, MetadataError> {
        let prefix = format!("{group}/");
        let suffix = format!("/{ZARRAY}");
        self.metadata
            .iter()
            .filter_map(|(key, value)| {
                let name = key.strip_prefix(&prefix)?.strip_suffix(&suffix)?;
                (!name.is_empty() && !name.contains('/')).then_some((key, name, value))
            })
            .map(|(key, name, value)| {
                let metadata = ArrayMetadataV2::deserialize(value).map_err(|source| {
                    MetadataError::InvalidJSON {
                        key: key.clone(),
                        source,
                    }
                })?;
                let attributes_key = format!("{prefix}{name}/{ZATTRS}");
                let attributes = match self.metadata.get(&attributes_key) {
                    Some(attributes) => serde_json::Map::deserialize(attributes)
                        .map_err(|source| MetadataError::InvalidJSON {
                            key: attributes_key,
                            source,
                        })?
                        .into(),
                    None => ArrayAttributes::default(),
                };
                Ok(ConsolidatedArrayMetadata {
                    name: name.to_string(),
                    metadata,
                    attributes,
                })
            })
            .collect()
    }
}

use derive_more::{Deref, From};

/// The attributes of an array, as stored in its `.zattrs` document.
///
/// Attributes are free form, but some have conventional meanings:
///  - `units`: the physical units of the array,
///  - `_ARRAY_DIMENSIONS`: the dimension names written by `xarray`, and
///  - `coordinates`: a space separated list of arrays holding non-index coordinates.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deref, From)]
pub struct ArrayAttributes(serde_json::Map<String, serde_json::Value>);

impl ArrayAttributes {
    /// Returns the `units` attribute, if it is a string.
    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.0.get("units").and_then(serde_json::Value::as_str)
    }

    /// Returns the dimension names from the `_ARRAY_DIMENSIONS` attribute.
    ///
    /// Returns [`None`] if the attribute is absent or is not a list of strings.
    #[must_use]
    pub fn dimensions(&self) -> Option<Vec<String>> {
        self.0
            .get("_ARRAY_DIMENSIONS")?
            .as_array()?
            .iter()
            .map(|dimension| dimension.as_str().map(str::to_string))
            .collect()
    }

    /// Returns the names in the `coordinates` attribute.
    #[must_use]
    pub fn coordinates(&self) -> Vec<&str> {
        self.0
            .get("coordinates")
            .and_then(serde_json::Value::as_str)
            .map(|coordinates| coordinates.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Returns the attributes excluding those with a reserved meaning (`_ARRAY_DIMENSIONS` and `coordinates`).
    pub fn user_attributes(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0
            .iter()
            .filter(|(key, _)| *key != "_ARRAY_DIMENSIONS" && *key != "coordinates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(json: &str) -> ArrayAttributes {
        serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(json)
            .unwrap()
            .into()
    }

    #[test]
    fn array_attributes() {
        let attributes = attributes(
            r#"{"units": "A", "_ARRAY_DIMENSIONS": ["time"], "coordinates": "shot_id  channel", "long_name": "Plasma current"}"#,
        );
        assert_eq!(attributes.units(), Some("A"));
        assert_eq!(attributes.dimensions(), Some(vec!["time".to_string()]));
        assert_eq!(attributes.coordinates(), vec!["shot_id", "channel"]);
        let user: Vec<&String> = attributes.user_attributes().map(|(key, _)| key).collect();
        assert_eq!(user, vec!["units", "long_name"]);
    }

    #[test]
    fn array_attributes_missing() {
        let attributes = attributes(r#"{"units": 1, "_ARRAY_DIMENSIONS": [1]}"#);
        assert_eq!(attributes.units(), None);
        assert_eq!(attributes.dimensions(), None);
        assert!(attributes.coordinates().is_empty());
    }
}

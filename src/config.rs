//! `zarrs_dashboard` global configuration options.

use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Global configuration options for the `zarrs_dashboard` crate.
///
/// Retrieve the global [`Config`] with [`global_config`] and modify it with [`global_config_mut`].
/// Configuration is read once at startup when a catalog is opened; later changes do not affect open catalogs.
///
/// ## Endpoint URL
/// > default: `https://s3.echo.stfc.ac.uk`
///
/// The URL of the object store hosting the dataset.
/// The store is accessed anonymously.
///
/// ## Dataset Path
/// > default: `mast/level2/shots/30421.zarr`
///
/// The path of the dataset within the object store, starting with the bucket.
/// The [dataset URL](Config::dataset_url) is the endpoint URL joined with the dataset path (path-style addressing).
#[derive(Debug)]
pub struct Config {
    endpoint_url: String,
    dataset_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_url: "https://s3.echo.stfc.ac.uk".to_string(),
            dataset_path: "mast/level2/shots/30421.zarr".to_string(),
        }
    }
}

impl Config {
    /// Get the [endpoint URL](#endpoint-url) configuration.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Set the [endpoint URL](#endpoint-url) configuration.
    pub fn set_endpoint_url(&mut self, endpoint_url: impl Into<String>) {
        self.endpoint_url = endpoint_url.into();
    }

    /// Get the [dataset path](#dataset-path) configuration.
    #[must_use]
    pub fn dataset_path(&self) -> &str {
        &self.dataset_path
    }

    /// Set the [dataset path](#dataset-path) configuration.
    pub fn set_dataset_path(&mut self, dataset_path: impl Into<String>) {
        self.dataset_path = dataset_path.into();
    }

    /// Returns the URL of the dataset.
    #[must_use]
    pub fn dataset_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint_url.trim_end_matches('/'),
            self.dataset_path.trim_start_matches('/')
        )
    }
}

static CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();

/// Returns a reference to the global `zarrs_dashboard` configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config() -> RwLockReadGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .read()
        .unwrap()
}

/// Returns a mutable reference to the global `zarrs_dashboard` configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config_mut() -> RwLockWriteGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .write()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dataset_url() {
        let mut config = Config::default();
        assert_eq!(
            config.dataset_url(),
            "https://s3.echo.stfc.ac.uk/mast/level2/shots/30421.zarr"
        );
        config.set_endpoint_url("http://localhost:9000/");
        config.set_dataset_path("/bucket/shot.zarr");
        assert_eq!(config.dataset_url(), "http://localhost:9000/bucket/shot.zarr");
    }

    #[test]
    fn config_global() {
        let default = global_config().dataset_path().to_string();
        global_config_mut().set_dataset_path("mast/level2/shots/30420.zarr");
        assert!(global_config().dataset_url().ends_with("30420.zarr"));
        global_config_mut().set_dataset_path(default);
    }
}

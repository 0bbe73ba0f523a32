//! Site configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it changes.

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_SIZE: usize = 3;
pub const DEFAULT_ROUTE: &str = "home";
pub const DEFAULT_OUTPUT_DIR: &str = "./public";
pub const DEFAULT_MOUNT_POINT: &str = "app";
pub const DEV_MODE_ARG: &str = "-dev";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Number of previously visited modules kept alive by the navigator.
    pub cache_size: usize,
    /// Module key used when the route names no module.
    pub default_route: String,
    /// Where static builds write their assets.
    pub output_dir: PathBuf,
    pub dev_mode: bool,
    /// Element id modules are mounted into.
    pub mount_point: String,
    /// Document title of the aggregated page.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            default_route: DEFAULT_ROUTE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dev_mode: false,
            mount_point: DEFAULT_MOUNT_POINT.to_string(),
            title: "Site".to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults, with dev mode switched on by `APP_ENV` or a `-dev` argument.
    pub fn from_env() -> Self {
        let app_env = std::env::var("APP_ENV").ok();
        let dev_mode = Self::detect_dev_mode(app_env.as_deref(), std::env::args());
        Self::default().with_dev_mode(dev_mode)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn detect_dev_mode<I, S>(app_env: Option<&str>, args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if matches!(app_env, Some("development") | Some("dev")) {
            return true;
        }
        args.into_iter().any(|arg| arg.as_ref() == DEV_MODE_ARG)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_route.trim().is_empty() {
            return Err(SiteError::InvalidConfig(
                "default_route must not be empty".to_string(),
            ));
        }
        if self.default_route.contains('/') || self.default_route.starts_with('#') {
            return Err(SiteError::InvalidConfig(format!(
                "default_route must be a bare module key, got '{}'",
                self.default_route
            )));
        }
        if self.mount_point.trim().is_empty() {
            return Err(SiteError::InvalidConfig(
                "mount_point must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    pub fn with_default_route(mut self, route: impl Into<String>) -> Self {
        self.default_route = route.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_dev_mode(mut self, enabled: bool) -> Self {
        self.dev_mode = enabled;
        self
    }

    pub fn with_mount_point(mut self, id: impl Into<String>) -> Self {
        self.mount_point = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

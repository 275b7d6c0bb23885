//! Per-invocation configuration context.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_BASE_DIR, DEFAULT_CONF_DIR, DEFAULT_RUN_DIR, VENDOR_USR_DIR,
};

/// Base directories resolved once at startup.
///
/// Built from defaults plus any overrides and never mutated afterwards.
/// All derived locations are computed from it by the functions in
/// [`crate::paths`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Writable runtime area (tmpfs-like).
    pub run_dir: PathBuf,
    /// Persistent state area.
    pub base_dir: PathBuf,
    /// Persistent user configuration area.
    pub conf_dir: PathBuf,
    /// Alternate mountpoint of the vendor partition. Empty selects
    /// [`VENDOR_USR_DIR`].
    #[serde(default)]
    pub usr_dir: PathBuf,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            run_dir: PathBuf::from(DEFAULT_RUN_DIR),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            conf_dir: PathBuf::from(DEFAULT_CONF_DIR),
            usr_dir: PathBuf::new(),
        }
    }
}

impl CommonConfig {
    /// Overrides the runtime area.
    #[must_use]
    pub fn with_run_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.run_dir = dir.into();
        self
    }

    /// Overrides the persistent state area.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Overrides the user configuration area.
    #[must_use]
    pub fn with_conf_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.conf_dir = dir.into();
        self
    }

    /// Points vendor lookups at an alternate OS partition mountpoint.
    #[must_use]
    pub fn with_usr_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.usr_dir = dir.into();
        self
    }

    /// Returns the effective vendor partition mountpoint.
    #[must_use]
    pub fn usr_mountpoint(&self) -> &Path {
        vendor_mountpoint(&self.usr_dir)
    }
}

/// Maps an empty mountpoint to the compiled-in vendor location.
pub(crate) fn vendor_mountpoint(usr_mountpoint: &Path) -> &Path {
    if usr_mountpoint.as_os_str().is_empty() {
        Path::new(VENDOR_USR_DIR)
    } else {
        usr_mountpoint
    }
}

/// Returns the default path of the top-level configuration file.
#[must_use]
pub fn default_config_path() -> PathBuf {
    Path::new(DEFAULT_CONF_DIR).join(CONFIG_FILE_NAME)
}

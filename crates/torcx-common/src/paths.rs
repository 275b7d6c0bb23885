//! Vendor / OEM / user location resolution.
//!
//! Every function here is a pure composition of a base root and a fixed
//! relative suffix. Nothing is checked against the filesystem; whether a
//! returned location exists is up to the caller opening it.
//!
//! Search lists are ordered vendor first, user last. Consumers treat the
//! last entry as the highest-priority tier.

use std::path::{Path, PathBuf};

use crate::config::{CommonConfig, vendor_mountpoint};
use crate::constants::{
    BIN_DIR_NAME, NEXT_PROFILE_FILE_NAME, OEM_DIR, PROFILES_DIR_NAME, REMOTES_DIR_NAME,
    RUN_PROFILE_FILE_NAME, STORE_DIR_NAME, UNPACK_DIR_NAME, VENDOR_OS_RELEASE_SUBPATH,
    VENDOR_SHARE_SUBDIR,
};

fn vendor_share_dir(usr_mountpoint: &Path, leaf: &str) -> PathBuf {
    vendor_mountpoint(usr_mountpoint)
        .join(VENDOR_SHARE_SUBDIR)
        .join(leaf)
}

/// Vendor remotes directory for the OS partition mounted at `usr_mountpoint`.
///
/// An empty mountpoint selects the compiled-in vendor location.
pub fn vendor_remotes_dir(usr_mountpoint: impl AsRef<Path>) -> PathBuf {
    vendor_share_dir(usr_mountpoint.as_ref(), REMOTES_DIR_NAME)
}

/// Vendor profiles directory for the OS partition mounted at `usr_mountpoint`.
///
/// An empty mountpoint selects the compiled-in vendor location.
pub fn vendor_profiles_dir(usr_mountpoint: impl AsRef<Path>) -> PathBuf {
    vendor_share_dir(usr_mountpoint.as_ref(), PROFILES_DIR_NAME)
}

/// Vendor store directory for the OS partition mounted at `usr_mountpoint`.
///
/// An empty mountpoint selects the compiled-in vendor location.
pub fn vendor_store_dir(usr_mountpoint: impl AsRef<Path>) -> PathBuf {
    vendor_share_dir(usr_mountpoint.as_ref(), STORE_DIR_NAME)
}

/// Path of the os-release file shipped on the OS partition mounted at
/// `usr_mountpoint`.
pub fn vendor_os_release_path(usr_mountpoint: impl AsRef<Path>) -> PathBuf {
    vendor_mountpoint(usr_mountpoint.as_ref()).join(VENDOR_OS_RELEASE_SUBPATH)
}

/// OEM store directory.
pub fn oem_store_dir() -> PathBuf {
    Path::new(OEM_DIR).join(STORE_DIR_NAME)
}

/// OEM profiles directory.
pub fn oem_profiles_dir() -> PathBuf {
    Path::new(OEM_DIR).join(PROFILES_DIR_NAME)
}

/// OEM remotes directory.
pub fn oem_remotes_dir() -> PathBuf {
    Path::new(OEM_DIR).join(REMOTES_DIR_NAME)
}

/// Directories searched for remotes manifests, vendor first.
///
/// Without a configuration context only the OEM tier can be located, so the
/// result holds that single entry.
pub fn remotes_dirs(cfg: Option<&CommonConfig>) -> Vec<PathBuf> {
    match cfg {
        Some(cfg) => vec![
            vendor_remotes_dir(&cfg.usr_dir),
            oem_remotes_dir(),
            cfg.user_remotes_dir(),
        ],
        None => vec![oem_remotes_dir()],
    }
}

impl CommonConfig {
    /// Directory where addon root filesystems are unpacked.
    #[must_use]
    pub fn run_unpack_dir(&self) -> PathBuf {
        self.run_dir.join(UNPACK_DIR_NAME)
    }

    /// Directory where addon binaries are symlinked.
    #[must_use]
    pub fn run_bin_dir(&self) -> PathBuf {
        self.run_dir.join(BIN_DIR_NAME)
    }

    /// File holding a copy of the applied profile.
    #[must_use]
    pub fn run_profile(&self) -> PathBuf {
        self.run_dir.join(RUN_PROFILE_FILE_NAME)
    }

    /// Directory where user profiles are written.
    #[must_use]
    pub fn user_profile_dir(&self) -> PathBuf {
        self.conf_dir.join(PROFILES_DIR_NAME)
    }

    /// Directory holding user remotes manifests.
    #[must_use]
    pub fn user_remotes_dir(&self) -> PathBuf {
        self.conf_dir.join(REMOTES_DIR_NAME)
    }

    /// The `next-profile` selector file.
    #[must_use]
    pub fn next_profile(&self) -> PathBuf {
        self.conf_dir.join(NEXT_PROFILE_FILE_NAME)
    }

    /// Store where user-fetched archives are written.
    ///
    /// A non-empty `version` selects a versioned sub-store.
    #[must_use]
    pub fn user_store_path(&self, version: &str) -> PathBuf {
        let store = self.base_dir.join(STORE_DIR_NAME);
        if version.is_empty() {
            store
        } else {
            store.join(version)
        }
    }

    /// Directories searched for profiles: vendor, OEM, user.
    #[must_use]
    pub fn profile_dirs(&self) -> Vec<PathBuf> {
        vec![
            vendor_profiles_dir(&self.usr_dir),
            oem_profiles_dir(),
            self.user_profile_dir(),
        ]
    }

    /// Directories searched for remotes manifests: vendor, OEM, user.
    #[must_use]
    pub fn remotes_dirs(&self) -> Vec<PathBuf> {
        remotes_dirs(Some(self))
    }

    /// Directories searched for addon archives: vendor, OEM, the unversioned
    /// user store and, when `version` is non-empty, the versioned user store.
    #[must_use]
    pub fn store_dirs(&self, version: &str) -> Vec<PathBuf> {
        let mut dirs = vec![
            vendor_store_dir(&self.usr_dir),
            oem_store_dir(),
            self.user_store_path(""),
        ];
        if !version.is_empty() {
            dirs.push(self.user_store_path(version));
        }
        dirs
    }

    /// The os-release file of the vendor partition this config points at.
    #[must_use]
    pub fn vendor_os_release_path(&self) -> PathBuf {
        vendor_os_release_path(&self.usr_dir)
    }
}

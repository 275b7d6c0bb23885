//! Fixed default locations and well-known names.
//!
//! These values form part of the on-disk contract of every deployed system
//! and never change at runtime.

/// Default runtime area where assets are unpacked and propagated.
pub const DEFAULT_RUN_DIR: &str = "/run/torcx/";

/// Default persistent state area.
pub const DEFAULT_BASE_DIR: &str = "/var/lib/torcx/";

/// Default persistent user configuration area.
pub const DEFAULT_CONF_DIR: &str = "/etc/torcx/";

/// Name of the top-level configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Compiled-in mountpoint of the read-only vendor (OS) partition.
pub const VENDOR_USR_DIR: &str = "/usr";

/// Mountpoint of the OEM partition.
pub const OEM_DIR: &str = "/usr/share/oem/";

/// Vendor-relative directory holding all torcx assets shipped with the OS.
pub const VENDOR_SHARE_SUBDIR: &str = "share/torcx";

/// Vendor-relative location of the OS release file.
pub const VENDOR_OS_RELEASE_SUBPATH: &str = "lib/os-release";

/// Directory name for addon archive stores.
pub const STORE_DIR_NAME: &str = "store";

/// Directory name for profile manifests.
pub const PROFILES_DIR_NAME: &str = "profiles";

/// Directory name for remote-fetch manifests.
pub const REMOTES_DIR_NAME: &str = "remotes";

/// Directory name under the runtime area for unpacked addon roots.
pub const UNPACK_DIR_NAME: &str = "unpack";

/// Directory name under the runtime area for symlinked binaries.
pub const BIN_DIR_NAME: &str = "bin";

/// File name under the runtime area holding the applied profile.
pub const RUN_PROFILE_FILE_NAME: &str = "profile.json";

/// File name under the config directory selecting the next profile.
pub const NEXT_PROFILE_FILE_NAME: &str = "next-profile";

/// File extension of profile manifests.
pub const PROFILE_EXTENSION: &str = "json";

/// Kind tag of version 0 profile manifests.
pub const PROFILE_MANIFEST_V0_KIND: &str = "profile-manifest-v0";

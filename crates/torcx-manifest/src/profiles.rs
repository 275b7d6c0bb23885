//! Profile files across the vendor, OEM, and user tiers.
//!
//! Search directories come from [`CommonConfig::profile_dirs`] and are
//! ordered lowest priority first: a profile in a later directory shadows a
//! same-named profile in an earlier one. Missing directories are skipped.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use torcx_common::config::CommonConfig;
use torcx_common::constants::PROFILE_EXTENSION;
use torcx_common::error::{Result, TorcxError};

use crate::manifest::ProfileManifest;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> TorcxError + '_ {
    move |source| TorcxError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Lists profiles available in `dirs`, keyed by profile name.
///
/// A profile named `foo` is a `foo.json` file. When the same name appears in
/// several directories, the one from the last directory wins.
///
/// # Errors
///
/// Returns an error if an existing directory or profile cannot be inspected.
pub fn list_profiles(dirs: &[PathBuf]) -> Result<BTreeMap<String, PathBuf>> {
    let mut profiles = BTreeMap::new();
    for dir in dirs {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %dir.display(), "profile directory missing, skipping");
                continue;
            }
            Err(e) => return Err(io_error(dir)(e)),
        };
        for entry in entries {
            let path = entry.map_err(io_error(dir))?.path();
            if path.extension().is_none_or(|ext| ext != PROFILE_EXTENSION)
                || !is_profile_file(&path)?
            {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping profile with non UTF-8 name");
                continue;
            };
            let name = name.to_string();
            if let Some(shadowed) = profiles.insert(name.clone(), path) {
                tracing::debug!(
                    name = %name,
                    shadowed = %shadowed.display(),
                    "profile overridden by higher-priority directory"
                );
            }
        }
    }
    Ok(profiles)
}

/// Locates the profile `name` in the highest-priority directory holding it.
///
/// # Errors
///
/// Returns `TorcxError::NotFound` if no directory contains the profile, or
/// an I/O error if a candidate exists but cannot be inspected.
pub fn find_profile(dirs: &[PathBuf], name: &str) -> Result<PathBuf> {
    let file_name = profile_file_name(name)?;
    for dir in dirs.iter().rev() {
        let path = dir.join(&file_name);
        if is_profile_file(&path)? {
            tracing::debug!(name, path = %path.display(), "found profile");
            return Ok(path);
        }
    }
    Err(TorcxError::NotFound {
        kind: "profile",
        id: name.to_string(),
    })
}

/// Reads and decodes the profile manifest at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a supported
/// profile manifest.
pub fn read_profile(path: &Path) -> Result<ProfileManifest> {
    tracing::debug!(path = %path.display(), "reading profile");
    let bytes = std::fs::read(path).map_err(io_error(path))?;
    ProfileManifest::from_slice(&bytes)
}

/// Writes `manifest` as profile `name` into `dir`, creating `dir` if needed.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns `TorcxError::Config` if `name` is not a plain file name, or an
/// I/O error if the file cannot be written.
pub fn write_profile(dir: &Path, name: &str, manifest: &ProfileManifest) -> Result<PathBuf> {
    let path = dir.join(profile_file_name(name)?);
    std::fs::create_dir_all(dir).map_err(io_error(dir))?;
    write_manifest(&path, manifest)?;
    tracing::info!(name, path = %path.display(), "profile written");
    Ok(path)
}

/// Reads the profile name selected in the `next-profile` file.
///
/// Returns `None` if the selector is absent or blank.
///
/// # Errors
///
/// Returns an error if the selector exists but cannot be read.
pub fn read_next_profile(cfg: &CommonConfig) -> Result<Option<String>> {
    let path = cfg.next_profile();
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no next-profile selector");
            return Ok(None);
        }
        Err(e) => return Err(io_error(&path)(e)),
    };
    let name = content.trim();
    if name.is_empty() {
        return Ok(None);
    }
    tracing::debug!(name, "next profile selected");
    Ok(Some(name.to_string()))
}

/// Persists the applied profile to the runtime area.
///
/// # Errors
///
/// Returns an error if the runtime area or file cannot be written.
pub fn write_run_profile(cfg: &CommonConfig, manifest: &ProfileManifest) -> Result<PathBuf> {
    std::fs::create_dir_all(&cfg.run_dir).map_err(io_error(&cfg.run_dir))?;
    let path = cfg.run_profile();
    write_manifest(&path, manifest)?;
    tracing::info!(path = %path.display(), "applied profile recorded");
    Ok(path)
}

/// Only a missing path counts as absent; other stat failures are errors.
fn is_profile_file(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error(path)(e)),
    }
}

fn write_manifest(path: &Path, manifest: &ProfileManifest) -> Result<()> {
    let json = manifest.to_vec_pretty()?;
    std::fs::write(path, json).map_err(io_error(path))
}

fn profile_file_name(name: &str) -> Result<String> {
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\', '\0']) {
        return Err(TorcxError::Config {
            message: format!("invalid profile name: {name:?}"),
        });
    }
    Ok(format!("{name}.{PROFILE_EXTENSION}"))
}

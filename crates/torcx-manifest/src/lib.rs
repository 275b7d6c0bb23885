//! # torcx-manifest
//!
//! Profile manifests for torcx.
//!
//! Handles:
//! - **Kinds**: the `kind` tag that names a document's type and schema version.
//! - **Manifests**: decoding and encoding of versioned profile manifests.
//! - **Profiles**: discovery, reading, and writing of profile files across the
//!   vendor, OEM, and user tiers.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod kind;
pub mod manifest;
pub mod profiles;

pub use kind::ManifestKind;
pub use manifest::{Image, ProfileManifest};

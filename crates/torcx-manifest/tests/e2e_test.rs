//! End-to-end tests over a vendor / OEM / user layout rooted in a temp dir.
//!
//! The OEM tier is fixed at its real mountpoint, so these tests only
//! populate the vendor and user tiers and rely on a missing OEM directory
//! being skipped.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use torcx_common::config::CommonConfig;
use torcx_common::error::TorcxError;
use torcx_common::paths::oem_profiles_dir;
use torcx_manifest::profiles::{
    find_profile, list_profiles, read_next_profile, read_profile, write_profile, write_run_profile,
};
use torcx_manifest::{Image, ManifestKind, ProfileManifest};

fn layout(root: &Path) -> CommonConfig {
    CommonConfig::default()
        .with_usr_dir(root.join("usr"))
        .with_run_dir(root.join("run"))
        .with_base_dir(root.join("var"))
        .with_conf_dir(root.join("etc"))
}

#[test]
fn user_profile_shadows_vendor_profile() {
    let root = tempfile::tempdir().expect("tempdir");
    let cfg = layout(root.path());
    let dirs = cfg.profile_dirs();
    assert_eq!(dirs[1], oem_profiles_dir());

    let vendor = ProfileManifest::new(vec![Image::new("docker", "com.coreos.cl")]);
    let user = ProfileManifest::new(vec![
        Image::new("docker", "18.06"),
        Image::new("rkt", "1.30"),
    ]);
    let _ = write_profile(&dirs[0], "vendor", &vendor).expect("vendor profile");
    let _ = write_profile(&dirs[0], "docker", &vendor).expect("vendor docker profile");
    let user_path = write_profile(&cfg.user_profile_dir(), "docker", &user).expect("user profile");

    let listed = list_profiles(&dirs).expect("list");
    assert_eq!(listed.keys().collect::<Vec<_>>(), ["docker", "vendor"]);
    assert_eq!(listed["docker"], user_path);

    let found = find_profile(&dirs, "docker").expect("find");
    let manifest = read_profile(&found).expect("read");
    assert_eq!(manifest.kind(), ManifestKind::ProfileManifestV0);
    assert_eq!(manifest.images(), user.images());
}

#[test]
fn next_profile_selection_resolves_and_records() {
    let root = tempfile::tempdir().expect("tempdir");
    let cfg = layout(root.path());
    let dirs = cfg.profile_dirs();

    let manifest = ProfileManifest::new(vec![Image::new("docker", "18.06")]);
    let _ = write_profile(&cfg.user_profile_dir(), "custom", &manifest).expect("write");
    std::fs::write(cfg.next_profile(), "custom\n").expect("selector");

    let name = read_next_profile(&cfg)
        .expect("read selector")
        .expect("selector set");
    let applied = read_profile(&find_profile(&dirs, &name).expect("find")).expect("read");
    let recorded = write_run_profile(&cfg, &applied).expect("record");

    assert_eq!(recorded, root.path().join("run/profile.json"));
    assert_eq!(read_profile(&recorded).expect("reread"), manifest);
}

#[test]
fn future_profile_version_is_rejected_from_disk() {
    let root = tempfile::tempdir().expect("tempdir");
    let cfg = layout(root.path());
    let dir = cfg.user_profile_dir();
    std::fs::create_dir_all(&dir).expect("mkdir");
    std::fs::write(
        dir.join("next.json"),
        r#"{"kind":"profile-manifest-v1","value":{"images":[{"name":"docker","reference":"19.03"}]}}"#,
    )
    .expect("write");

    let path = find_profile(&cfg.profile_dirs(), "next").expect("find");
    let err = read_profile(&path).expect_err("must reject unknown version");
    assert!(matches!(
        err,
        TorcxError::UnsupportedManifestVersion { ref kind } if kind == "profile-manifest-v1"
    ));
}

#[test]
fn store_and_runtime_layout_under_custom_roots() {
    let root = tempfile::tempdir().expect("tempdir");
    let cfg = layout(root.path());

    assert_eq!(
        cfg.store_dirs("1745.0.0"),
        vec![
            root.path().join("usr/share/torcx/store"),
            Path::new("/usr/share/oem/store").to_path_buf(),
            root.path().join("var/store"),
            root.path().join("var/store/1745.0.0"),
        ]
    );
    assert_eq!(cfg.run_unpack_dir(), root.path().join("run/unpack"));
    assert_eq!(cfg.run_bin_dir(), root.path().join("run/bin"));
    assert_eq!(
        cfg.vendor_os_release_path(),
        root.path().join("usr/lib/os-release")
    );
}

//! # torcx-common
//!
//! Shared error definitions, fixed on-disk locations, the per-invocation
//! configuration context, and the vendor/OEM/user path resolver used across
//! the torcx workspace.
//!
//! This crate is the leaf of the dependency graph. Nothing in it touches the
//! filesystem: every location is computed by joining path segments.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod paths;

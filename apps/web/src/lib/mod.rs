//! Shared frontend utilities for fetching published documents, configuration,
//! errors, and build metadata.
//!
//! The page is fully static: the manifest and rosters are plain JSON files served
//! next to the wasm bundle, and the password never leaves the browser. These
//! helpers only move public documents; callers must still avoid logging the
//! password or its digest.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::get_text;

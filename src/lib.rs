//! # Gradebook
//!
//! Operator tooling for the static grade lookup portal. Teachers publish a
//! `classes.json` manifest plus one roster per class; students look up their
//! grades in the browser by password. This crate helps produce and audit that
//! data from the command line:
//!
//! - `hash` prints the digest to store as `passwordHash`.
//! - `classes` and `lookup` run the same flows the page runs, against a local
//!   data directory or the published site.
//! - `check` audits every roster (shape, digest format, duplicate digests).
//!
//! The lookup protocol itself lives in `grade_core` and is shared with the page.

pub mod cli;
pub mod source;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

//! # Grade Core
//!
//! Shared building blocks for the gradebook portal: the published document
//! model, the password digest helper and the two flows the page runs.
//!
//! ## Published data
//!
//! A static site ships a manifest (`classes.json`) listing every class and the
//! roster file that belongs to it. Each roster lists students, the SHA-256 hex
//! digest of their password and their grades. Plaintext passwords are never
//! stored; a lookup digests the entered password and compares digests only.
//!
//! ## Flows
//!
//! - **Class directory**: fetch the manifest once and expose its entries in order.
//! - **Grade lookup**: validate the form, digest the password, fetch the roster,
//!   pick the first student whose digest matches and build a report.
//!
//! Both flows are written against two seams, [`ResourceSource`] and
//! [`Digester`], so the browser, the CLI and the tests share the same protocol.
//! An unknown student and a wrong password produce the same [`Error::NoMatch`]
//! so callers cannot tell them apart.

pub mod digest;
pub mod directory;
pub mod error;
pub mod guard;
pub mod lookup;
pub mod model;
pub mod source;

pub use digest::{
    encode_digest, is_digest, sha256_hex, Digester, DigestError, Sha256Digester, DIGEST_HEX_LEN,
};
pub use directory::load_classes;
pub use error::Error;
pub use guard::{Submission, SubmissionGuard, Ticket};
pub use lookup::{
    find_student, load_roster, lookup_grades, validate_input, GradeLine, GradeReport,
};
pub use model::{ClassManifest, ClassManifestEntry, ClassRoster, Grade, Grades, StudentRecord};
pub use source::{DataPaths, FetchError, MemorySource, ResourceSource, DEFAULT_DATA_BASE};

//! Grades feature: the browser side of the class directory and grade lookup
//! flows. The protocol itself lives in `grade_core`; this module plugs in the
//! browser fetch and the platform SHA-256 primitive. The password and its digest
//! must never be logged.

pub(crate) mod client;
pub(crate) mod digest;

//! Where published documents come from. The flows only need "give me the body
//! at this relative path"; the browser, the CLI and the tests each plug in their
//! own transport.

use crate::Error;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Default directory holding `classes.json` and the roster files.
pub const DEFAULT_DATA_BASE: &str = "data";
/// Manifest file name inside the data directory.
pub const MANIFEST_FILE: &str = "classes.json";

/// Transport-level failure while fetching a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The resource answered with a non-success status (404 for a missing file).
    #[error("HTTP {0}")]
    Status(u16),
    /// Network, IO or timeout failure.
    #[error("{0}")]
    Transport(String),
}

/// Fetches the body of a published document.
#[allow(async_fn_in_trait)]
pub trait ResourceSource {
    /// # Errors
    /// Returns [`FetchError`] when the resource is missing or unreachable.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Resolves document paths against the data directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    base: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_BASE)
    }
}

impl DataPaths {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn manifest(&self) -> String {
        self.join(MANIFEST_FILE)
    }

    /// Path of a roster named by a manifest `file` entry.
    ///
    /// # Errors
    /// Returns [`Error::RosterLoad`] if `file` tries to leave the data directory.
    pub fn roster(&self, file: &str) -> Result<String, Error> {
        let escapes = file.starts_with('/')
            || file.contains('\\')
            || file.contains("://")
            || file.split('/').any(|segment| segment == "..");
        if file.is_empty() || escapes {
            return Err(Error::RosterLoad(format!(
                "Identificador de clase no válido: {file}"
            )));
        }
        Ok(self.join(file))
    }

    fn join(&self, file: &str) -> String {
        if self.base.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", self.base, file)
        }
    }
}

/// In-memory documents keyed by path. Records every requested path so callers
/// can assert which fetches happened.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, Result<String, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_document(mut self, path: &str, body: &str) -> Self {
        self.documents.insert(path.to_string(), Ok(body.to_string()));
        self
    }

    #[must_use]
    pub fn with_failure(mut self, path: &str, error: FetchError) -> Self {
        self.documents.insert(path.to_string(), Err(error));
        self
    }

    /// Paths requested so far, in request order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ResourceSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(path.to_string());
        self.documents
            .get(path)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

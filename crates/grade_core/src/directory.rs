//! Class directory loader: one fetch of the manifest, no retry.

use crate::model::ClassManifest;
use crate::source::{DataPaths, FetchError, ResourceSource};
use crate::Error;
use tracing::debug;

/// Fetches and parses the manifest.
///
/// # Errors
/// Returns [`Error::ManifestLoad`] on a non-success status, a transport failure
/// or a body that is not a manifest document.
pub async fn load_classes<S: ResourceSource>(
    source: &S,
    paths: &DataPaths,
) -> Result<ClassManifest, Error> {
    let path = paths.manifest();
    debug!(path = %path, "loading class manifest");

    let body = source.fetch_text(&path).await.map_err(|err| match err {
        FetchError::Status(status) => Error::ManifestLoad(format!(
            "No se pudo cargar el listado de clases (HTTP {status})"
        )),
        FetchError::Transport(message) => Error::ManifestLoad(message),
    })?;

    let manifest: ClassManifest =
        serde_json::from_str(&body).map_err(|err| Error::ManifestLoad(err.to_string()))?;

    debug!(classes = manifest.classes.len(), "class manifest loaded");
    Ok(manifest)
}

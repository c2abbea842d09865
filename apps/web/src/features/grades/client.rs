//! Browser document source and the two flow entry points used by the page.

use crate::app_lib::{config::AppConfig, get_text};
use crate::features::grades::digest::SubtleDigester;
use grade_core::{ClassManifest, DataPaths, Error, FetchError, GradeReport, ResourceSource};

/// Fetches published documents relative to the page with `gloo-net`.
#[derive(Clone, Debug)]
pub struct BrowserSource {
    timeout_ms: u32,
}

impl BrowserSource {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            timeout_ms: config.request_timeout_ms,
        }
    }
}

impl ResourceSource for BrowserSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        get_text(path, self.timeout_ms).await.map_err(FetchError::from)
    }
}

/// Loads the class manifest for the selector.
pub async fn load_classes() -> Result<ClassManifest, Error> {
    let config = AppConfig::load();
    let source = BrowserSource::new(&config);
    grade_core::load_classes(&source, &DataPaths::new(&config.data_base_url)).await
}

/// Runs one grade lookup submission.
pub async fn lookup_grades(class_file: &str, password: &str) -> Result<GradeReport, Error> {
    let config = AppConfig::load();
    let source = BrowserSource::new(&config);
    grade_core::lookup_grades(
        &source,
        &SubtleDigester,
        &DataPaths::new(&config.data_base_url),
        class_file,
        password,
    )
    .await
}

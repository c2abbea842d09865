//! Document sources for the CLI: a local data directory or a published site.

use crate::APP_USER_AGENT;
use anyhow::{Context, Result};
use grade_core::{FetchError, ResourceSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads documents from a directory holding `classes.json` and the rosters.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirectorySource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.root.join(path);
        debug!(file = %file.display(), "reading document");
        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(body),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(FetchError::Status(404)),
            Err(err) => Err(FetchError::Transport(format!("{}: {err}", file.display()))),
        }
    }
}

/// Fetches documents from a published site, e.g. `https://school.example/notas/data/`.
#[derive(Clone, Debug)]
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(mut base: Url) -> Result<Self> {
        // Normalised so the base prints as a directory; document_url drops the empty segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { base, client })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends `path` below the base as literal segments. `Url::join` would
    /// read a name such as `notas:2024.json` as a URL with its own scheme.
    fn document_url(&self, path: &str) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::Transport(format!("{} cannot hold a path", self.base)))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }
}

impl ResourceSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.document_url(path)?;
        debug!(url = %url, "fetching document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))
    }
}

/// Where `--data` points.
#[derive(Clone, Debug)]
pub enum DataSource {
    Directory(DirectorySource),
    Http(HttpSource),
}

impl DataSource {
    /// `http(s)://` values are treated as a published site, anything else as a directory.
    ///
    /// # Errors
    /// Returns an error if an HTTP location is not a valid URL.
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            let url = Url::parse(location).with_context(|| format!("invalid data URL: {location}"))?;
            Ok(Self::Http(HttpSource::new(url)?))
        } else {
            Ok(Self::Directory(DirectorySource::new(location)))
        }
    }
}

impl ResourceSource for DataSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        match self {
            Self::Directory(source) => source.fetch_text(path).await,
            Self::Http(source) => source.fetch_text(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_picks_http_for_urls() {
        let source = DataSource::parse("https://school.example/notas/data").unwrap();
        match source {
            DataSource::Http(http) => {
                assert_eq!(http.base().as_str(), "https://school.example/notas/data/");
            }
            DataSource::Directory(_) => panic!("expected http source"),
        }
    }

    #[test]
    fn parse_picks_directory_otherwise() {
        assert!(matches!(
            DataSource::parse("./public/data").unwrap(),
            DataSource::Directory(_)
        ));
    }

    #[test]
    fn http_base_keeps_existing_trailing_slash() {
        let source = HttpSource::new(Url::parse("http://localhost:8080/data/").unwrap()).unwrap();
        assert_eq!(source.base().as_str(), "http://localhost:8080/data/");
    }

    #[test]
    fn document_url_stays_under_base() {
        let source =
            HttpSource::new(Url::parse("https://school.example/notas/data/").unwrap()).unwrap();

        let url = source.document_url("notas:2024.json").unwrap();
        assert_eq!(url.as_str(), "https://school.example/notas/data/notas:2024.json");

        let url = source.document_url("2024/algebra1.json").unwrap();
        assert_eq!(url.as_str(), "https://school.example/notas/data/2024/algebra1.json");
        assert!(url.as_str().starts_with(source.base().as_str()));
    }

    #[tokio::test]
    async fn directory_source_maps_missing_file_to_404() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("classes.json"), "{}").unwrap();
        let source = DirectorySource::new(dir.path());

        assert_eq!(source.fetch_text("classes.json").await.unwrap(), "{}");
        assert_eq!(
            source.fetch_text("missing.json").await,
            Err(FetchError::Status(404))
        );
    }
}

use crate::source::DataSource;
use anyhow::{anyhow, Result};
use grade_core::{load_classes, ClassManifestEntry, DataPaths, ResourceSource};
use tracing::warn;

#[derive(Debug)]
pub struct Args {
    pub data: String,
}

/// Loads the manifest entries in presentation order.
/// # Errors
/// Returns the manifest load error.
pub async fn list<S: ResourceSource>(source: &S) -> Result<Vec<ClassManifestEntry>> {
    match load_classes(source, &DataPaths::new("")).await {
        Ok(manifest) => Ok(manifest.classes),
        Err(err) => {
            warn!("{}", err.detail());
            Err(anyhow!(err))
        }
    }
}

/// Prints `name<TAB>file` per class.
/// # Errors
/// Returns an error if the data location is invalid or the manifest cannot be loaded.
pub async fn execute(args: Args) -> Result<()> {
    let source = DataSource::parse(&args.data)?;
    for entry in list(&source).await? {
        println!("{}\t{}", entry.name, entry.file);
    }
    Ok(())
}

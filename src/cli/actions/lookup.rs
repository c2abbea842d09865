use crate::cli::actions::password_or_stdin;
use crate::source::DataSource;
use anyhow::{anyhow, Result};
use grade_core::{lookup_grades, DataPaths, GradeReport, ResourceSource, Sha256Digester};
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

#[derive(Debug)]
pub struct Args {
    pub data: String,
    pub class: String,
    pub password: Option<SecretString>,
}

/// Runs the page's lookup flow and returns the report.
/// # Errors
/// Returns the flow error; its message is the one the page would show.
pub async fn report<S: ResourceSource>(
    source: &S,
    class: &str,
    password: &SecretString,
) -> Result<GradeReport> {
    lookup_grades(
        source,
        &Sha256Digester,
        &DataPaths::new(""),
        class,
        password.expose_secret(),
    )
    .await
    .map_err(|err| {
        if err.should_log() {
            warn!(class, "{}", err.detail());
        }
        anyhow!(err)
    })
}

/// Prints the heading and one line per grade.
/// # Errors
/// Returns an error when the lookup does not produce a report, including no match.
pub async fn execute(args: Args) -> Result<()> {
    let source = DataSource::parse(&args.data)?;
    let password = password_or_stdin(args.password)?;
    let report = report(&source, &args.class, &password).await?;

    println!("{}", report.heading());
    for line in &report.lines {
        println!("  {line}");
    }
    Ok(())
}

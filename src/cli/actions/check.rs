//! Publishing audit: every roster listed in the manifest must parse, carry
//! well-formed digests, and avoid duplicate digests (lookups take the first
//! match, so a duplicate silently hides the later student).

use crate::source::DataSource;
use anyhow::{anyhow, bail, Result};
use grade_core::digest::is_digest;
use grade_core::{load_classes, load_roster, DataPaths, ResourceSource};
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    Roster(String),
    MalformedDigest { student: String },
    DuplicateDigest { first: String, duplicate: String },
    DuplicateFile { file: String },
}

impl fmt::Display for Problem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Roster(message) => write!(formatter, "{message}"),
            Problem::MalformedDigest { student } => write!(
                formatter,
                "{student}: passwordHash is not a 64-character lowercase hex digest"
            ),
            Problem::DuplicateDigest { first, duplicate } => write!(
                formatter,
                "{duplicate}: shares a passwordHash with {first} and can never be found"
            ),
            Problem::DuplicateFile { file } => {
                write!(formatter, "{file} is listed more than once in the manifest")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassAudit {
    pub name: String,
    pub file: String,
    pub students: usize,
    pub problems: Vec<Problem>,
}

/// Audits every class in the manifest. A manifest failure aborts the audit.
/// # Errors
/// Returns the manifest load error.
pub async fn audit<S: ResourceSource>(source: &S) -> Result<Vec<ClassAudit>> {
    let paths = DataPaths::new("");
    let manifest = load_classes(source, &paths).await.map_err(|err| anyhow!(err))?;

    let mut seen_files: HashMap<String, usize> = HashMap::new();
    let mut audits = Vec::with_capacity(manifest.classes.len());

    for entry in manifest.classes {
        let mut class = ClassAudit {
            name: entry.name,
            file: entry.file,
            students: 0,
            problems: Vec::new(),
        };

        let count = seen_files.entry(class.file.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            class.problems.push(Problem::DuplicateFile {
                file: class.file.clone(),
            });
        }

        match load_roster(source, &paths, &class.file).await {
            Ok(roster) => {
                class.students = roster.students.len();
                let mut owners: HashMap<&str, &str> = HashMap::new();
                for student in &roster.students {
                    if !is_digest(&student.password_hash) {
                        class.problems.push(Problem::MalformedDigest {
                            student: student.name.clone(),
                        });
                    }
                    if let Some(first) = owners.get(student.password_hash.as_str()) {
                        class.problems.push(Problem::DuplicateDigest {
                            first: (*first).to_string(),
                            duplicate: student.name.clone(),
                        });
                    } else {
                        owners.insert(&student.password_hash, &student.name);
                    }
                }
            }
            Err(err) => class.problems.push(Problem::Roster(err.to_string())),
        }

        audits.push(class);
    }

    Ok(audits)
}

/// Prints one block per class and fails if any problem was found.
/// # Errors
/// Returns an error if the manifest cannot be loaded or any class has problems.
pub async fn execute(args: Args) -> Result<()> {
    let source = DataSource::parse(&args.data)?;
    let audits = audit(&source).await?;

    let mut problems = 0;
    for class in &audits {
        if class.problems.is_empty() {
            info!(file = %class.file, students = class.students, "roster ok");
            println!("ok    {} ({}, {} students)", class.name, class.file, class.students);
        } else {
            println!("FAIL  {} ({})", class.name, class.file);
            for problem in &class.problems {
                warn!(file = %class.file, "{problem}");
                println!("      - {problem}");
            }
            problems += class.problems.len();
        }
    }

    if problems > 0 {
        bail!("{problems} problem(s) found in {} class(es)", audits.len());
    }
    Ok(())
}

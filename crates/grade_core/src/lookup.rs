//! Grade lookup protocol.
//!
//! 1. Validate that a class and a password were provided (no I/O otherwise).
//! 2. Digest the password.
//! 3. Fetch and parse the class roster.
//! 4. Pick the first student whose `passwordHash` equals the digest.
//!
//! Each call is independent; nothing is cached between submissions.

use crate::digest::Digester;
use crate::model::{ClassRoster, StudentRecord};
use crate::source::{DataPaths, FetchError, ResourceSource};
use crate::Error;
use std::fmt;
use tracing::debug;

/// One rendered grade entry, `activity: grade`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeLine {
    pub activity: String,
    pub grade: String,
}

impl fmt::Display for GradeLine {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.activity, self.grade)
    }
}

/// What a successful lookup shows: the student's name and their grades in
/// document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeReport {
    pub student: String,
    pub lines: Vec<GradeLine>,
}

impl GradeReport {
    #[must_use]
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            student: record.name.clone(),
            lines: record
                .grades
                .iter()
                .map(|(activity, grade)| GradeLine {
                    activity: activity.to_string(),
                    grade: grade.to_string(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!("Notas de {}", self.student)
    }
}

/// Checks the form values. Only emptiness is rejected; whitespace is a valid password.
///
/// # Errors
/// Returns [`Error::Validation`] if either value is empty.
pub fn validate_input(class_file: &str, password: &str) -> Result<(), Error> {
    if class_file.is_empty() || password.is_empty() {
        return Err(Error::Validation);
    }
    Ok(())
}

/// First record whose digest matches exactly.
#[must_use]
pub fn find_student<'a>(roster: &'a ClassRoster, digest: &str) -> Option<&'a StudentRecord> {
    roster
        .students
        .iter()
        .find(|student| student.password_hash == digest)
}

/// Fetches and parses a roster.
///
/// # Errors
/// Returns [`Error::RosterLoad`] on an invalid identifier, a fetch failure or a
/// body that is not a roster document.
pub async fn load_roster<S: ResourceSource>(
    source: &S,
    paths: &DataPaths,
    class_file: &str,
) -> Result<ClassRoster, Error> {
    let path = paths.roster(class_file)?;
    debug!(path = %path, "loading class roster");

    let body = source.fetch_text(&path).await.map_err(|err| match err {
        FetchError::Status(status) => Error::RosterLoad(format!(
            "No se pudo cargar el archivo de la clase (HTTP {status})"
        )),
        FetchError::Transport(message) => Error::RosterLoad(message),
    })?;

    serde_json::from_str(&body).map_err(|err| Error::RosterLoad(err.to_string()))
}

/// Runs the whole lookup for one submission.
///
/// # Errors
/// Returns the [`Error`] kind for whichever step failed; [`Error::NoMatch`]
/// when no record carries the password's digest.
pub async fn lookup_grades<S: ResourceSource, D: Digester>(
    source: &S,
    digester: &D,
    paths: &DataPaths,
    class_file: &str,
    password: &str,
) -> Result<GradeReport, Error> {
    validate_input(class_file, password)?;

    let digest = digester
        .digest_hex(password)
        .await
        .map_err(|err| Error::Digest(err.0))?;

    let roster = load_roster(source, paths, class_file).await?;
    debug!(students = roster.students.len(), "roster loaded");

    find_student(&roster, &digest)
        .map(GradeReport::from_record)
        .ok_or(Error::NoMatch)
}

pub mod check;
pub mod classes;
pub mod hash;
pub mod lookup;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use anyhow::{Context, Result};
use secrecy::SecretString;
use std::io::BufRead;

#[derive(Debug)]
pub enum Action {
    Hash(hash::Args),
    Classes(classes::Args),
    Lookup(lookup::Args),
    Check(check::Args),
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Reads one password line, dropping only the line terminator. An empty line
/// is returned as is so the lookup flow can report it like the page does.
///
/// # Errors
/// Returns an error if reading fails.
pub fn read_password<R: BufRead>(mut reader: R) -> Result<SecretString> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(SecretString::from(line))
}

/// Uses the `--password` value or falls back to stdin.
///
/// # Errors
/// Returns an error if stdin cannot be read.
pub fn password_or_stdin(password: Option<SecretString>) -> Result<SecretString> {
    match password {
        Some(password) => Ok(password),
        None => read_password(std::io::stdin().lock()),
    }
}

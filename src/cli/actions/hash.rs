use crate::cli::actions::password_or_stdin;
use anyhow::{anyhow, bail, Result};
use grade_core::{Digester, Sha256Digester};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct Args {
    pub password: Option<SecretString>,
}

/// Prints the `passwordHash` value for a password.
/// # Errors
/// Returns an error if the password cannot be read or is empty.
pub async fn execute(args: Args) -> Result<()> {
    let password = password_or_stdin(args.password)?;
    // The page refuses empty passwords before hashing, so such a digest could never match.
    if password.expose_secret().is_empty() {
        bail!("no password provided");
    }
    let digest = Sha256Digester
        .digest_hex(password.expose_secret())
        .await
        .map_err(|err| anyhow!(err))?;
    println!("{digest}");
    Ok(())
}

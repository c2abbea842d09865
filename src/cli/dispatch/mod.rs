use crate::cli::actions::{check, classes, hash, lookup, Action};
use crate::cli::commands::{
    ARG_CLASS, ARG_DATA, ARG_PASSWORD, CMD_CHECK, CMD_CLASSES, CMD_HASH, CMD_LOOKUP,
};
use anyhow::{bail, Context, Result};
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let data = matches
        .get_one::<String>(ARG_DATA)
        .cloned()
        .context("missing required argument: --data")?;

    let password = |sub: &clap::ArgMatches| {
        sub.get_one::<String>(ARG_PASSWORD)
            .map(|value| SecretString::from(value.clone()))
    };

    match matches.subcommand() {
        Some((CMD_HASH, sub)) => Ok(Action::Hash(hash::Args {
            password: password(sub),
        })),
        Some((CMD_CLASSES, _)) => Ok(Action::Classes(classes::Args { data })),
        Some((CMD_LOOKUP, sub)) => Ok(Action::Lookup(lookup::Args {
            data,
            class: sub
                .get_one::<String>(ARG_CLASS)
                .cloned()
                .context("missing required argument: --class")?,
            password: password(sub),
        })),
        Some((CMD_CHECK, _)) => Ok(Action::Check(check::Args { data })),
        Some((name, _)) => bail!("unknown command: {name}"),
        None => bail!("missing command"),
    }
}

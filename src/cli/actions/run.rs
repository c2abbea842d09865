use crate::cli::actions::{check, classes, hash, lookup, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
// To add a new action, add a new `Action::*` variant and a corresponding `*_::execute` call here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Hash(args) => hash::execute(args).await,
        Action::Classes(args) => classes::execute(args).await,
        Action::Lookup(args) => lookup::execute(args).await,
        Action::Check(args) => check::execute(args).await,
    }
}

//! Latest-submission-wins bookkeeping for the lookup form.
//!
//! In-flight fetches cannot be aborted, so each submission takes a [`Ticket`]
//! and only renders its outcome if no newer submission started meanwhile. A
//! submission rejected by validation still takes a ticket: its message must not
//! be overwritten by a lookup that was already running.

use crate::{validate_input, Error};
use std::sync::atomic::{AtomicU64, Ordering};

/// What the form does with a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Show the validation error right away; nothing is fetched.
    Rejected(Error),
    /// Run the lookup and pass its outcome to [`SubmissionGuard::accept`] with this ticket.
    Dispatch(Ticket),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct SubmissionGuard {
    latest: AtomicU64,
}

impl SubmissionGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Starts a submission and validates its inputs.
    pub fn submit(&self, class_file: &str, password: &str) -> Submission {
        let ticket = self.begin();
        match validate_input(class_file, password) {
            Ok(()) => Submission::Dispatch(ticket),
            Err(err) => Submission::Rejected(err),
        }
    }

    /// Returns the outcome only if `ticket` is still the latest submission.
    pub fn accept<T>(&self, ticket: Ticket, outcome: T) -> Option<T> {
        self.is_current(ticket).then_some(outcome)
    }
}

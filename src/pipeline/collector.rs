//! Shared, append-only result collection written by concurrent workers.

use std::sync::{Mutex, PoisonError};

use crate::types::{ConversionOutcome, ResultSet};

/// Outcomes appended by workers in completion order. Read only after every worker has been joined
/// ([`into_outcomes`](Self::into_outcomes) takes `self`, so it cannot run while workers still
/// borrow the collector).
#[derive(Default)]
pub struct ResultCollector {
    outcomes: Mutex<ResultSet>,
}

impl ResultCollector {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            outcomes: Mutex::new(Vec::with_capacity(n)),
        }
    }

    /// Append one outcome. A poisoned lock is recovered so no outcome is dropped.
    pub fn append(&self, outcome: ConversionOutcome) {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome);
    }

    pub fn into_outcomes(self) -> ResultSet {
        self.outcomes
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

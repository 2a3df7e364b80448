//! Unread-notification count cache and badge presentation.
//!
//! DESIGN
//! ======
//! Every refresh takes a sequence number when it is issued. A completion is
//! applied only if its sequence is newer than the last one applied, so a slow
//! response can never overwrite data from a request issued after it.
//! Failures leave the cached count untouched.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use crate::error::ViewError;

/// What the badge element should show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BadgeDisplay {
    pub text: String,
    pub visible: bool,
}

impl BadgeDisplay {
    /// Zero renders as an empty, hidden badge.
    pub fn from_count(count: u32) -> Self {
        if count == 0 {
            Self { text: String::new(), visible: false }
        } else {
            Self { text: count.to_string(), visible: true }
        }
    }
}

/// Outcome of completing a refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New count applied; render this.
    Applied(BadgeDisplay),
    /// A newer request already landed; response dropped.
    Stale,
    /// The request failed; the previous count is kept.
    Failed(ViewError),
}

/// Latest known unread count plus request bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationCount {
    count: Option<u32>,
    issued: u64,
    applied: u64,
    consecutive_failures: u32,
}

impl NotificationCount {
    /// Last applied count, `None` until the first successful refresh.
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Allocate the sequence number for a new request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Fold a finished request into the cache.
    pub fn complete(&mut self, seq: u64, result: Result<u32, ViewError>) -> RefreshOutcome {
        match result {
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                RefreshOutcome::Failed(e)
            }
            Ok(_) if seq <= self.applied => RefreshOutcome::Stale,
            Ok(count) => {
                self.applied = seq;
                self.count = Some(count);
                self.consecutive_failures = 0;
                RefreshOutcome::Applied(BadgeDisplay::from_count(count))
            }
        }
    }
}

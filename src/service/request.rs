//! Request bookkeeping for the bounded gallery fetch.
//!
//! The Zellij host cannot cancel a web request once issued, so the deadline is
//! enforced on the receiving side: each fetch gets a fresh [`RequestId`], only the
//! pending id is accepted, and an expired request is abandoned so its late
//! response is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Default bound on a gallery fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest accepted bound on a gallery fetch.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(3600);

/// Identifier attached to one gallery fetch.
///
/// Travels through the host as the web request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RequestId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The in-flight request and its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    /// Identifier of the request.
    pub id: RequestId,
    /// Instant after which the request is abandoned, `None` if the clock
    /// cannot represent it.
    pub deadline: Option<Instant>,
}

/// Tracks at most one pending gallery request.
///
/// Starting a new request supersedes the previous one.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    next_id: u64,
    timeout: Duration,
    pending: Option<PendingRequest>,
}

impl RequestTracker {
    /// Creates a tracker with the given per-request timeout, capped at [`MAX_TIMEOUT`].
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        let timeout = if timeout.as_secs() >= MAX_TIMEOUT.as_secs() { MAX_TIMEOUT } else { timeout };
        Self {
            next_id: 1,
            timeout,
            pending: None,
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The currently pending request, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<PendingRequest> {
        self.pending
    }

    /// Registers a new request started at `now` and returns its id.
    pub fn begin(&mut self, now: Instant) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = self.pending.take() {
            tracing::debug!(superseded = %previous.id, "replacing pending gallery request");
        }

        self.pending = Some(PendingRequest {
            id,
            deadline: now.checked_add(self.timeout),
        });
        id
    }

    /// Accepts the response for `id` if it is the pending request.
    ///
    /// Returns `false` for stale, superseded or already expired ids.
    pub fn complete(&mut self, id: RequestId) -> bool {
        match self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                true
            }
            _ => {
                tracing::debug!(request_id = %id, "ignoring response for inactive request");
                false
            }
        }
    }

    /// Abandons the pending request if its deadline has passed.
    ///
    /// Returns the id of the abandoned request.
    pub fn expire(&mut self, now: Instant) -> Option<RequestId> {
        match self.pending {
            Some(pending) if pending.deadline.is_some_and(|deadline| now >= deadline) => {
                self.pending = None;
                Some(pending.id)
            }
            _ => None,
        }
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

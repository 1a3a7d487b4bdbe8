//! Client data service for the gallery endpoint.
//!
//! The plugin issues the HTTP request through the Zellij host; this module owns
//! everything around it that does not need the host:
//!
//! - [`fetch`]: classification of a response into a tagged [`LoadOutcome`]
//! - [`request`]: request ids and the deadline that bounds each fetch

pub mod fetch;
pub mod request;

pub use fetch::{parse_response, LoadFailure, LoadOutcome};
pub use request::{PendingRequest, RequestId, RequestTracker, DEFAULT_TIMEOUT, MAX_TIMEOUT};

/// Key under which the [`RequestId`] travels in the web request context.
pub const REQUEST_ID_CONTEXT_KEY: &str = "request_id";

//! Interpretation of gallery HTTP responses.
//!
//! The client never propagates a fetch error to the view layer. Every response is
//! classified into a tagged [`LoadOutcome`]; failures keep their cause in
//! [`LoadFailure`] so the UI can explain an empty gallery, and
//! [`LoadOutcome::into_items`] collapses any failure into an empty sequence.

use crate::domain::GalleryItem;
use std::fmt;

/// Why a gallery load produced no items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The endpoint answered with a non-2xx status.
    ///
    /// Transport errors (DNS, refused connection, TLS) are reported by the
    /// Zellij host as a non-2xx status as well.
    Status(u16),

    /// No response arrived before the request deadline.
    Timeout,

    /// The body was not a JSON array of gallery rows.
    Malformed(String),
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "server answered HTTP {status}"),
            Self::Timeout => f.write_str("request timed out"),
            Self::Malformed(detail) => write!(f, "unexpected response body: {detail}"),
        }
    }
}

/// Result of one gallery load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows decoded successfully, in server order.
    Loaded {
        /// Decoded gallery rows.
        items: Vec<GalleryItem>,
    },
    /// The load failed; the gallery shows its empty state.
    Failed {
        /// Cause of the failure.
        reason: LoadFailure,
    },
}

impl LoadOutcome {
    /// Returns the loaded items, or an empty vector after logging the failure.
    #[must_use]
    pub fn into_items(self) -> Vec<GalleryItem> {
        match self {
            Self::Loaded { items } => items,
            Self::Failed { reason } => {
                tracing::warn!(reason = %reason, "gallery load failed, showing empty gallery");
                Vec::new()
            }
        }
    }

    /// Returns the failure cause, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Self::Loaded { .. } => None,
            Self::Failed { reason } => Some(reason),
        }
    }
}

/// Classifies an HTTP status and body into a [`LoadOutcome`].
///
/// # Examples
///
/// ```
/// use galeria::service::{parse_response, LoadFailure, LoadOutcome};
///
/// let ok = parse_response(200, br#"[{"id":1,"carpeta":"A","url":"u"}]"#);
/// assert!(matches!(ok, LoadOutcome::Loaded { ref items } if items.len() == 1));
///
/// let down = parse_response(500, br#"{"error":"Database error"}"#);
/// assert_eq!(down.failure(), Some(&LoadFailure::Status(500)));
/// ```
#[must_use]
pub fn parse_response(status: u16, body: &[u8]) -> LoadOutcome {
    let _span = tracing::debug_span!("parse_gallery_response", status, body_len = body.len()).entered();

    if !(200..300).contains(&status) {
        return LoadOutcome::Failed {
            reason: LoadFailure::Status(status),
        };
    }

    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return LoadOutcome::Failed {
                reason: LoadFailure::Malformed(format!("invalid JSON: {e}")),
            }
        }
    };

    if !value.is_array() {
        return LoadOutcome::Failed {
            reason: LoadFailure::Malformed("expected a JSON array".to_string()),
        };
    }

    match serde_json::from_value::<Vec<GalleryItem>>(value) {
        Ok(items) => {
            tracing::debug!(item_count = items.len(), "gallery rows decoded");
            LoadOutcome::Loaded { items }
        }
        Err(e) => LoadOutcome::Failed {
            reason: LoadFailure::Malformed(format!("invalid gallery row: {e}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rows_in_server_order() {
        let body = br#"[
            {"id":2,"carpeta":"Ciudad","url":"https://img/2"},
            {"id":1,"carpeta":"Naturaleza","url":"https://img/1"}
        ]"#;
        let items = parse_response(200, body).into_items();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(items[1].folder, "Naturaleza");
    }

    #[test]
    fn empty_array_is_a_successful_empty_load() {
        assert_eq!(parse_response(200, b"[]"), LoadOutcome::Loaded { items: vec![] });
    }

    #[test]
    fn server_error_becomes_empty_sequence() {
        let outcome = parse_response(500, br#"{"error":"Database error","details":"boom"}"#);
        assert_eq!(outcome.failure(), Some(&LoadFailure::Status(500)));
        assert!(outcome.into_items().is_empty());
    }

    #[test]
    fn non_array_body_is_malformed() {
        let outcome = parse_response(200, br#"{"rows":[]}"#);
        assert!(matches!(outcome.failure(), Some(LoadFailure::Malformed(_))));
    }

    #[test]
    fn garbage_body_is_malformed() {
        let outcome = parse_response(200, b"<html>oops</html>");
        assert!(matches!(outcome.failure(), Some(LoadFailure::Malformed(_))));
    }

    #[test]
    fn row_with_wrong_shape_is_malformed() {
        let outcome = parse_response(200, br#"[{"id":"one","carpeta":"A","url":"u"}]"#);
        assert!(matches!(outcome.failure(), Some(LoadFailure::Malformed(_))));
    }

    #[test]
    fn failure_messages_name_the_cause() {
        assert_eq!(LoadFailure::Status(503).to_string(), "server answered HTTP 503");
        assert_eq!(LoadFailure::Timeout.to_string(), "request timed out");
    }
}

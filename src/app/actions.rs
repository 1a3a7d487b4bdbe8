//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions are the
//! boundary between pure state transitions and host calls: web requests,
//! timers, worker messages and closing the pane.
//!
//! # Example
//!
//! ```rust
//! use galeria::app::Action;
//! use galeria::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_settings())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::service::RequestId;
use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues `GET url` and arms a timer for the request deadline.
    ///
    /// The runtime tags the request with `request_id` so the response can be
    /// matched against the pending request when it arrives.
    FetchGallery {
        /// Identifier of the pending request.
        request_id: RequestId,
        /// Gallery endpoint.
        url: String,
        /// How long to wait before abandoning the request.
        timeout: Duration,
    },

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}

//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main plugin
//! thread and the background worker thread that owns the settings store. Messages
//! carry the caller's trace context so worker spans join the plugin's trace.

use crate::domain::ThemePreference;
use serde::{Deserialize, Serialize};

/// Trace and parent span ids of the plugin span that sent a message.
///
/// Both ids are lowercase hex, 32 and 16 digits, as OTLP JSON writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// Trace id.
    pub trace_id: String,

    /// Span id of the sending span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the active span, or `None` outside a sampled OpenTelemetry span.
    ///
    /// ```no_run
    /// use galeria::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("joining trace {}", ctx.trace_id);
    /// }
    /// ```
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let ids = span.span_context();

        if !ids.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", ids.trace_id()),
            parent_span_id: format!("{:016x}", ids.span_id()),
        })
    }
}

/// Generates one constructor per variant that stamps the current trace context.
macro_rules! worker_message_builders {
    ($($builder:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })),* $(,)?) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Builds [`WorkerMessage::", stringify!($variant), "`] for the active span.")]
                #[must_use]
                pub fn $builder($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_settings(LoadSettings {}),
    save_theme(SaveTheme { theme: ThemePreference }),
}

/// Requests from the plugin thread to the settings worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the stored settings.
    LoadSettings {
        /// Trace context for linking spans across threads.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist a new theme preference.
    SaveTheme {
        /// Preference to store.
        theme: ThemePreference,

        /// Trace context for linking spans across threads.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadSettings { trace_context } | Self::SaveTheme { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Stored settings were read.
    SettingsLoaded {
        /// Stored theme, `None` if the user never chose one.
        theme: Option<ThemePreference>,
    },

    /// The theme preference was written.
    ThemeSaved {
        /// Preference that was stored.
        theme: ThemePreference,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_trace_context_empty_without_subscriber() {
        let message = WorkerMessage::save_theme(ThemePreference::Light);
        assert_eq!(
            message,
            WorkerMessage::SaveTheme { theme: ThemePreference::Light, trace_context: None }
        );
    }

    #[test]
    fn messages_travel_as_json() {
        let payload = serde_json::to_string(&WorkerMessage::load_settings()).unwrap();
        assert_eq!(payload, r#"{"LoadSettings":{}}"#);

        let response: WorkerResponse =
            serde_json::from_str(r#"{"SettingsLoaded":{"theme":"light"}}"#).unwrap();
        assert_eq!(response, WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Light) });
    }
}

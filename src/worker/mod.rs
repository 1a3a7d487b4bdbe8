//! Background worker thread for settings persistence.
//!
//! The worker owns the settings store so file I/O stays off the plugin's render
//! loop. It is reached through Zellij's worker API with JSON messages that carry
//! a trace context.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{GaleriaWorker, WORKER_NAME};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};

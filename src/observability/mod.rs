//! Tracing setup and OTLP file export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → galeria-otlp.json
//! ```
//!
//! The plugin and its worker export spans to a size-rotated OTLP JSON file in
//! the data directory (10 MiB, three numbered backups). The API service logs
//! to stderr through the `fmt` layer instead.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_api_logging, init_tracing, DEFAULT_LEVEL, SERVICE_NAME};

//! Tracer provider exporting spans to the rotating trace file.
//!
//! The Zellij sandbox has no network collector, so spans are encoded as OTLP
//! JSON and appended to a file in the plugin data directory instead.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Span exporter writing one OTLP document per batch.
#[derive(Debug)]
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: bool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown {
            return Err(TraceError::from("trace file exporter is shut down"));
        }

        let document = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&document)
            .map_err(|e| TraceError::from(format!("writing {}: {e}", self.writer.path().display())))
    }
}

impl SpanExporter for FileSpanExporter {
    /// Writes synchronously; the returned future is already resolved.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }
}

/// Builds a provider that exports every finished span to `file_path`.
///
/// Uses the simple (unbatched) span processor: the plugin runs on a single
/// thread without an async runtime to drive a batch processor.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = FileSpanExporter::new(
            dir.path().join("trace.json"),
            Resource::new(vec![KeyValue::new("service.name", "galeria")]),
        );

        assert!(exporter.write_batch(&[]).is_ok());
        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
    }
}

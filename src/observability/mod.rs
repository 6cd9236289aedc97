//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → opentelemetry_sdk → JSON-lines file
//! ```
//!
//! Every mutation in the crate (registry add/decide, login/logout, filtering, event
//! handling) opens a `debug` span, so a `debug` filter captures one line per
//! operation. The file rotates at 5 MB and keeps two backups.
//!
//! # Modules
//!
//! - `init`: Subscriber installation
//! - `exporter`: `SpanExporter` implementation and span serialization
//! - `file_writer`: Rotating line writer

mod exporter;
mod file_writer;
mod init;

pub use exporter::SERVICE_NAME;
pub use init::{init_tracing, TRACE_FILE_NAME};

//! OpenTelemetry span exporter writing JSON lines to a rotating file.
//!
//! Each finished span becomes one JSON object on its own line:
//!
//! ```json
//! {"service":"artistly","name":"registry_update_status","traceId":"…","spanId":"…",
//!  "parentSpanId":"…","startTimeUnixNano":"…","durationMicros":42,
//!  "attributes":{"id":3,"decision":"Approve"},"events":[…],"status":"unset"}
//! ```

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Name recorded as `service` on every exported span.
pub const SERVICE_NAME: &str = "artistly";

#[derive(Debug)]
struct JsonLinesExporter {
    writer: FileWriter,
    shut_down: bool,
}

impl JsonLinesExporter {
    const fn new(file_path: PathBuf) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            shut_down: false,
        }
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.shut_down {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = batch
            .iter()
            .try_for_each(|span| self.writer.write_line(&format_span(span).to_string()))
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        JsonValue::Null
    } else {
        json!(format!("{:016x}", span.parent_span_id))
    };

    let duration = span
        .end_time
        .duration_since(span.start_time)
        .unwrap_or(Duration::ZERO);

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "timeUnixNano": unix_nanos(event.timestamp),
                "attributes": attributes(&event.attributes),
            })
        })
        .collect();

    let status = match &span.status {
        Status::Unset => json!("unset"),
        Status::Ok => json!("ok"),
        Status::Error { description } => json!({ "error": description.to_string() }),
    };

    json!({
        "service": SERVICE_NAME,
        "name": span.name,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "startTimeUnixNano": unix_nanos(span.start_time),
        "durationMicros": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        "attributes": attributes(&span.attributes),
        "events": events,
        "status": status,
    })
}

// Later keys overwrite earlier ones, matching how `tracing` records fields.
fn attributes(pairs: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = pairs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        other => json!(other.as_str()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

/// Builds a tracer provider exporting every span to `file_path` as it ends.
#[must_use]
pub fn create_tracer_provider(file_path: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(JsonLinesExporter::new(file_path))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use opentelemetry::trace::{Span as _, Tracer as _, TracerProvider as _};

    fn exported_lines(path: &std::path::Path) -> Vec<JsonValue> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn ended_span_becomes_one_json_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let provider = create_tracer_provider(path.clone());
        let tracer = provider.tracer("registry");

        let mut span = tracer.start("registry_update_status");
        span.set_attribute(KeyValue::new("id", 3_i64));
        span.set_attribute(KeyValue::new("decision", "Approve"));
        span.set_attribute(KeyValue::new("accepted", true));
        span.end();

        let lines = exported_lines(&path);
        assert_eq!(lines.len(), 1);

        let line = &lines[0];
        assert_eq!(line["service"], SERVICE_NAME);
        assert_eq!(line["name"], "registry_update_status");
        assert_eq!(line["parentSpanId"], JsonValue::Null);
        assert_eq!(line["status"], "unset");
        assert_eq!(line["attributes"], json!({ "id": 3, "decision": "Approve", "accepted": true }));
        assert_eq!(line["spanId"].as_str().map(str::len), Some(16));
        assert_eq!(line["traceId"].as_str().map(str::len), Some(32));
    }

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let mut exporter = JsonLinesExporter::new(path.clone());

        assert!(matches!(exporter.export(Vec::new()).now_or_never(), Some(Ok(()))));

        exporter.shutdown();
        assert!(matches!(exporter.export(Vec::new()).now_or_never(), Some(Err(_))));
        assert!(!path.exists());
    }
}

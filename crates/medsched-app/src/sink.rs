//! Appointment sinks - where submitted appointments go
//!
//! The form never persists anything itself; the event loop hands each
//! submitted [`AppointmentRequest`] to a sink.

use std::path::Path;

use medsched_core::prelude::*;
use medsched_core::AppointmentRequest;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Receiver of submitted appointments
#[trait_variant::make(AppointmentSink: Send)]
pub trait LocalAppointmentSink {
    /// Deliver one appointment
    async fn deliver(&mut self, request: &AppointmentRequest) -> Result<()>;
}

/// Writes one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl JsonLinesSink<tokio::fs::File> {
    /// Open `path` for appending, creating it if needed
    pub async fn append_file(path: &Path) -> Result<Self> {
        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        debug!("Appending appointments to {:?}", path);
        Ok(Self::new(file))
    }
}

impl<W> AppointmentSink for JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn deliver(&mut self, request: &AppointmentRequest) -> Result<()> {
        let mut line = serde_json::to_string(request)?;
        line.push('\n');
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Keeps delivered appointments in memory; optionally fails every delivery
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    delivered: Vec<AppointmentRequest>,
    failure: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every appointment with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            delivered: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn delivered(&self) -> &[AppointmentRequest] {
        &self.delivered
    }
}

impl AppointmentSink for MemorySink {
    async fn deliver(&mut self, request: &AppointmentRequest) -> Result<()> {
        if let Some(message) = &self.failure {
            return Err(Error::delivery(message.clone()));
        }
        self.delivered.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppointmentRequest, AppointmentSink, JsonLinesSink, MemorySink};
    use medsched_core::prelude::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn request(doctor_id: &str) -> AppointmentRequest {
        AppointmentRequest {
            doctor_id: doctor_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_json_lines_sink_writes_one_line_per_request() {
        let mut sink = JsonLinesSink::new(Vec::<u8>::new());

        tokio_test::block_on(sink.deliver(&request("d1"))).unwrap();
        tokio_test::block_on(sink.deliver(&request("d2"))).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"doctorId":"d1","date":"2026-10-20T10:00:00","notes":""}"#
        );
    }

    #[test]
    fn test_append_file_keeps_previous_lines() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("appointments.jsonl");
        std::fs::write(&path, "existing\n").unwrap();

        tokio_test::block_on(async {
            let mut sink = JsonLinesSink::append_file(&path).await.unwrap();
            sink.deliver(&request("d1")).await.unwrap();
        });

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing\n"));
        assert!(content.contains(r#""doctorId":"d1""#));
    }

    #[test]
    fn test_memory_sink_collects() {
        let mut sink = MemorySink::new();
        tokio_test::block_on(sink.deliver(&request("d1"))).unwrap();
        assert_eq!(sink.delivered(), &[request("d1")]);
    }

    #[test]
    fn test_failing_memory_sink() {
        let mut sink = MemorySink::failing("offline");
        let err = tokio_test::block_on(sink.deliver(&request("d1"))).unwrap_err();
        assert!(matches!(err, Error::Delivery { .. }));
        assert!(err.is_recoverable());
        assert!(sink.delivered().is_empty());
    }
}

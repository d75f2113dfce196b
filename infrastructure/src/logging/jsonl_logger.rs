//! JSONL transcript of survey sessions.
//!
//! One line per [`SessionEvent`]:
//!
//! ```json
//! {"session":"20261018T101500.123Z-4242","seq":3,"type":"answer_recorded",
//!  "timestamp":"2026-10-18T10:15:07.456Z","data":{"question_id":"1","value":"hello"}}
//! ```
//!
//! `session` identifies one run of the form, so transcripts from several runs
//! can share a file; `seq` orders the events within the run.

use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use survey_application::{SessionEvent, SessionLogger};
use tracing::warn;

struct Transcript {
    writer: BufWriter<File>,
    next_seq: u64,
}

/// Session logger appending to a JSONL transcript file.
pub struct JsonlSessionLogger {
    transcript: Mutex<Transcript>,
    session_id: String,
    path: PathBuf,
}

impl JsonlSessionLogger {
    /// Open (or create) the transcript at `path` for appending.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened; the session then runs without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create session log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open session log file {}: {}", path.display(), e);
                return None;
            }
        };

        let session_id = format!(
            "{}-{}",
            Utc::now().format("%Y%m%dT%H%M%S%.3fZ"),
            std::process::id()
        );

        Some(Self {
            transcript: Mutex::new(Transcript {
                writer: BufWriter::new(file),
                next_seq: 1,
            }),
            session_id,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn record(&self, seq: u64, event: SessionEvent) -> Value {
        json!({
            "session": self.session_id,
            "seq": seq,
            "type": event.event_type,
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "data": event.payload,
        })
    }
}

impl SessionLogger for JsonlSessionLogger {
    fn log(&self, event: SessionEvent) {
        let Ok(mut transcript) = self.transcript.lock() else {
            return;
        };
        let seq = transcript.next_seq;
        let Ok(line) = serde_json::to_string(&self.record(seq, event)) else {
            return;
        };

        if writeln!(transcript.writer, "{}", line)
            .and_then(|()| transcript.writer.flush())
            .is_ok()
        {
            transcript.next_seq += 1;
        }
    }
}

impl Drop for JsonlSessionLogger {
    fn drop(&mut self) {
        if let Ok(mut transcript) = self.transcript.lock() {
            let _ = transcript.writer.flush();
        }
    }
}

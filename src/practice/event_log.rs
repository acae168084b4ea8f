// Append-only storage for practice events

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::PracticeEvent;
use crate::errors::RangebookError;

const EVENT_LOG_FILE_NAME: &str = "events.jsonl";

/// Ordered, append-only collection of practice events.
///
/// Events are never updated or deleted. Reads always return the full log in
/// the order it was written.
pub trait EventLog {
    /// Append one event at the end of the log
    fn append(&mut self, event: &PracticeEvent) -> Result<(), RangebookError>;

    /// Read the whole log as a snapshot
    fn read_all(&self) -> Result<Vec<PracticeEvent>, RangebookError>;
}

impl EventLog for Vec<PracticeEvent> {
    fn append(&mut self, event: &PracticeEvent) -> Result<(), RangebookError> {
        self.push(event.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<PracticeEvent>, RangebookError> {
        Ok(self.clone())
    }
}

/// Event log stored as one JSON object per line.
///
/// There is no locking: concurrent writers are not supported and the last
/// writer wins.
pub struct JsonLinesEventLog {
    path: PathBuf,
}

impl JsonLinesEventLog {
    /// Open (or prepare) the log file inside `data_dir`.
    pub fn new(data_dir: &Path) -> Result<Self, RangebookError> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(|e| RangebookError::EventLogIOError { source: e })?;
        }
        Ok(Self {
            path: data_dir.join(EVENT_LOG_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventLog for JsonLinesEventLog {
    fn append(&mut self, event: &PracticeEvent) -> Result<(), RangebookError> {
        serde_jsonlines::append_json_lines(&self.path, [event])
            .map_err(|e| RangebookError::EventLogIOError { source: e })?;
        debug!(
            "Appended {} / {} event to {:?}",
            event.category, event.detail, self.path
        );
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<PracticeEvent>, RangebookError> {
        if !self.path.exists() {
            debug!("No practice log at {:?} yet", self.path);
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| RangebookError::EventLogIOError { source: e })?;
        let reader = BufReader::new(file);

        let mut events = Vec::new();
        // raw bytes per line, so a row with broken UTF-8 is skipped like any other bad row
        for (line_no, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| RangebookError::EventLogIOError { source: e })?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            // rows written by other versions of the logger are skipped, not fatal
            match serde_json::from_slice::<PracticeEvent>(&line) {
                Ok(event) => events.push(event),
                Err(e) => warn!("Skipping malformed practice log line {}: {}", line_no + 1, e),
            }
        }

        info!("Loaded {} practice events from {:?}", events.len(), self.path);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::{Club, SessionType, category, detail};
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::TempDir;

    fn sample_event() -> PracticeEvent {
        PracticeEvent::new(
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            SessionType::Range,
            category::DISTANCE_CONTROL,
            detail::CARRY,
        )
        .with_club(Club::Iron7)
        .with_value(142.)
    }

    #[test]
    fn test_missing_file_reads_as_empty_log() {
        let temp_dir = TempDir::new().unwrap();
        let log = JsonLinesEventLog::new(temp_dir.path()).unwrap();
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut log = JsonLinesEventLog::new(temp_dir.path()).unwrap();

        let first = sample_event();
        let second = sample_event().with_value(150.);
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        let events = log.read_all().unwrap();
        assert_eq!(events, vec![first, second]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let mut log = JsonLinesEventLog::new(temp_dir.path()).unwrap();
        log.append(&sample_event()).unwrap();

        let mut file = fs::OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file, "{{\"datum\":\"2024-04-02\",\"pass\":\"Range\"}}").unwrap();
        writeln!(file).unwrap();
        drop(file);
        log.append(&sample_event()).unwrap();

        assert_eq!(log.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let mut log = JsonLinesEventLog::new(temp_dir.path()).unwrap();
        log.append(&sample_event()).unwrap();

        let mut file = fs::OpenOptions::new().append(true).open(log.path()).unwrap();
        file.write_all(b"{\"note\":\"\xff\xfe\"}\n").unwrap();
        file.write_all(b"\xc3\x28 not json either\r\n").unwrap();
        drop(file);
        log.append(&sample_event().with_value(151.)).unwrap();

        let events = log.read_all().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].value, 151.);
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let mut log = JsonLinesEventLog::new(&nested).unwrap();
        log.append(&sample_event()).unwrap();
        assert!(nested.join(EVENT_LOG_FILE_NAME).exists());
    }

    #[test]
    fn test_vec_event_log() {
        let mut log: Vec<PracticeEvent> = Vec::new();
        EventLog::append(&mut log, &sample_event()).unwrap();
        assert_eq!(log.read_all().unwrap().len(), 1);
    }
}

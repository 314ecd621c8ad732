//! Consultation requests sent from the Contact Doctor page
//!
//! Requests are appended to a JSON array on disk, next to the key/value
//! storage file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::storage::{write_json, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Urgency {
    #[default]
    Routine,
    Urgent,
    Emergency,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Routine, Urgency::Urgent, Urgency::Emergency];

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Routine => "Routine",
            Urgency::Urgent => "Urgent",
            Urgency::Emergency => "Emergency",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub urgency: Urgency,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

pub trait ConsultationLog: Send + Sync {
    /// Record a request. Nothing is kept if the write fails.
    fn append(&self, request: ConsultationRequest) -> Result<(), StorageError>;
    fn entries(&self) -> Vec<ConsultationRequest>;
}

/// Consultation log persisted to a JSON array on disk
#[derive(Debug)]
pub struct FileConsultationLog {
    path: PathBuf,
    entries: Mutex<Vec<ConsultationRequest>>,
}

impl FileConsultationLog {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("healthguard").join("consultations.json"))
    }

    /// Open the log, starting empty if the file is missing or unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Vec<ConsultationRequest> {
        if !path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!("Failed to read consultation log: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Failed to parse consultation log: {}", e);
                Vec::new()
            }
        }
    }
}

impl ConsultationLog for FileConsultationLog {
    fn append(&self, request: ConsultationRequest) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push(request);

        if let Err(e) = write_json(&self.path, entries.as_slice()) {
            entries.pop();
            return Err(e);
        }

        tracing::info!("Recorded consultation request #{}", entries.len());
        Ok(())
    }

    fn entries(&self) -> Vec<ConsultationRequest> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[derive(Debug, Default)]
pub struct MemoryConsultationLog {
    entries: Mutex<Vec<ConsultationRequest>>,
}

impl MemoryConsultationLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsultationLog for MemoryConsultationLog {
    fn append(&self, request: ConsultationRequest) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        Ok(())
    }

    fn entries(&self) -> Vec<ConsultationRequest> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("healthguard-{}", uuid::Uuid::new_v4()))
            .join("consultations.json")
    }

    fn request(name: &str, urgency: Urgency) -> ConsultationRequest {
        ConsultationRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            urgency,
            message: "Recurring headaches".to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_file_log_appends_across_opens() {
        let path = temp_path();

        let log = FileConsultationLog::open(&path);
        assert!(log.entries().is_empty());
        log.append(request("ann", Urgency::Routine)).unwrap();

        let reopened = FileConsultationLog::open(&path);
        reopened.append(request("bob", Urgency::Emergency)).unwrap();

        let entries = FileConsultationLog::open(&path).entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "ann");
        assert_eq!(entries[1].urgency, Urgency::Emergency);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_failed_write_keeps_nothing() {
        // A directory where the file should be makes the write fail
        let path = temp_path();
        std::fs::create_dir_all(&path).unwrap();

        let log = FileConsultationLog::open(&path);
        let result = log.append(request("ann", Urgency::Urgent));

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert!(log.entries().is_empty());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_log_ignores_corrupt_file() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[{ not json").unwrap();

        let log = FileConsultationLog::open(&path);
        assert!(log.entries().is_empty());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_urgency_serializes_by_name() {
        let json = serde_json::to_value(request("ann", Urgency::Urgent)).unwrap();
        assert_eq!(json["urgency"], "Urgent");
        assert_eq!(
            Urgency::ALL.map(Urgency::label),
            ["Routine", "Urgent", "Emergency"]
        );
    }
}

//! # Tipos del Planificador
//! src/scheduler/types.rs
//!
//! Define el registro de metadatos de un job y su ciclo de vida:
//! `pending` al encolarse, `completed` tras ejecutarse.

use serde::{Deserialize, Serialize};

/// Estado de un job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Job encolado esperando ejecución
    Pending,

    /// Job ejecutado
    Completed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Completed => "completed",
        }
    }
}

/// Metadatos de un job registrados en la tabla hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// ID único del job
    pub job_id: String,

    /// Estado actual
    pub status: JobStatus,

    /// Timestamp de envío
    pub submitted_at: String,

    /// Timestamp de finalización (solo si status = completed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl JobRecord {
    /// Crea el registro de un job recién enviado
    pub fn pending(job_id: &str, submitted_at: String) -> Self {
        Self {
            job_id: job_id.to_string(),
            status: JobStatus::Pending,
            submitted_at,
            completed_at: None,
        }
    }

    /// Marca el job como completado
    pub fn mark_completed(&mut self, completed_at: String) {
        self.status = JobStatus::Completed;
        self.completed_at = Some(completed_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&JobStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&JobStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_pending_record_has_no_completed_at() {
        let record = JobRecord::pending("job-1", "2024-01-01 10:00:00".to_string());
        assert_eq!(record.status, JobStatus::Pending);
        assert!(record.completed_at.is_none());

        // completed_at ausente del JSON mientras el job está pendiente
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("completed_at"));
    }

    #[test]
    fn test_mark_completed_sets_timestamp() {
        let mut record = JobRecord::pending("job-1", "2024-01-01 10:00:00".to_string());
        record.mark_completed("2024-01-01 10:05:00".to_string());

        assert_eq!(record.status, JobStatus::Completed);
        assert_eq!(record.completed_at.as_deref(), Some("2024-01-01 10:05:00"));
    }

    #[test]
    fn test_record_round_trip() {
        let mut record = JobRecord::pending("job-7", "2024-01-01 10:00:00".to_string());
        record.mark_completed("2024-01-01 10:05:00".to_string());

        let json = serde_json::to_string(&record).unwrap();
        let back: JobRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

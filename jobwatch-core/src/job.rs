//! Job status types

use serde::{Deserialize, Serialize};

/// Status values the service reports for a finished job.
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_ERROR: &str = "ERROR";

/// Snapshot of a remote job's state
///
/// Structure shared between the caller (supplies the initial snapshot) and
/// the monitor (replaces it on every successful poll). The status endpoint
/// re-states all three fields in each response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    /// Current status reported by the service. Open string set; only
    /// `COMPLETED` and `ERROR` carry special meaning.
    pub status: String,
    /// Identifier assigned to the job by the service
    pub job_id: String,
    /// Status endpoint to poll for this job
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
}

impl JobStatus {
    /// Create a snapshot for a job that has just been accepted
    pub fn new(
        status: impl Into<String>,
        job_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            job_id: job_id.into(),
            callback_url: callback_url.into(),
        }
    }

    /// Whether this status ends monitoring
    ///
    /// Exactly two values are terminal: `COMPLETED` and `ERROR`. Every
    /// other value is treated as still running: `RUNNING`, but also any
    /// string the service introduces that this crate does not know about.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status.as_str(), STATUS_COMPLETED | STATUS_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        let mut status = JobStatus::new("RUNNING", "job-1", "http://example.com/status/job-1");
        assert!(!status.is_terminal());

        status.status = STATUS_COMPLETED.to_string();
        assert!(status.is_terminal());

        status.status = STATUS_ERROR.to_string();
        assert!(status.is_terminal());
    }

    #[test]
    fn test_unrecognized_status_is_not_terminal() {
        let status = JobStatus::new("INITIALIZED", "job-1", "http://example.com/status/job-1");
        assert!(!status.is_terminal());

        // Terminal detection is case-sensitive, like the service contract
        let status = JobStatus::new("completed", "job-1", "http://example.com/status/job-1");
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_deserializes_wire_payload() {
        let payload = r#"{
            "status": "RUNNING",
            "jobId": "852a1e4a-2ec6-4c5a-a0fc-97e08e05e2b1",
            "callbackUrl": "https://dns.api.example.com/v1.0/1234/status/852a1e4a"
        }"#;

        let status: JobStatus = serde_json::from_str(payload).unwrap();
        assert_eq!(status.status, "RUNNING");
        assert_eq!(status.job_id, "852a1e4a-2ec6-4c5a-a0fc-97e08e05e2b1");
        assert_eq!(
            status.callback_url,
            "https://dns.api.example.com/v1.0/1234/status/852a1e4a"
        );
    }

    #[test]
    fn test_serializes_wire_field_names() {
        let status = JobStatus::new("COMPLETED", "job-1", "http://example.com/status/job-1");
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["jobId"], "job-1");
        assert_eq!(json["callbackUrl"], "http://example.com/status/job-1");
    }
}

//! Single-shot status fetch
//!
//! One request/response cycle against a job's callback URL. Retry policy
//! lives in the monitor loop, not here.

use jobwatch_core::{AuthSession, JobStatus};
use reqwest::header::ACCEPT;

use crate::error::{PollError, Result};

/// Header carrying the session's auth token
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Poll a job's status endpoint once
///
/// Sends `GET {status.callback_url}` through the session's HTTP capability
/// and, on success, replaces `status` with the decoded response. On any
/// failure (transport, unexpected HTTP status, or an undecodable body)
/// the snapshot is left untouched and the error is returned to the caller.
///
/// # Arguments
/// * `session` - The authenticated session supplying the token and client
/// * `status` - The snapshot to refresh in place
pub async fn query(session: &dyn AuthSession, status: &mut JobStatus) -> Result<()> {
    let response = session
        .http()
        .get(&status.callback_url)
        .header(ACCEPT, "application/json")
        .header(AUTH_TOKEN_HEADER, session.id())
        .send()
        .await?;

    let code = response.status().as_u16();
    let body = response.text().await?;

    // 200 and 202 are the only success codes the status endpoint produces.
    // 400, 401, 404, 413, 500, 503 are the documented failures; anything
    // else falls through to the same failure path.
    match code {
        200 | 202 => {}
        _ => return Err(PollError::unexpected_status(code, body)),
    }

    let updated: JobStatus = serde_json::from_str(&body)?;
    *status = updated;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobwatch_core::StaticSession;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session() -> StaticSession {
        StaticSession::new("token-123", "2026-12-31T00:00:00Z", reqwest::Client::new())
    }

    fn snapshot(server: &MockServer) -> JobStatus {
        JobStatus::new(
            "RUNNING",
            "job-1",
            format!("{}/status/job-1", server.uri()),
        )
    }

    #[tokio::test]
    async fn test_query_replaces_snapshot_on_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status/job-1"))
            .and(header("Accept", "application/json"))
            .and(header("X-Auth-Token", "token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "COMPLETED",
                "jobId": "job-1",
                "callbackUrl": format!("{}/status/job-1", server.uri()),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut status = snapshot(&server);
        query(&session(), &mut status).await.unwrap();

        assert_eq!(status.status, "COMPLETED");
        assert_eq!(status.job_id, "job-1");
    }

    #[tokio::test]
    async fn test_query_accepts_202() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({
                "status": "RUNNING",
                "jobId": "job-1",
                "callbackUrl": format!("{}/status/job-1", server.uri()),
            })))
            .mount(&server)
            .await;

        let mut status = snapshot(&server);
        assert!(query(&session(), &mut status).await.is_ok());
    }

    #[tokio::test]
    async fn test_query_failure_status_leaves_snapshot_untouched() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let mut status = snapshot(&server);
        let before = status.clone();
        let err = query(&session(), &mut status).await.unwrap_err();

        assert!(matches!(
            err,
            PollError::UnexpectedStatus { status: 500, ref body } if body == "upstream exploded"
        ));
        assert_eq!(status, before);
    }

    #[tokio::test]
    async fn test_query_unlisted_status_code_is_failure() {
        let server = MockServer::start().await;

        // 418 is not in the documented failure set; the fallthrough policy
        // still classifies it as a failure.
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(418))
            .mount(&server)
            .await;

        let mut status = snapshot(&server);
        let err = query(&session(), &mut status).await.unwrap_err();

        assert!(matches!(
            err,
            PollError::UnexpectedStatus { status: 418, .. }
        ));
    }

    #[tokio::test]
    async fn test_query_malformed_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let mut status = snapshot(&server);
        let before = status.clone();
        let err = query(&session(), &mut status).await.unwrap_err();

        assert!(err.is_decode());
        assert_eq!(status, before);
    }
}

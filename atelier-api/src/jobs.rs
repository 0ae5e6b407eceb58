//! Job endpoints.

use atelier_core::model::{BuildRequest, Job, JobRef};

use crate::{ApiError, Client};

pub async fn fetch(client: &Client, project_key: &str, job_id: &str) -> Result<Job, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/jobs/{job_id}/"))
        .await
}

/// The job's full log as plain text.
pub async fn log(client: &Client, project_key: &str, job_id: &str) -> Result<String, ApiError> {
    client
        .get_text(&format!("/projects/{project_key}/jobs/{job_id}/log"))
        .await
}

/// Submit a build; the server assigns the job id.
pub async fn submit(
    client: &Client,
    project_key: &str,
    request: &BuildRequest,
) -> Result<JobRef, ApiError> {
    client
        .post_json(&format!("/projects/{project_key}/jobs/"), request)
        .await
}

/// Request cancellation. Returns as soon as the server acknowledges —
/// the job reaches `Aborted` on its own time.
pub async fn abort(client: &Client, project_key: &str, job_id: &str) -> Result<(), ApiError> {
    client
        .post_empty(&format!("/projects/{project_key}/jobs/{job_id}/abort"))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::model::{ActivityState, BuildableKind};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn submit_posts_the_build_request_and_returns_the_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/SALES/jobs/"))
            .and(body_json(json!({
                "type": "NON_RECURSIVE_FORCED_BUILD",
                "outputs": [{"id": "orders", "type": "DATASET", "partition": "FR"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "job_42"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let request =
            BuildRequest::forced_build("orders", BuildableKind::Dataset, Some("FR".to_string()));
        let job = submit(&client, "SALES", &request).await.unwrap();
        assert_eq!(job.id, "job_42");
    }

    #[tokio::test]
    async fn fetch_parses_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/SALES/jobs/job_42/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "baseStatus": {"def": {"id": "job_42"}, "state": "RUNNING"}
            })))
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let job = fetch(&client, "SALES", "job_42").await.unwrap();
        assert_eq!(job.state(), ActivityState::Running);
    }

    #[tokio::test]
    async fn log_returns_plain_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/SALES/jobs/job_42/log"))
            .respond_with(ResponseTemplate::new(200).set_body_string("line 1\nline 2\n"))
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let text = log(&client, "SALES", "job_42").await.unwrap();
        assert_eq!(text, "line 1\nline 2\n");
    }

    #[tokio::test]
    async fn abort_posts_and_returns_immediately() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/SALES/jobs/job_42/abort"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        abort(&client, "SALES", "job_42").await.unwrap();
    }
}

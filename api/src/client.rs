use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::types::InterviewRecord;

/// Fallback backend base. Override at build time with `PREPDECK_API_BASE`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/my_app/api/";

#[cfg(not(target_arch = "wasm32"))]
const CONNECT_TIMEOUT_SECS: u64 = 5;
#[cfg(not(target_arch = "wasm32"))]
const TOTAL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid backend base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for the interview-record endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against the given base URL. A trailing slash is added
    /// when missing so relative joins append instead of replacing the last
    /// path segment.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)?;

        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(std::time::Duration::from_secs(TOTAL_TIMEOUT_SECS))
            .build()?;

        // wasm reqwest rides the browser fetch API and exposes no timeout knobs.
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Ok(Self { client, base_url })
    }

    /// Client using the compile-time configured base URL.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(option_env!("PREPDECK_API_BASE").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Fetch every interview record belonging to `email`.
    pub async fn fetch_records(&self, email: &str) -> Result<Vec<InterviewRecord>, ApiError> {
        let url = self.base_url.join(&format!("profile/{email}"))?;
        debug!(%url, "fetching interview records");

        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;

        let records = response.json::<Vec<InterviewRecord>>().await?;
        debug!(count = records.len(), "fetched interview records");
        Ok(records)
    }

    /// Delete one record by identifier.
    pub async fn delete_record(&self, id: i64) -> Result<(), ApiError> {
        let url = self.base_url.join(&format!("report/{id}/delete/"))?;
        debug!(%url, "deleting interview record");

        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(%status, "backend returned error status");
    Err(ApiError::Status {
        status,
        body: body.chars().take(200).collect(),
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record_json(id: i64, genre: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "submit_time": "2026-02-01T10:00:00Z",
            "genre_name": genre,
            "question": "Q",
            "user_answer": "A",
            "rating": 7,
            "feedback": "F"
        })
    }

    #[tokio::test]
    async fn fetch_records_decodes_list() {
        let server = MockServer::start().await;
        let body = serde_json::json!([
            record_json(1, "Web development"),
            record_json(2, "Operating systems"),
        ]);

        Mock::given(method("GET"))
            .and(path("/profile/sam@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client should build");
        let records = client
            .fetch_records("sam@example.com")
            .await
            .expect("fetch should succeed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].genre_name, "Operating systems");
    }

    #[tokio::test]
    async fn fetch_records_surfaces_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/sam@example.com"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client should build");
        let err = client
            .fetch_records("sam@example.com")
            .await
            .expect_err("fetch should fail");

        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn delete_record_hits_expected_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/report/42/delete/"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client should build");
        client.delete_record(42).await.expect("delete should succeed");
    }

    #[tokio::test]
    async fn delete_record_reports_missing_report() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/report/7/delete/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client should build");
        assert!(client.delete_record(7).await.is_err());
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/my_app/api").expect("client");
        assert_eq!(client.base_url.as_str(), "http://localhost:8000/my_app/api/");
    }
}

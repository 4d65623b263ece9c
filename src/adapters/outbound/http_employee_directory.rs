//! HTTP Employee Directory
//!
//! Implements EmployeeDirectory against the upstream employee REST API.
//! The upstream wraps every payload in a `{"data": ..., "status": ...}`
//! envelope and uses prefixed field names for employee records.

use crate::domain::entities::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
use crate::domain::errors::UpstreamError;
use crate::domain::ports::EmployeeDirectory;
use crate::domain::value_objects::EmployeeId;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use uuid::Uuid;

/// Longest upstream error body carried into an error, in bytes.
const MAX_ERROR_BODY: usize = 256;

/// Response envelope used by every upstream endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    status: Option<String>,
}

/// Employee record as it appears on the wire.
#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    id: Uuid,
    employee_name: String,
    employee_salary: u64,
    employee_age: u32,
    employee_title: String,
    #[serde(default)]
    employee_email: Option<String>,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: EmployeeId::new(record.id),
            name: record.employee_name,
            salary: record.employee_salary,
            age: record.employee_age,
            title: record.employee_title,
            email: record.employee_email,
        }
    }
}

/// Configuration for the upstream connection.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Employee collection URL (e.g., "http://localhost:8112/api/v1/employee")
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8112/api/v1/employee".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Upstream-backed employee directory.
///
/// Holds no data of its own. Each call is one HTTP request.
pub struct HttpEmployeeDirectory {
    config: UpstreamConfig,
    client: reqwest::Client,
}

impl HttpEmployeeDirectory {
    /// Create a directory for the given upstream.
    pub fn new(config: UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn collection_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn item_url(&self, id: &EmployeeId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Reject non-success responses, keeping the head of the body for diagnostics.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(UpstreamError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("upstream returned {}: {}", status.as_u16(), body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }
        Ok(response)
    }

    /// Decode the envelope and unwrap its `data` field.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UpstreamError> {
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        if let Some(status) = &envelope.status {
            tracing::debug!("upstream status: {}", status);
        }

        envelope
            .data
            .ok_or_else(|| UpstreamError::Decode("response has no data".to_string()))
    }
}

/// Cut `body` to at most `MAX_ERROR_BODY` bytes on a char boundary.
fn truncate_body(mut body: String) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body.truncate(end);
    body.push_str("...");
    body
}

fn transport(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Transport(format!("timed out: {}", e))
    } else {
        UpstreamError::Transport(e.to_string())
    }
}

#[async_trait]
impl EmployeeDirectory for HttpEmployeeDirectory {
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(transport)?;
        let response = Self::check_status(response).await?;
        let records: Vec<EmployeeRecord> = Self::decode(response).await?;

        Ok(records.into_iter().map(Employee::from).collect())
    }

    async fn fetch_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, UpstreamError> {
        let url = self.item_url(id);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(response).await?;
        let record: EmployeeRecord = Self::decode(response).await?;

        Ok(Some(record.into()))
    }

    async fn create(&self, request: &CreateEmployeeRequest) -> Result<Employee, UpstreamError> {
        let url = self.collection_url();
        tracing::debug!("POST {} name={}", url, request.name);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check_status(response).await?;
        let record: EmployeeRecord = Self::decode(response).await?;

        Ok(record.into())
    }

    async fn delete_by_name(&self, request: &DeleteEmployeeRequest) -> Result<bool, UpstreamError> {
        let url = self.collection_url();
        tracing::debug!("DELETE {} name={}", url, request.name);

        let response = self
            .client
            .delete(url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check_status(response).await?;

        // Any 2xx deletes. Only an explicit `data: false` reports a miss.
        let body = response.text().await.map_err(transport)?;
        if body.trim().is_empty() {
            return Ok(true);
        }
        let envelope: Envelope<bool> =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(envelope.data.unwrap_or(true))
    }
}

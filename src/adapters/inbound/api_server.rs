//! Employee API Server
//!
//! HTTP facade over the upstream employee service.
//! Every route delegates to EmployeeService; this module only maps
//! requests, responses and errors.

use crate::application::EmployeeService;
use crate::domain::entities::{CreateEmployeeRequest, Employee};
use crate::domain::errors::{EmployeeError, UpstreamError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl EmployeeError {
    /// HTTP status reported to callers for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(UpstreamError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<EmployeeService>,
}

impl ApiState {
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }
}

/// Build the employee router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health_handler))
        // Collection: list and create
        .route("/employees", get(list_handler).post(create_handler))
        // Name search
        .route("/employees/search/:fragment", get(search_handler))
        // Aggregates; static segments win over the :id route below
        .route("/employees/highestSalary", get(highest_salary_handler))
        .route(
            "/employees/topTenHighestEarningEmployeeNames",
            get(top_ten_handler),
        )
        // Single employee
        .route(
            "/employees/:id",
            get(get_employee_handler).delete(delete_employee_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API Server for the employee facade.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, service: Arc<EmployeeService>) -> Self {
        Self {
            listen_addr,
            state: ApiState::new(service),
        }
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are drained before returning.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("employee API listening on {}", addr);

        axum::serve(listener, router(self.state.clone()))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("employee API on {} stopped", addr);
        Ok(())
    }
}

// Handler functions

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn list_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Employee>>, EmployeeError> {
    state.service.list_all().await.map(Json)
}

async fn search_handler(
    State(state): State<ApiState>,
    Path(fragment): Path<String>,
) -> Result<Json<Vec<Employee>>, EmployeeError> {
    state.service.search_by_name(&fragment).await.map(Json)
}

async fn get_employee_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, EmployeeError> {
    state.service.get_by_id(&id).await.map(Json)
}

async fn highest_salary_handler(
    State(state): State<ApiState>,
) -> Result<Json<u64>, EmployeeError> {
    state.service.highest_salary().await.map(Json)
}

async fn top_ten_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<String>>, EmployeeError> {
    state.service.top_ten_names().await.map(Json)
}

async fn create_handler(
    State(state): State<ApiState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<Employee>, EmployeeError> {
    state.service.create(req).await.map(Json)
}

async fn delete_employee_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<String, EmployeeError> {
    state.service.delete_by_id(&id).await
}

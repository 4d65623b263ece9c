//! Employee Directory Port
//!
//! Defines the interface to the upstream system of record for employees.
//! Implementations may call the upstream REST API or serve fixtures in tests.

use crate::domain::entities::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
use crate::domain::errors::UpstreamError;
use crate::domain::value_objects::EmployeeId;
use async_trait::async_trait;

/// Access to the upstream employee service.
///
/// This is an outbound port: the application layer calls it without knowing
/// the transport. Every call goes to the upstream; nothing is cached.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Fetch the full employee collection.
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError>;

    /// Fetch a single employee. Ok(None) when the upstream has no such record.
    async fn fetch_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, UpstreamError>;

    /// Create an employee and return the record the upstream generated.
    async fn create(&self, request: &CreateEmployeeRequest) -> Result<Employee, UpstreamError>;

    /// Delete an employee by name.
    ///
    /// Returns whether the upstream reported a record as deleted.
    async fn delete_by_name(&self, request: &DeleteEmployeeRequest) -> Result<bool, UpstreamError>;
}

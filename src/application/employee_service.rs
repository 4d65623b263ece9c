//! Employee Service - Main application use case
//!
//! Orchestrates each request: one fresh round trip to the upstream directory,
//! then the aggregation step. This is the primary interface for the inbound adapter.

use crate::domain::entities::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
use crate::domain::errors::EmployeeError;
use crate::domain::ports::EmployeeDirectory;
use crate::domain::services::EmployeeAggregator;
use crate::domain::value_objects::EmployeeId;
use std::sync::Arc;

/// Number of names returned by the top earners ranking.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employee service - main application use case.
///
/// Stateless apart from the directory handle: every call fetches a new
/// snapshot from upstream, so concurrent requests never share data.
pub struct EmployeeService {
    directory: Arc<dyn EmployeeDirectory>,
}

impl EmployeeService {
    /// Create a new employee service.
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    /// All employees known to the upstream.
    pub async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        match self.directory.fetch_all().await {
            Ok(employees) => {
                tracing::info!("fetched {} employees", employees.len());
                Ok(employees)
            }
            Err(e) => {
                tracing::error!("failed to fetch employees: {}", e);
                Err(e.into())
            }
        }
    }

    /// Employees whose name contains `fragment`, ignoring case.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.list_all().await?;
        let matches = EmployeeAggregator::search_by_name(&employees, fragment);
        tracing::debug!("search '{}' matched {} employees", fragment, matches.len());
        Ok(matches)
    }

    /// Look up a single employee.
    ///
    /// An id that is not a UUID cannot exist upstream and is reported as
    /// not found without calling it.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, EmployeeError> {
        let employee_id =
            EmployeeId::parse(id).ok_or_else(|| EmployeeError::NotFound(id.to_string()))?;

        match self.directory.fetch_by_id(&employee_id).await {
            Ok(Some(employee)) => {
                tracing::info!("fetched employee {}", employee_id);
                Ok(employee)
            }
            Ok(None) => {
                tracing::warn!("employee {} not found", employee_id);
                Err(EmployeeError::NotFound(id.to_string()))
            }
            Err(e) => {
                tracing::error!("failed to fetch employee {}: {}", employee_id, e);
                Err(e.into())
            }
        }
    }

    /// Highest salary across all employees, 0 when there are none.
    pub async fn highest_salary(&self) -> Result<u64, EmployeeError> {
        let employees = self.list_all().await?;
        Ok(EmployeeAggregator::max_salary(&employees))
    }

    /// Names of the ten highest earners, best paid first.
    pub async fn top_ten_names(&self) -> Result<Vec<String>, EmployeeError> {
        let employees = self.list_all().await?;
        Ok(EmployeeAggregator::top_n_names(&employees, TOP_EARNERS_LIMIT))
    }

    /// Validate and forward a creation request.
    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, EmployeeError> {
        if let Err(reason) = request.validate() {
            tracing::warn!("rejected create request: {}", reason);
            return Err(EmployeeError::Validation(reason));
        }

        match self.directory.create(&request).await {
            Ok(employee) => {
                tracing::info!("created employee {} ({})", employee.id, employee.name);
                Ok(employee)
            }
            Err(e) => {
                tracing::error!("failed to create employee: {}", e);
                Err(e.into())
            }
        }
    }

    /// Delete the employee with the given id.
    ///
    /// The upstream deletes by name, so the id is first resolved against a
    /// fresh snapshot:
    /// 1. Fetch all employees
    /// 2. Resolve id -> name, failing with NotFound before any delete
    /// 3. Delete by name upstream
    ///
    /// Returns the id as supplied by the caller.
    pub async fn delete_by_id(&self, id: &str) -> Result<String, EmployeeError> {
        let employees = self.list_all().await?;

        let employee = match EmployeeAggregator::find_by_id(&employees, id) {
            Some(employee) => employee,
            None => {
                tracing::warn!("cannot delete {}: no such employee", id);
                return Err(EmployeeError::NotFound(id.to_string()));
            }
        };

        let request = DeleteEmployeeRequest::for_employee(&employee);
        match self.directory.delete_by_name(&request).await {
            Ok(true) => {
                tracing::info!("deleted employee {} ({})", id, employee.name);
                Ok(id.to_string())
            }
            Ok(false) => {
                tracing::warn!("upstream deleted nothing for {} ({})", id, employee.name);
                Err(EmployeeError::NotFound(id.to_string()))
            }
            Err(e) => {
                tracing::error!("failed to delete employee {}: {}", id, e);
                Err(e.into())
            }
        }
    }
}

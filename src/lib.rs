//! Employee API Library
//!
//! This module exposes the employee facade components for use in integration
//! tests and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::ApiServer;
pub use adapters::outbound::{HttpEmployeeDirectory, UpstreamConfig};
pub use application::EmployeeService;
pub use config::load_config;
pub use domain::entities::{CreateEmployeeRequest, Employee};
pub use domain::errors::{EmployeeError, UpstreamError};
pub use domain::ports::EmployeeDirectory;
pub use domain::services::EmployeeAggregator;
pub use domain::value_objects::EmployeeId;

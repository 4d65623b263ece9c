//! Domain Layer
//!
//! Employee entities, the upstream port and the pure aggregation logic.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
pub use errors::{EmployeeError, UpstreamError};
pub use value_objects::EmployeeId;

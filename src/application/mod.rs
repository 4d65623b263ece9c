//! Application Layer
//!
//! Use cases that orchestrate the domain and the outbound ports.

mod employee_service;

pub use employee_service::{EmployeeService, TOP_EARNERS_LIMIT};

//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the employee domain.
//! They carry no transport details; wire formats live in the adapters.

use crate::domain::value_objects::EmployeeId;
use serde::{Deserialize, Serialize};

/// Upper bound for numeric request fields; the upstream stores them as 32-bit ints.
pub const MAX_NUMERIC_FIELD: i64 = i32::MAX as i64;

/// An employee record owned by the upstream service.
///
/// Read model only: this service never mutates or persists employees.
/// A fresh copy is fetched for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier generated by the upstream service
    pub id: EmployeeId,
    /// Display name, used for search
    pub name: String,
    /// Annual salary
    pub salary: u64,
    pub age: u32,
    pub title: String,
    /// Contact email, absent for some records
    #[serde(default)]
    pub email: Option<String>,
}

/// Caller-supplied data for a new employee.
///
/// Passed through to the upstream unchanged once validated. Numeric fields are
/// signed so that out-of-range input reaches validation instead of failing
/// deserialization with an opaque message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: i64,
    pub age: i64,
    pub title: String,
}

impl CreateEmployeeRequest {
    pub fn new(name: impl Into<String>, salary: i64, age: i64, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary,
            age,
            title: title.into(),
        }
    }

    /// Check the request before it is forwarded upstream.
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be blank".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("title must not be blank".to_string());
        }
        if self.salary < 0 {
            return Err(format!("salary must not be negative, got {}", self.salary));
        }
        if self.salary > MAX_NUMERIC_FIELD {
            return Err(format!(
                "salary must not exceed {}, got {}",
                MAX_NUMERIC_FIELD, self.salary
            ));
        }
        if self.age < 1 {
            return Err(format!("age must be positive, got {}", self.age));
        }
        if self.age > MAX_NUMERIC_FIELD {
            return Err(format!(
                "age must not exceed {}, got {}",
                MAX_NUMERIC_FIELD, self.age
            ));
        }
        Ok(())
    }
}

/// Upstream deletion request. The upstream keys deletes on name, not id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}

impl DeleteEmployeeRequest {
    /// Build a deletion request for a resolved employee.
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str) -> Employee {
        Employee {
            id: EmployeeId::parse("0f7f4a1e-2c7b-4d4c-9f0e-3a2b1c0d9e8f").unwrap(),
            name: name.to_string(),
            salary: 75000,
            age: 27,
            title: "Chief Associate".to_string(),
            email: None,
        }
    }

    // ===== Employee Tests =====

    #[test]
    fn test_employee_serializes_plain_field_names() {
        let json = serde_json::to_value(employee("Ryan")).unwrap();

        assert_eq!(json["id"], "0f7f4a1e-2c7b-4d4c-9f0e-3a2b1c0d9e8f");
        assert_eq!(json["name"], "Ryan");
        assert_eq!(json["salary"], 75000);
        assert_eq!(json["age"], 27);
        assert_eq!(json["title"], "Chief Associate");
        assert!(json["email"].is_null());
    }

    #[test]
    fn test_employee_email_defaults_when_missing() {
        let json = serde_json::json!({
            "id": "0f7f4a1e-2c7b-4d4c-9f0e-3a2b1c0d9e8f",
            "name": "Ryan",
            "salary": 75000,
            "age": 27,
            "title": "Chief Associate"
        });

        let parsed: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, employee("Ryan"));
    }

    // ===== CreateEmployeeRequest Tests =====

    #[test]
    fn test_validate_accepts_valid_request() {
        let req = CreateEmployeeRequest::new("Ryan", 75000, 27, "Chief Associate");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_salary() {
        let req = CreateEmployeeRequest::new("Intern", 0, 19, "Intern");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let req = CreateEmployeeRequest::new("   ", 75000, 27, "Chief Associate");
        let err = req.validate().unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let req = CreateEmployeeRequest::new("Ryan", 75000, 27, "");
        let err = req.validate().unwrap_err();
        assert!(err.contains("title"));
    }

    #[test]
    fn test_validate_rejects_negative_salary() {
        let req = CreateEmployeeRequest::new("Ryan", -1, 27, "Chief Associate");
        let err = req.validate().unwrap_err();
        assert!(err.contains("salary"));
        assert!(err.contains("-1"));
    }

    #[test]
    fn test_validate_rejects_non_positive_age() {
        for age in [0, -5] {
            let req = CreateEmployeeRequest::new("Ryan", 75000, age, "Chief Associate");
            let err = req.validate().unwrap_err();
            assert!(err.contains("age"), "Failed for age: {}", age);
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_numbers() {
        let req = CreateEmployeeRequest::new("Ryan", 75000, 5_000_000_000, "Chief Associate");
        assert!(req.validate().unwrap_err().contains("age"));

        let req = CreateEmployeeRequest::new("Ryan", MAX_NUMERIC_FIELD + 1, 27, "Chief Associate");
        assert!(req.validate().unwrap_err().contains("salary"));
    }

    #[test]
    fn test_validate_accepts_upper_bounds() {
        let req = CreateEmployeeRequest::new(
            "Ryan",
            MAX_NUMERIC_FIELD,
            MAX_NUMERIC_FIELD,
            "Chief Associate",
        );
        assert!(req.validate().is_ok());
    }

    // ===== DeleteEmployeeRequest Tests =====

    #[test]
    fn test_delete_request_uses_name() {
        let req = DeleteEmployeeRequest::for_employee(&employee("Julio"));
        assert_eq!(req.name, "Julio");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Julio" }));
    }
}

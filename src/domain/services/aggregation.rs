//! Employee Aggregation Service
//!
//! Pure domain logic applied to an employee snapshot fetched from upstream.
//! This service has NO external dependencies - it's pure Rust.

use crate::domain::entities::Employee;
use crate::domain::value_objects::EmployeeId;

/// Query and ranking operations over an employee collection.
///
/// All functions are deterministic and never mutate their input.
/// Output order follows input order unless a ranking is requested.
pub struct EmployeeAggregator;

impl EmployeeAggregator {
    /// Employees whose name contains `fragment`, ignoring case.
    ///
    /// An empty fragment matches everyone. Input order is preserved.
    pub fn search_by_name(employees: &[Employee], fragment: &str) -> Vec<Employee> {
        let needle = fragment.to_lowercase();
        employees
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Highest salary in the collection, or 0 when it is empty.
    pub fn max_salary(employees: &[Employee]) -> u64 {
        employees.iter().map(|e| e.salary).max().unwrap_or(0)
    }

    /// Names of the `n` highest earners, best paid first.
    ///
    /// Ties keep their input order. Returns everyone when fewer than `n`
    /// employees exist.
    ///
    /// # Example
    /// ```ignore
    /// let names = EmployeeAggregator::top_n_names(&employees, 10);
    /// ```
    pub fn top_n_names(employees: &[Employee], n: usize) -> Vec<String> {
        let mut ranked: Vec<&Employee> = employees.iter().collect();
        // sort_by is stable, which gives the tie-break on input order
        ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
        ranked.into_iter().take(n).map(|e| e.name.clone()).collect()
    }

    /// First employee whose id matches `id` after normalization.
    ///
    /// Text that is not a UUID matches nobody.
    pub fn find_by_id(employees: &[Employee], id: &str) -> Option<Employee> {
        let wanted = EmployeeId::parse(id)?;
        employees.iter().find(|e| e.id == wanted).cloned()
    }
}

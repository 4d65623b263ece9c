mod aggregation;

pub use aggregation::EmployeeAggregator;

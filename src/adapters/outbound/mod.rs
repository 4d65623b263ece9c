mod http_employee_directory;

pub use http_employee_directory::{HttpEmployeeDirectory, UpstreamConfig};

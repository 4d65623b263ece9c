mod employee_directory;

pub use employee_directory::EmployeeDirectory;

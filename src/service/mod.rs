pub mod employee_service;
pub mod leave_service;
pub mod query;
pub mod validator;

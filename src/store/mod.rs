pub mod employee_store;
pub mod leave_store;

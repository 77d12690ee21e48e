use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::store::employee_store::EmployeeStore;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub employee_name: String,
    pub leave_balance: i64,
}

/// Onboarding and balance lookup. Everything else about employees lives
/// outside this service; leave approval is the only other balance writer.
pub struct EmployeeService {
    employees: Arc<EmployeeStore>,
}

impl EmployeeService {
    pub fn new(employees: Arc<EmployeeStore>) -> Self {
        Self { employees }
    }

    pub fn add_employee(
        &self,
        name: String,
        email: String,
        department: String,
        joining_date: NaiveDate,
    ) -> Employee {
        let employee = self.employees.insert(name, email, department, joining_date);
        info!(employee_id = employee.id, "employee created");
        employee
    }

    pub fn get_leave_balance(&self, employee_id: u64) -> Result<LeaveBalance, ApiError> {
        let employee = self.employees.get(employee_id).ok_or(ApiError::NotFound("Employee"))?;
        Ok(LeaveBalance {
            employee_name: employee.name,
            leave_balance: employee.leave_balance,
        })
    }
}

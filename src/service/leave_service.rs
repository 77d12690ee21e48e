use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::service::validator;
use crate::store::employee_store::EmployeeStore;
use crate::store::leave_store::LeaveStore;

/// Drives the leave request lifecycle: apply, approve, reject.
///
/// Balance is the one contended resource. Approval holds a per-employee lock
/// across its read-check-deduct-write sequence so concurrent approvals for the
/// same employee serialize; both writes (employee, request) land inside the
/// same critical section. Different employees never contend.
pub struct LeaveService {
    employees: Arc<EmployeeStore>,
    leaves: Arc<LeaveStore>,
    balance_locks: DashMap<u64, Arc<Mutex<()>>>,
}

impl LeaveService {
    pub fn new(employees: Arc<EmployeeStore>, leaves: Arc<LeaveStore>) -> Self {
        Self {
            employees,
            leaves,
            balance_locks: DashMap::new(),
        }
    }

    fn balance_lock(&self, employee_id: u64) -> Arc<Mutex<()>> {
        self.balance_locks.entry(employee_id).or_default().value().clone()
    }

    fn lock_guard(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
        // The lock guards no data of its own, so a poisoned guard is still usable.
        lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Validates and persists a new request as Pending. Balance is checked
    /// here but only deducted at approval time, so several pending requests
    /// can together promise more days than the balance holds.
    pub fn apply_leave(
        &self,
        employee_id: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<LeaveRequest, ApiError> {
        let employee = self.employees.get(employee_id).ok_or(ApiError::NotFound("Employee"))?;
        let approved = self.leaves.find_by_employee(employee_id, Some(LeaveStatus::Approved));

        let days = validator::validate(&employee, start_date, end_date, &approved)?;

        let request = self.leaves.insert(employee_id, start_date, end_date);
        info!(leave_id = request.id, employee_id, days, "leave request submitted");
        Ok(request)
    }

    /// Transitions a request to Approved and deducts its days from the
    /// employee's balance. The balance check is repeated here because other
    /// approvals may have drained it since apply time; overlap is not
    /// re-checked (see DESIGN.md).
    pub fn approve_leave(&self, leave_id: u64) -> Result<LeaveRequest, ApiError> {
        let request = self.leaves.get(leave_id).ok_or(ApiError::NotFound("Leave request"))?;

        let lock = self.balance_lock(request.employee_id);
        let _guard = Self::lock_guard(&lock);

        // Re-read both records under the lock; earlier reads may be stale.
        let mut request = self.leaves.get(leave_id).ok_or(ApiError::NotFound("Leave request"))?;
        let mut employee = self
            .employees
            .get(request.employee_id)
            .ok_or(ApiError::NotFound("Employee"))?;

        let days = request.days();
        if days > employee.leave_balance {
            warn!(
                leave_id,
                employee_id = employee.id,
                days,
                balance = employee.leave_balance,
                "approval denied, balance exhausted since apply time"
            );
            return Err(ApiError::InsufficientBalance {
                requested: days,
                available: employee.leave_balance,
            });
        }

        employee.leave_balance -= days;
        self.employees.save(employee.clone());
        request.status = LeaveStatus::Approved;
        self.leaves.save(request.clone());

        info!(
            leave_id,
            employee_id = employee.id,
            days,
            balance = employee.leave_balance,
            "leave approved"
        );
        Ok(request)
    }

    /// Marks a request Rejected. No deduction ever happened for it, so there
    /// is nothing to restore. The transition is deliberately unguarded: an
    /// already-Approved or already-Rejected request is overwritten too,
    /// matching the documented behavior of the system this replaces.
    pub fn reject_leave(&self, leave_id: u64) -> Result<LeaveRequest, ApiError> {
        let mut request = self.leaves.get(leave_id).ok_or(ApiError::NotFound("Leave request"))?;
        request.status = LeaveStatus::Rejected;
        self.leaves.save(request.clone());
        debug!(leave_id, employee_id = request.employee_id, "leave rejected");
        Ok(request)
    }
}

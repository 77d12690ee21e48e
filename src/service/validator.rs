use chrono::NaiveDate;

use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::model::leave_request::LeaveRequest;

/// Inclusive length of a date range, counting both endpoints.
/// 2024-01-01..2024-01-05 is 5 days.
pub fn leave_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Validates a candidate leave request against the employee and their
/// already-approved leaves. Checks run in order and stop at the first
/// violation. Returns the inclusive day count on success. No side effects.
pub fn validate(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    approved: &[LeaveRequest],
) -> Result<i64, ApiError> {
    if start < employee.joining_date {
        return Err(ApiError::InvalidDateRange("Cannot apply leave before joining date"));
    }
    if end < start {
        return Err(ApiError::InvalidDateRange("End date cannot be before start date"));
    }

    let days = leave_days(start, end);
    if days > employee.leave_balance {
        return Err(ApiError::InsufficientBalance {
            requested: days,
            available: employee.leave_balance,
        });
    }

    // Two inclusive ranges overlap unless one lies strictly before the other.
    for r in approved {
        if !(end < r.start_date || start > r.end_date) {
            return Err(ApiError::OverlappingRequest);
        }
    }

    Ok(days)
}

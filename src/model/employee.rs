use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee record as stored. `leave_balance` is the single source of truth
/// for remaining entitlement; it is never derived from request history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub joining_date: NaiveDate,
    /// Remaining entitlement in whole days, always >= 0.
    pub leave_balance: i64,
}

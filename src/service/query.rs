use std::sync::Arc;

use crate::model::leave_request::LeaveRequest;
use crate::store::leave_store::LeaveStore;

/// Read-only listing of leave requests. No validation, no side effects.
pub struct LeaveQueryService {
    leaves: Arc<LeaveStore>,
}

impl LeaveQueryService {
    pub fn new(leaves: Arc<LeaveStore>) -> Self {
        Self { leaves }
    }

    pub fn get_all_leaves(&self) -> Vec<LeaveRequest> {
        self.leaves.all()
    }

    pub fn get_leaves_by_employee(&self, employee_id: u64) -> Vec<LeaveRequest> {
        self.leaves.find_by_employee(employee_id, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn filtered_listing_returns_exactly_the_matching_requests() {
        let leaves = Arc::new(LeaveStore::new());
        leaves.insert(1, date(2024, 1, 1), date(2024, 1, 2));
        leaves.insert(2, date(2024, 1, 3), date(2024, 1, 4));
        leaves.insert(1, date(2024, 2, 1), date(2024, 2, 2));

        let svc = LeaveQueryService::new(leaves);
        assert_eq!(svc.get_all_leaves().len(), 3);

        let mine = svc.get_leaves_by_employee(1);
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.employee_id == 1));
        assert!(svc.get_leaves_by_employee(9).is_empty());
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, Utc};
use dashmap::DashMap;

use crate::model::leave_request::{LeaveRequest, LeaveStatus};

/// In-memory leave request store. Listing methods sort by id, so iteration
/// order is insertion order.
#[derive(Default)]
pub struct LeaveStore {
    next_id: AtomicU64,
    requests: DashMap<u64, LeaveRequest>,
}

impl LeaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists a new request as Pending, stamped with today's date.
    pub fn insert(&self, employee_id: u64, start_date: NaiveDate, end_date: NaiveDate) -> LeaveRequest {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let request = LeaveRequest {
            id,
            employee_id,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            applied_on: Utc::now().date_naive(),
        };
        self.requests.insert(id, request.clone());
        request
    }

    pub fn get(&self, id: u64) -> Option<LeaveRequest> {
        self.requests.get(&id).map(|r| r.value().clone())
    }

    /// Overwrites the stored record for `request.id`.
    pub fn save(&self, request: LeaveRequest) {
        self.requests.insert(request.id, request);
    }

    pub fn all(&self) -> Vec<LeaveRequest> {
        let mut out: Vec<LeaveRequest> = self.requests.iter().map(|r| r.value().clone()).collect();
        out.sort_by_key(|r| r.id);
        out
    }

    pub fn find_by_employee(&self, employee_id: u64, status: Option<LeaveStatus>) -> Vec<LeaveRequest> {
        let mut out: Vec<LeaveRequest> = self
            .requests
            .iter()
            .filter(|r| r.value().employee_id == employee_id)
            .filter(|r| status.map_or(true, |s| r.value().status == s))
            .map(|r| r.value().clone())
            .collect();
        out.sort_by_key(|r| r.id);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inserted_requests_start_pending_with_todays_stamp() {
        let store = LeaveStore::new();
        let r = store.insert(7, date(2024, 3, 1), date(2024, 3, 5));
        assert_eq!(r.id, 1);
        assert_eq!(r.status, LeaveStatus::Pending);
        assert_eq!(r.applied_on, Utc::now().date_naive());
    }

    #[test]
    fn find_by_employee_filters_on_id_and_status() {
        let store = LeaveStore::new();
        let a = store.insert(1, date(2024, 3, 1), date(2024, 3, 2));
        store.insert(2, date(2024, 3, 1), date(2024, 3, 2));
        let b = store.insert(1, date(2024, 4, 1), date(2024, 4, 2));

        let mut approved = store.get(b.id).unwrap();
        approved.status = LeaveStatus::Approved;
        store.save(approved);

        let mine = store.find_by_employee(1, None);
        assert_eq!(mine.iter().map(|r| r.id).collect::<Vec<_>>(), vec![a.id, b.id]);

        let mine_approved = store.find_by_employee(1, Some(LeaveStatus::Approved));
        assert_eq!(mine_approved.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b.id]);
    }

    #[test]
    fn all_returns_everything_in_insertion_order() {
        let store = LeaveStore::new();
        for emp in [3, 1, 2] {
            store.insert(emp, date(2024, 5, 1), date(2024, 5, 1));
        }
        let all = store.all();
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}

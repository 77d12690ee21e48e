use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use dashmap::DashMap;

use crate::model::employee::Employee;

/// Default entitlement granted to every new employee, in days.
pub const DEFAULT_LEAVE_BALANCE: i64 = 20;

/// In-memory employee store. Ids are assigned here, monotonically from 1.
#[derive(Default)]
pub struct EmployeeStore {
    next_id: AtomicU64,
    employees: DashMap<u64, Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists a new employee. The balance is always the default; any value
    /// supplied by the caller is ignored.
    pub fn insert(
        &self,
        name: String,
        email: String,
        department: String,
        joining_date: NaiveDate,
    ) -> Employee {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let employee = Employee {
            id,
            name,
            email,
            department,
            joining_date,
            leave_balance: DEFAULT_LEAVE_BALANCE,
        };
        self.employees.insert(id, employee.clone());
        employee
    }

    pub fn get(&self, id: u64) -> Option<Employee> {
        self.employees.get(&id).map(|e| e.value().clone())
    }

    /// Overwrites the stored record for `employee.id`.
    pub fn save(&self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ids_are_assigned_sequentially() {
        let store = EmployeeStore::new();
        let a = store.insert("A".into(), "a@x.com".into(), "Eng".into(), date(2023, 1, 1));
        let b = store.insert("B".into(), "b@x.com".into(), "Eng".into(), date(2023, 1, 1));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn new_employees_get_the_default_balance() {
        let store = EmployeeStore::new();
        let e = store.insert("A".into(), "a@x.com".into(), "HR".into(), date(2023, 1, 1));
        assert_eq!(e.leave_balance, DEFAULT_LEAVE_BALANCE);
        assert_eq!(store.get(e.id).unwrap().leave_balance, DEFAULT_LEAVE_BALANCE);
    }

    #[test]
    fn save_overwrites_and_get_misses_return_none() {
        let store = EmployeeStore::new();
        let mut e = store.insert("A".into(), "a@x.com".into(), "HR".into(), date(2023, 1, 1));
        e.leave_balance = 15;
        store.save(e.clone());
        assert_eq!(store.get(e.id).unwrap().leave_balance, 15);
        assert!(store.get(999).is_none());
    }
}

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

use std::sync::Arc;

use actix_web::web::Data;

use service::employee_service::EmployeeService;
use service::leave_service::LeaveService;
use service::query::LeaveQueryService;
use store::employee_store::EmployeeStore;
use store::leave_store::LeaveStore;

/// Service graph shared across workers. Stores are wired into the services
/// here; nothing else constructs them.
#[derive(Clone)]
pub struct AppState {
    pub leave_service: Data<LeaveService>,
    pub query_service: Data<LeaveQueryService>,
    pub employee_service: Data<EmployeeService>,
}

impl AppState {
    pub fn build() -> Self {
        let employees = Arc::new(EmployeeStore::new());
        let leaves = Arc::new(LeaveStore::new());

        Self {
            leave_service: Data::new(LeaveService::new(employees.clone(), leaves.clone())),
            query_service: Data::new(LeaveQueryService::new(leaves)),
            employee_service: Data::new(EmployeeService::new(employees)),
        }
    }
}

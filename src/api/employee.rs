use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ApiError;
use crate::service::employee_service::EmployeeService;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub joining_date: NaiveDate,
    /// Accepted on the wire but ignored; the store always grants the default.
    #[serde(default)]
    pub leave_balance: Option<i64>,
}

/* =========================
Create employee
========================= */
pub async fn create_employee(
    svc: web::Data<EmployeeService>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let employee =
        svc.add_employee(payload.name, payload.email, payload.department, payload.joining_date);
    Ok(HttpResponse::Ok().json(employee))
}

/* =========================
Get leave balance
========================= */
pub async fn get_leave_balance(
    svc: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let balance = svc.get_leave_balance(path.into_inner())?;
    Ok(HttpResponse::Ok().json(balance))
}

use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::service::leave_service::LeaveService;
use crate::service::query::LeaveQueryService;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeave {
    pub employee_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveId {
    pub leave_id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveFilter {
    /// Filter by employee ID
    pub employee_id: Option<u64>,
}

/* =========================
Apply for leave
========================= */
pub async fn apply_leave(
    svc: web::Data<LeaveService>,
    payload: web::Json<ApplyLeave>,
) -> Result<HttpResponse, ApiError> {
    let request = svc.apply_leave(payload.employee_id, payload.start_date, payload.end_date)?;
    Ok(HttpResponse::Ok().json(request))
}

/* =========================
Approve leave
========================= */
pub async fn approve_leave(
    svc: web::Data<LeaveService>,
    query: web::Query<LeaveId>,
) -> Result<HttpResponse, ApiError> {
    let request = svc.approve_leave(query.leave_id)?;
    Ok(HttpResponse::Ok().json(request))
}

/* =========================
Reject leave
========================= */
pub async fn reject_leave(
    svc: web::Data<LeaveService>,
    query: web::Query<LeaveId>,
) -> Result<HttpResponse, ApiError> {
    let request = svc.reject_leave(query.leave_id)?;
    Ok(HttpResponse::Ok().json(request))
}

/* =========================
List leaves, optionally by employee
========================= */
pub async fn leave_list(
    svc: web::Data<LeaveQueryService>,
    query: web::Query<LeaveFilter>,
) -> Result<HttpResponse, ApiError> {
    let leaves = match query.employee_id {
        Some(employee_id) => {
            debug!(employee_id, "listing leaves for one employee");
            svc.get_leaves_by_employee(employee_id)
        }
        None => svc.get_all_leaves(),
    };
    Ok(HttpResponse::Ok().json(leaves))
}

use actix_web::{get, post, put, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

use engine::store::approvals::Approvals;
use engine::store::staff::StaffStore;

use crate::types::expense_types::ExpenseBody;
use crate::types::proposal_types::{ApproveBody, RejectBody};
use crate::utils::jwt::resolve_reviewer;
use crate::utils::responses::engine_error_response;
use crate::utils::stages::{parse_stage_role, parse_stage_selection};

#[get("/occurrences/{occurrence_id}/expense")]
pub async fn get_expense(approvals: web::Data<Approvals>, path: web::Path<u64>) -> impl Responder {
    match approvals.get_expense(path.into_inner()).await {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "expense": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/expense")]
pub async fn create_expense(
    approvals: web::Data<Approvals>,
    path: web::Path<u64>,
    req: web::Json<ExpenseBody>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    match approvals
        .create_expense(path.into_inner(), req.into_inner().into_input())
        .await
    {
        Ok(snapshot) => HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Expense report filed successfully",
            "expense": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[put("/occurrences/{occurrence_id}/expense")]
pub async fn update_expense(
    approvals: web::Data<Approvals>,
    path: web::Path<u64>,
    req: web::Json<ExpenseBody>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    match approvals
        .update_expense(path.into_inner(), req.into_inner().into_input())
        .await
    {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Expense report updated successfully",
            "expense": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/expense/approve")]
pub async fn approve_expense(
    req: HttpRequest,
    approvals: web::Data<Approvals>,
    staff_store: web::Data<StaffStore>,
    path: web::Path<u64>,
    body: web::Json<ApproveBody>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    let reviewer = match resolve_reviewer(&req, &staff_store).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let next_stages = match parse_stage_selection(&body.next_stages) {
        Ok(stages) => stages,
        Err(resp) => return resp,
    };
    let stage_role = match parse_stage_role(body.stage_role.as_deref()) {
        Ok(role) => role,
        Err(resp) => return resp,
    };

    match approvals
        .approve_expense(
            path.into_inner(),
            reviewer,
            body.comments.clone().unwrap_or_default(),
            next_stages,
            stage_role,
        )
        .await
    {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Approval recorded",
            "expense": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/expense/reject")]
pub async fn reject_expense(
    req: HttpRequest,
    approvals: web::Data<Approvals>,
    staff_store: web::Data<StaffStore>,
    path: web::Path<u64>,
    body: web::Json<RejectBody>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    let reviewer = match resolve_reviewer(&req, &staff_store).await {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let stage_role = match parse_stage_role(body.stage_role.as_deref()) {
        Ok(role) => role,
        Err(resp) => return resp,
    };

    match approvals
        .reject_expense(path.into_inner(), reviewer, body.comments.clone(), stage_role)
        .await
    {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Rejection recorded",
            "expense": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

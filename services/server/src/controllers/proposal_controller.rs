use actix_web::{get, post, put, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

use engine::store::approvals::Approvals;
use engine::store::staff::StaffStore;

use crate::types::proposal_types::{ApproveBody, ProposalBody, RejectBody};
use crate::utils::jwt::resolve_reviewer;
use crate::utils::responses::engine_error_response;
use crate::utils::stages::{parse_stage_role, parse_stage_selection};

#[get("/occurrences/{occurrence_id}/proposal")]
pub async fn get_proposal(approvals: web::Data<Approvals>, path: web::Path<u64>) -> impl Responder {
    match approvals.get_proposal(path.into_inner()).await {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "proposal": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/proposal")]
pub async fn create_proposal(
    approvals: web::Data<Approvals>,
    path: web::Path<u64>,
    req: web::Json<ProposalBody>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    match approvals
        .create_proposal(path.into_inner(), req.into_inner().into_input())
        .await
    {
        Ok(snapshot) => HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Proposal created successfully",
            "proposal": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[put("/occurrences/{occurrence_id}/proposal")]
pub async fn update_proposal(
    approvals: web::Data<Approvals>,
    path: web::Path<u64>,
    req: web::Json<ProposalBody>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    match approvals
        .update_proposal(path.into_inner(), req.into_inner().into_input())
        .await
    {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Proposal updated successfully",
            "proposal": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/proposal/submit")]
pub async fn submit_proposal(
    approvals: web::Data<Approvals>,
    path: web::Path<u64>,
) -> impl Responder {
    match approvals.submit_proposal(path.into_inner()).await {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Proposal submitted for approval",
            "proposal": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/proposal/approve")]
pub async fn approve_proposal(
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
        .approve_proposal(
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
            "proposal": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/proposal/reject")]
pub async fn reject_proposal(
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
        .reject_proposal(path.into_inner(), reviewer, body.comments.clone(), stage_role)
        .await
    {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Rejection recorded",
            "proposal": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/occurrences/{occurrence_id}/proposal/request-revision")]
pub async fn request_proposal_revision(
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
        .request_proposal_revision(path.into_inner(), reviewer, body.comments.clone(), stage_role)
        .await
    {
        Ok(snapshot) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Revision requested",
            "proposal": snapshot
        })),
        Err(e) => engine_error_response(e),
    }
}

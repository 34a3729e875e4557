use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use engine::store::approvals::Approvals;
use engine::types::approval_types::SubjectType;

use crate::types::history_types::HistoryQuery;
use crate::utils::responses::engine_error_response;

#[get("/approval-history")]
pub async fn get_approval_history(
    approvals: web::Data<Approvals>,
    query: web::Query<HistoryQuery>,
) -> impl Responder {
    let (subject_type, occurrence_id) = match (
        query.proposal_occurrence_id,
        query.expense_occurrence_id,
    ) {
        (Some(id), None) => (SubjectType::Proposal, id),
        (None, Some(id)) => (SubjectType::Expense, id),
        _ => {
            return HttpResponse::BadRequest().json(json!({
                "status": "error",
                "message": "specify exactly one of proposalOccurrenceId or expenseOccurrenceId"
            }))
        }
    };

    match approvals.approval_history(subject_type, occurrence_id).await {
        Ok(events) => HttpResponse::Ok().json(json!({
            "status": "success",
            "events": events
        })),
        Err(e) => engine_error_response(e),
    }
}

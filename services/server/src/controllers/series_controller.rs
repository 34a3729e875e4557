use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

use engine::store::approvals::Approvals;
use engine::types::series_types::OccurrenceInput;

use crate::types::series_types::{CreateOccurrenceRequest, CreateSeriesRequest};
use crate::utils::responses::engine_error_response;

#[post("/mega-series")]
pub async fn create_series(
    approvals: web::Data<Approvals>,
    req: web::Json<CreateSeriesRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    match approvals
        .create_series(req.name.clone(), req.description.clone())
        .await
    {
        Ok(series) => HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Series created successfully",
            "series": series
        })),
        Err(e) => engine_error_response(e),
    }
}

#[get("/mega-series")]
pub async fn get_all_series(approvals: web::Data<Approvals>) -> impl Responder {
    let series = approvals.list_series().await;
    HttpResponse::Ok().json(json!({
        "status": "success",
        "series": series
    }))
}

#[get("/mega-series/{series_id}")]
pub async fn get_series_by_id(
    approvals: web::Data<Approvals>,
    path: web::Path<u64>,
) -> impl Responder {
    match approvals.get_series(path.into_inner()).await {
        Ok(series) => HttpResponse::Ok().json(json!({
            "status": "success",
            "series": series
        })),
        Err(e) => engine_error_response(e),
    }
}

#[post("/mega-series/{series_id}/occurrences")]
pub async fn create_occurrence(
    approvals: web::Data<Approvals>,
    path: web::Path<u64>,
    req: web::Json<CreateOccurrenceRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    let input = OccurrenceInput {
        title: req.title.clone(),
        scheduled_start_date: req.start_date.clone(),
        scheduled_end_date: req.end_date.clone(),
    };

    match approvals.create_occurrence(path.into_inner(), input).await {
        Ok(occurrence) => HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Occurrence created successfully",
            "occurrence": occurrence
        })),
        Err(e) => engine_error_response(e),
    }
}

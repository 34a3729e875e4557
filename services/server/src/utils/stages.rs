use actix_web::HttpResponse;
use serde_json::json;

use engine::types::approval_types::ApproverRole;

pub fn parse_stage_selection(names: &[String]) -> Result<Vec<ApproverRole>, HttpResponse> {
    let mut roles = Vec::new();
    for name in names {
        match ApproverRole::parse(name) {
            Some(role) => roles.push(role),
            None => {
                return Err(HttpResponse::BadRequest().json(json!({
                    "status": "error",
                    "message": format!("unknown approval stage: {}", name)
                })))
            }
        }
    }
    Ok(roles)
}

pub fn parse_stage_role(name: Option<&str>) -> Result<Option<ApproverRole>, HttpResponse> {
    match name {
        None => Ok(None),
        Some(value) => match ApproverRole::parse(value) {
            Some(role) => Ok(Some(role)),
            None => Err(HttpResponse::BadRequest().json(json!({
                "status": "error",
                "message": format!("unknown approval stage: {}", value)
            }))),
        },
    }
}

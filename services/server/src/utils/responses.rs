use actix_web::HttpResponse;
use serde_json::json;

use engine::types::errors::EngineError;

/// Single place where engine errors become HTTP responses; messages are
/// passed through verbatim for the client to display.
pub fn engine_error_response(err: EngineError) -> HttpResponse {
    let builder = match &err {
        EngineError::Validation(_) => HttpResponse::BadRequest,
        EngineError::Forbidden(_) => HttpResponse::Forbidden,
        EngineError::NotFound(_) => HttpResponse::NotFound,
        EngineError::Conflict(_) => HttpResponse::Conflict,
        EngineError::Internal(_) => HttpResponse::InternalServerError,
    };

    builder().json(json!({
        "status": "error",
        "message": err.to_string()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_error_kind_gets_a_distinct_status() {
        let cases = [
            (EngineError::Validation("v".into()), 400),
            (EngineError::Forbidden("f".into()), 403),
            (EngineError::NotFound("n".into()), 404),
            (EngineError::Conflict("c".into()), 409),
            (EngineError::Internal("i".into()), 500),
        ];
        for (err, code) in cases {
            assert_eq!(engine_error_response(err).status().as_u16(), code);
        }
    }
}

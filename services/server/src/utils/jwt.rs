use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use engine::store::staff::StaffStore;
use engine::types::approval_types::Reviewer;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: u64,
    exp: usize,
}

pub fn create_jwt(id: u64, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp();

    let claims = Claims {
        sub: id,
        exp: expiration as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn verify_jwt(token: &str, secret: &str) -> Result<u64, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(data.claims.sub)
}

/// Staff id placed into request extensions by the auth middleware.
pub fn extract_staff_id(req: &HttpRequest) -> Result<u64, HttpResponse> {
    match req.extensions().get::<u64>() {
        Some(id) => Ok(*id),
        None => Err(HttpResponse::Unauthorized().json(json!({
            "status": "error",
            "message": "Authentication required"
        }))),
    }
}

/// Build the reviewer context the engine authorizes against. The account
/// record is the authority for role, sub-role and approval ceiling; token
/// claims only identify the account.
pub async fn resolve_reviewer(
    req: &HttpRequest,
    staff_store: &StaffStore,
) -> Result<Reviewer, HttpResponse> {
    let staff_id = extract_staff_id(req)?;

    match staff_store.get_staff_by_id(staff_id).await {
        Some(staff) => Ok(Reviewer {
            staff_id: staff.id,
            role: staff.role,
            sub_role: staff.sub_role,
            max_approval_amount: staff.max_approval_amount,
        }),
        None => Err(HttpResponse::Unauthorized().json(json!({
            "status": "error",
            "message": "Staff account not found"
        }))),
    }
}

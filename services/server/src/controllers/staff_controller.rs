use actix_web::{get, post, web, HttpResponse, Responder};
use bcrypt::{hash, verify, DEFAULT_COST};
use serde_json::json;
use std::env;
use uuid::Uuid;
use validator::Validate;

use engine::store::staff::StaffStore;
use engine::types::approval_types::ApproverRole;
use engine::types::staff_types::Staff;

use crate::types::auth_types::{LoginStaffInput, SignUpStaffInput};
use crate::utils::jwt::create_jwt;
use crate::utils::responses::engine_error_response;

#[post("/staff/signup")]
pub async fn signup_staff(
    staff_store: web::Data<StaffStore>,
    req: web::Json<SignUpStaffInput>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    if let Some(sub_role) = &req.sub_role {
        if ApproverRole::parse(sub_role).is_none() {
            return HttpResponse::BadRequest().json(json!({
                "status": "error",
                "message": format!("unknown approver role: {}", sub_role)
            }));
        }
    }

    let hashed_password = match hash(&req.password, DEFAULT_COST) {
        Ok(h) => h,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": "Failed to sign up staff"
            }))
        }
    };

    let staff = Staff {
        id: Uuid::new_v4().as_u128() as u64,
        name: req.name.clone(),
        email: req.email.clone(),
        password_hash: hashed_password,
        role: req.role.clone(),
        sub_role: req.sub_role.clone(),
        max_approval_amount: req.max_approval_amount,
    };

    match staff_store.add_staff(staff).await {
        Ok(created) => HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Staff registered successfully",
            "staff_id": created.id
        })),
        Err(e) => engine_error_response(e),
    }
}

#[get("/staff")]
pub async fn get_all_staff(staff_store: web::Data<StaffStore>) -> impl Responder {
    let staff = staff_store.list_staff().await;
    let listed: Vec<_> = staff
        .iter()
        .map(|s| {
            json!({
                "id": s.id,
                "name": s.name,
                "email": s.email,
                "role": s.role,
                "sub_role": s.sub_role,
                "max_approval_amount": s.max_approval_amount
            })
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "status": "success",
        "staff": listed
    }))
}

#[post("/staff/signin")]
pub async fn signin_staff(
    staff_store: web::Data<StaffStore>,
    req: web::Json<LoginStaffInput>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": e.to_string()
        }));
    }

    let staff = match staff_store.get_staff_by_email(req.email.clone()).await {
        Some(s) => s,
        None => {
            return HttpResponse::Unauthorized().json(json!({
                "status": "error",
                "message": "Invalid email or password"
            }))
        }
    };

    if !verify(&req.password, &staff.password_hash).unwrap_or(false) {
        return HttpResponse::Unauthorized().json(json!({
            "status": "error",
            "message": "Invalid email or password"
        }));
    }

    let jwt_secret = match env::var("JWT_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": "JWT secret not configured"
            }))
        }
    };

    match create_jwt(staff.id, &jwt_secret) {
        Ok(token) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Signed in successfully",
            "token": token,
            "staff": {
                "id": staff.id,
                "name": staff.name,
                "email": staff.email,
                "role": staff.role,
                "sub_role": staff.sub_role,
                "max_approval_amount": staff.max_approval_amount
            }
        })),
        Err(_) => HttpResponse::InternalServerError().json(json!({
            "status": "error",
            "message": "Failed to issue token"
        })),
    }
}

mod controllers;
mod middleware;
mod types;
mod utils;

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use dotenvy::dotenv;
use std::env;

use engine::store::approvals::spawn_approvals_actor;
use engine::store::staff::spawn_staff_actor;

use crate::controllers::expense_controller::{
    approve_expense, create_expense, get_expense, reject_expense, update_expense,
};
use crate::controllers::history_controller::get_approval_history;
use crate::controllers::proposal_controller::{
    approve_proposal, create_proposal, get_proposal, reject_proposal, request_proposal_revision,
    submit_proposal, update_proposal,
};
use crate::controllers::series_controller::{
    create_occurrence, create_series, get_all_series, get_series_by_id,
};
use crate::controllers::staff_controller::{get_all_staff, signin_staff, signup_staff};
use crate::middleware::auth::AuthMiddleware;

async fn health() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(r#"{"status": "Ok"}"#)
}

async fn run() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let approvals = spawn_approvals_actor();
    let staff_store = spawn_staff_actor();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    log::info!("Approval service listening on {}", bind_addr);

    HttpServer::new(move || {
        let public_scope = web::scope("")
            .service(signup_staff)
            .service(signin_staff)
            .service(get_all_series)
            .service(get_series_by_id)
            .route("/health", web::get().to(health));

        let protected_scope = web::scope("")
            .wrap(AuthMiddleware)
            .service(get_all_staff)
            .service(create_series)
            .service(create_occurrence)
            .service(get_proposal)
            .service(create_proposal)
            .service(update_proposal)
            .service(submit_proposal)
            .service(approve_proposal)
            .service(reject_proposal)
            .service(request_proposal_revision)
            .service(get_expense)
            .service(create_expense)
            .service(update_expense)
            .service(approve_expense)
            .service(reject_expense)
            .service(get_approval_history);

        App::new()
            .app_data(web::Data::new(approvals.clone()))
            .app_data(web::Data::new(staff_store.clone()))
            .service(public_scope)
            .service(protected_scope)
    })
    .bind(bind_addr)?
    .run()
    .await
}

fn main() -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime");
    runtime.block_on(run())
}

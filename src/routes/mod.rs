use actix_web::{web, HttpResponse, Responder};

mod shortened_url;

use crate::{
    errors::AppError,
    services::{ShortenedUrlService, ShortenedUrlServiceTrait},
    types::{HealthStatus, ResponsePayload, ServerState},
};

// Handler function for the root route "/"
async fn index() -> impl Responder {
    let welcome_message = ResponsePayload {
        status: 200,
        message: String::from("Welcome and have a great time!"),
    };

    HttpResponse::Ok().json(welcome_message)
}

// Handler function for the health check endpoint
async fn health_check(
    data: web::Data<ServerState>,
    service: web::Data<ShortenedUrlService>,
) -> Result<impl Responder, AppError> {
    let status = HealthStatus {
        status: String::from("OK"),
        version: data.version.clone(),
        records: service.record_count()?,
        uptime_seconds: data.start_time.elapsed().as_secs(),
    };

    Ok(HttpResponse::Ok().json(status))
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // A registered shortcode takes precedence over every fixed path
    shortened_url::configure_redirect(cfg);
    cfg.route("/", web::get().to(index));
    cfg.route("/health", web::get().to(health_check));
    // The catch-all redirect route must stay last
    shortened_url::configure_routes(cfg);
}

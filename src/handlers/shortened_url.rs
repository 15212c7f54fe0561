use actix_web::{http::header::LOCATION, web, HttpRequest, HttpResponse, Responder};
use log::{debug, info};
use serde_json::json;

use crate::{
    errors::AppError,
    models::InputEdit,
    services::{ShortenedUrlService, ShortenedUrlServiceTrait},
};

type Result<T> = std::result::Result<T, AppError>;

/// Whole-session snapshot handler
pub async fn get_session_handler(service: web::Data<ShortenedUrlService>) -> Result<impl Responder> {
    let view = service.view()?;
    Ok(HttpResponse::Ok().json(json!({
        "data": view,
        "message": "Successfully retrieved session",
    })))
}

/// Add pending input handler
pub async fn add_input_handler(service: web::Data<ShortenedUrlService>) -> Result<impl Responder> {
    let inputs = service.add_input()?;
    Ok(HttpResponse::Ok().json(json!({
        "data": inputs,
        "message": "Pending inputs updated",
    })))
}

/// Edit one field of a pending input
pub async fn edit_input_handler(
    index: web::Path<usize>,
    edit: web::Json<InputEdit>,
    service: web::Data<ShortenedUrlService>,
) -> Result<impl Responder> {
    let inputs = service.edit_input(index.into_inner(), edit.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({
        "data": inputs,
        "message": "Pending inputs updated",
    })))
}

/// Submit all pending inputs
pub async fn submit_handler(service: web::Data<ShortenedUrlService>) -> Result<impl Responder> {
    let urls = service.submit()?;
    Ok(HttpResponse::Created().json(json!({
        "data": urls,
        "message": "Successfully shortened URLs",
    })))
}

/// Statistics list handler
pub async fn get_all_handler(service: web::Data<ShortenedUrlService>) -> Result<impl Responder> {
    let urls = service.list()?;
    Ok(HttpResponse::Ok().json(json!({
        "data": urls,
        "message": "Successfully retrieved URLs",
    })))
}

/// Recovers the shortcode from a request path: everything after the leading
/// slash, percent-decoded, so codes containing `/` or spaces survive the trip.
pub fn shortcode_from_path(path: &str) -> String {
    let raw = path.strip_prefix('/').unwrap_or(path);
    urlencoding::decode(raw)
        .map(|code| code.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Redirect route handler
pub async fn redirect_handler(
    req: HttpRequest,
    service: web::Data<ShortenedUrlService>,
) -> Result<impl Responder> {
    let shortcode = shortcode_from_path(req.uri().path());
    debug!("Redirect requested for code: {}", shortcode);

    let long_url = service.redirect(&shortcode)?;

    info!("Redirecting '{}' to '{}'", shortcode, long_url);
    Ok(HttpResponse::TemporaryRedirect()
        .insert_header((LOCATION, long_url))
        .finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use chrono::{TimeDelta, TimeZone, Utc};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::events::LogEventSink;
    use crate::navigation::ClientNavigator;
    use crate::routes;
    use crate::store::testing::{ManualClock, SequenceGenerator};
    use crate::store::{Session, ShortenerSettings};

    use super::*;

    fn service(clock: Arc<ManualClock>) -> web::Data<ShortenedUrlService> {
        let session = Session::open(
            ShortenerSettings::default(),
            Box::new(clock),
            Box::new(SequenceGenerator::new(&["gen001"])),
            Box::new(LogEventSink),
            Box::new(ClientNavigator),
        );
        web::Data::new(ShortenedUrlService::new(session, "http://localhost:3000"))
    }

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        ))
    }

    #[actix_web::test]
    async fn shorten_redirect_and_expire() {
        let clock = clock();
        let app = test::init_service(
            App::new()
                .app_data(service(clock.clone()))
                .configure(routes::configure_routes),
        )
        .await;

        for body in [
            json!({"field": "longUrl", "value": "https://example.com"}),
            json!({"field": "customCode", "value": "abc1"}),
            json!({"field": "validity", "value": 1}),
        ] {
            let req = test::TestRequest::patch()
                .uri("/api/inputs/0")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::post().uri("/api/urls").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["shortcode"], "abc1");
        assert_eq!(body["data"][0]["shortUrl"], "http://localhost:3000/abc1");
        assert_eq!(body["data"][0]["clickCount"], 0);

        let req = test::TestRequest::get().uri("/abc1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            resp.headers().get(LOCATION).unwrap(),
            "https://example.com"
        );

        clock.advance(TimeDelta::minutes(2));
        let req = test::TestRequest::get().uri("/abc1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::GONE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "This URL has expired");

        let req = test::TestRequest::get().uri("/api/urls").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["clickCount"], 1);
        assert_eq!(body["data"][0]["clickTimestamps"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn invalid_url_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(service(clock()))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/inputs/0")
            .set_json(json!({"field": "longUrl", "value": "not-a-url"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post().uri("/api/urls").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid URL format: not-a-url");

        let req = test::TestRequest::get().uri("/api/session").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["error"], "Invalid URL format: not-a-url");
        assert_eq!(body["data"]["urls"].as_array().unwrap().len(), 0);
        assert_eq!(body["data"]["pendingInputs"][0]["longUrl"], "not-a-url");
    }

    #[actix_web::test]
    async fn unknown_code_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(service(clock()))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/nothing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn custom_codes_are_not_shadowed_by_fixed_routes() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(crate::types::ServerState {
                    start_time: std::time::Instant::now(),
                    version: "0.0.0".to_string(),
                }))
                .app_data(service(clock()))
                .configure(routes::configure_routes),
        )
        .await;

        // Fixed routes still answer while no code claims their path
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        for (n, code) in ["health", "api", "a/b", "a b"].into_iter().enumerate() {
            for body in [
                json!({"field": "longUrl", "value": format!("https://example.com/{}", n)}),
                json!({"field": "customCode", "value": code}),
            ] {
                let req = test::TestRequest::patch()
                    .uri("/api/inputs/0")
                    .set_json(body)
                    .to_request();
                let resp = test::call_service(&app, req).await;
                assert_eq!(resp.status(), StatusCode::OK);
            }
            let req = test::TestRequest::post().uri("/api/urls").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            let created = &body["data"][0];
            assert_eq!(created["shortcode"], code);

            let short_url = created["shortUrl"].as_str().unwrap().to_string();
            assert!(url::Url::parse(&short_url).is_ok(), "{}", short_url);
            let path = short_url.trim_start_matches("http://localhost:3000");

            let req = test::TestRequest::get().uri(path).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{}", path);
            assert_eq!(
                resp.headers().get(LOCATION).unwrap().to_str().unwrap(),
                format!("https://example.com/{}", n)
            );
        }

        // The unescaped form of a slash code resolves too
        let req = test::TestRequest::get().uri("/a/b").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        let req = test::TestRequest::get().uri("/api/urls").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let clicks: Vec<(String, u64)> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|url| {
                (
                    url["shortcode"].as_str().unwrap().to_string(),
                    url["clickCount"].as_u64().unwrap(),
                )
            })
            .collect();
        assert_eq!(
            clicks,
            vec![
                ("health".to_string(), 1),
                ("api".to_string(), 1),
                ("a/b".to_string(), 2),
                ("a b".to_string(), 1),
            ]
        );
    }

    #[::core::prelude::v1::test]
    fn shortcode_is_decoded_from_the_path() {
        assert_eq!(shortcode_from_path("/abc1"), "abc1");
        assert_eq!(shortcode_from_path("/a%2Fb"), "a/b");
        assert_eq!(shortcode_from_path("/a/b"), "a/b");
        assert_eq!(shortcode_from_path("/a%20b"), "a b");
    }

    #[actix_web::test]
    async fn pending_inputs_are_capped() {
        let app = test::init_service(
            App::new()
                .app_data(service(clock()))
                .configure(routes::configure_routes),
        )
        .await;

        let mut last = Value::Null;
        for _ in 0..6 {
            let req = test::TestRequest::post().uri("/api/inputs").to_request();
            last = test::call_and_read_body_json(&app, req).await;
        }
        assert_eq!(last["data"].as_array().unwrap().len(), 5);
        assert_eq!(last["data"][4]["validity"], 30);

        let req = test::TestRequest::patch()
            .uri("/api/inputs/5")
            .set_json(json!({"field": "validity", "value": 10}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

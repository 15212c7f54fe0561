use actix_web::{guard, guard::GuardContext, web};

use crate::handlers::{
    add_input_handler, edit_input_handler, get_all_handler, get_session_handler,
    redirect_handler, shortcode_from_path, submit_handler,
};
use crate::services::{ShortenedUrlService, ShortenedUrlServiceTrait};

// Matches only GETs whose whole path is a code present in the registry
fn is_registered_shortcode(ctx: &GuardContext<'_>) -> bool {
    let Some(service) = ctx.app_data::<web::Data<ShortenedUrlService>>() else {
        return false;
    };
    let shortcode = shortcode_from_path(ctx.head().uri.path());
    !shortcode.is_empty() && service.is_registered(&shortcode).unwrap_or(false)
}

// Redirect for registered codes; must be mounted before every fixed path
pub fn configure_redirect(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{shortcode:.*}")
            .guard(guard::Get())
            .guard(guard::fn_guard(is_registered_shortcode))
            .route(web::get().to(redirect_handler)),
    );
}

// Configure session, form and registry routes, then the fallback redirect route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/session", web::get().to(get_session_handler))
            .route("/inputs", web::post().to(add_input_handler))
            .route("/inputs/{index}", web::patch().to(edit_input_handler))
            .route("/urls", web::post().to(submit_handler))
            .route("/urls", web::get().to(get_all_handler)),
    );
    // Unregistered codes land here and answer 404
    cfg.service(web::resource("/{shortcode:.*}").route(web::get().to(redirect_handler)));
}

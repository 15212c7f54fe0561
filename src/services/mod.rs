use actix_web::web;

mod shortened_url;

pub use shortened_url::{SessionView, ShortenedUrlService, ShortenedUrlServiceTrait};

use crate::clock::SystemClock;
use crate::config::ShortenerConfig;
use crate::events::LogEventSink;
use crate::navigation::ClientNavigator;
use crate::store::Session;
use crate::utils::RandomShortcodeGenerator;

/// Opens the process-wide session with the production collaborators
pub fn build(config: &ShortenerConfig) -> web::Data<ShortenedUrlService> {
    let session = Session::open(
        config.settings(),
        Box::new(SystemClock),
        Box::new(RandomShortcodeGenerator),
        Box::new(LogEventSink),
        Box::new(ClientNavigator),
    );
    web::Data::new(ShortenedUrlService::new(
        session,
        config.public_base_url.clone(),
    ))
}

use std::time::Instant;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{debug, info};

use crate::{
    config::{Config, Environment},
    errors::AppError,
    middleware::RequestLogger,
    routes, services,
    services::ShortenedUrlServiceTrait,
    types::ServerState,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

// Setup logging with custom format and configuration
fn setup_logging(config: &Config) -> Result<(), AppError> {
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    };

    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

pub async fn server() -> AppResult<()> {
    let config = Config::load()?;

    setup_logging(&config)?;

    // Capture start time for uptime calculation
    let start_time = Instant::now();

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);
    info!(
        "Binding to {}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );

    if config.app.environment == Environment::Development {
        debug!("Debug logging enabled");
        debug!("Full configuration: {:?}", config);
    }

    let enable_debug_logging = config.app.environment != Environment::Production;

    // One session shared by every worker
    let shortener = services::build(&config.shortener);
    let app_shortener = shortener.clone();
    let version = config.app.version.clone();

    HttpServer::new(move || {
        let cors = if enable_debug_logging {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .app_data(web::Data::new(ServerState {
                start_time,
                version: version.clone(),
            }))
            .app_data(app_shortener.clone())
            .wrap(cors)
            .wrap(RequestLogger::new(enable_debug_logging))
            .configure(routes::configure_routes)
    })
    .workers(config.server.workers)
    .bind((config.server.host.to_string(), config.server.port))?
    .run()
    .await?;

    shortener.close()?;
    info!("Shut down cleanly");

    Ok(())
}

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lms_quiz_engine::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config).await.map_err(|e| {
        log::error!("Failed to initialise application state: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let cors = if state.config.allows_any_origin() {
            Cors::permissive()
        } else {
            Cors::default()
                .allowed_origin(&state.config.cors_allowed_origin)
                .allow_any_method()
                .allow_any_header()
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

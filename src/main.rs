use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use study_forge_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config).map_err(|e| {
        log::error!("Failed to initialize application state: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!(
        "Starting HTTP server on {}:{} (model: {})",
        bind_address.0,
        bind_address.1,
        state.config.llm_model
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::root)
            .service(handlers::health_check)
            .service(handlers::process_video)
            .service(handlers::process_transcript)
    })
    .bind(bind_address)?
    .run()
    .await
}

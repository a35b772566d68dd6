use actix_web::{web, App, HttpServer};
use portal::config::PortalConfig;
use portal::middleware::{RequestTrace, RouteGuard, SecurityHeaders, StructuredLogger, TraceSpan};
use portal::routes;
use portal::state::AppState;
use portal::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(AppState::new(config.security));

    tracing::info!(host = %config.host, port = config.port, "starting portal");

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(RouteGuard)
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

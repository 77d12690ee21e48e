use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;

use leave_mgmt::config::Config;
use leave_mgmt::{AppState, routes};

use tracing::info;
use tracing_appender::rolling;

#[get("/")]
async fn index() -> impl Responder {
    "Leave management service"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let state = AppState::build();
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        let config = config.clone();
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(state.leave_service.clone())
            .app_data(state.query_service.clone())
            .app_data(state.employee_service.clone())
            .service(index)
            .configure(|cfg| routes::configure(cfg, config))
    })
    .bind(server_addr)?
    .run()
    .await
}

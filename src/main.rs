use actix_web::{middleware, App, HttpServer};
use grayserve::config::{RUST_LOG, SETTINGS};
use grayserve::server::routes;
use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(RUST_LOG)),
        )
        .init();

    let settings = &*SETTINGS;
    info!(
        "starting grayscale server on {}:{}",
        settings.host, settings.port
    );

    // Start the HTTP server
    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .service(routes::grayscale)
    })
    .bind(format!("{}:{}", settings.host, settings.port))?
    .run()
    .await
}

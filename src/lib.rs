#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::services::upstream::UpstreamClient;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One HTTP client shared by all workers; it only holds a connection pool.
    let client = UpstreamClient::new(server_config.ghl.clone())
        .map_err(|e| std::io::Error::other(format!("Failed to build upstream client: {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let submit_path = server_config.submit_path.clone();

    log::info!(
        "Relaying {} on {}:{} to {}",
        submit_path,
        bind_address.0,
        bind_address.1,
        server_config.ghl.submit_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors_headers())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(|cfg| routes::configure(cfg, &submit_path))
            .app_data(web::Data::new(client.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

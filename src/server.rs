//! HTTP server: SSR routes, static assets, compression and request tracing

use std::net::SocketAddr;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::core::config::Config;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load Leptos configuration: {0}")]
    Configuration(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Build the application router for the given Leptos options
pub fn router(leptos_options: LeptosOptions, config: &Config) -> Router {
    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed (.br / .gz) bundle files from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        // Video, images and icons from the site root, 404 page otherwise
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(TraceLayer::new_for_http());

    if config.compression {
        // Brotli first, gzip as the widely supported fallback
        app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
    } else {
        app
    }
}

/// Load the Leptos configuration and serve until Ctrl+C
pub async fn serve(config: Config) -> Result<(), ServerError> {
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf =
        get_configuration(None).map_err(|err| ServerError::Configuration(err.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = router(leptos_options, &config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        let err = ServerError::Bind {
            addr,
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };

        let message = err.to_string();
        assert!(message.contains("127.0.0.1:3000"));
        assert!(message.contains("address in use"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: ServerError = std::io::Error::other("boom").into();
        assert!(matches!(err, ServerError::Serve(_)));
    }
}

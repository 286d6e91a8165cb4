#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use namma_lakes::core::config::Config;
    use namma_lakes::server;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Invalid values are reported once logging is up
    let (config, config_error) = match Config::from_env() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    if let Some(err) = config_error {
        tracing::warn!(%err, "invalid configuration, falling back to defaults");
    }

    tracing::info!(
        log_level = %config.log_level,
        compression = config.compression,
        "config loaded"
    );

    if let Err(err) = server::serve(config).await {
        tracing::error!(%err, "server stopped");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

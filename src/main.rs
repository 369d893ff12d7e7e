use shopping_relay::config::RelayConfig;
use shopping_relay::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = RelayConfig::from_env()?;

    eprintln!("🛒 Shopping Relay v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Port: {}", config.port);
    eprintln!("   Users: {}", config.users.len());
    eprintln!(
        "   Outbound delay: {}ms",
        config.dispatch_interval.as_millis()
    );
    match &config.static_dir {
        Some(dir) => eprintln!("   Static files: {}", dir.display()),
        None => eprintln!("   Static files: disabled"),
    }

    server::run(config).await?;
    Ok(())
}

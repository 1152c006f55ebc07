use clap::Parser;
use uni_rankings::adapters::source_for;
use uni_rankings::core::ConfigProvider;
use uni_rankings::utils::{logger, validation::Validate};
use uni_rankings::{create_app, AppState, Catalog, CliConfig, RankingError, Settings};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌
    logger::init_logger(
        settings.verbose,
        settings.json_logs(),
        settings.log_level.as_deref(),
    );
    tracing::info!("Starting uni-rankings");
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = run(settings).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        exit_with(&e);
    }
}

async fn run(settings: Settings) -> Result<(), RankingError> {
    let source = source_for(settings.data_path());
    let catalog = Catalog::load(source.as_ref()).await?;
    tracing::info!("✅ Loaded {} universities", catalog.len());

    let app = create_app(AppState::new(catalog));
    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn exit_with(e: &RankingError) -> ! {
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

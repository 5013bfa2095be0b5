use clap::Parser;
use krushi_kendra::server::{self, AppState};
use krushi_kendra::utils::error::ErrorSeverity;
use krushi_kendra::utils::{logger, validation::Validate};
use krushi_kendra::{CliConfig, PageBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting krushi-kendra storefront");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let builder = match PageBuilder::from_config(&config) {
        Ok(builder) => builder,
        Err(e) => {
            tracing::error!(
                "❌ Failed to prepare storefront: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::High => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    if let Err(e) = server::serve(&config.bind, AppState::new(builder)).await {
        tracing::error!("❌ Server stopped: {}", e);
        eprintln!("❌ Server stopped: {}", e);
        std::process::exit(3);
    }

    Ok(())
}

use clap::Parser;
use krushi_kendra::core::pipeline::PAGE_FILE_NAME;
use krushi_kendra::domain::ports::ConfigProvider;
use krushi_kendra::utils::error::ErrorSeverity;
use krushi_kendra::utils::{logger, validation::Validate};
use krushi_kendra::{BlogPagePipeline, LocalStorage, PageBuilder, RenderEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "render_page")]
#[command(about = "Render the all-general-blogs page to a static HTML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "krushi-kendra.toml")]
    config: String,

    /// Override the output directory from config
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be rendered without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting static page render");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(output) = &args.output {
        config.output.path = output.clone();
        tracing::info!("🔧 Output directory overridden to: {}", output);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be fetched or written");
        return Ok(());
    }

    let builder = PageBuilder::from_config(&config)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = BlogPagePipeline::new(builder, storage, config.output_path().to_string());
    let engine = RenderEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Page rendered successfully!");
            println!("✅ Page rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2, // 重試錯誤
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let display = config.display_settings();

    println!("📋 Configuration Summary:");
    println!("  Blogs: {}", config.blogs_location());
    println!("  Shop: {}", config.shop_location().unwrap_or("(footer defaults)"));
    println!("  Output: {}/{}", config.output_path(), PAGE_FILE_NAME);
    println!("  Locale: {}", display.locale);
    println!("  UTC offset: {} min", display.utc_offset_minutes);
    println!("  Preview length: {}", display.preview_length);
    println!(
        "  Image transformation: {}",
        display.image_transformation.as_deref().unwrap_or("disabled")
    );
    println!();
}

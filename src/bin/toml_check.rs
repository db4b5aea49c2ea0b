use clap::Parser;
use personnummer_check::core::ConfigProvider;
use personnummer_check::utils::error::ErrorSeverity;
use personnummer_check::utils::{logger, validation::Validate};
use personnummer_check::{AnyClock, BatchPipeline, LocalStorage, TomlConfig, ValidationEngine};

#[derive(Parser)]
#[command(name = "toml-check")]
#[command(about = "Batch personal number validation driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "pnr-check.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be processed without reading the input
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_logger(&config.log_settings(args.verbose));

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let today = config.today()?;
    display_config_summary(&config, today);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        println!("🔍 Dry run: configuration is valid");
        return Ok(());
    }

    let pipeline = BatchPipeline::new(
        LocalStorage::default(),
        config.clone(),
        AnyClock::from_option(today),
    );
    let engine = ValidationEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "✅ Checked {} numbers: {} valid, {} invalid",
                summary.total, summary.valid, summary.invalid
            );
            println!("📁 Report saved to: {}", summary.output_path);
            if summary.invalid > 0 {
                std::process::exit(ErrorSeverity::Low.exit_code());
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch validation failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, today: Option<chrono::NaiveDate>) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Input: {}", config.input.path);
    if let Some(column) = config.input_column() {
        tracing::info!("  Column: {}", column);
    }
    tracing::info!("  Output: {}", config.output_path());
    tracing::info!("  Formats: {}", config.output_formats().join(", "));
    match today {
        Some(date) => tracing::info!("  Validation date: {} (pinned)", date),
        None => tracing::info!("  Validation date: today"),
    }
}

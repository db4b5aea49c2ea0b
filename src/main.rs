use clap::Parser;
use personnummer_check::utils::logger;
use personnummer_check::{run_check, AnyClock, CliConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let run = match run_check(&config, AnyClock::from_option(config.today)).await {
        Ok(run) => run,
        Err(e) => {
            tracing::error!("❌ Validation failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if config.json {
        match run.render_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code());
            }
        }
    } else {
        print!("{}", run.render_text());
    }

    std::process::exit(run.exit_code());
}

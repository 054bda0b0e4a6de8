use clap::Parser;
use prophecy::ServiceKind;
use prophecy::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "prophecy", about = "Draw two cards and read your 2026 prophecy")]
struct Args {
    /// Reading service to use (overrides config and PROPHECY_SERVICE)
    #[arg(short, long, value_enum)]
    service: Option<ServiceKind>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to prophecy.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("prophecy.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        config::ProphecyConfig::default()
    });
    let resolved = config::resolve(&file_config, args.service);

    log::info!("Prophecy Hall starting up with {} service", resolved.service);

    prophecy::tui::run(resolved)
}

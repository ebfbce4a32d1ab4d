use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tube::api::YoutubeClient;
use tube::core::config;

#[derive(Parser)]
#[command(name = "tube", about = "Terminal browser for a YouTube subscription feed")]
struct Args {
    /// Config file path (default: ~/.tube/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger; stdout belongs to the terminal UI.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("tube.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // Missing home dir and a corrupt config are startup-fatal; a missing
    // config file is not (defaults get written out).
    let path = match args.config.map(Ok).unwrap_or_else(config::config_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("tube: {e}");
            return ExitCode::FAILURE;
        }
    };
    let cfg = match config::load_config(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tube: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("tube starting with {} subscriptions", cfg.subscriptions.len());

    let api_key = config::resolve_api_key(&cfg);
    let source = Arc::new(YoutubeClient::new(api_key, None));

    if let Err(e) = tube::tui::run(source, &cfg) {
        eprintln!("tube: terminal error: {e}");
        return ExitCode::FAILURE;
    }

    // Best-effort rewrite of the loaded document on normal exit.
    if let Err(e) = config::save_config(&path, &cfg) {
        log::warn!("could not persist config on exit: {e}");
    }

    ExitCode::SUCCESS
}

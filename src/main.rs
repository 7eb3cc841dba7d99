use clap::Parser;
use log::LevelFilter;
use shorty::core::config::{self, CliOverrides, ShortyConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "shorty", about = "Terminal client for a URL shortening service")]
struct Args {
    /// Base URL of the shortening API (requests go to {base}/shorten)
    #[arg(short, long)]
    backend_url: Option<String>,

    /// Edge length in pixels for saved QR codes
    #[arg(short, long)]
    qr_size: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logging needs the resolved level, so a config error is reported after init
    let (file_config, config_error) = match config::load_config() {
        Ok(cfg) => (cfg, None),
        Err(e) => (ShortyConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            backend_url: args.backend_url,
            qr_size: args.qr_size,
        },
    );

    // Initialize file logger - writes to shorty.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);
    if let Ok(log_file) = File::create("shorty.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Config error, falling back to defaults: {}", e);
    }
    log::info!(
        "Shorty starting up with backend {} (timeout {:?})",
        resolved.backend_url,
        resolved.request_timeout
    );

    shorty::tui::run(resolved)
}

use clap::Parser;
use flashdeck::core::config::{self, CliOverrides};
use flashdeck::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "flashdeck", about = "Terminal flashcards with dictionary definitions")]
struct Args {
    /// Deck term (repeat for several); replaces the configured terms
    #[arg(short, long = "term")]
    terms: Vec<String>,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Start with autoplay on
    #[arg(long)]
    play: bool,

    /// Dictionary API base URL
    #[arg(long)]
    dictionary_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to flashdeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("flashdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Ignoring config file: {e}");
            log::warn!("Ignoring config file: {}", e);
            config::FlashdeckConfig::default()
        }
    };

    let cli = CliOverrides {
        terms: args.terms,
        interval_ms: args.interval_ms,
        play: args.play,
        dictionary_url: args.dictionary_url,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Flashdeck starting up: {} terms, autoplay every {:?}, dictionary at {}",
        resolved.terms.len(),
        resolved.autoplay_interval,
        resolved.dictionary_url
    );

    tui::run(resolved)
}

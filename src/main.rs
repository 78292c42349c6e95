mod core;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::core::config;
use crate::core::content::SectionId;
use crate::core::typewriter::Typewriter;

#[derive(Parser)]
#[command(name = "folio", about = "Personal portfolio for the terminal")]
struct Args {
    /// Path to a config file (defaults to ~/.folio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Section to open on startup
    #[arg(short, long, value_enum)]
    section: Option<SectionId>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let loaded = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Config error: {e}");
            eprintln!("folio: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&loaded, args.section);

    // A bad phrase list is fatal here, before any terminal setup or ticks
    let animator = match Typewriter::new(resolved.phrases.clone(), resolved.timing) {
        Ok(a) => a,
        Err(e) => {
            log::error!("Typewriter configuration error: {e}");
            eprintln!("folio: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Folio starting up (start section: {:?})",
        resolved.start_section
    );

    tui::run(resolved, animator)
}

//! Profile Deck - multi-panel control client for remote browser profiles
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use pdeck_app::config::SettingsOverrides;
use pdeck_core::prelude::*;
use profile_deck::LaunchOptions;

/// Profile Deck - run, inspect and script remote browser profiles side by side
#[derive(Parser, Debug)]
#[command(name = "pdeck", version)]
#[command(about = "Multi-panel control client for remote browser-automation profiles", long_about = None)]
struct Args {
    /// Config file (default: <config dir>/profile-deck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://127.0.0.1:8080
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Status poll interval in milliseconds (minimum 250)
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Number of panels (1-9)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=9))]
    panels: Option<u8>,

    /// Run in headless mode (NDJSON on stdout, commands on stdin)
    #[arg(long)]
    headless: bool,
}

impl From<Args> for LaunchOptions {
    fn from(args: Args) -> Self {
        LaunchOptions {
            config: args.config,
            overrides: SettingsOverrides {
                base_url: args.base_url,
                interval_ms: args.interval_ms,
                panels: args.panels.map(usize::from),
            },
            headless: args.headless,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    profile_deck::run(args.into()).await
}

use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinegrid::config::Config;

#[derive(Parser, Debug)]
#[command(name = "cinegrid")]
#[command(about = "Terminal search over a movie catalog", long_about = None)]
struct Args {
    /// Path to the YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // The TUI owns stdout, so log output goes to a file.
    let logfile = match File::create(&config.logfile) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: failed to open log file {}: {}", config.logfile, e);
            std::process::exit(1);
        }
    };

    let default_filter = if args.debug {
        "cinegrid=debug"
    } else {
        "cinegrid=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(logfile))
                .with_ansi(false),
        )
        .init();

    cinegrid::terminal::install_panic_hook();

    if let Err(e) = cinegrid::run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

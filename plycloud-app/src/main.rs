//! Plycloud Application
//!
//! Reads ASCII PLY point clouds and reports a summary per file:
//! point count, declared vertex count, how parsing ended and the bounds.

mod app;
mod summary;

use clap::Parser;
use std::path::PathBuf;

/// Plycloud - ASCII PLY point cloud reader
#[derive(Parser, Debug)]
#[command(name = "plycloud")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// PLY files to read
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Line that ends the header
    #[arg(long, default_value = plycloud_data::DEFAULT_HEADER_TERMINATOR)]
    terminator: String,
}

fn main() {
    let args = Args::parse();

    app::init_logging(&app::LoggingConfig {
        level: args.log_level.clone(),
    });

    match app::run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Application error: {}", e);
            std::process::exit(1);
        }
    }
}

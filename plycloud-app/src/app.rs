//! Logging setup and the per-file read loop.

use std::error::Error;
use std::io::{self, Write};

use plycloud_data::{PlyReader, ReadOptions};
use tracing::debug;

use crate::Args;
use crate::summary::FileSummary;

/// Logging configuration.
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub fn init_logging(config: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Read every file named in `args`, writing one summary per readable file.
///
/// Returns `Ok(false)` if any file failed; failures are logged and the
/// remaining files are still processed.
pub fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    read_all(args, &mut out)
}

fn read_all(args: &Args, out: &mut impl Write) -> Result<bool, Box<dyn Error>> {
    let options = ReadOptions::default().with_header_terminator(args.terminator.clone());
    let mut reader = PlyReader::with_options(options);
    let mut all_ok = true;

    for path in &args.files {
        match reader.read(path) {
            Ok(read) => {
                let summary = FileSummary::new(path, &read);
                if args.json {
                    serde_json::to_writer(&mut *out, &summary)?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}", summary)?;
                }
            }
            Err(e) => {
                // The reader already logged `e` together with its cause.
                debug!("Skipping {}: {}", path.display(), e);
                all_ok = false;
            }
        }
    }

    out.flush()?;
    Ok(all_ok)
}

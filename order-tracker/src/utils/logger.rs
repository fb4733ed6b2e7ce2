//! Logging Infrastructure
//!
//! fmt or JSON lines, on stdout or a daily rolling file. `RUST_LOG`
//! directives take precedence over the configured level.

use std::path::Path;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger at `info` on stdout
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// Falls back to stdout when `log_dir` is not an existing directory. Safe to
/// call more than once; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level, rust_log.as_deref()))
        .with_writer(log_writer(log_dir))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Level filter from `log_level` (unparsable means `info`), refined by `RUST_LOG` directives
fn build_filter(log_level: Option<&str>, rust_log: Option<&str>) -> EnvFilter {
    let level = log_level
        .and_then(|l| l.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn log_writer(log_dir: Option<&str>) -> BoxMakeWriter {
    match log_dir.map(Path::new) {
        Some(dir) if dir.is_dir() => {
            BoxMakeWriter::new(tracing_appender::rolling::daily(dir, "order-tracker.log"))
        }
        _ => BoxMakeWriter::new(std::io::stdout),
    }
}

// File: crates/lcm/src/logging.rs
// Summary: stderr logging bootstrap; `RUST_LOG` overrides the default level.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;

const DEFAULT_SPEC: &str = "info";

/// Start logging to stderr. Keep the returned handle alive for the whole run.
pub fn init() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(DEFAULT_SPEC)
        .context("parsing log specification")?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("starting logger")?;
    debug!(
        "event=app_start platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

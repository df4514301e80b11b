// goods_api/src/telemetry.rs

//! Global `tracing` subscriber setup. `RUST_LOG` overrides the default `info` level.

use crate::config::LogFormat;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(format: LogFormat) {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  // try_init: a subscriber may already be installed (tests, embedding)
  let installed = match format {
    LogFormat::Pretty => builder.try_init(),
    LogFormat::Json => builder.json().try_init(),
  };
  if installed.is_err() {
    tracing::debug!("Global tracing subscriber already set, keeping it.");
  }
}

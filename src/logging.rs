//! Tracing setup.
//!
//! The terminal belongs to the UI, so logs only go to a daily rotated file at
//! `~/.config/snag/logs/snag.log`. Filter with `RUST_LOG` (default `info`), e.g.
//! `RUST_LOG=snag::reading=debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init() {
    let Ok(logs_dir) = crate::config_paths::ensure_logs_dir() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(logs_dir, "snag.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();
}

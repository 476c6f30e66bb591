use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming an extra log file.
pub const LOG_FILE_ENV: &str = "EVERYTIP_LOG";

/// Initialize tracing.
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` overrides the default `info` filter. When `EVERYTIP_LOG` holds a
/// path, records are also written there as `{path}.{pid}` without colors.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    let file_layer = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        let unique_path = format!("{}.{}", path, std::process::id());
        match std::fs::File::create(&unique_path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            ),
            Err(err) => {
                eprintln!("Warning: Failed to create log file {}: {}", unique_path, err);
                None
            }
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

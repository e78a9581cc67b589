use anyhow::Context;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the same subscriber. The filter is read from `RUST_LOG`.
pub fn init() -> anyhow::Result<()> {
    LogTracer::init().context("Failed to install the log bridge")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the tracing subscriber")?;
    Ok(())
}

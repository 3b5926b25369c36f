use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::PickerError;

const DEFAULT_FILTER: &str = "info,multiselect=debug,picker=debug";

/// Send JSON logs to `path`
///
/// The terminal belongs to the TUI, so without a log file nothing is
/// installed and all events are dropped. `RUST_LOG` overrides the filter.
pub fn init_logging(path: &Path) -> Result<(), PickerError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| PickerError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
    Ok(())
}

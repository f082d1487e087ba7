use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target used for every business-layer event, so it can be filtered
/// with `RUST_LOG=catalog=debug`.
pub const LOG_TARGET: &str = "catalog";

/// Forwards business-layer log lines to the `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}

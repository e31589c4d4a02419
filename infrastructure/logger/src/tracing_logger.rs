use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "product_service";

/// Forwards the domain [`Logger`] port to `tracing` under a fixed target, so
/// business events can be filtered with `RUST_LOG=product_service=debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`.
///
/// Every event carries a `component` field naming the bounded context
/// (catalog, cart, orders, ...) that emitted it.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "PromptPrint -- ", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "PromptPrint -- ", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "PromptPrint -- ", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "PromptPrint -- ", component = self.component, "{}", message);
    }
}

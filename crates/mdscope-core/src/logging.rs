//! Injected logging capability.
//!
//! The index reports per-file failures and build progress through a [`Logger`]
//! handed to it at construction instead of a process-wide singleton. The
//! default [`TracingLogger`] forwards everything to `tracing`, so installing a
//! subscriber once at startup is all a binary has to do.

/// Severity-levelled sink for index diagnostics.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
}

/// [`Logger`] that emits `tracing` events under the `mdscope` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(target: "mdscope", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "mdscope", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "mdscope", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "mdscope", "{message}");
    }
}

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use wodi_registry::{Lifetime, RegistryError, ScopedRegistry, ServiceRegistry};

const DIAGNOSTICS_TARGET: &str = "wodi::diagnostics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        })
    }
}

/// Destination for user-facing diagnostics.
///
/// Resolved from the service registry, so tools can swap the destination per container
/// (e.g. collect into a [`MemorySink`] while validating a project).
pub trait DiagnosticSink: fmt::Debug + Send + Sync {
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);
    fn debug(&self, message: &str);

    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => self.error(message),
            Severity::Warning => self.warning(message),
            Severity::Info => self.info(message),
            Severity::Debug => self.debug(message),
        }
    }
}

/// Forwards diagnostics to `tracing` under the `wodi::diagnostics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!(target: DIAGNOSTICS_TARGET, "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: DIAGNOSTICS_TARGET, "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: DIAGNOSTICS_TARGET, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: DIAGNOSTICS_TARGET, "{message}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn error(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub severity: Severity,
    pub message: String,
}

/// Keeps every diagnostic in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.lock().clone()
    }

    /// Returns the collected records and leaves the sink empty.
    pub fn take(&self) -> Vec<DiagnosticRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.records.lock().push(DiagnosticRecord { severity, message: message.to_owned() });
    }
}

impl DiagnosticSink for MemorySink {
    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }

    fn warning(&self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn debug(&self, message: &str) {
        self.push(Severity::Debug, message);
    }
}

/// Registers [`TracingSink`] in the target container unless a sink is already registered.
/// Returns `true` if it was installed.
pub fn install_default_sink(registry: &ServiceRegistry) -> bool {
    registry.register_if_not_has::<dyn DiagnosticSink>(
        || Arc::new(TracingSink) as Arc<dyn DiagnosticSink>,
        Lifetime::PerContainer,
    )
}

/// Like [`install_default_sink`] for an explicit container.
pub fn install_default_sink_at(scope: &ScopedRegistry) -> bool {
    scope.register_if_not_has::<dyn DiagnosticSink>(
        || Arc::new(TracingSink) as Arc<dyn DiagnosticSink>,
        Lifetime::PerContainer,
    )
}

/// The sink registered in the target container, or a [`TracingSink`] when none is registered.
///
/// # Errors
/// Any registry failure other than [`RegistryError::NotRegistered`].
pub fn try_diagnostics(registry: &ServiceRegistry) -> Result<Arc<dyn DiagnosticSink>, RegistryError> {
    match registry.resolve::<dyn DiagnosticSink>() {
        Err(RegistryError::NotRegistered { .. }) => Ok(Arc::new(TracingSink)),
        resolved => resolved,
    }
}

/// Like [`try_diagnostics`], but a broken registration is logged and replaced by a
/// [`TracingSink`].
#[must_use]
pub fn diagnostics(registry: &ServiceRegistry) -> Arc<dyn DiagnosticSink> {
    try_diagnostics(registry).unwrap_or_else(|err| {
        tracing::warn!(error = %err, kind = err.kind(), "Diagnostic sink unavailable, using tracing");
        Arc::new(TracingSink)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        sink.warning("first");
        sink.emit(Severity::Error, "second");

        let records = sink.take();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], DiagnosticRecord { severity: Severity::Warning, message: "first".to_owned() });
        assert_eq!(records[1].severity, Severity::Error);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}

use std::sync::Mutex;

use crate::errors::AccessError;

/// Sink for the fail-soft failure path.
///
/// Passed into property operations explicitly instead of being looked up
/// through a shared static logger, so embedders control where degraded
/// field accesses end up.
pub trait Diagnostics: Send + Sync {
    fn access_failure(&self, err: &AccessError);
}

/// Default sink: forwards access failures to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn access_failure(&self, err: &AccessError) {
        tracing::warn!(
            entity_type = %err.entity_type,
            field = %err.field,
            mode = %err.mode,
            "field access failure"
        );
    }
}

/// In-memory sink that records every reported failure, for tests and for
/// embedders that surface diagnostics out of band.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<AccessError>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<AccessError> {
        std::mem::take(&mut *self.entries.lock().unwrap())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn access_failure(&self, err: &AccessError) {
        self.entries.lock().unwrap().push(err.clone());
    }
}

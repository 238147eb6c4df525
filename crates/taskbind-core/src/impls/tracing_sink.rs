//! TracingDiagnosticSink - 分類ミスを warn ログとして出力

use tracing::warn;

use crate::domain::Diagnostic;
use crate::ports::DiagnosticSink;

/// Emits each diagnostic as a `WARN` event with structured fields
/// (`definition_id`, `offending_token`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&self, diagnostic: Diagnostic) {
        warn!(
            definition_id = %diagnostic.definition_id,
            offending_token = diagnostic.offending_token.as_deref(),
            "{}",
            diagnostic.reason
        );
    }
}

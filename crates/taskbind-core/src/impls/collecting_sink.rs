//! CollectingDiagnosticSink / FanoutDiagnosticSink
//!
//! # 使いどころ
//! - テスト: 報告された Diagnostic をそのまま検査する
//! - CLI: レポートに diagnostics を含める（Fanout で tracing にも流す）

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::Diagnostic;
use crate::ports::DiagnosticSink;

/// In-memory sink. Cloning shares the underlying buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectingDiagnosticSink {
    diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl CollectingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 報告済みの Diagnostic のスナップショット
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 溜まった Diagnostic を取り出して空にする
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .diagnostics
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl DiagnosticSink for CollectingDiagnosticSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

/// Forwards every diagnostic to each inner sink, in order.
#[derive(Default)]
pub struct FanoutDiagnosticSink {
    sinks: Vec<Arc<dyn DiagnosticSink>>,
}

impl FanoutDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl DiagnosticSink for FanoutDiagnosticSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.report(diagnostic.clone());
            }
            last.report(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_keeps_reports_in_order() {
        let sink = CollectingDiagnosticSink::new();
        sink.report(Diagnostic::warning("a", "first", None));
        sink.report(Diagnostic::warning("b", "second", Some("bogus".to_string())));

        let ids: Vec<String> = sink
            .diagnostics()
            .into_iter()
            .map(|d| d.definition_id)
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn drain_empties_the_buffer() {
        let sink = CollectingDiagnosticSink::new();
        sink.report(Diagnostic::warning("a", "first", None));

        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn fanout_delivers_to_every_sink() {
        let left = CollectingDiagnosticSink::new();
        let right = CollectingDiagnosticSink::new();
        let fanout = FanoutDiagnosticSink::new()
            .with_sink(Arc::new(left.clone()))
            .with_sink(Arc::new(right.clone()));

        fanout.report(Diagnostic::warning("t1", "miss", None));

        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn fanout_without_sinks_drops_reports() {
        FanoutDiagnosticSink::new().report(Diagnostic::warning("t1", "miss", None));
    }
}

//! Diagnostic - 分類ミスの構造化レコード
//!
//! DiagnosticSink に渡される値です。ログ出力とは独立しているので、
//! テストではログを覗かずに失敗経路を検証できます。

use serde::Serialize;

use super::errors::ClassificationMiss;

/// Diagnostic severity. Classification misses are always warnings: the
/// surrounding document keeps compiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

/// One record per classification miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub definition_id: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offending_token: Option<String>,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn warning(
        definition_id: impl Into<String>,
        reason: impl Into<String>,
        offending_token: Option<String>,
    ) -> Self {
        Self {
            definition_id: definition_id.into(),
            reason: reason.into(),
            offending_token,
            severity: Severity::Warning,
        }
    }
}

impl From<&ClassificationMiss> for Diagnostic {
    fn from(miss: &ClassificationMiss) -> Self {
        Diagnostic::warning(
            miss.definition_id(),
            miss.to_string(),
            miss.offending_token().map(str::to_string),
        )
    }
}

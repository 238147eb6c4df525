//! DiagnosticSink port - 分類ミスの報告先
//!
//! # 実装
//! - TracingDiagnosticSink: `tracing::warn!` に構造化フィールドで出力
//! - CollectingDiagnosticSink: メモリに溜める（テスト、CLI レポート）
//! - FanoutDiagnosticSink: 複数の sink に配る

use crate::domain::Diagnostic;

/// DiagnosticSink は Diagnostic を受け取る
///
/// 報告は失敗しません。sink 側の問題で解決処理を止めてはいけないためです。
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **TracingDiagnosticSink**: デフォルトの DiagnosticSink
//! - **CollectingDiagnosticSink / FanoutDiagnosticSink**: テスト・レポート用
//! - **DescriptorBehaviorFactory**: dry-run 用の ActivityBehaviorFactory
//!
//! 本番用の factory（実際のメール送信やシェル実行の behavior を返すもの）は
//! 実行エンジン側で実装します。

pub mod tracing_sink;
pub mod collecting_sink;
pub mod descriptor_factory;

pub use self::tracing_sink::TracingDiagnosticSink;
pub use self::collecting_sink::{CollectingDiagnosticSink, FanoutDiagnosticSink};
pub use self::descriptor_factory::{BehaviorDescriptor, DescriptorBehaviorFactory};

//! Ports - 外部コラボレーターとの境界
//!
//! - **ActivityBehaviorFactory**: behavior の構築（消費側）
//! - **DiagnosticSink**: 分類ミスの報告（生成側）

pub mod behavior_factory;
pub mod diagnostic_sink;

pub use self::behavior_factory::{ActivityBehavior, ActivityBehaviorFactory};
pub use self::diagnostic_sink::DiagnosticSink;

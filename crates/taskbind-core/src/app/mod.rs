//! App - 解決処理の組み立て
//!
//! # 主要コンポーネント
//! - **Classifier**: 属性 → ResolvedKind（純粋関数）
//! - **BehaviorBinder**: ResolvedKind → factory 呼び出し → スロットへの束縛 / 診断
//! - **ResolverBuilder / ServiceTaskResolver**: 上記のワイヤリング

pub mod builder;
pub mod classifier;
pub mod binder;

pub use self::builder::{
    BuildError, ReportEntry, Resolution, ResolutionReport, ResolverBuilder, ServiceTaskResolver,
};
pub use self::classifier::{Classifier, classify};
pub use self::binder::{BehaviorBinder, FactoryOperation};

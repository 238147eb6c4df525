//! ResolverBuilder / ServiceTaskResolver - Classifier と Binder の組み立て
//!
//! # Fail-fast 設計
//! - factory が未設定なら build() が BuildError を返す
//! - カスタム型の二重登録は register_type() の時点で RegistryError
//! - build() 後の registry は読み取り専用（解決中に変わらない）

use serde::Serialize;
use std::sync::Arc;

use tracing::info;

use super::binder::BehaviorBinder;
use super::classifier::Classifier;
use crate::config::ResolverConfig;
use crate::domain::{ResolutionState, ResolvedKind, TaskDefinition};
use crate::impls::TracingDiagnosticSink;
use crate::ports::{ActivityBehaviorFactory, DiagnosticSink};
use crate::registry::{RegistryError, TypeRegistry};

/// ResolverBuilder は ServiceTaskResolver を構築
///
/// # 使用例
/// ```ignore
/// let resolver = ResolverBuilder::new()
///     .factory(Arc::new(MyFactory))
///     .register_type("sendgrid")?
///     .build()?;
/// ```
pub struct ResolverBuilder {
    registry: TypeRegistry,
    factory: Option<Arc<dyn ActivityBehaviorFactory>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

/// BuildError は resolver 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No behavior factory configured. Call ResolverBuilder::factory() before build().")]
    MissingFactory,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
            factory: None,
            sink: None,
        }
    }

    pub fn factory(mut self, factory: Arc<dyn ActivityBehaviorFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Defaults to [`TracingDiagnosticSink`] when not set.
    pub fn diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// カスタムの名前付き型を登録
    pub fn register_type(mut self, name: &str) -> Result<Self, RegistryError> {
        self.registry.register_custom(name)?;
        Ok(self)
    }

    /// Registers every custom type listed in the configuration.
    pub fn with_config(self, config: &ResolverConfig) -> Result<Self, RegistryError> {
        config
            .registry
            .custom_types
            .iter()
            .try_fold(self, |builder, name| builder.register_type(name))
    }

    pub fn build(self) -> Result<ServiceTaskResolver, BuildError> {
        let factory = self.factory.ok_or(BuildError::MissingFactory)?;
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(TracingDiagnosticSink::new()));

        info!(
            types = ?self.registry.registered_types(),
            "service task resolver ready"
        );
        Ok(ServiceTaskResolver {
            classifier: Classifier::new(Arc::new(self.registry)),
            binder: BehaviorBinder::new(factory, sink),
        })
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of resolving one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub kind: ResolvedKind,
    pub state: ResolutionState,
}

/// レポートの 1 行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub kind: String,
    pub state: ResolutionState,
}

/// Summary of resolving a batch of definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub definitions: Vec<ReportEntry>,
    pub bound: usize,
    pub rejected: usize,
}

impl ResolutionReport {
    fn record(&mut self, definition: &TaskDefinition, resolution: &Resolution) {
        match resolution.state {
            ResolutionState::Bound => self.bound += 1,
            ResolutionState::Rejected => self.rejected += 1,
            ResolutionState::Unresolved | ResolutionState::Classified => {}
        }
        self.definitions.push(ReportEntry {
            id: definition.id().to_string(),
            kind: resolution.kind.label(),
            state: resolution.state,
        });
    }
}

/// Classifier → Binder.
///
/// 定義同士は独立しているので、`&self` のまま複数スレッドから呼べます
/// （`Send + Sync`）。
pub struct ServiceTaskResolver {
    classifier: Classifier,
    binder: BehaviorBinder,
}

impl ServiceTaskResolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.classifier.registry()
    }

    pub fn classify(&self, definition: &TaskDefinition) -> ResolvedKind {
        self.classifier.classify(definition)
    }

    /// `kind` is this resolver's classification. `state` is the outcome
    /// recorded on the definition, which may predate this call.
    pub fn resolve(&self, definition: &TaskDefinition) -> Resolution {
        let kind = self.classifier.classify(definition);
        let state = self.binder.bind(definition, &kind);
        Resolution { kind, state }
    }

    pub fn resolve_all(&self, definitions: &[TaskDefinition]) -> ResolutionReport {
        let mut report = ResolutionReport::default();
        for definition in definitions {
            let resolution = self.resolve(definition);
            report.record(definition, &resolution);
        }
        info!(
            bound = report.bound,
            rejected = report.rejected,
            "resolved service tasks"
        );
        report
    }
}

//! Classifier - service task の属性から ResolvedKind を決める
//!
//! 副作用のない全域関数です。分類できない入力もエラーにはせず
//! `ResolvedKind::Unclassified` を返します（ドキュメントのコンパイルを止めない）。
//!
//! # 優先順位（最初に一致した規則で確定）
//! 1. `type` が空でない → 名前付き型ディスパッチ
//! 2. `implementation` = class → ClassDelegate
//! 3. `implementation` = delegateExpression → DelegateExpression
//! 4. `implementation` = expression → Expression
//! 5. `implementation` = webService かつ `operationRef` が空でない → WebService
//! 6. それ以外 → Unclassified
//!
//! webService で operationRef が空の場合は 5 に一致せず 6 に落ちます。

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ClassificationMiss, ImplementationKind, ResolvedKind, TaskDefinition};
use crate::registry::TypeRegistry;

#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<TypeRegistry>,
}

impl Classifier {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// Classifier over the process-wide built-in registry.
    pub fn builtin() -> Self {
        Self::new(TypeRegistry::builtin())
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn classify(&self, definition: &TaskDefinition) -> ResolvedKind {
        let kind = self.classify_attributes(definition);
        debug!(
            definition_id = %definition.id(),
            kind = %kind,
            "classified service task"
        );
        kind
    }

    fn classify_attributes(&self, definition: &TaskDefinition) -> ResolvedKind {
        if let Some(token) = non_empty(definition.type_token()) {
            return self.dispatch_by_type(token, definition.id().as_str());
        }

        let implementation = definition.implementation_kind();
        match implementation.and_then(ImplementationKind::parse) {
            Some(ImplementationKind::Class) => ResolvedKind::ClassDelegate,
            Some(ImplementationKind::DelegateExpression) => ResolvedKind::DelegateExpression,
            Some(ImplementationKind::Expression) => ResolvedKind::Expression,
            Some(ImplementationKind::WebService)
                if non_empty(definition.operation_ref()).is_some() =>
            {
                ResolvedKind::WebService
            }
            _ => ResolvedKind::Unclassified(ClassificationMiss::MissingImplementation {
                definition_id: definition.id().to_string(),
                implementation: implementation.map(str::to_string),
            }),
        }
    }

    /// Named-type dispatch. An unknown token is a classification miss naming
    /// the token and the owning definition.
    pub fn dispatch_by_type(&self, token: &str, definition_id: &str) -> ResolvedKind {
        match self.registry.lookup(token) {
            Some(named) => ResolvedKind::TypeDispatch(named.clone()),
            None => ResolvedKind::Unclassified(ClassificationMiss::UnknownType {
                definition_id: definition_id.to_string(),
                token: token.to_string(),
            }),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classifies against the built-in registry.
pub fn classify(definition: &TaskDefinition) -> ResolvedKind {
    Classifier::builtin().classify(definition)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! BehaviorBinder - ResolvedKind に対応する behavior を構築して定義に束縛する
//!
//! # 副作用（定義ごとに一度だけ、どちらか一方のみ）
//! - 分類済み: factory の構築メソッドを 1 回だけ呼び、behavior を記録 → Bound
//! - Unclassified: Diagnostic を 1 件だけ報告し、Rejected を記録（behavior なし）
//!
//! 終端状態が記録済みの定義には何もしません。

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    Binding, ClassificationMiss, Diagnostic, NamedType, ResolutionState, ResolvedKind,
    TaskDefinition,
};
use crate::ports::{ActivityBehavior, ActivityBehaviorFactory, DiagnosticSink};

/// FactoryOperation は ResolvedKind と factory メソッドの 1:1 対応表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryOperation<'a> {
    Mail,
    Mule,
    Camel,
    Shell,
    Dmn,
    CustomType(&'a str),
    ClassDelegate,
    DelegateExpression,
    Expression,
    WebService,
}

impl<'a> FactoryOperation<'a> {
    /// The operation for a classified kind; the miss for `Unclassified`.
    pub fn for_kind(kind: &'a ResolvedKind) -> Result<Self, &'a ClassificationMiss> {
        let operation = match kind {
            ResolvedKind::TypeDispatch(NamedType::Mail) => FactoryOperation::Mail,
            ResolvedKind::TypeDispatch(NamedType::Mule) => FactoryOperation::Mule,
            ResolvedKind::TypeDispatch(NamedType::Camel) => FactoryOperation::Camel,
            ResolvedKind::TypeDispatch(NamedType::Shell) => FactoryOperation::Shell,
            ResolvedKind::TypeDispatch(NamedType::Dmn) => FactoryOperation::Dmn,
            ResolvedKind::TypeDispatch(NamedType::Custom(name)) => {
                FactoryOperation::CustomType(name)
            }
            ResolvedKind::ClassDelegate => FactoryOperation::ClassDelegate,
            ResolvedKind::DelegateExpression => FactoryOperation::DelegateExpression,
            ResolvedKind::Expression => FactoryOperation::Expression,
            ResolvedKind::WebService => FactoryOperation::WebService,
            ResolvedKind::Unclassified(miss) => return Err(miss),
        };
        Ok(operation)
    }

    pub fn invoke(
        self,
        factory: &dyn ActivityBehaviorFactory,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        match self {
            FactoryOperation::Mail => factory.create_mail_behavior(definition),
            FactoryOperation::Mule => factory.create_mule_behavior(definition),
            FactoryOperation::Camel => factory.create_camel_behavior(definition),
            FactoryOperation::Shell => factory.create_shell_behavior(definition),
            FactoryOperation::Dmn => factory.create_dmn_behavior(definition),
            FactoryOperation::CustomType(name) => {
                factory.create_custom_type_behavior(name, definition)
            }
            FactoryOperation::ClassDelegate => factory.create_class_delegate_behavior(definition),
            FactoryOperation::DelegateExpression => {
                factory.create_delegate_expression_behavior(definition)
            }
            FactoryOperation::Expression => factory.create_expression_behavior(definition),
            FactoryOperation::WebService => factory.create_web_service_behavior(definition),
        }
    }
}

pub struct BehaviorBinder {
    factory: Arc<dyn ActivityBehaviorFactory>,
    sink: Arc<dyn DiagnosticSink>,
}

impl BehaviorBinder {
    pub fn new(factory: Arc<dyn ActivityBehaviorFactory>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { factory, sink }
    }

    /// Binds `definition` according to `kind` and returns the terminal state.
    ///
    /// The outcome is recorded once. A definition that is already bound or
    /// rejected keeps that state: the factory is not called and no diagnostic
    /// is reported, whatever `kind` says.
    pub fn bind(&self, definition: &TaskDefinition, kind: &ResolvedKind) -> ResolutionState {
        let recorded = definition.state();
        if recorded.is_terminal() {
            debug!(definition_id = %definition.id(), state = ?recorded, "service task already resolved");
            return recorded;
        }

        let (state, written) = definition.settle_with(|| self.settle(definition, kind));
        debug_assert!(ResolutionState::Classified.can_transition_to(state));
        if written {
            debug!(definition_id = %definition.id(), kind = %kind, state = ?state, "resolved service task");
        }
        state
    }

    /// Runs inside the definition's one-time initializer, so the factory
    /// call or the diagnostic happens at most once per definition.
    fn settle(&self, definition: &TaskDefinition, kind: &ResolvedKind) -> Binding {
        match FactoryOperation::for_kind(kind) {
            Ok(operation) => Binding::Bound(operation.invoke(self.factory.as_ref(), definition)),
            Err(miss) => {
                self.sink.report(Diagnostic::from(miss));
                Binding::Rejected
            }
        }
    }
}

//! TaskDefinition - パーサーが生成する service task ノード
//!
//! 属性は upstream パーサーが抽出したものをそのまま保持します（検証はしない）。
//! 終端状態（Bound + behavior / Rejected）を記録するスロットだけが
//! このクレートの出力です。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

use super::state::ResolutionState;
use crate::ports::ActivityBehavior;

/// DefinitionId はドキュメント内で一意な task の識別子
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionId(String);

impl DefinitionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Terminal outcome recorded on a definition.
#[derive(Debug, Clone)]
pub enum Binding {
    Bound(Arc<dyn ActivityBehavior>),
    Rejected,
}

impl Binding {
    pub fn state(&self) -> ResolutionState {
        match self {
            Binding::Bound(_) => ResolutionState::Bound,
            Binding::Rejected => ResolutionState::Rejected,
        }
    }
}

/// Declarative service task node, prior to execution.
///
/// The outcome slot is a single-assignment cell: once a definition is bound
/// or rejected it stays that way, and concurrent binders race on
/// `OnceLock::get_or_init` rather than on a mutable field.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    id: DefinitionId,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    type_token: Option<String>,

    #[serde(default, rename = "implementation", skip_serializing_if = "Option::is_none")]
    implementation_kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    operation_ref: Option<String>,

    #[serde(skip)]
    outcome: OnceLock<Binding>,
}

impl TaskDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: DefinitionId::new(id),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, token: impl Into<String>) -> Self {
        self.type_token = Some(token.into());
        self
    }

    pub fn with_implementation(mut self, kind: impl Into<String>) -> Self {
        self.implementation_kind = Some(kind.into());
        self
    }

    pub fn with_operation_ref(mut self, operation_ref: impl Into<String>) -> Self {
        self.operation_ref = Some(operation_ref.into());
        self
    }

    pub fn id(&self) -> &DefinitionId {
        &self.id
    }

    pub fn type_token(&self) -> Option<&str> {
        self.type_token.as_deref()
    }

    pub fn implementation_kind(&self) -> Option<&str> {
        self.implementation_kind.as_deref()
    }

    pub fn operation_ref(&self) -> Option<&str> {
        self.operation_ref.as_deref()
    }

    /// 束縛済みの behavior（未束縛・Rejected なら None）
    pub fn behavior(&self) -> Option<&Arc<dyn ActivityBehavior>> {
        match self.outcome.get() {
            Some(Binding::Bound(behavior)) => Some(behavior),
            Some(Binding::Rejected) | None => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.behavior().is_some()
    }

    /// `Unresolved` until an outcome is recorded, then `Bound` or `Rejected`.
    pub fn state(&self) -> ResolutionState {
        self.outcome
            .get()
            .map_or(ResolutionState::Unresolved, Binding::state)
    }

    /// Records the outcome produced by `settle`. `settle` runs at most once
    /// per definition, even under concurrent callers. Returns the recorded
    /// terminal state and whether this call wrote it.
    pub(crate) fn settle_with<F>(&self, settle: F) -> (ResolutionState, bool)
    where
        F: FnOnce() -> Binding,
    {
        let mut written = false;
        let binding = self.outcome.get_or_init(|| {
            written = true;
            settle()
        });
        (binding.state(), written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::BehaviorDescriptor;

    #[test]
    fn deserializes_parser_attribute_names() {
        let def: TaskDefinition = serde_json::from_value(serde_json::json!({
            "id": "charge",
            "implementation": "webService",
            "operationRef": "tns:charge"
        }))
        .unwrap();

        assert_eq!(def.id().as_str(), "charge");
        assert_eq!(def.type_token(), None);
        assert_eq!(def.implementation_kind(), Some("webService"));
        assert_eq!(def.operation_ref(), Some("tns:charge"));
        assert!(!def.is_bound());
    }

    #[test]
    fn slot_is_written_once() {
        let def = TaskDefinition::new("t1");
        assert_eq!(def.state(), ResolutionState::Unresolved);

        let first =
            def.settle_with(|| Binding::Bound(Arc::new(BehaviorDescriptor::new("first"))));
        assert_eq!(first, (ResolutionState::Bound, true));
        let second = def.settle_with(|| panic!("slot already written"));
        assert_eq!(second, (ResolutionState::Bound, false));

        let bound = format!("{:?}", def.behavior().unwrap());
        assert!(bound.contains("first"));
    }

    #[test]
    fn rejected_is_terminal_and_unbound() {
        let def = TaskDefinition::new("t1");
        assert_eq!(def.settle_with(|| Binding::Rejected), (ResolutionState::Rejected, true));

        let again = def.settle_with(|| panic!("slot already written"));
        assert_eq!(again, (ResolutionState::Rejected, false));
        assert_eq!(def.state(), ResolutionState::Rejected);
        assert!(!def.is_bound());
        assert!(def.behavior().is_none());
    }
}

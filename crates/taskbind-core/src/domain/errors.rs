//! Errors - 分類ミス
//!
//! 解決処理の内部で起こりうる失敗は `ClassificationMiss` の 1 種類だけです。
//! ドキュメント全体のコンパイルを止めないよう、呼び出し側へは再送出せず
//! 診断（Diagnostic）として報告します。

use thiserror::Error;

use super::kind::ImplementationKind;

/// Attribute names an author can use to select an implementation, in the
/// order they are listed in the missing-implementation message.
pub const IMPLEMENTATION_ATTRIBUTES: [&str; 5] =
    ["class", "delegateExpression", "type", "operation", "expression"];

/// ClassificationMiss は回復可能な分類失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationMiss {
    /// `type` 属性が registry にない
    #[error("Invalid service task type: '{token}' for service task {definition_id}")]
    UnknownType { definition_id: String, token: String },

    /// どの実装属性も有効な組み合わせになっていない
    #[error(
        "One of the attributes 'class', 'delegateExpression', 'type', 'operation', or 'expression' is mandatory on serviceTask {definition_id}"
    )]
    MissingImplementation {
        definition_id: String,
        /// The raw `implementation` attribute, if any (e.g. `webService`
        /// without an operation).
        implementation: Option<String>,
    },
}

impl ClassificationMiss {
    pub fn definition_id(&self) -> &str {
        match self {
            ClassificationMiss::UnknownType { definition_id, .. } => definition_id,
            ClassificationMiss::MissingImplementation { definition_id, .. } => definition_id,
        }
    }

    /// The attribute value that caused the miss: the unknown type token, or an
    /// implementation attribute that did not lead anywhere.
    pub fn offending_token(&self) -> Option<&str> {
        match self {
            ClassificationMiss::UnknownType { token, .. } => Some(token.as_str()),
            ClassificationMiss::MissingImplementation { implementation, .. } => {
                implementation.as_deref()
            }
        }
    }

    /// `webService` was requested but no operation reference was supplied.
    pub fn is_web_service_without_operation(&self) -> bool {
        matches!(
            self,
            ClassificationMiss::MissingImplementation { implementation: Some(token), .. }
                if ImplementationKind::parse(token) == Some(ImplementationKind::WebService)
        )
    }
}

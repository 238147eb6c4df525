//! ActivityBehaviorFactory port - behavior の構築
//!
//! 実際の behavior（メール送信、シェル実行、Web サービス呼び出し...）は
//! このクレートの外側にあります。Binder は resolved kind に対応する
//! 構築メソッドをちょうど 1 回呼び、返ってきた値を不透明なまま保存します。

use std::fmt;
use std::sync::Arc;

use crate::domain::TaskDefinition;

/// ActivityBehavior は実行時 behavior の不透明なハンドル
///
/// このクレートは保存するだけで、呼び出すことはありません。
pub trait ActivityBehavior: fmt::Debug + Send + Sync {}

/// One construction operation per resolved kind.
///
/// # 対応表
/// | ResolvedKind | メソッド |
/// |---|---|
/// | TypeDispatch(Mail) | `create_mail_behavior` |
/// | TypeDispatch(Mule) | `create_mule_behavior` |
/// | TypeDispatch(Camel) | `create_camel_behavior` |
/// | TypeDispatch(Shell) | `create_shell_behavior` |
/// | TypeDispatch(Dmn) | `create_dmn_behavior` |
/// | TypeDispatch(Custom) | `create_custom_type_behavior` |
/// | ClassDelegate | `create_class_delegate_behavior` |
/// | DelegateExpression | `create_delegate_expression_behavior` |
/// | Expression | `create_expression_behavior` |
/// | WebService | `create_web_service_behavior` |
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数の worker から同じ factory を使える）
pub trait ActivityBehaviorFactory: Send + Sync {
    fn create_mail_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior>;

    fn create_mule_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior>;

    fn create_camel_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior>;

    fn create_shell_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior>;

    fn create_dmn_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior>;

    /// Types registered at runtime. `type_name` is the registry key, not the
    /// token as written in the document.
    fn create_custom_type_behavior(
        &self,
        type_name: &str,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior>;

    fn create_class_delegate_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior>;

    fn create_delegate_expression_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior>;

    fn create_expression_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior>;

    fn create_web_service_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior>;
}

//! DescriptorBehaviorFactory - 構築内容を記述するだけの factory
//!
//! 実 behavior を持たない環境（CLI の dry-run、テスト）で使います。
//! 生成される `BehaviorDescriptor` は、どの構築メソッドが、どの定義に対して
//! 呼ばれたかを保持します。

use serde::Serialize;
use std::sync::Arc;

use crate::domain::TaskDefinition;
use crate::ports::{ActivityBehavior, ActivityBehaviorFactory};

/// Describes a behavior that would have been constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehaviorDescriptor {
    pub variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<String>,
}

impl BehaviorDescriptor {
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            definition_id: None,
        }
    }

    fn for_definition(variant: impl Into<String>, definition: &TaskDefinition) -> Self {
        Self {
            variant: variant.into(),
            definition_id: Some(definition.id().to_string()),
        }
    }
}

impl ActivityBehavior for BehaviorDescriptor {}

#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorBehaviorFactory;

impl DescriptorBehaviorFactory {
    pub fn new() -> Self {
        Self
    }

    fn describe(
        variant: impl Into<String>,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        Arc::new(BehaviorDescriptor::for_definition(variant, definition))
    }
}

impl ActivityBehaviorFactory for DescriptorBehaviorFactory {
    fn create_mail_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        Self::describe("mail", definition)
    }

    fn create_mule_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        Self::describe("mule", definition)
    }

    fn create_camel_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        Self::describe("camel", definition)
    }

    fn create_shell_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        Self::describe("shell", definition)
    }

    fn create_dmn_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        Self::describe("dmn", definition)
    }

    fn create_custom_type_behavior(
        &self,
        type_name: &str,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        Self::describe(format!("custom:{type_name}"), definition)
    }

    fn create_class_delegate_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        Self::describe("class", definition)
    }

    fn create_delegate_expression_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        Self::describe("delegateExpression", definition)
    }

    fn create_expression_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        Self::describe("expression", definition)
    }

    fn create_web_service_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        Self::describe("webService", definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_names_variant_and_definition() {
        let def = TaskDefinition::new("notify").with_type("mail");
        let behavior =
            DescriptorBehaviorFactory::new().create_custom_type_behavior("sendgrid", &def);

        let debug = format!("{behavior:?}");
        assert!(debug.contains("custom:sendgrid"));
        assert!(debug.contains("notify"));
    }
}

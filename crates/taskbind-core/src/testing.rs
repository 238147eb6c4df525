//! Test doubles for the factory port.
//!
//! `RecordingBehaviorFactory` records every construction call as
//! `(operation, definition_id)` so tests can assert that exactly one operation
//! ran per definition.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::TaskDefinition;
use crate::ports::{ActivityBehavior, ActivityBehaviorFactory};

/// Behavior produced by [`RecordingBehaviorFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBehavior {
    pub operation: String,
    pub definition_id: String,
}

impl ActivityBehavior for RecordedBehavior {}

/// Cloning shares the call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingBehaviorFactory {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingBehaviorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls made for one definition.
    pub fn calls_for(&self, definition_id: &str) -> usize {
        self.calls()
            .iter()
            .filter(|(_, id)| id == definition_id)
            .count()
    }

    fn record(
        &self,
        operation: String,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        let definition_id = definition.id().to_string();
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((operation.clone(), definition_id.clone()));
        Arc::new(RecordedBehavior {
            operation,
            definition_id,
        })
    }
}

impl ActivityBehaviorFactory for RecordingBehaviorFactory {
    fn create_mail_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        self.record("create_mail_behavior".to_string(), definition)
    }

    fn create_mule_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        self.record("create_mule_behavior".to_string(), definition)
    }

    fn create_camel_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        self.record("create_camel_behavior".to_string(), definition)
    }

    fn create_shell_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        self.record("create_shell_behavior".to_string(), definition)
    }

    fn create_dmn_behavior(&self, definition: &TaskDefinition) -> Arc<dyn ActivityBehavior> {
        self.record("create_dmn_behavior".to_string(), definition)
    }

    fn create_custom_type_behavior(
        &self,
        type_name: &str,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        self.record(format!("create_custom_type_behavior:{type_name}"), definition)
    }

    fn create_class_delegate_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        self.record("create_class_delegate_behavior".to_string(), definition)
    }

    fn create_delegate_expression_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        self.record("create_delegate_expression_behavior".to_string(), definition)
    }

    fn create_expression_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        self.record("create_expression_behavior".to_string(), definition)
    }

    fn create_web_service_behavior(
        &self,
        definition: &TaskDefinition,
    ) -> Arc<dyn ActivityBehavior> {
        self.record("create_web_service_behavior".to_string(), definition)
    }
}

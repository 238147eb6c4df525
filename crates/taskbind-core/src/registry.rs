//! TypeRegistry - `type` トークンから NamedType への対応表
//!
//! 条件分岐の連鎖ではなく表引きで名前付き型を解決します。
//! 型を増やすときはエントリを足すだけで、分岐は増えません。
//!
//! # ライフサイクル
//! - 構築時に登録（mutable）
//! - 解決中は読み取りのみ（`Arc<TypeRegistry>` で共有、ロック不要）

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::domain::NamedType;
use crate::domain::kind::fold_case;

static BUILTIN: LazyLock<Arc<TypeRegistry>> = LazyLock::new(|| Arc::new(TypeRegistry::new()));

/// RegistryError は TypeRegistry の登録エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Service task type '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Service task type name must not be empty")]
    EmptyName,
}

/// Case-insensitive map from type token to [`NamedType`].
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, NamedType>,
}

impl TypeRegistry {
    /// Registry holding the built-in types (`mail`, `mule`, `camel`,
    /// `shell`, `dmn`).
    pub fn new() -> Self {
        let types = NamedType::BUILTIN
            .into_iter()
            .map(|named| (named.token().to_string(), named))
            .collect();
        Self { types }
    }

    /// Shared process-wide registry with the built-in types only.
    pub fn builtin() -> Arc<TypeRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Registers a custom type. The name is stored case-folded.
    pub fn register_custom(&mut self, name: &str) -> Result<NamedType, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        let key = normalize(name);
        if self.types.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered(key));
        }
        let named = NamedType::Custom(key.clone());
        self.types.insert(key, named.clone());
        Ok(named)
    }

    /// 大文字小文字を無視した完全一致
    pub fn lookup(&self, token: &str) -> Option<&NamedType> {
        self.types.get(&normalize(token))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Registered type names, sorted.
    pub fn registered_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(token: &str) -> String {
    fold_case(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::mail("mail", NamedType::Mail)]
    #[case::mail_upper("MAIL", NamedType::Mail)]
    #[case::mule("Mule", NamedType::Mule)]
    #[case::camel("cAmEl", NamedType::Camel)]
    #[case::shell("shell", NamedType::Shell)]
    #[case::dmn("DMN", NamedType::Dmn)]
    #[case::long_s("ſhell", NamedType::Shell)]
    fn builtin_lookup_ignores_case(#[case] token: &str, #[case] expected: NamedType) {
        let registry = TypeRegistry::new();
        assert_eq!(registry.lookup(token), Some(&expected));
    }

    #[rstest]
    #[case::unknown("bogus")]
    #[case::padded("mail ")]
    #[case::prefix("mai")]
    fn lookup_is_exact(#[case] token: &str) {
        assert!(TypeRegistry::new().lookup(token).is_none());
    }

    #[test]
    fn register_custom_and_lookup() {
        let mut registry = TypeRegistry::new();
        let named = registry.register_custom("SendGrid").unwrap();

        assert_eq!(named, NamedType::Custom("sendgrid".to_string()));
        assert_eq!(registry.lookup("sendgrid"), Some(&named));
        assert_eq!(registry.lookup("SENDGRID"), Some(&named));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn custom_names_fold_the_same_way_as_implementation_kinds() {
        let mut registry = TypeRegistry::new();
        let named = registry.register_custom("Émail").unwrap();

        assert_eq!(registry.lookup("ÉMAIL"), Some(&named));
        assert_eq!(registry.lookup("émail"), Some(&named));
        assert_eq!(
            registry.register_custom("éMAIL"),
            Err(RegistryError::AlreadyRegistered("émail".to_string()))
        );
    }

    #[test]
    fn double_registration() {
        let mut registry = TypeRegistry::new();
        registry.register_custom("kafka").unwrap();

        let result = registry.register_custom("Kafka");
        assert_eq!(result, Err(RegistryError::AlreadyRegistered("kafka".to_string())));
    }

    #[test]
    fn builtin_names_cannot_be_shadowed() {
        let mut registry = TypeRegistry::new();
        assert!(matches!(
            registry.register_custom("Mail"),
            Err(RegistryError::AlreadyRegistered(name)) if name == "mail"
        ));
        assert_eq!(registry.register_custom(""), Err(RegistryError::EmptyName));
    }

    #[test]
    fn registered_types_are_sorted() {
        let registry = TypeRegistry::builtin();
        assert_eq!(
            registry.registered_types(),
            vec!["camel", "dmn", "mail", "mule", "shell"]
        );
    }
}

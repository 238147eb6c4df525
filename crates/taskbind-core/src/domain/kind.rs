//! Kind - 分類結果の語彙
//!
//! - `ImplementationKind`: 汎用の 4 つの実装メカニズム
//! - `NamedType`: `type` 属性で指定される名前付きコネクタ
//! - `ResolvedKind`: Classifier の出力（解決ごとに新しく生成、永続化しない）

use serde::Serialize;
use std::fmt;

use super::errors::ClassificationMiss;

/// The generic task-binding mechanisms carried by the `implementation`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImplementationKind {
    Class,
    DelegateExpression,
    Expression,
    WebService,
}

impl ImplementationKind {
    pub const ALL: [ImplementationKind; 4] = [
        ImplementationKind::Class,
        ImplementationKind::DelegateExpression,
        ImplementationKind::Expression,
        ImplementationKind::WebService,
    ];

    /// 属性値としてのトークン
    pub fn token(self) -> &'static str {
        match self {
            ImplementationKind::Class => "class",
            ImplementationKind::DelegateExpression => "delegateExpression",
            ImplementationKind::Expression => "expression",
            ImplementationKind::WebService => "webService",
        }
    }

    /// Case-insensitive match of an attribute value. Unknown tokens yield
    /// `None`; they are not an error at this layer.
    pub fn parse(token: &str) -> Option<Self> {
        let folded = fold_case(token);
        Self::ALL
            .into_iter()
            .find(|kind| fold_case(kind.token()) == folded)
    }
}

impl fmt::Display for ImplementationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Case folding shared by every case-insensitive token comparison.
///
/// Each character is mapped to upper case and then to lower case, so
/// `ſ`/`S`/`s` and `K` (Kelvin)/`K`/`k` fold together. Mappings that expand
/// to several characters (`ß` → `SS`) leave the character as it is, which
/// keeps the folded token the same length as the input.
pub(crate) fn fold_case(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            let upper = single(c.to_uppercase()).unwrap_or(c);
            single(upper.to_lowercase()).unwrap_or(upper)
        })
        .collect()
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// NamedType は `type` 属性で選択されるコネクタ
///
/// # 組み込み
/// - `mail`: メール送信
/// - `mule`: 外部メッセージングバス
/// - `camel`: 外部ルーティングコネクタ
/// - `shell`: シェル実行
/// - `dmn`: 決定表
///
/// `Custom` は registry に後から登録された型（登録名を保持）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedType {
    Mail,
    Mule,
    Camel,
    Shell,
    Dmn,
    Custom(String),
}

impl NamedType {
    pub const BUILTIN: [NamedType; 5] = [
        NamedType::Mail,
        NamedType::Mule,
        NamedType::Camel,
        NamedType::Shell,
        NamedType::Dmn,
    ];

    /// Registry key for this type (lower case).
    pub fn token(&self) -> &str {
        match self {
            NamedType::Mail => "mail",
            NamedType::Mule => "mule",
            NamedType::Camel => "camel",
            NamedType::Shell => "shell",
            NamedType::Dmn => "dmn",
            NamedType::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, NamedType::Custom(_))
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Result of classifying one definition.
///
/// `Unclassified` carries the miss itself so the failure path is observable
/// without inspecting log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedKind {
    TypeDispatch(NamedType),
    ClassDelegate,
    DelegateExpression,
    Expression,
    WebService,
    Unclassified(ClassificationMiss),
}

impl ResolvedKind {
    pub fn is_classified(&self) -> bool {
        !matches!(self, ResolvedKind::Unclassified(_))
    }

    /// The miss for `Unclassified`, `None` otherwise.
    pub fn miss(&self) -> Option<&ClassificationMiss> {
        match self {
            ResolvedKind::Unclassified(miss) => Some(miss),
            _ => None,
        }
    }

    /// レポート用の短いラベル（例: `type:mail`, `expression`）
    pub fn label(&self) -> String {
        match self {
            ResolvedKind::TypeDispatch(named) => format!("type:{named}"),
            ResolvedKind::ClassDelegate => ImplementationKind::Class.token().to_string(),
            ResolvedKind::DelegateExpression => {
                ImplementationKind::DelegateExpression.token().to_string()
            }
            ResolvedKind::Expression => ImplementationKind::Expression.token().to_string(),
            ResolvedKind::WebService => ImplementationKind::WebService.token().to_string(),
            ResolvedKind::Unclassified(_) => "unclassified".to_string(),
        }
    }
}

impl fmt::Display for ResolvedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower("class", ImplementationKind::Class)]
    #[case::upper("CLASS", ImplementationKind::Class)]
    #[case::camel("delegateExpression", ImplementationKind::DelegateExpression)]
    #[case::lower_delegate("delegateexpression", ImplementationKind::DelegateExpression)]
    #[case::expression("Expression", ImplementationKind::Expression)]
    #[case::web_service("WEBSERVICE", ImplementationKind::WebService)]
    #[case::long_s("claſs", ImplementationKind::Class)]
    #[case::long_s_expression("expreſſion", ImplementationKind::Expression)]
    fn implementation_kind_parses_case_insensitively(
        #[case] token: &str,
        #[case] expected: ImplementationKind,
    ) {
        assert_eq!(ImplementationKind::parse(token), Some(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::unknown("script")]
    #[case::padded(" class")]
    #[case::sharp_s("claß")]
    fn implementation_kind_rejects_other_tokens(#[case] token: &str) {
        assert_eq!(ImplementationKind::parse(token), None);
    }

    #[rstest]
    #[case::ascii("MAIL", "mail")]
    #[case::long_s("ſhell", "shell")]
    #[case::kelvin("\u{212A}afka", "kafka")]
    #[case::accented("ÉMAIL", "émail")]
    #[case::sharp_s_kept("Straße", "straße")]
    fn fold_case_maps_case_variants_together(#[case] token: &str, #[case] folded: &str) {
        assert_eq!(fold_case(token), folded);
    }

    #[test]
    fn labels_name_the_variant() {
        assert_eq!(ResolvedKind::TypeDispatch(NamedType::Dmn).label(), "type:dmn");
        assert_eq!(
            ResolvedKind::TypeDispatch(NamedType::Custom("sendgrid".into())).label(),
            "type:sendgrid"
        );
        assert_eq!(ResolvedKind::DelegateExpression.label(), "delegateExpression");
        assert!(ResolvedKind::WebService.miss().is_none());
    }
}

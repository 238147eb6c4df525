//! State - 定義ごとの解決状態
//!
//! # 状態遷移
//! - Unresolved → Classified → Bound
//! - Unresolved → Classified → Rejected（Unclassified の場合）
//!
//! Bound / Rejected が終端。逆向きの遷移はありません。

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    Unresolved,
    Classified,
    Bound,
    Rejected,
}

impl ResolutionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ResolutionState::Bound | ResolutionState::Rejected)
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(self, next: ResolutionState) -> bool {
        matches!(
            (self, next),
            (ResolutionState::Unresolved, ResolutionState::Classified)
                | (ResolutionState::Classified, ResolutionState::Bound)
                | (ResolutionState::Classified, ResolutionState::Rejected)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::classify(ResolutionState::Unresolved, ResolutionState::Classified, true)]
    #[case::bind(ResolutionState::Classified, ResolutionState::Bound, true)]
    #[case::reject(ResolutionState::Classified, ResolutionState::Rejected, true)]
    #[case::skip_classify(ResolutionState::Unresolved, ResolutionState::Bound, false)]
    #[case::rebind(ResolutionState::Bound, ResolutionState::Bound, false)]
    #[case::unreject(ResolutionState::Rejected, ResolutionState::Classified, false)]
    fn transitions(
        #[case] from: ResolutionState,
        #[case] to: ResolutionState,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn only_bound_and_rejected_are_terminal() {
        assert!(ResolutionState::Bound.is_terminal());
        assert!(ResolutionState::Rejected.is_terminal());
        assert!(!ResolutionState::Unresolved.is_terminal());
        assert!(!ResolutionState::Classified.is_terminal());
    }
}

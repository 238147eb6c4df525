//! Domain model (definitions, kinds, misses, diagnostics, states).
//!
//! - definition: TaskDefinition（入力 + 単一代入の結果スロット）, Binding
//! - kind: ImplementationKind, NamedType, ResolvedKind
//! - errors: ClassificationMiss
//! - diagnostic: Diagnostic, Severity
//! - state: ResolutionState

pub mod definition;
pub mod kind;
pub mod errors;
pub mod diagnostic;
pub mod state;

pub use self::definition::{Binding, DefinitionId, TaskDefinition};
pub use self::kind::{ImplementationKind, NamedType, ResolvedKind};
pub use self::errors::{ClassificationMiss, IMPLEMENTATION_ATTRIBUTES};
pub use self::diagnostic::{Diagnostic, Severity};
pub use self::state::ResolutionState;

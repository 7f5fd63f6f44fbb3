//! Error types for compilation and the block runtime.
//!
//! Neither error class is transient. A [`CompileError`] means the template
//! or its slot declaration is malformed. A [`BlockError`] means a caller
//! broke a runtime contract: props that do not fit the compiled block, a
//! host tree that no longer matches the skeleton, or an instance used out
//! of order. Both surface immediately and nothing is retried.

use hollow_ir::{Name, Path};

/// Errors raised while capturing or compiling a template.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("slot `{slot}` is declared more than once")]
    DuplicateSlot { slot: Name },

    /// A hole names a slot that was never declared. Only reachable with
    /// hand-built holes.
    #[error("hole `{hole}` does not name a declared slot")]
    UndeclaredHole { hole: Name },

    #[error("declared slot `{slot}` is never used by the template")]
    UnusedSlot { slot: Name },

    #[error("hole `{hole}` is bound at {count} positions")]
    DuplicateHole { hole: Name, count: usize },

    /// A template whose root is a hole has no node to address it from.
    #[error("hole `{hole}` cannot be the root of a template")]
    RootHole { hole: Name },
}

/// Errors raised by mount and patch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    // Structural mismatch
    #[error("path {path:?} of edit {edit} does not resolve in the mounted tree")]
    PathUnresolved { edit: usize, path: Path },

    #[error("child {index} of edit {edit} is missing from the mounted tree")]
    ChildMissing { edit: usize, index: usize },

    #[error("cannot patch with an instance of a different compiled block")]
    BlockMismatch,

    // Slot shape
    #[error("slot `{hole}` switched between a scalar and a nested block")]
    SlotKindChanged { hole: Name },

    #[error("attribute `{attribute}` cannot hold the nested block in slot `{hole}`")]
    BlockInAttribute { attribute: Name, hole: Name },

    #[error("nested block in slot `{hole}` is bound to {count} edits but mounts once")]
    NestedBlockShared { hole: Name, count: usize },

    // Usage
    #[error("props are missing slot `{hole}`")]
    MissingProp { hole: Name },

    #[error("instance is not mounted")]
    NotMounted,

    #[error("instance is already mounted")]
    AlreadyMounted,
}

impl BlockError {
    /// Returns `true` for errors meaning the host tree or compiled block
    /// does not match what the instance expects.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            BlockError::PathUnresolved { .. }
                | BlockError::ChildMissing { .. }
                | BlockError::BlockMismatch
        )
    }
}

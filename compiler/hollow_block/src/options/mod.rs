//! Compilation options.

/// What to do when one hole name is bound at more than one position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateHolePolicy {
    /// Record one independent edit per position. All of them are patched
    /// from the same old/new prop pair.
    #[default]
    Allow,
    /// Fail with [`CompileError::DuplicateHole`](crate::CompileError::DuplicateHole).
    Reject,
}

/// What to do with a declared slot the template never reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnusedSlotPolicy {
    /// Log a warning and compile anyway.
    #[default]
    Warn,
    /// Fail with [`CompileError::UnusedSlot`](crate::CompileError::UnusedSlot).
    Reject,
}

/// Options for [`compile_block_with`](crate::compile_block_with) and
/// [`compile_fragment`](crate::compile_fragment).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub duplicate_holes: DuplicateHolePolicy,
    pub unused_slots: UnusedSlotPolicy,
}

impl CompileOptions {
    /// Default options, usable in `const` and `static` items.
    pub const fn new() -> Self {
        CompileOptions {
            duplicate_holes: DuplicateHolePolicy::Allow,
            unused_slots: UnusedSlotPolicy::Warn,
        }
    }

    /// Reject duplicate holes and unused slots.
    pub const fn strict() -> Self {
        CompileOptions {
            duplicate_holes: DuplicateHolePolicy::Reject,
            unused_slots: UnusedSlotPolicy::Reject,
        }
    }

    #[must_use]
    pub const fn with_duplicate_holes(mut self, policy: DuplicateHolePolicy) -> Self {
        self.duplicate_holes = policy;
        self
    }

    #[must_use]
    pub const fn with_unused_slots(mut self, policy: UnusedSlotPolicy) -> Self {
        self.unused_slots = policy;
        self
    }
}

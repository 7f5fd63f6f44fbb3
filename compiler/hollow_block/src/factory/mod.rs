//! Compiled blocks and the factories that instantiate them.
//!
//! [`compile_block`] runs capture and compilation once and wraps the result
//! in a [`BlockFactory`]. The factory holds the [`CompiledBlock`] behind an
//! `Arc`; every instance it creates points at that same allocation, which
//! is also how patch recognizes instances of the same block.
//!
//! [`BlockCell`] defers compilation to first use so blocks can live in
//! `static` items.

use std::fmt;
use std::sync::{Arc, OnceLock};

use hollow_ir::{Edit, Fragment, Hole, Name, Skeleton};
use rustc_hash::FxHashMap;

use crate::{
    capture_template, compile_fragment, BlockInstance, CompileError, CompileOptions, Props,
    UnusedSlotPolicy,
};

/// The immutable result of compiling one template.
pub struct CompiledBlock {
    slots: Vec<Name>,
    skeleton: Skeleton,
    edits: Vec<Edit>,
    /// Number of edits bound to each slot.
    uses: FxHashMap<Name, usize>,
}

impl CompiledBlock {
    /// Declared slots, in declaration order.
    pub fn slots(&self) -> &[Name] {
        &self.slots
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Edits in mount order. Edit `i` pairs with resolved node `i`.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// How many edits read from `slot`.
    pub fn uses_of(&self, slot: &str) -> usize {
        self.uses.get(slot).copied().unwrap_or_default()
    }
}

impl fmt::Debug for CompiledBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledBlock")
            .field("slots", &self.slots)
            .field("nodes", &self.skeleton.node_count())
            .field("edits", &self.edits)
            .finish_non_exhaustive()
    }
}

/// Creates instances of one compiled block. Cheap to clone.
#[derive(Clone, Debug)]
pub struct BlockFactory {
    block: Arc<CompiledBlock>,
}

impl BlockFactory {
    /// Bind `props` to a new, unmounted instance. Never touches a host.
    pub fn instantiate(&self, props: Props) -> BlockInstance {
        BlockInstance::new(Arc::clone(&self.block), props)
    }

    pub fn block(&self) -> &CompiledBlock {
        &self.block
    }
}

/// Compile `template` with default options.
///
/// ```
/// use hollow_block::{compile_block, Props};
/// use hollow_ir::h;
///
/// let button = compile_block(["onClick", "number"], |[on_click, number]| {
///     h("button", [("onClick", on_click)], [number])
/// })?;
/// assert_eq!(button.block().edits().len(), 2);
/// let instance = button.instantiate(Props::new().with("number", 0));
/// assert!(!instance.is_mounted());
/// # Ok::<(), hollow_block::CompileError>(())
/// ```
pub fn compile_block<const N: usize, F>(
    slots: [&str; N],
    template: F,
) -> Result<BlockFactory, CompileError>
where
    F: FnOnce([Hole; N]) -> Fragment,
{
    compile_block_with(slots, &CompileOptions::default(), template)
}

/// Compile `template` under explicit options.
pub fn compile_block_with<const N: usize, F>(
    slots: [&str; N],
    options: &CompileOptions,
    template: F,
) -> Result<BlockFactory, CompileError>
where
    F: FnOnce([Hole; N]) -> Fragment,
{
    let (slots, fragment) = capture_template(slots, template)?.into_parts();
    let compiled = compile_fragment(&fragment, options)?;

    let mut uses: FxHashMap<Name, usize> = FxHashMap::default();
    for edit in &compiled.edits {
        let hole = edit.hole();
        if !slots.contains(hole) {
            return Err(CompileError::UndeclaredHole { hole: hole.clone() });
        }
        *uses.entry(hole.clone()).or_default() += 1;
    }

    for slot in &slots {
        if uses.contains_key(slot) {
            continue;
        }
        match options.unused_slots {
            UnusedSlotPolicy::Warn => {
                tracing::warn!(%slot, "declared slot is never used by the template");
            }
            UnusedSlotPolicy::Reject => {
                return Err(CompileError::UnusedSlot { slot: slot.clone() });
            }
        }
    }

    tracing::debug!(
        slots = slots.len(),
        edits = compiled.edits.len(),
        "compiled block"
    );
    Ok(BlockFactory {
        block: Arc::new(CompiledBlock {
            slots,
            skeleton: compiled.skeleton,
            edits: compiled.edits,
            uses,
        }),
    })
}

/// A block compiled on first use, for `static` items.
///
/// ```
/// use hollow_block::{BlockCell, Props};
/// use hollow_ir::{h, Fragment, Hole, NO_PROPS};
///
/// fn greeting([name]: [Hole; 1]) -> Fragment {
///     h("p", NO_PROPS, [name])
/// }
///
/// static GREETING: BlockCell<1> = BlockCell::new(["name"], greeting);
///
/// let instance = GREETING.instantiate(Props::new().with("name", "Ada"))?;
/// assert!(!instance.is_mounted());
/// # Ok::<(), hollow_block::CompileError>(())
/// ```
pub struct BlockCell<const N: usize> {
    slots: [&'static str; N],
    template: fn([Hole; N]) -> Fragment,
    options: CompileOptions,
    compiled: OnceLock<Result<BlockFactory, CompileError>>,
}

impl<const N: usize> BlockCell<N> {
    pub const fn new(slots: [&'static str; N], template: fn([Hole; N]) -> Fragment) -> Self {
        BlockCell::with_options(slots, CompileOptions::new(), template)
    }

    pub const fn with_options(
        slots: [&'static str; N],
        options: CompileOptions,
        template: fn([Hole; N]) -> Fragment,
    ) -> Self {
        BlockCell {
            slots,
            template,
            options,
            compiled: OnceLock::new(),
        }
    }

    /// The factory, compiling on the first call. A compile error is cached
    /// and returned on every call.
    pub fn factory(&self) -> Result<&BlockFactory, CompileError> {
        self.compiled
            .get_or_init(|| compile_block_with(self.slots, &self.options, self.template))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn instantiate(&self, props: Props) -> Result<BlockInstance, CompileError> {
        Ok(self.factory()?.instantiate(props))
    }
}

impl<const N: usize> fmt::Debug for BlockCell<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockCell")
            .field("slots", &self.slots)
            .field("compiled", &self.compiled.get().is_some())
            .finish_non_exhaustive()
    }
}

//! Block instances: mount and patch.
//!
//! An instance is a compiled block plus one set of props. It is created
//! unmounted. [`BlockInstance::mount`] clones the skeleton into a host
//! tree, resolves every edit's path to a node once, and fills the slots.
//! [`BlockInstance::patch`] then takes a fresh instance of the same block
//! and brings the mounted tree in line with its props, visiting the
//! resolved nodes directly without walking or diffing the tree.
//!
//! A slot holding a nested block mounts that block under the slot's parent
//! element (replacing the parent's children). On patch the live nested
//! instance is patched in place, so its nodes survive.

use std::fmt;
use std::sync::Arc;

use hollow_host::{Host, NodeId};
use hollow_ir::{ensure_sufficient_stack, Edit, Name, Scalar};

use crate::{BlockError, CompiledBlock, Props, Value};

/// Counts from one [`BlockInstance::patch`] call. Nested patches are not
/// included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatchStats {
    /// Edits examined.
    pub edits: usize,
    /// Edits that touched the host or a nested block.
    pub changed: usize,
    /// Edits whose value was equal and left alone.
    pub skipped: usize,
}

/// One compiled block bound to one set of props.
pub struct BlockInstance {
    block: Arc<CompiledBlock>,
    props: Props,
    /// Resolved node of edit `i`, filled by mount.
    resolved: Vec<NodeId>,
    root: Option<NodeId>,
}

impl BlockInstance {
    pub(crate) fn new(block: Arc<CompiledBlock>, props: Props) -> Self {
        let resolved = Vec::with_capacity(block.edits().len());
        BlockInstance {
            block,
            props,
            resolved,
            root: None,
        }
    }

    pub fn block(&self) -> &CompiledBlock {
        &self.block
    }

    /// Returns `true` if both instances come from the same compile.
    #[inline]
    pub fn same_block(&self, other: &BlockInstance) -> bool {
        Arc::ptr_eq(&self.block, &other.block)
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    #[inline]
    pub fn edits(&self) -> &[Edit] {
        self.block.edits()
    }

    /// Resolved node per edit; empty until mounted.
    #[inline]
    pub fn resolved_nodes(&self) -> &[NodeId] {
        &self.resolved
    }

    /// The host node the skeleton was cloned into.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// Mount into `target`, replacing its children. Returns the root of
    /// the cloned skeleton.
    ///
    /// On error the host may hold a partially filled clone and the
    /// instance stays unmounted.
    pub fn mount<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        target: NodeId,
    ) -> Result<NodeId, BlockError> {
        if self.is_mounted() {
            return Err(BlockError::AlreadyMounted);
        }
        ensure_sufficient_stack(|| self.mount_inner(host, target))
    }

    fn mount_inner<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        target: NodeId,
    ) -> Result<NodeId, BlockError> {
        let block = Arc::clone(&self.block);
        let root = host.clone_skeleton(block.skeleton().root());
        host.clear_children(target);
        host.append_child(target, root);

        let mut resolved = Vec::with_capacity(block.edits().len());
        for (i, edit) in block.edits().iter().enumerate() {
            let node = host
                .resolve_path(root, edit.path().indices())
                .ok_or_else(|| BlockError::PathUnresolved {
                    edit: i,
                    path: edit.path().clone(),
                })?;
            resolved.push(node);

            let hole = edit.hole();
            let value = self
                .props
                .get_mut(hole.as_str())
                .ok_or_else(|| missing_prop(hole))?;
            match (edit, value) {
                (Edit::Attribute { attribute, .. }, Value::Scalar(scalar)) => {
                    host.set_attribute(node, attribute, scalar);
                }
                (Edit::Attribute { attribute, .. }, Value::Block(_)) => {
                    return Err(BlockError::BlockInAttribute {
                        attribute: attribute.clone(),
                        hole: hole.clone(),
                    });
                }
                (Edit::Child { index, .. }, Value::Scalar(scalar)) => {
                    let leaf = host.create_text(&scalar.to_text());
                    host.insert_child(node, *index, leaf);
                }
                (Edit::Child { .. }, Value::Block(nested)) => {
                    let count = block.uses_of(hole.as_str());
                    if count > 1 {
                        return Err(BlockError::NestedBlockShared {
                            hole: hole.clone(),
                            count,
                        });
                    }
                    nested.mount(host, node)?;
                }
            }
            tracing::trace!(edit = i, %hole, ?node, "filled slot");
        }

        self.resolved = resolved;
        self.root = Some(root);
        tracing::debug!(?root, edits = self.resolved.len(), "mounted block");
        Ok(root)
    }

    /// Bring the mounted tree in line with `next`'s props, then adopt them.
    ///
    /// Every edit compares the props as they were before this call, so
    /// edits sharing a slot all see the same old value. The whole patch,
    /// nested blocks included, is checked against the host before the
    /// first mutation; on error neither the tree nor the props change.
    pub fn patch<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        next: BlockInstance,
    ) -> Result<PatchStats, BlockError> {
        let plan = self.plan(&*host, &next)?;
        let stats = plan.stats;
        self.apply(host, plan, next);
        tracing::debug!(
            changed = stats.changed,
            skipped = stats.skipped,
            "patched block"
        );
        Ok(stats)
    }

    /// Work out every host call `patch` will make, touching nothing.
    fn plan<H: Host + ?Sized>(&self, host: &H, next: &BlockInstance) -> Result<Plan, BlockError> {
        if !self.same_block(next) {
            return Err(BlockError::BlockMismatch);
        }
        if !self.is_mounted() {
            return Err(BlockError::NotMounted);
        }
        ensure_sufficient_stack(|| self.plan_edits(host, next))
    }

    fn plan_edits<H: Host + ?Sized>(
        &self,
        host: &H,
        next: &BlockInstance,
    ) -> Result<Plan, BlockError> {
        let edits = self.block.edits();
        let mut plan = Plan {
            steps: Vec::new(),
            stats: PatchStats {
                edits: edits.len(),
                ..PatchStats::default()
            },
        };

        for (i, edit) in edits.iter().enumerate() {
            let hole = edit.hole();
            let old = self
                .props
                .get(hole.as_str())
                .ok_or_else(|| missing_prop(hole))?;
            let new = next
                .props
                .get(hole.as_str())
                .ok_or_else(|| missing_prop(hole))?;
            let node = self.resolved[i];

            let step = match (edit, old, new) {
                (_, Value::Scalar(old), Value::Scalar(new)) if old == new => {
                    plan.stats.skipped += 1;
                    continue;
                }
                (Edit::Attribute { attribute, .. }, _, Value::Scalar(new)) => Step::SetAttribute {
                    node,
                    attribute: attribute.clone(),
                    value: new.clone(),
                },
                (Edit::Attribute { attribute, .. }, _, Value::Block(_)) => {
                    return Err(BlockError::BlockInAttribute {
                        attribute: attribute.clone(),
                        hole: hole.clone(),
                    });
                }
                (Edit::Child { index, .. }, Value::Scalar(_), Value::Scalar(new)) => {
                    let leaf = host
                        .child_at(node, *index)
                        .ok_or(BlockError::ChildMissing {
                            edit: i,
                            index: *index,
                        })?;
                    Step::SetText {
                        leaf,
                        text: new.to_text(),
                    }
                }
                (Edit::Child { .. }, Value::Block(live), Value::Block(fresh)) => {
                    Step::PatchNested {
                        hole: hole.clone(),
                        plan: live.plan(host, fresh)?,
                    }
                }
                (Edit::Child { .. }, _, _) => {
                    return Err(BlockError::SlotKindChanged { hole: hole.clone() });
                }
            };
            plan.steps.push(step);
            plan.stats.changed += 1;
        }
        Ok(plan)
    }

    /// Carry out a checked plan and adopt `next`'s props.
    fn apply<H: Host + ?Sized>(&mut self, host: &mut H, plan: Plan, mut next: BlockInstance) {
        for step in plan.steps {
            match step {
                Step::SetAttribute {
                    node,
                    attribute,
                    value,
                } => {
                    tracing::trace!(?node, %attribute, "patched attribute");
                    host.set_attribute(node, &attribute, &value);
                }
                Step::SetText { leaf, text } => {
                    tracing::trace!(?leaf, "patched text");
                    host.set_text(leaf, &text);
                }
                Step::PatchNested { hole, plan } => {
                    // Planning saw a block on both sides of this slot.
                    if let (Some(Value::Block(live)), Some(Value::Block(fresh))) = (
                        self.props.get_mut(hole.as_str()),
                        next.props.remove(hole.as_str()),
                    ) {
                        ensure_sufficient_stack(|| live.apply(host, plan, *fresh));
                    }
                }
            }
        }

        // Nested slots were taken out of `next` above; the live instances
        // already carry their new props.
        self.props.extend(next.props);
    }
}

/// Host calls a patch will make, in edit order. Skipped edits have no step.
struct Plan {
    steps: Vec<Step>,
    stats: PatchStats,
}

enum Step {
    SetAttribute {
        node: NodeId,
        attribute: Name,
        value: Scalar,
    },
    /// Rewrite the text node a child slot filled at mount.
    SetText { leaf: NodeId, text: String },
    PatchNested { hole: Name, plan: Plan },
}

fn missing_prop(hole: &Name) -> BlockError {
    BlockError::MissingProp { hole: hole.clone() }
}

impl fmt::Debug for BlockInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockInstance")
            .field("slots", &self.block.slots())
            .field("props", &self.props)
            .field("resolved", &self.resolved)
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

//! The host tree adapter trait.

use hollow_ir::{ensure_sufficient_stack, Name, Scalar, SkeletonNode};

use crate::NodeId;

/// Mutation primitives the block engine needs from a host tree.
///
/// Node handles passed in must have been issued by the same host.
/// Implementations may panic on foreign handles; the engine never
/// fabricates one.
pub trait Host {
    fn create_element(&mut self, tag: &Name) -> NodeId;

    fn create_text(&mut self, text: &str) -> NodeId;

    /// Set an attribute. Setting [`Scalar::Null`] removes it.
    fn set_attribute(&mut self, node: NodeId, name: &Name, value: &Scalar);

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Insert `child` before the current child at `index`. An index equal
    /// to or past the child count appends.
    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId);

    /// Detach every child of `node`.
    fn clear_children(&mut self, node: NodeId);

    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId>;

    /// Replace the text content of `node`.
    ///
    /// On a text node this rewrites its content in place. On an element it
    /// replaces all children with a single text node.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Build a fresh, independent copy of `skeleton` and return its root.
    ///
    /// The default builds node by node; hosts with a native deep-clone
    /// primitive should override it.
    fn clone_skeleton(&mut self, skeleton: &SkeletonNode) -> NodeId {
        match skeleton {
            SkeletonNode::Text(text) => self.create_text(text),
            SkeletonNode::Element {
                tag,
                attributes,
                children,
            } => {
                let node = self.create_element(tag);
                for (name, value) in attributes {
                    self.set_attribute(node, name, value);
                }
                for child in children {
                    let copy = ensure_sufficient_stack(|| self.clone_skeleton(child));
                    self.append_child(node, copy);
                }
                node
            }
        }
    }

    /// Walk `indices` down from `root`, one child index per level.
    ///
    /// Returns `None` as soon as an index is out of range.
    fn resolve_path(&self, root: NodeId, indices: &[usize]) -> Option<NodeId> {
        indices
            .iter()
            .try_fold(root, |node, &index| self.child_at(node, index))
    }
}

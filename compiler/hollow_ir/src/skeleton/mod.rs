//! Skeletons: the hole-free tree produced once per compiled block.
//!
//! A skeleton holds every static tag, attribute and text leaf of a
//! template. Attributes bound to holes are left unset and child positions
//! bound to holes are left out entirely; mount fills both in.

use crate::{ensure_sufficient_stack, Name, Scalar};

/// A node of a skeleton tree.
#[derive(Clone, Debug, PartialEq)]
pub enum SkeletonNode {
    Element {
        tag: Name,
        attributes: Vec<(Name, Scalar)>,
        children: Vec<SkeletonNode>,
    },
    Text(String),
}

impl SkeletonNode {
    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            SkeletonNode::Text(_) => 1,
            SkeletonNode::Element { children, .. } => {
                1 + children
                    .iter()
                    .map(|child| ensure_sufficient_stack(|| child.node_count()))
                    .sum::<usize>()
            }
        }
    }

    #[inline]
    pub fn children(&self) -> &[SkeletonNode] {
        match self {
            SkeletonNode::Element { children, .. } => children,
            SkeletonNode::Text(_) => &[],
        }
    }

    /// Tag name, or `None` for text.
    #[inline]
    pub fn tag(&self) -> Option<&Name> {
        match self {
            SkeletonNode::Element { tag, .. } => Some(tag),
            SkeletonNode::Text(_) => None,
        }
    }
}

/// The immutable skeleton of a compiled block.
#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    root: SkeletonNode,
}

impl Skeleton {
    pub fn new(root: SkeletonNode) -> Self {
        Skeleton { root }
    }

    #[inline]
    pub fn root(&self) -> &SkeletonNode {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

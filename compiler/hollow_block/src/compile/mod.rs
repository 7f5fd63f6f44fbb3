//! Template compilation.
//!
//! [`compile_fragment`] walks a fragment once, depth first, and splits it
//! into the part every instance shares (a hole-free [`Skeleton`]) and the
//! part each instance fills in (an ordered list of [`Edit`]s).
//!
//! Each level of the walk returns its own skeleton node and edits; the
//! parent concatenates them in child order. Nothing is accumulated through
//! shared mutable state.
//!
//! Edit order is: an element's attribute edits in property order, then its
//! children in index order, each child's subtree before the next child.
//! Mount relies on this order. A hole child at index `i` is inserted
//! before any path through a later sibling is resolved, so fragment child
//! indices stay valid in the live tree.

use hollow_ir::{
    ensure_sufficient_stack, Edit, Element, Fragment, Name, Path, PathCursor, PropValue, Skeleton,
    SkeletonNode,
};
use rustc_hash::FxHashMap;

use crate::{CompileError, CompileOptions, DuplicateHolePolicy};

/// Output of [`compile_fragment`].
#[derive(Clone, Debug, PartialEq)]
pub struct Compiled {
    pub skeleton: Skeleton,
    pub edits: Vec<Edit>,
}

/// Compile a fragment into a skeleton and its edit list.
///
/// Compiling the same fragment twice yields equal results.
pub fn compile_fragment(
    fragment: &Fragment,
    options: &CompileOptions,
) -> Result<Compiled, CompileError> {
    let Lowered { node, edits } = lower(fragment, &PathCursor::Root)?;

    if options.duplicate_holes == DuplicateHolePolicy::Reject {
        reject_duplicate_holes(&edits)?;
    }

    let skeleton = Skeleton::new(node);
    tracing::debug!(
        nodes = skeleton.node_count(),
        edits = edits.len(),
        "compiled fragment"
    );
    Ok(Compiled { skeleton, edits })
}

/// Skeleton node and edits produced by one subtree.
struct Lowered {
    node: SkeletonNode,
    edits: Vec<Edit>,
}

fn lower(fragment: &Fragment, cursor: &PathCursor<'_>) -> Result<Lowered, CompileError> {
    ensure_sufficient_stack(|| match fragment {
        Fragment::Text(value) => Ok(Lowered {
            node: SkeletonNode::Text(value.to_text()),
            edits: Vec::new(),
        }),
        Fragment::Element(element) => lower_element(element, cursor),
        // Child holes never recurse, so only the root gets here.
        Fragment::Hole(hole) => Err(CompileError::RootHole {
            hole: hole.name().clone(),
        }),
    })
}

fn lower_element(element: &Element, cursor: &PathCursor<'_>) -> Result<Lowered, CompileError> {
    // Materialized on the first edit; later edits of this element share it.
    let mut path: Option<Path> = None;
    let mut here = || path.get_or_insert_with(|| cursor.to_path()).clone();

    let mut attributes = Vec::with_capacity(element.props.len());
    let mut edits = Vec::new();
    for (name, value) in &element.props {
        match value {
            PropValue::Static(scalar) => attributes.push((name.clone(), scalar.clone())),
            PropValue::Hole(hole) => edits.push(Edit::Attribute {
                path: here(),
                attribute: name.clone(),
                hole: hole.name().clone(),
            }),
        }
    }

    let mut children = Vec::with_capacity(element.children.len());
    for (index, child) in element.children.iter().enumerate() {
        if let Fragment::Hole(hole) = child {
            edits.push(Edit::Child {
                path: here(),
                index,
                hole: hole.name().clone(),
            });
            continue;
        }
        let lowered = lower(child, &cursor.child(index))?;
        children.push(lowered.node);
        edits.extend(lowered.edits);
    }

    Ok(Lowered {
        node: SkeletonNode::Element {
            tag: element.tag.clone(),
            attributes,
            children,
        },
        edits,
    })
}

fn reject_duplicate_holes(edits: &[Edit]) -> Result<(), CompileError> {
    let mut counts: FxHashMap<&Name, usize> = FxHashMap::default();
    for edit in edits {
        *counts.entry(edit.hole()).or_default() += 1;
    }
    for edit in edits {
        let hole = edit.hole();
        let count = counts.get(hole).copied().unwrap_or_default();
        if count > 1 {
            return Err(CompileError::DuplicateHole {
                hole: hole.clone(),
                count,
            });
        }
    }
    Ok(())
}

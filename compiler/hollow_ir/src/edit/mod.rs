//! Edits and the paths that locate them.
//!
//! An [`Edit`] names one dynamic slot of a compiled block: where it lives
//! (a [`Path`] from the skeleton root), what kind of slot it is, and which
//! prop fills it. The edit list of a block is ordered; edit `i` pairs with
//! resolved node `i` of every instance.
//!
//! # Paths
//!
//! While the compiler walks a fragment it carries a [`PathCursor`]: a chain
//! of stack frames, each borrowing its parent. Extending the path is a new
//! frame, never a write to a shared buffer. A cursor is turned into an
//! owned [`Path`] only when an edit is recorded, and all edits of one
//! element share that single allocation.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::Name;

/// Child indices from a skeleton root down to one node.
///
/// Immutable once built. Cloning shares the index buffer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path(Arc<[usize]>);

impl Path {
    /// The empty path, addressing the root itself.
    pub fn root() -> Self {
        Path(Arc::from(Vec::new()))
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Path) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Path(Arc::from(indices))
    }
}

impl<const N: usize> From<[usize; N]> for Path {
    fn from(indices: [usize; N]) -> Self {
        Path(Arc::from(indices.as_slice()))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Position of the walk during compilation.
///
/// Each frame knows its own child index and borrows the frame above it.
#[derive(Clone, Copy, Debug)]
pub enum PathCursor<'a> {
    Root,
    Child {
        parent: &'a PathCursor<'a>,
        index: usize,
        depth: usize,
    },
}

impl<'a> PathCursor<'a> {
    /// Cursor one level below `self`, at child `index`.
    #[inline]
    pub fn child(&'a self, index: usize) -> PathCursor<'a> {
        PathCursor::Child {
            parent: self,
            index,
            depth: self.depth() + 1,
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            PathCursor::Root => 0,
            PathCursor::Child { depth, .. } => *depth,
        }
    }

    /// Materialize the indices from the root to this frame.
    pub fn to_path(&self) -> Path {
        let mut indices: SmallVec<[usize; 8]> = SmallVec::from_elem(0, self.depth());
        let mut frame = self;
        while let PathCursor::Child {
            parent,
            index,
            depth,
        } = frame
        {
            indices[*depth - 1] = *index;
            frame = *parent;
        }
        Path::from(indices.as_slice())
    }
}

/// Discriminant of an [`Edit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKind {
    Attribute,
    Child,
}

/// One dynamic slot of a compiled block.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// At the node reached by `path`, set `attribute` from `props[hole]`.
    Attribute {
        path: Path,
        attribute: Name,
        hole: Name,
    },
    /// At the node reached by `path`, the child at `index` comes from
    /// `props[hole]`.
    Child { path: Path, index: usize, hole: Name },
}

impl Edit {
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Edit::Attribute { path, .. } | Edit::Child { path, .. } => path,
        }
    }

    /// The prop name that supplies this edit's value.
    #[inline]
    pub fn hole(&self) -> &Name {
        match self {
            Edit::Attribute { hole, .. } | Edit::Child { hole, .. } => hole,
        }
    }

    #[inline]
    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Attribute { .. } => EditKind::Attribute,
            Edit::Child { .. } => EditKind::Child,
        }
    }
}

//! Hollow IR - data types shared by the block compiler and host adapters.
//!
//! This crate contains the core data structures of the renderer:
//! - [`Name`] for tag, attribute and slot identifiers
//! - [`Scalar`] for concrete leaf and attribute values
//! - [`Fragment`] trees built with [`h`], possibly containing [`Hole`]s
//! - [`Skeleton`] trees, the hole-free output of compilation
//! - [`Edit`] records and the [`Path`]s that address them
//!
//! # Design Philosophy
//!
//! - **Compile once**: fragments are analyzed a single time; skeletons and
//!   edits are immutable afterwards and cheap to share.
//! - **No holes at runtime**: a [`Hole`] only ever lives inside a
//!   [`Fragment`]. Skeletons and host trees have no way to hold one.
//! - **Paths are shared**: every edit recorded at the same element points
//!   at the same [`Path`] allocation.

mod edit;
mod fragment;
mod name;
mod scalar;
mod skeleton;
mod stack;

pub use edit::{Edit, EditKind, Path, PathCursor};
pub use fragment::{el, h, text, Element, Fragment, Hole, PropValue, NO_CHILDREN, NO_PROPS};
pub use name::Name;
pub use scalar::{Callback, Scalar};
pub use skeleton::{Skeleton, SkeletonNode};
pub use stack::ensure_sufficient_stack;

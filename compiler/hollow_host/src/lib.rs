//! Host tree adapters for the hollow block renderer.
//!
//! The block engine never owns a tree of its own. It mutates a *host*
//! tree through the [`Host`] trait: create nodes, set attributes, insert
//! and clear children, rewrite text. Anything that can answer those calls
//! can be rendered into, whether it is a browser DOM binding, a terminal
//! widget tree or the in-memory [`Document`] shipped here.
//!
//! # Crate Dependencies
//!
//! `hollow_host` depends only on `hollow_ir` (for [`Name`](hollow_ir::Name),
//! [`Scalar`](hollow_ir::Scalar) and [`SkeletonNode`](hollow_ir::SkeletonNode)).
//! It knows nothing about holes, edits or blocks.

mod document;
mod host;
mod node;

pub use document::Document;
pub use host::Host;
pub use node::NodeId;

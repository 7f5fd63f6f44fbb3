//! Block compilation and the mount/patch runtime.
//!
//! A *block* is a template whose shape is fixed and whose dynamic parts
//! are a handful of named slots. This crate turns a template function into
//! a [`CompiledBlock`] once, then stamps out [`BlockInstance`]s that mount
//! into a host tree and patch only the slots whose values changed.
//!
//! # Pipeline
//!
//! 1. **Capture** ([`capture_template`]): the template receives one
//!    [`Hole`](hollow_ir::Hole) per declared slot and returns a fragment
//!    with those holes embedded.
//! 2. **Compile** ([`compile_fragment`]): one walk splits the fragment into
//!    a hole-free [`Skeleton`](hollow_ir::Skeleton) and an ordered list of
//!    [`Edit`](hollow_ir::Edit)s.
//! 3. **Instantiate** ([`BlockFactory::instantiate`]): bind props to the
//!    compiled block. No host work.
//! 4. **Mount** ([`BlockInstance::mount`]): clone the skeleton into the
//!    host, resolve each edit's path once, fill every slot.
//! 5. **Patch** ([`BlockInstance::patch`]): compare old and new props slot
//!    by slot and touch only the resolved nodes whose slot changed.
//!
//! Update cost is proportional to the number of changed slots, not to the
//! size of the tree.
//!
//! # Tracing
//!
//! Compilation and patch summaries log at `debug`, per-slot work at
//! `trace`. Enable with `RUST_LOG=hollow_block=debug`.

mod capture;
mod compile;
mod error;
mod factory;
mod instance;
mod options;
mod value;

pub use capture::{capture_template, Captured};
pub use compile::{compile_fragment, Compiled};
pub use error::{BlockError, CompileError};
pub use factory::{compile_block, compile_block_with, BlockCell, BlockFactory, CompiledBlock};
pub use instance::{BlockInstance, PatchStats};
pub use options::{CompileOptions, DuplicateHolePolicy, UnusedSlotPolicy};
pub use value::{Props, Value};

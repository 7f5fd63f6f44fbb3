//! Hollow - a fine-grained template renderer.
//!
//! Templates are compiled once into a static skeleton and a list of slot
//! edits. Instances clone the skeleton into a host tree on mount and, on
//! every update, touch only the nodes whose slot value changed.
//!
//! ```
//! use hollow::ir::{h, Scalar};
//! use hollow::{compile_block, Document, Props};
//!
//! let counter = compile_block(["onClick", "number"], |[on_click, number]| {
//!     h("button", [("onClick", on_click)], [number])
//! })?;
//! let props = |n: i64| Props::new().with("onClick", Scalar::Null).with("number", n);
//!
//! let mut doc = Document::new();
//! let body = doc.root();
//! let mut live = counter.instantiate(props(0));
//! live.mount(&mut doc, body)?;
//! live.patch(&mut doc, counter.instantiate(props(1)))?;
//!
//! assert_eq!(doc.inner_html(body), "<button>1</button>");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crates
//!
//! - [`ir`] (`hollow_ir`): fragments, holes, scalars, skeletons, edits.
//! - `hollow_host`: the [`Host`] trait and the in-memory [`Document`].
//! - `hollow_block`: capture, compilation, mount and patch.

use std::sync::Once;

pub use hollow_block::{
    capture_template, compile_block, compile_block_with, compile_fragment, BlockCell, BlockError,
    BlockFactory, BlockInstance, Captured, Compiled, CompileError, CompileOptions, CompiledBlock,
    DuplicateHolePolicy, PatchStats, Props, UnusedSlotPolicy, Value,
};
pub use hollow_host::{Document, Host, NodeId};

/// Template building blocks, re-exported from `hollow_ir`.
pub mod ir {
    pub use hollow_ir::{
        el, h, text, Callback, Edit, EditKind, Element, Fragment, Hole, Name, Path, PropValue,
        Scalar, Skeleton, SkeletonNode, NO_CHILDREN, NO_PROPS,
    };
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once;
/// only the first call has any effect.
///
/// ```text
/// RUST_LOG=hollow_block=debug cargo test
/// RUST_LOG=hollow_block::instance=trace cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A test harness may have installed a global subscriber already.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

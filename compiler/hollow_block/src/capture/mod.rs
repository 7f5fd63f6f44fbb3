//! Slot capture.
//!
//! A template is an ordinary function from holes to a fragment. Capture
//! hands it one [`Hole`] per declared slot, in declaration order, and
//! keeps the slot list next to the fragment it produced. The template is
//! called exactly once per capture.

use hollow_ir::{Fragment, Hole, Name};
use rustc_hash::FxHashSet;

use crate::CompileError;

/// A fragment together with the slots that were declared for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Captured {
    slots: Vec<Name>,
    fragment: Fragment,
}

impl Captured {
    /// Declared slots, in declaration order.
    pub fn slots(&self) -> &[Name] {
        &self.slots
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn into_parts(self) -> (Vec<Name>, Fragment) {
        (self.slots, self.fragment)
    }
}

/// Run `template` once with a hole for every name in `slots`.
///
/// ```
/// use hollow_block::capture_template;
/// use hollow_ir::{h, NO_PROPS};
///
/// let captured = capture_template(["label"], |[label]| h("p", NO_PROPS, [label]))?;
/// assert_eq!(captured.slots()[0].as_str(), "label");
/// # Ok::<(), hollow_block::CompileError>(())
/// ```
pub fn capture_template<const N: usize, F>(
    slots: [&str; N],
    template: F,
) -> Result<Captured, CompileError>
where
    F: FnOnce([Hole; N]) -> Fragment,
{
    let names: [Name; N] = slots.map(Name::new);

    let mut seen = FxHashSet::default();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(CompileError::DuplicateSlot { slot: name.clone() });
        }
    }

    let fragment = template(names.clone().map(Hole::new));
    Ok(Captured {
        slots: Vec::from(names),
        fragment,
    })
}

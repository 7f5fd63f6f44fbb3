//! Fragment trees: the compile-time description of a UI element.
//!
//! A fragment is what a template function returns. It mirrors the shape of
//! the host tree it will produce, except that any attribute value or child
//! may be a [`Hole`] standing in for a prop that is only known per instance.
//!
//! ```text
//! h("button", [("onClick", on_click)], [number])
//! ```

use crate::{Callback, Name, Scalar};

/// A named placeholder for a dynamic prop.
///
/// Holes are handed to template functions by slot capture and consumed by
/// the compiler. They never reach a skeleton or a host tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hole {
    name: Name,
}

impl Hole {
    pub fn new(name: impl Into<Name>) -> Self {
        Hole { name: name.into() }
    }

    /// The prop name this hole is bound to.
    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }
}

/// An attribute value in a fragment: either known now or a hole.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Static(Scalar),
    Hole(Hole),
}

impl From<Hole> for PropValue {
    fn from(hole: Hole) -> Self {
        PropValue::Hole(hole)
    }
}

impl From<&Hole> for PropValue {
    fn from(hole: &Hole) -> Self {
        PropValue::Hole(hole.clone())
    }
}

impl From<Scalar> for PropValue {
    fn from(value: Scalar) -> Self {
        PropValue::Static(value)
    }
}

macro_rules! static_prop_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    PropValue::Static(Scalar::from(value))
                }
            }
        )*
    };
}

static_prop_from!(bool, i32, i64, f64, &str, String, Callback);

/// A composite fragment node.
///
/// Properties keep insertion order; setting a property twice replaces the
/// earlier value in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: Name,
    pub props: Vec<(Name, PropValue)>,
    pub children: Vec<Fragment>,
}

impl Element {
    pub fn new(tag: impl Into<Name>) -> Self {
        Element {
            tag: tag.into(),
            props: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set a property, replacing any earlier value under the same name.
    #[must_use]
    pub fn prop(mut self, name: impl Into<Name>, value: impl Into<PropValue>) -> Self {
        self.set_prop(name.into(), value.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Fragment>) -> Self {
        self.children.push(child.into());
        self
    }

    fn set_prop(&mut self, name: Name, value: PropValue) {
        if let Some(slot) = self.props.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.props.push((name, value));
        }
    }
}

/// A node of a fragment tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    /// Raw text or scalar leaf.
    Text(Scalar),
    Element(Element),
    Hole(Hole),
}

impl Fragment {
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Fragment::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Returns `true` if this node or any descendant is a hole, in either
    /// child or attribute position.
    pub fn has_holes(&self) -> bool {
        match self {
            Fragment::Text(_) => false,
            Fragment::Hole(_) => true,
            Fragment::Element(el) => {
                el.props.iter().any(|(_, v)| matches!(v, PropValue::Hole(_)))
                    || el.children.iter().any(Fragment::has_holes)
            }
        }
    }
}

impl From<Element> for Fragment {
    fn from(el: Element) -> Self {
        Fragment::Element(el)
    }
}

impl From<Hole> for Fragment {
    fn from(hole: Hole) -> Self {
        Fragment::Hole(hole)
    }
}

impl From<&Hole> for Fragment {
    fn from(hole: &Hole) -> Self {
        Fragment::Hole(hole.clone())
    }
}

impl From<Scalar> for Fragment {
    fn from(value: Scalar) -> Self {
        Fragment::Text(value)
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Text(Scalar::from(s))
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::Text(Scalar::from(s))
    }
}

impl From<i64> for Fragment {
    fn from(n: i64) -> Self {
        Fragment::Text(Scalar::Int(n))
    }
}

/// Empty property list for [`h`].
pub const NO_PROPS: [(Name, PropValue); 0] = [];

/// Empty child list for [`h`] and [`el`].
pub const NO_CHILDREN: [Fragment; 0] = [];

/// Build an element fragment from a tag, properties and children.
///
/// Pure structural assembly; nothing is validated.
pub fn h<P, K, V, C>(tag: impl Into<Name>, props: P, children: C) -> Fragment
where
    P: IntoIterator<Item = (K, V)>,
    K: Into<Name>,
    V: Into<PropValue>,
    C: IntoIterator,
    C::Item: Into<Fragment>,
{
    let mut el = Element::new(tag);
    for (name, value) in props {
        el.set_prop(name.into(), value.into());
    }
    el.children = children.into_iter().map(Into::into).collect();
    Fragment::Element(el)
}

/// Build an element fragment without properties.
pub fn el<C>(tag: impl Into<Name>, children: C) -> Fragment
where
    C: IntoIterator,
    C::Item: Into<Fragment>,
{
    let mut el = Element::new(tag);
    el.children = children.into_iter().map(Into::into).collect();
    Fragment::Element(el)
}

/// Build a text leaf.
pub fn text(value: impl Into<Scalar>) -> Fragment {
    Fragment::Text(value.into())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

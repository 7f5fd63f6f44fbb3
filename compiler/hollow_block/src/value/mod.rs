//! Prop values.
//!
//! Every slot of an instance is filled by a [`Value`]: either a concrete
//! [`Scalar`] or a whole nested [`BlockInstance`]. The variant decides how
//! mount and patch treat the slot, so nothing is inferred from the shape
//! of the value at runtime.

use std::collections::hash_map;

use hollow_ir::{Callback, Name, Scalar};
use rustc_hash::FxHashMap;

use crate::BlockInstance;

/// The value bound to one slot.
#[derive(Debug)]
pub enum Value {
    Scalar(Scalar),
    /// A nested block, mounted under the slot's parent element.
    Block(Box<BlockInstance>),
}

impl Value {
    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            Value::Block(_) => None,
        }
    }

    #[inline]
    pub fn as_block(&self) -> Option<&BlockInstance> {
        match self {
            Value::Block(block) => Some(block),
            Value::Scalar(_) => None,
        }
    }

    #[inline]
    pub fn is_block(&self) -> bool {
        matches!(self, Value::Block(_))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<BlockInstance> for Value {
    fn from(block: BlockInstance) -> Self {
        Value::Block(Box::new(block))
    }
}

macro_rules! scalar_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_value_from!(bool, i32, i64, f64, &str, String, Callback);

/// Slot values of one instance, keyed by slot name.
#[derive(Debug, Default)]
pub struct Props {
    values: FxHashMap<Name, Value>,
}

impl Props {
    pub fn new() -> Self {
        Props::default()
    }

    /// Builder form of [`insert`](Props::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `value` to `name`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<Name>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.values.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, Name, Value> {
        self.values.iter()
    }

    /// Overwrite every slot present in `other`; slots absent from it keep
    /// their current value.
    pub fn extend(&mut self, other: Props) {
        self.values.extend(other.values);
    }
}

impl<K: Into<Name>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a Name, &'a Value);
    type IntoIter = hash_map::Iter<'a, Name, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

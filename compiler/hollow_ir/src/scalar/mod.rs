//! Concrete values for text leaves and attributes.

use std::fmt;
use std::sync::Arc;

/// An event handler attached as an attribute value.
///
/// Two callbacks are equal only when they share one allocation, which is
/// what lets an unchanged handler survive the dirty check while a freshly
/// created closure does not.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Callback(Arc::new(f))
    }

    /// Invoke the handler.
    #[inline]
    pub fn call(&self) {
        (self.0)();
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// A concrete leaf value.
///
/// Scalars fill text leaves and attributes. Equality is by value, except
/// for [`Callback`], which compares by identity. `Float` follows IEEE
/// equality, so a `NaN` never compares equal to itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    Callback(Callback),
}

impl Scalar {
    /// Text used when this value becomes the content of a text node.
    ///
    /// `Null` and callbacks render as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Null | Scalar::Callback(_) => String::new(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
            Scalar::Str(s) => s.to_string(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    #[inline]
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Scalar::Callback(cb) => Some(cb),
            _ => None,
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(i64::from(n))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(Arc::from(s))
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(Arc::from(s))
    }
}

impl From<Callback> for Scalar {
    fn from(cb: Callback) -> Self {
        Scalar::Callback(cb)
    }
}

//! A type-erased value that keeps its clone, equality and display behaviour.
//!
//! `Any` is the value type of a field declared by name only. It starts empty
//! and takes whatever a later assignment gives it.

use std::any::{type_name, Any as StdAny};
use std::fmt;

use itertools::Itertools;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// Values that can be stored with their full behaviour.
pub trait AnyValue: StdAny + Clone + PartialEq + fmt::Display + fmt::Debug + Serialize {}
impl<T: StdAny + Clone + PartialEq + fmt::Display + fmt::Debug + Serialize> AnyValue for T {}

trait Erased: StdAny {
    fn clone_box(&self) -> Box<dyn Erased>;
    fn equals(&self, other: &dyn Erased) -> bool;
    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn to_json(&self) -> Result<Value>;
    fn type_name(&self) -> &'static str;
    fn as_erased(&self) -> &dyn StdAny;
    fn inner(&self) -> &dyn StdAny;
    fn inner_mut(&mut self) -> &mut dyn StdAny;
    fn into_inner(self: Box<Self>) -> Box<dyn StdAny>;
}

/// A value rendered with its own `Display`.
#[derive(Clone, PartialEq)]
struct Plain<T>(T);

/// A sequence rendered as its comma-joined elements.
#[derive(Clone, PartialEq)]
struct List<T>(Vec<T>);

/// A value without `Display`, rendered as its type name.
#[derive(Clone, PartialEq)]
struct Opaque<T>(T);

macro_rules! erased_common {
    ($inner:ty) => {
        fn clone_box(&self) -> Box<dyn Erased> {
            Box::new(self.clone())
        }

        fn equals(&self, other: &dyn Erased) -> bool {
            other
                .as_erased()
                .downcast_ref::<Self>()
                .is_some_and(|other| self == other)
        }

        fn type_name(&self) -> &'static str {
            type_name::<$inner>()
        }

        fn as_erased(&self) -> &dyn StdAny {
            self
        }

        fn inner(&self) -> &dyn StdAny {
            &self.0
        }

        fn inner_mut(&mut self) -> &mut dyn StdAny {
            &mut self.0
        }

        fn into_inner(self: Box<Self>) -> Box<dyn StdAny> {
            Box::new(self.0)
        }
    };
}

impl<T: AnyValue> Erased for Plain<T> {
    erased_common!(T);

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }

    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.0)?)
    }
}

impl<T: AnyValue> Erased for List<T> {
    erased_common!(Vec<T>);

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }

    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.0)?)
    }
}

impl<T: StdAny + Clone + PartialEq + fmt::Debug> Erased for Opaque<T> {
    erased_common!(T);

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<T>())
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }

    fn to_json(&self) -> Result<Value> {
        Ok(Value::String(type_name::<T>().to_string()))
    }
}

/// An optionally empty, dynamically typed value.
///
/// ```
/// use nt_core::Any;
///
/// let mut age = Any::default();
/// assert_eq!(age.to_string(), "");
///
/// age = 30.into();
/// assert_eq!(*age.get::<i32>().unwrap(), 30);
/// assert!(age.get::<u8>().is_err());
///
/// let children = Any::list(["Yoon-Jung", "BM"]);
/// assert_eq!(children.to_string(), "Yoon-Jung,BM");
/// ```
#[derive(Default)]
pub struct Any {
    value: Option<Box<dyn Erased>>,
}

impl Any {
    pub fn new<T: AnyValue>(value: T) -> Self {
        Self::from_erased(Plain(value))
    }

    /// A sequence, displayed with its elements joined by commas.
    pub fn list<T: AnyValue>(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_erased(List(items.into_iter().collect()))
    }

    /// A value that cannot be displayed; shows its type name instead.
    pub fn opaque<T: StdAny + Clone + PartialEq + fmt::Debug>(value: T) -> Self {
        Self::from_erased(Opaque(value))
    }

    fn from_erased(value: impl Erased) -> Self {
        Self {
            value: Some(Box::new(value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The stored type; lists report `Vec<T>`.
    pub fn type_name(&self) -> Option<&'static str> {
        self.value.as_ref().map(|value| value.type_name())
    }

    pub fn is<T: StdAny>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    pub fn downcast_ref<T: StdAny>(&self) -> Option<&T> {
        self.value.as_ref()?.inner().downcast_ref()
    }

    pub fn downcast_mut<T: StdAny>(&mut self) -> Option<&mut T> {
        self.value.as_mut()?.inner_mut().downcast_mut()
    }

    pub fn get<T: StdAny>(&self) -> Result<&T> {
        let found = self.check::<T>()?;
        self.downcast_ref().ok_or_else(|| Self::mismatch::<T>(found))
    }

    pub fn take<T: StdAny>(self) -> Result<T> {
        let found = self.check::<T>()?;
        match self.value {
            Some(value) => value
                .into_inner()
                .downcast()
                .map(|value| *value)
                .map_err(|_| Self::mismatch::<T>(found)),
            None => Err(Error::EmptyValue {
                expected: type_name::<T>(),
            }),
        }
    }

    fn check<T: StdAny>(&self) -> Result<&'static str> {
        match &self.value {
            None => {
                tracing::trace!("read of empty value as {}", type_name::<T>());
                Err(Error::EmptyValue {
                    expected: type_name::<T>(),
                })
            }
            Some(value) => Ok(value.type_name()),
        }
    }

    fn mismatch<T>(found: &'static str) -> Error {
        tracing::trace!("value of type {} read as {}", found, type_name::<T>());
        Error::TypeMismatch {
            expected: type_name::<T>(),
            found,
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        match &self.value {
            Some(value) => value.to_json(),
            None => Ok(Value::Null),
        }
    }
}

impl Clone for Any {
    fn clone(&self) -> Self {
        Self {
            value: self.value.as_ref().map(|value| value.clone_box()),
        }
    }
}

impl PartialEq for Any {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (None, None) => true,
            (Some(a), Some(b)) => a.equals(b.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => value.display(f),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => {
                f.write_str("Any(")?;
                value.debug(f)?;
                f.write_str(")")
            }
            None => f.write_str("Any(<empty>)"),
        }
    }
}

impl Serialize for Any {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

macro_rules! from_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Any {
                fn from(value: $ty) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

from_plain!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, &'static str,
);

impl<T: AnyValue> From<Vec<T>> for Any {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: AnyValue, const N: usize> From<[T; N]> for Any {
    fn from(items: [T; N]) -> Self {
        Self::list(items)
    }
}

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use derive_more::{Deref, DerefMut};

use crate::any::Any;
use crate::label::{Label, Name};
use crate::lookup::Keyed;

/// One value slot whose name `K` is part of the type.
///
/// `Field<Name!(price), f64>` and `Field<Name!(size), f64>` are unrelated
/// types. The wrapper is transparent: it has the layout of `V`, and derefs
/// to it.
#[repr(transparent)]
#[derive(Deref, DerefMut)]
pub struct Field<K, V> {
    #[deref]
    #[deref_mut]
    pub value: V,
    key: PhantomData<K>,
}

impl<K, V> Field<K, V> {
    pub const fn new(value: V) -> Self {
        Self {
            value,
            key: PhantomData,
        }
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Replaces the value, possibly with one of another type.
    pub fn set<W>(self, value: W) -> Field<K, W> {
        Field::new(value)
    }

    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Field<K, W> {
        Field::new(f(self.value))
    }
}

impl<K: Label, V> Field<K, V> {
    pub const NAME: &'static str = K::NAME;

    pub fn name(&self) -> &'static str {
        K::NAME
    }
}

impl<K, V> Keyed for Field<K, V> {
    type Key = K;
}

/// Uniform access to the value of a field-like element.
pub trait FieldValue: Keyed {
    type Value;

    fn value_ref(&self) -> &Self::Value;
    fn value_mut(&mut self) -> &mut Self::Value;
}

impl<K, V> FieldValue for Field<K, V> {
    type Value = V;

    fn value_ref(&self) -> &V {
        &self.value
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<S> Name<S> {
    /// A field of this name holding `value`.
    pub fn set<V>(self, value: V) -> Field<Self, V> {
        Field::new(value)
    }

    /// A field of this name whose type is left open.
    pub fn placeholder(self) -> Field<Self, Any> {
        Field::default()
    }
}

impl<K, V> From<V> for Field<K, V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<K, V: Default> Default for Field<K, V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V: Clone> Clone for Field<K, V> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<K, V: Copy> Copy for Field<K, V> {}

impl<K, V: PartialEq> PartialEq for Field<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K, V: Eq> Eq for Field<K, V> {}

impl<K, V: PartialOrd> PartialOrd for Field<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K, V: Hash> Hash for Field<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: Label, V: fmt::Display> fmt::Display for Field<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", K::NAME, self.value)
    }
}

impl<K: Label, V: fmt::Debug> fmt::Debug for Field<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", K::NAME, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{name, Name};
    use pretty_assertions::assert_eq;

    #[test]
    fn setting_a_value_can_change_its_type() {
        let price = name!(price).placeholder();
        assert!(price.value.is_empty());

        let price = price.set(42.5);
        assert_eq!(price.value, 42.5);
        assert_eq!(price.name(), "price");
        assert_eq!(Field::<Name!(price), f64>::NAME, "price");

        let price = price.map(|p| p as i64);
        assert_eq!(price.into_value(), 42);
    }

    #[test]
    fn derefs_to_the_value() {
        let mut title = name!(title).set(String::from("Dad"));
        title.push('!');
        assert_eq!(title.len(), 4);
        assert_eq!(*title, "Dad!");
    }

    #[test]
    fn formats_with_its_name() {
        let size = name!(size).set(100u32);
        assert_eq!(size.to_string(), "size:100");
        assert_eq!(format!("{size:?}"), "size: 100");
        assert_eq!(Field::<Name!(size), u32>::default().value, 0);
    }

    #[test]
    fn layout_is_the_value_layout() {
        assert_eq!(
            std::mem::size_of::<Field<Name!(price), u16>>(),
            std::mem::size_of::<u16>()
        );
    }
}

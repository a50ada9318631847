//! Compile-time key lookup over `HList`s of keyed elements.
//!
//! Every element names its key through [`Keyed`]. A lookup walks the list,
//! compares each key with [`TypeEq`] and selects the match with [`If`]; the
//! empty list yields the caller's fallback. Nothing here exists at run time.

use std::marker::PhantomData;

use crate::hlist::{HCons, HNil};
use crate::label::{And, Bool, If, IsEqual, Nth, Not, Or, Succ, True, TypeEq, Zero};

/// A key/value pair type: the "template" a lookup matches elements against.
pub trait Keyed {
    type Key;
}

/// Conventional fallback for a lookup that finds nothing.
pub struct NotFound;

/// `Output` is the element whose key is `K`, or `Default` when there is none.
///
/// Keys are expected to be unique; with duplicates the first match wins.
pub trait Lookup<K, Default> {
    type Output;
}

pub type LookupOf<L, K, D> = <L as Lookup<K, D>>::Output;

type Matches<H, K> = IsEqual<<H as Keyed>::Key, K>;

impl<K, D> Lookup<K, D> for HNil {
    type Output = D;
}

impl<K, D, H, T> Lookup<K, D> for HCons<H, T>
where
    H: Keyed,
    H::Key: TypeEq<K>,
    T: Lookup<K, D>,
    Matches<H, K>: If<H, T::Output>,
{
    type Output = <Matches<H, K> as If<H, T::Output>>::Output;
}

/// Whether some element is keyed by `K`.
pub trait Contains<K> {
    type Output: Bool;
}

impl<K> Contains<K> for HNil {
    type Output = crate::label::False;
}

impl<K, H, T> Contains<K> for HCons<H, T>
where
    H: Keyed,
    H::Key: TypeEq<K>,
    T: Contains<K>,
    Matches<H, K>: Or<T::Output>,
{
    type Output = <Matches<H, K> as Or<T::Output>>::Output;
}

/// Whether all keys are pairwise different.
pub trait Distinct {
    type Output: Bool;
}

impl Distinct for HNil {
    type Output = True;
}

impl<H, T> Distinct for HCons<H, T>
where
    H: Keyed,
    T: Contains<H::Key> + Distinct,
    <T as Contains<H::Key>>::Output: Not,
    <<T as Contains<H::Key>>::Output as Not>::Output: And<<T as Distinct>::Output>,
{
    type Output = <<<T as Contains<H::Key>>::Output as Not>::Output as And<
        <T as Distinct>::Output,
    >>::Output;
}

/// Lists whose keys are all different. Every record constructor asks for it.
///
/// A repeated name leaves [`NoDuplicateNames`] unimplemented for `False`:
///
/// ```compile_fail,E0277
/// use nt_core::named_tuple;
///
/// let a = named_tuple!(x = 1);
/// let b = named_tuple!(x = 2, y = 3);
/// let _ = named_tuple!(a, b);
/// ```
pub trait UniqueKeys {}

impl<L> UniqueKeys for L
where
    L: Distinct,
    L::Output: NoDuplicateNames,
{
}

/// Implemented only by [`True`], the verdict of [`Distinct`] on a list with
/// no repeated key.
#[diagnostic::on_unimplemented(
    message = "field names of the record are not unique",
    label = "a field name appears more than once",
    note = "name-based access needs every field name to be distinct"
)]
pub trait NoDuplicateNames: Bool {}

impl NoDuplicateNames for True {}

/// An element paired with its position, so positions can be looked up like
/// names.
pub struct Indexed<N, E>(PhantomData<(N, E)>);

impl<N, E> Keyed for Indexed<N, E> {
    type Key = N;
}

pub trait Unindex {
    type Element;
}

impl<N, E> Unindex for Indexed<N, E> {
    type Element = E;
}

/// Pairs every element with its Peano position, counting from `N`.
pub trait Enumerate<N> {
    type Output;
}

impl<N> Enumerate<N> for HNil {
    type Output = HNil;
}

impl<N, H, T: Enumerate<Succ<N>>> Enumerate<N> for HCons<H, T> {
    type Output = HCons<Indexed<N, H>, T::Output>;
}

pub type Enumerated<L> = <L as Enumerate<Zero>>::Output;

/// The element type at position `N`; out-of-range positions do not resolve.
pub type ElementAt<L, const N: usize> =
    <LookupOf<Enumerated<L>, Nth<N>, NotFound> as Unindex>::Element;

/// Access to the element keyed by `K`.
///
/// The walk ends at [`HNil`], which has no element to give; that is where
/// an unknown name is reported.
#[diagnostic::on_unimplemented(
    message = "no field with the requested name",
    label = "unknown field name",
    note = "the name has to be one of the record's declared fields"
)]
pub trait Pick<K> {
    type Target;

    fn pick(&self) -> &Self::Target;
    fn pick_mut(&mut self) -> &mut Self::Target;
    fn take(self) -> Self::Target;
}

impl<K, H, T> Pick<K> for HCons<H, T>
where
    H: Keyed,
    H::Key: TypeEq<K>,
    Self: PickBy<K, Matches<H, K>>,
{
    type Target = <Self as PickBy<K, Matches<H, K>>>::Target;

    fn pick(&self) -> &Self::Target {
        <Self as PickBy<K, Matches<H, K>>>::pick_by(self)
    }

    fn pick_mut(&mut self) -> &mut Self::Target {
        <Self as PickBy<K, Matches<H, K>>>::pick_by_mut(self)
    }

    fn take(self) -> Self::Target {
        <Self as PickBy<K, Matches<H, K>>>::take_by(self)
    }
}

/// [`Pick`] dispatched on whether the head matched.
#[doc(hidden)]
pub trait PickBy<K, Matched> {
    type Target;

    fn pick_by(&self) -> &Self::Target;
    fn pick_by_mut(&mut self) -> &mut Self::Target;
    fn take_by(self) -> Self::Target;
}

impl<K, H, T> PickBy<K, True> for HCons<H, T> {
    type Target = H;

    fn pick_by(&self) -> &H {
        &self.head
    }

    fn pick_by_mut(&mut self) -> &mut H {
        &mut self.head
    }

    fn take_by(self) -> H {
        self.head
    }
}

impl<K, H, T: Pick<K>> PickBy<K, crate::label::False> for HCons<H, T> {
    type Target = T::Target;

    fn pick_by(&self) -> &T::Target {
        self.tail.pick()
    }

    fn pick_by_mut(&mut self) -> &mut T::Target {
        self.tail.pick_mut()
    }

    fn take_by(self) -> T::Target {
        self.tail.take()
    }
}

/// Access to the element at Peano position `N`.
#[diagnostic::on_unimplemented(
    message = "position out of range for `{Self}`",
    label = "no field at this position"
)]
pub trait At<N> {
    type Target;

    fn at(&self) -> &Self::Target;
    fn at_mut(&mut self) -> &mut Self::Target;
}

impl<H, T> At<Zero> for HCons<H, T> {
    type Target = H;

    fn at(&self) -> &H {
        &self.head
    }

    fn at_mut(&mut self) -> &mut H {
        &mut self.head
    }
}

impl<N, H, T: At<N>> At<Succ<N>> for HCons<H, T> {
    type Target = T::Target;

    fn at(&self) -> &T::Target {
        self.tail.at()
    }

    fn at_mut(&mut self) -> &mut T::Target {
        self.tail.at_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{Bool, Nth};
    use crate::{Field, Name};
    use std::any::TypeId;

    type Price = Field<Name!(price), f64>;
    type Size = Field<Name!(size), i32>;
    type Trade = HList![Price, Size];

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn lookup_by_name_finds_the_pair() {
        assert!(same::<LookupOf<Trade, Name!(price), NotFound>, Price>());
        assert!(same::<LookupOf<Trade, Name!(size), NotFound>, Size>());
    }

    #[test]
    fn lookup_of_unknown_name_yields_fallback() {
        assert!(same::<LookupOf<Trade, Name!(unknown), ()>, ()>());
        assert!(same::<LookupOf<Trade, Name!(pric), NotFound>, NotFound>());
        assert!(same::<LookupOf<HNil, Name!(price), NotFound>, NotFound>());
    }

    #[test]
    fn lookup_by_position_uses_enumerated_pairs() {
        assert!(same::<ElementAt<Trade, 0>, Price>());
        assert!(same::<ElementAt<Trade, 1>, Size>());
        assert!(same::<LookupOf<Enumerated<Trade>, Nth<2>, NotFound>, NotFound>());
    }

    #[test]
    fn contains_and_distinct() {
        assert!(<<Trade as Contains<Name!(size)>>::Output as Bool>::VALUE);
        assert!(!<<Trade as Contains<Name!(value)>>::Output as Bool>::VALUE);
        assert!(<<Trade as Distinct>::Output as Bool>::VALUE);
        assert!(!<<HList![Price, Size, Price] as Distinct>::Output as Bool>::VALUE);
    }

    #[test]
    fn pick_and_at_reach_the_same_slot() {
        let mut trade: Trade = HCons::new(Field::new(1.5), HCons::new(Field::new(10), HNil));
        assert_eq!(<Trade as Pick<Name!(size)>>::pick(&trade).value, 10);
        <Trade as Pick<Name!(size)>>::pick_mut(&mut trade).value = 11;
        assert_eq!(<Trade as At<Nth<1>>>::at(&trade).value, 11);
        assert_eq!(<Trade as Pick<Name!(price)>>::take(trade).value, 1.5);
    }
}

//! Type-level names, booleans and naturals.
//!
//! A field name is a type, [`Name<S>`], where `S` spells the UTF-8 bytes of
//! the name as a [`Chars`] list of [`Byte`]s. Because the type is derived
//! from the content, `Name!(price)` written in two different places is the
//! same type, and [`TypeEq`] can decide name equality without any run-time
//! work. Positional keys use Peano naturals ([`Zero`], [`Succ`]).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Longest name, in bytes, a [`Name`] can spell.
pub const MAX_NAME_LEN: usize = 64;

// ----------------------------------------------------------------------------
// booleans

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

pub trait Bool: 'static {
    const VALUE: bool;
}

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

pub trait Not {
    type Output: Bool;
}

impl Not for True {
    type Output = False;
}

impl Not for False {
    type Output = True;
}

pub trait And<Rhs> {
    type Output: Bool;
}

impl<Rhs: Bool> And<Rhs> for True {
    type Output = Rhs;
}

impl<Rhs: Bool> And<Rhs> for False {
    type Output = False;
}

pub trait Or<Rhs> {
    type Output: Bool;
}

impl<Rhs: Bool> Or<Rhs> for True {
    type Output = True;
}

impl<Rhs: Bool> Or<Rhs> for False {
    type Output = Rhs;
}

/// Type-level conditional: `Then` for [`True`], `Else` for [`False`].
pub trait If<Then, Else> {
    type Output;
}

impl<Then, Else> If<Then, Else> for True {
    type Output = Then;
}

impl<Then, Else> If<Then, Else> for False {
    type Output = Else;
}

/// Type-level equality of keys.
///
/// Implemented for names (content comparison) and for Peano naturals.
/// Comparing keys of different kinds is not defined.
pub trait TypeEq<Rhs> {
    type Output: Bool;
}

pub type IsEqual<A, B> = <A as TypeEq<B>>::Output;

type Both<A, B> = <A as And<B>>::Output;

// pairs let the byte comparison fan out as a shallow tree
impl<A, B, C, D> TypeEq<(C, D)> for (A, B)
where
    A: TypeEq<C>,
    B: TypeEq<D>,
    IsEqual<A, C>: And<IsEqual<B, D>>,
{
    type Output = Both<IsEqual<A, C>, IsEqual<B, D>>;
}

// ----------------------------------------------------------------------------
// bits and bytes

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bit0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bit1;

pub trait Bit: 'static {
    const VALUE: u8;
}

impl Bit for Bit0 {
    const VALUE: u8 = 0;
}

impl Bit for Bit1 {
    const VALUE: u8 = 1;
}

impl TypeEq<Bit0> for Bit0 {
    type Output = True;
}

impl TypeEq<Bit1> for Bit0 {
    type Output = False;
}

impl TypeEq<Bit0> for Bit1 {
    type Output = False;
}

impl TypeEq<Bit1> for Bit1 {
    type Output = True;
}

/// One byte of a name, most significant bit first.
pub struct Byte<A7, A6, A5, A4, A3, A2, A1, A0>(PhantomData<(A7, A6, A5, A4, A3, A2, A1, A0)>);

pub trait ByteValue: 'static {
    const VALUE: u8;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> ByteValue
    for Byte<A7, A6, A5, A4, A3, A2, A1, A0>
{
    const VALUE: u8 = A7::VALUE << 7
        | A6::VALUE << 6
        | A5::VALUE << 5
        | A4::VALUE << 4
        | A3::VALUE << 3
        | A2::VALUE << 2
        | A1::VALUE << 1
        | A0::VALUE;
}

impl<A7, A6, A5, A4, A3, A2, A1, A0, C7, C6, C5, C4, C3, C2, C1, C0>
    TypeEq<Byte<C7, C6, C5, C4, C3, C2, C1, C0>> for Byte<A7, A6, A5, A4, A3, A2, A1, A0>
where
    (((A7, A6), (A5, A4)), ((A3, A2), (A1, A0))):
        TypeEq<(((C7, C6), (C5, C4)), ((C3, C2), (C1, C0)))>,
{
    type Output = IsEqual<
        (((A7, A6), (A5, A4)), ((A3, A2), (A1, A0))),
        (((C7, C6), (C5, C4)), ((C3, C2), (C1, C0))),
    >;
}

// ----------------------------------------------------------------------------
// byte strings

/// End of a [`Chars`] list.
pub struct End;

/// A byte followed by the rest of a name.
pub struct Chars<C, Rest>(PhantomData<(C, Rest)>);

/// A type-level byte string.
///
/// The bytes are materialised right-aligned in `TAIL`, which lets every
/// list node place its own byte knowing only the length of its rest.
pub trait Text: 'static {
    const LEN: usize;
    const TAIL: [u8; MAX_NAME_LEN];
}

impl Text for End {
    const LEN: usize = 0;
    const TAIL: [u8; MAX_NAME_LEN] = [0; MAX_NAME_LEN];
}

impl<C: ByteValue, Rest: Text> Text for Chars<C, Rest> {
    const LEN: usize = Rest::LEN + 1;
    const TAIL: [u8; MAX_NAME_LEN] = {
        assert!(Rest::LEN < MAX_NAME_LEN, "name is longer than MAX_NAME_LEN");
        let mut tail = Rest::TAIL;
        tail[MAX_NAME_LEN - 1 - Rest::LEN] = C::VALUE;
        tail
    };
}

impl TypeEq<End> for End {
    type Output = True;
}

impl<C, Rest> TypeEq<Chars<C, Rest>> for End {
    type Output = False;
}

impl<C, Rest> TypeEq<End> for Chars<C, Rest> {
    type Output = False;
}

impl<C, Rest, D, Tail> TypeEq<Chars<D, Tail>> for Chars<C, Rest>
where
    C: TypeEq<D>,
    Rest: TypeEq<Tail>,
    IsEqual<C, D>: And<IsEqual<Rest, Tail>>,
{
    type Output = Both<IsEqual<C, D>, IsEqual<Rest, Tail>>;
}

// ----------------------------------------------------------------------------
// names

/// Something with a compile-time name: field names and record tags.
pub trait Label: 'static {
    const NAME: &'static str;
}

/// A field or tag name. Zero-sized; write it with `name!(price)` as a value
/// or `Name!(price)` as a type.
pub struct Name<S>(PhantomData<S>);

/// The empty name, used by records without a tag.
pub type Untagged = Name<End>;

impl<S> Name<S> {
    pub const fn new() -> Self {
        Name(PhantomData)
    }
}

impl<S: Text> Name<S> {
    const BYTES: &'static [u8; MAX_NAME_LEN] = &S::TAIL;

    pub const LEN: usize = S::LEN;
}

impl<S: Text> Label for Name<S> {
    const NAME: &'static str = {
        let (_, bytes) = Self::BYTES.split_at(MAX_NAME_LEN - S::LEN);
        match std::str::from_utf8(bytes) {
            Ok(name) => name,
            Err(_) => panic!("name is not valid UTF-8"),
        }
    };
}

impl<A, B> TypeEq<Name<B>> for Name<A>
where
    A: TypeEq<B>,
{
    type Output = IsEqual<A, B>;
}

impl<S> Clone for Name<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Name<S> {}

impl<S> Default for Name<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> PartialEq for Name<S> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<S> Eq for Name<S> {}

impl<S> Hash for Name<S> {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<S: Text> fmt::Debug for Name<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", Self::NAME)
    }
}

impl<S: Text> fmt::Display for Name<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

// ----------------------------------------------------------------------------
// naturals

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Zero;

pub struct Succ<N>(PhantomData<N>);

pub trait Nat: 'static {
    const VALUE: usize;
}

impl Nat for Zero {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: usize = N::VALUE + 1;
}

impl TypeEq<Zero> for Zero {
    type Output = True;
}

impl<N> TypeEq<Succ<N>> for Zero {
    type Output = False;
}

impl<N> TypeEq<Zero> for Succ<N> {
    type Output = False;
}

impl<N, M> TypeEq<Succ<M>> for Succ<N>
where
    N: TypeEq<M>,
{
    type Output = IsEqual<N, M>;
}

/// A `usize` position lifted to the type level through [`ToNat`].
pub struct Position<const N: usize>;

pub trait ToNat {
    type Output: Nat;
}

/// The Peano natural for position `N`.
pub type Nth<const N: usize> = <Position<N> as ToNat>::Output;

macro_rules! positions {
    ($prev:ty;) => {};
    ($prev:ty; $n:literal $($rest:literal)*) => {
        impl ToNat for Position<$n> {
            type Output = $prev;
        }
        positions!(Succ<$prev>; $($rest)*);
    };
}

positions!(Zero; 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Name;
    use pretty_assertions::assert_eq;

    fn equal<A: TypeEq<B>, B>() -> bool {
        <IsEqual<A, B> as Bool>::VALUE
    }

    #[test]
    fn names_round_trip_their_text() {
        assert_eq!(<Name!(price) as Label>::NAME, "price");
        assert_eq!(<Name!("a longer name, with spaces") as Label>::NAME, "a longer name, with spaces");
        assert_eq!(<Name!("größe") as Label>::NAME, "größe");
        assert_eq!(<Untagged as Label>::NAME, "");
        assert_eq!(<Name!(price)>::LEN, 5);
    }

    #[test]
    fn name_equality_is_content_equality() {
        assert!(equal::<Name!(price), Name!("price")>());
        assert!(!equal::<Name!(price), Name!(prices)>());
        assert!(!equal::<Name!(prices), Name!(price)>());
        assert!(!equal::<Name!(price), Name!(pride)>());
        assert!(equal::<Untagged, Name!("")>());
        assert!(!equal::<Untagged, Name!(a)>());
    }

    #[test]
    fn naturals_compare_by_value() {
        assert!(equal::<Nth<3>, Succ<Succ<Succ<Zero>>>>());
        assert!(!equal::<Nth<3>, Nth<4>>());
        assert!(!equal::<Zero, Nth<1>>());
        assert_eq!(<Nth<31> as Nat>::VALUE, 31);
    }

    #[test]
    fn boolean_operators() {
        assert!(<<True as And<True>>::Output as Bool>::VALUE);
        assert!(!<<True as And<False>>::Output as Bool>::VALUE);
        assert!(<<False as Or<True>>::Output as Bool>::VALUE);
        assert!(<<False as Not>::Output as Bool>::VALUE);
    }

    #[test]
    fn name_tokens_format_their_text() {
        let name = crate::name!(price);
        assert_eq!(name.to_string(), "price");
        assert_eq!(format!("{name:?}"), "Name(\"price\")");
    }
}

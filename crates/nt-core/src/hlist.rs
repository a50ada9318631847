//! Heterogeneous lists: the storage behind every record.
//!
//! Both nodes are `#[repr(C)]`, so fields are laid out in declared order
//! and padded by the usual C rules.

/// The empty list.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HNil;

/// A list node: `head` followed by the list `tail`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

pub trait HList {
    const LEN: usize;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Appends `Rhs` after the elements of `Self`.
pub trait Concat<Rhs> {
    type Output;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

pub type Concatenated<A, B> = <A as Concat<B>>::Output;

impl<Rhs> Concat<Rhs> for HNil {
    type Output = Rhs;

    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T: Concat<Rhs>, Rhs> Concat<Rhs> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    fn concat(self, rhs: Rhs) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.concat(rhs),
        }
    }
}

/// References to every element, in order.
pub trait AsRefs<'a> {
    type Output;

    fn as_refs(&'a self) -> Self::Output;
}

impl<'a> AsRefs<'a> for HNil {
    type Output = HNil;

    fn as_refs(&'a self) -> HNil {
        HNil
    }
}

impl<'a, H: 'a, T: AsRefs<'a>> AsRefs<'a> for HCons<H, T> {
    type Output = HCons<&'a H, T::Output>;

    fn as_refs(&'a self) -> Self::Output {
        HCons {
            head: &self.head,
            tail: self.tail.as_refs(),
        }
    }
}

/// Mutable references to every element, in order.
pub trait AsMuts<'a> {
    type Output;

    fn as_muts(&'a mut self) -> Self::Output;
}

impl<'a> AsMuts<'a> for HNil {
    type Output = HNil;

    fn as_muts(&'a mut self) -> HNil {
        HNil
    }
}

impl<'a, H: 'a, T: AsMuts<'a>> AsMuts<'a> for HCons<H, T> {
    type Output = HCons<&'a mut H, T::Output>;

    fn as_muts(&'a mut self) -> Self::Output {
        HCons {
            head: &mut self.head,
            tail: self.tail.as_muts(),
        }
    }
}

/// Conversion from a tuple (or an `HList`) into an `HList`.
pub trait IntoHList {
    type Output: HList;

    fn into_hlist(self) -> Self::Output;
}

impl IntoHList for HNil {
    type Output = HNil;

    fn into_hlist(self) -> HNil {
        self
    }
}

impl<H, T: HList> IntoHList for HCons<H, T> {
    type Output = Self;

    fn into_hlist(self) -> Self {
        self
    }
}

/// Conversion from an `HList` into the tuple of the same elements.
pub trait IntoTuple {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

macro_rules! tuple_conversions {
    ($($name:ident),*) => {
        impl<$($name),*> IntoHList for ($($name,)*) {
            type Output = HList![$($name),*];

            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_hlist(self) -> Self::Output {
                let ($($name,)*) = self;
                hlist![$($name),*]
            }
        }

        impl<$($name),*> IntoTuple for HList![$($name),*] {
            type Tuple = ($($name,)*);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_tuple(self) -> Self::Tuple {
                let hlist_pat![$($name),*] = self;
                ($($name,)*)
            }
        }
    };
}

tuple_conversions!();
tuple_conversions!(A);
tuple_conversions!(A, B);
tuple_conversions!(A, B, C);
tuple_conversions!(A, B, C, D);
tuple_conversions!(A, B, C, D, E);
tuple_conversions!(A, B, C, D, E, F);
tuple_conversions!(A, B, C, D, E, F, G);
tuple_conversions!(A, B, C, D, E, F, G, H);
tuple_conversions!(A, B, C, D, E, F, G, H, I);
tuple_conversions!(A, B, C, D, E, F, G, H, I, J);
tuple_conversions!(A, B, C, D, E, F, G, H, I, J, K);
tuple_conversions!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn concat_keeps_relative_order() {
        let joined = hlist![1u8, "two"].concat(hlist![3.0f64, '4']);
        assert_eq!(joined, hlist![1u8, "two", 3.0f64, '4']);
        assert_eq!(joined.len(), 4);
        assert_eq!(HNil.concat(HNil), HNil);
    }

    #[test]
    fn converts_between_tuples_and_lists() {
        let list = (1, "a", 'c').into_hlist();
        let hlist_pat![one, a, c] = list;
        assert_eq!((one, a, c), (1, "a", 'c'));
        assert_eq!(hlist![true, 2u16].into_tuple(), (true, 2u16));
        assert_eq!(().into_hlist(), HNil);
    }

    #[test]
    fn mutable_references_split_the_list() {
        let mut list = hlist![1, String::from("x")];
        let hlist_pat![number, text] = list.as_muts();
        *number += 1;
        text.push('y');
        assert_eq!(list, hlist![2, String::from("xy")]);
    }
}

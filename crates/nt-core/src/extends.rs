//! Structural extension: "any record with at least these fields".

use crate::field::FieldValue;
use crate::hlist::{HCons, HNil, IntoHList};
use crate::label::{And, Bool, True};
use crate::lookup::{Contains, Pick};
use crate::record::Record;

/// Whether every key of the list `Ks` appears in `Self`.
pub trait ContainsAll<Ks> {
    type Output: Bool;
}

impl<L> ContainsAll<HNil> for L {
    type Output = True;
}

impl<L, K, Ks> ContainsAll<HCons<K, Ks>> for L
where
    L: Contains<K> + ContainsAll<Ks>,
    <L as Contains<K>>::Output: And<<L as ContainsAll<Ks>>::Output>,
{
    type Output = <<L as Contains<K>>::Output as And<<L as ContainsAll<Ks>>::Output>>::Output;
}

/// Records that have a field for every name in `Ks`, in any order, under
/// any tag, possibly among other fields. `Ks` is a tuple of name types:
///
/// ```
/// use nt_core::{name, named_tuple, Extends, Has, Name};
///
/// fn get_name<R>(record: &R) -> i32
/// where
///     R: Extends<(Name!(name),)> + Has<Name!(name), Value = i32>,
/// {
///     *record.get_value()
/// }
///
/// let empty = named_tuple!();
/// assert_eq!(get_name(&named_tuple!(empty, name = 42)), 42);
/// ```
///
/// A record without the field does not qualify:
///
/// ```compile_fail,E0277
/// use nt_core::{named_tuple, Extends, Name};
///
/// fn needs_name<R: Extends<(Name!(name),)>>(_: &R) {}
///
/// needs_name(&named_tuple!(title = "x"));
/// ```
pub trait Extends<Ks>: Record {}

impl<R, Ks> Extends<Ks> for R
where
    R: Record,
    Ks: IntoHList,
    R::Fields: ContainsAll<Ks::Output, Output = True>,
{
}

/// Implemented only by [`True`], the verdict of [`ContainsAll`] when no
/// name is missing.
#[diagnostic::on_unimplemented(
    message = "the record does not have all the required fields",
    label = "missing one or more fields",
    note = "every listed name has to be a field of the record"
)]
pub trait AllFieldsPresent: Bool {}

impl AllFieldsPresent for True {}

/// [`Extends`] as a constant, for compile-time assertions that must also
/// hold in the negative.
pub const fn extends<R, Ks>() -> bool
where
    R: Record,
    Ks: IntoHList,
    R::Fields: ContainsAll<Ks::Output>,
{
    <<R::Fields as ContainsAll<Ks::Output>>::Output as Bool>::VALUE
}

/// Access to the value of field `K` from code generic over the record.
pub trait Has<K>: Record {
    type Value;

    fn get_value(&self) -> &Self::Value;
    fn get_value_mut(&mut self) -> &mut Self::Value;
}

impl<R, K> Has<K> for R
where
    K: 'static,
    R: Record,
    R::Fields: Pick<K>,
    <R::Fields as Pick<K>>::Target: FieldValue,
{
    type Value = <<R::Fields as Pick<K>>::Target as FieldValue>::Value;

    fn get_value(&self) -> &Self::Value {
        Pick::<K>::pick(self.fields()).value_ref()
    }

    fn get_value_mut(&mut self) -> &mut Self::Value {
        Pick::<K>::pick_mut(self.fields_mut()).value_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{name, named_tuple, Name, NamedTuple};
    use pretty_assertions::assert_eq;

    type Trade = NamedTuple!(price: i32, size: u64);

    const _: () = assert!(!extends::<Trade, (Name!(quantity),)>());
    const _: () = assert!(!extends::<Trade, (Name!(price), Name!(quantity))>());
    const _: () = assert!(!extends::<Trade, (Name!(price), Name!(size), Name!(value))>());
    const _: () = assert!(extends::<Trade, (Name!(price), Name!(size))>());
    const _: () = assert!(extends::<Trade, (Name!(size), Name!(price))>());
    const _: () = assert!(extends::<Trade, ()>());

    fn total<R>(record: &R) -> u64
    where
        R: Extends<(Name!(price), Name!(size))>
            + Has<Name!(price), Value = i32>
            + Has<Name!(size), Value = u64>,
    {
        *Has::<Name!(price)>::get_value(record) as u64 * *Has::<Name!(size)>::get_value(record)
    }

    #[test]
    fn extension_ignores_order_tag_and_extra_fields() {
        let trade = named_tuple!(Trade { size = 3u64, venue = "X", price = 7 });
        assert_eq!(total(&trade), 21);

        let plain: Trade = NamedTuple::from_values((2, 5u64));
        assert_eq!(total(&plain), 10);
    }

    #[test]
    fn empty_record_extends_nothing_until_composed() {
        let empty = named_tuple!();
        assert!(!extends_name(&empty));

        let mut named = named_tuple!(empty, name = 42);
        assert!(extends_name(&named));
        *Has::<Name!(name)>::get_value_mut(&mut named) += 1;
        assert_eq!(named[name!(name)], 43);
    }

    fn extends_name<R>(_: &R) -> bool
    where
        R: Record,
        R::Fields: ContainsAll<crate::HList![Name!(name)]>,
    {
        extends::<R, (Name!(name),)>()
    }
}

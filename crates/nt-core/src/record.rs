//! The named tuple itself.
//!
//! [`NamedTuple<Tag, F>`] wraps an [`HCons`] list `F` of [`Field`]s. All
//! name-based access goes through [`Pick`], so an unknown name is a trait
//! resolution failure at the call site and costs nothing at run time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::field::{Field, FieldValue};
use crate::hlist::{AsMuts, AsRefs, HCons, HList, HNil, IntoHList, IntoTuple};
use crate::label::{Label, Name, Nth, Position, ToNat};
use crate::lookup::{At, ElementAt, Pick, UniqueKeys};

/// An ordered, fixed set of named fields with an optional display tag.
///
/// Build one with `named_tuple!` and spell its type with `NamedTuple!`:
///
/// ```
/// use nt_core::{name, named_tuple};
///
/// let mut trade = named_tuple!(Trade { price = 42, size = 100u64 });
/// trade[name!(price)] += 1;
/// assert_eq!(trade[name!(price)], 43);
/// assert_eq!(trade.to_string(), "Trade{price:43,size:100}");
/// ```
///
/// Names are checked when the program is compiled. An unknown name does not
/// resolve:
///
/// ```compile_fail,E0277
/// use nt_core::{name, named_tuple};
///
/// let trade = named_tuple!(price = 42, size = 100u64);
/// let _ = trade.value(name!(quantity));
/// ```
///
/// ```compile_fail
/// use nt_core::{name, named_tuple};
///
/// let trade = named_tuple!(price = 42, size = 100u64);
/// let _ = trade[name!(quantity)];
/// ```
///
/// Neither does a record that declares a name twice:
///
/// ```compile_fail
/// use nt_core::named_tuple;
///
/// let _ = named_tuple!(price = 1, price = 2);
/// ```
#[repr(transparent)]
pub struct NamedTuple<Tag, F> {
    fields: F,
    tag: PhantomData<Tag>,
}

/// Implemented by every named tuple; the bound generic code uses.
pub trait Record {
    type Tag: Label;
    type Fields: HList;

    const SIZE: usize = <Self::Fields as HList>::LEN;

    fn tag(&self) -> &'static str {
        <Self::Tag as Label>::NAME
    }

    fn fields(&self) -> &Self::Fields;
    fn fields_mut(&mut self) -> &mut Self::Fields;
    fn into_fields(self) -> Self::Fields;
}

impl<Tag: Label, F: HList> Record for NamedTuple<Tag, F> {
    type Tag = Tag;
    type Fields = F;

    fn fields(&self) -> &F {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    fn into_fields(self) -> F {
        self.fields
    }
}

/// The field type at position `N` of record `R`.
pub type FieldAt<R, const N: usize> = ElementAt<<R as Record>::Fields, N>;

impl<Tag, F> NamedTuple<Tag, F> {
    /// Wraps a list of fields. Rejects lists that repeat a name.
    pub const fn new(fields: F) -> Self
    where
        F: UniqueKeys,
    {
        Self {
            fields,
            tag: PhantomData,
        }
    }

    /// Aggregate construction: one value per field, in declared order.
    pub fn from_values<Vs>(values: Vs) -> Self
    where
        Vs: IntoHList,
        F: FromValues<Vs::Output> + UniqueKeys,
    {
        Self::new(F::from_values(values.into_hlist()))
    }

    /// Converts a record with the same tag and field names, field by field.
    pub fn from_record<G>(other: NamedTuple<Tag, G>) -> Self
    where
        F: FromFields<G> + UniqueKeys,
    {
        Self::new(F::from_fields(other.fields))
    }

    pub fn assign_record<G>(&mut self, other: NamedTuple<Tag, G>) -> &mut Self
    where
        F: FromFields<G>,
    {
        self.fields = F::from_fields(other.fields);
        self
    }

    pub const fn size(&self) -> usize
    where
        F: HList,
    {
        F::LEN
    }

    pub fn field<S>(&self, _: Name<S>) -> &<F as Pick<Name<S>>>::Target
    where
        F: Pick<Name<S>>,
    {
        Pick::<Name<S>>::pick(&self.fields)
    }

    pub fn field_mut<S>(&mut self, _: Name<S>) -> &mut <F as Pick<Name<S>>>::Target
    where
        F: Pick<Name<S>>,
    {
        Pick::<Name<S>>::pick_mut(&mut self.fields)
    }

    pub fn value<S>(&self, name: Name<S>) -> &Value<F, Name<S>>
    where
        S: 'static,
        F: Pick<Name<S>>,
        F::Target: FieldValue,
    {
        self.field(name).value_ref()
    }

    pub fn value_mut<S>(&mut self, name: Name<S>) -> &mut Value<F, Name<S>>
    where
        S: 'static,
        F: Pick<Name<S>>,
        F::Target: FieldValue,
    {
        self.field_mut(name).value_mut()
    }

    /// The field at position `N`. Out-of-range positions do not compile:
    ///
    /// ```compile_fail
    /// use nt_core::named_tuple;
    ///
    /// let trade = named_tuple!(price = 42, size = 100u64);
    /// assert_eq!(trade.get::<1>().value, 100);
    /// let _ = trade.get::<2>();
    /// ```
    pub fn get<const N: usize>(&self) -> &<F as At<Nth<N>>>::Target
    where
        Position<N>: ToNat,
        F: At<Nth<N>>,
    {
        At::<Nth<N>>::at(&self.fields)
    }

    pub fn get_mut<const N: usize>(&mut self) -> &mut <F as At<Nth<N>>>::Target
    where
        Position<N>: ToNat,
        F: At<Nth<N>>,
    {
        At::<Nth<N>>::at_mut(&mut self.fields)
    }

    /// Bulk assignment from a tuple.
    ///
    /// Plain values are assigned by position and must cover every field.
    /// Fields (`name!(size).set(3)`) are assigned by name, in any order,
    /// and may cover only some of the fields. The shape is inferred from
    /// the arguments; mixing both kinds does not compile.
    ///
    /// ```
    /// use nt_core::{name, named_tuple};
    ///
    /// let mut trade = named_tuple!(price: i32, size: u64);
    /// trade.assign((1, 2u64));
    /// trade.assign((name!(size).set(3u64),));
    /// assert_eq!(trade, named_tuple!(price = 1, size = 3u64));
    /// ```
    ///
    /// Too few positional values:
    ///
    /// ```compile_fail
    /// use nt_core::named_tuple;
    ///
    /// let mut trade = named_tuple!(price: i32, size: u64);
    /// trade.assign((1,));
    /// ```
    ///
    /// A field next to a plain value:
    ///
    /// ```compile_fail
    /// use nt_core::{name, named_tuple};
    ///
    /// let mut trade = named_tuple!(price: i32, size: u64);
    /// trade.assign((name!(price).set(1), 5u64));
    /// ```
    pub fn assign<Args, Shape>(&mut self, args: Args) -> &mut Self
    where
        F: Assign<Args, Shape>,
    {
        Assign::<Args, Shape>::assign(&mut self.fields, args);
        self
    }

    /// Calls `f` with references to the values of the listed fields.
    ///
    /// ```
    /// use nt_core::{name, named_tuple};
    ///
    /// let trade = named_tuple!(price = 2.5, size = 4.0);
    /// let notional = trade.apply((name!(size), name!(price)), |(size, price)| size * price);
    /// assert_eq!(notional, 10.0);
    /// ```
    pub fn apply<'a, Ks, R>(
        &'a self,
        _keys: Ks,
        f: impl FnOnce(<Selected<'a, F, Ks::Output> as IntoTuple>::Tuple) -> R,
    ) -> R
    where
        Ks: IntoHList,
        F: Select<'a, Ks::Output>,
        Selected<'a, F, Ks::Output>: IntoTuple,
    {
        f(self.fields.select().into_tuple())
    }

    /// Calls `f` with a reference to every field wrapper, in declared order.
    pub fn apply_all<'a, R>(
        &'a self,
        f: impl FnOnce(<<F as AsRefs<'a>>::Output as IntoTuple>::Tuple) -> R,
    ) -> R
    where
        F: AsRefs<'a>,
        F::Output: IntoTuple,
    {
        f(self.as_fields())
    }

    pub fn for_each_field<V>(&self, visitor: &mut V)
    where
        F: VisitFields<V>,
    {
        self.fields.visit_fields(visitor);
    }

    /// Destructures into references to the field wrappers.
    pub fn as_fields<'a>(&'a self) -> <<F as AsRefs<'a>>::Output as IntoTuple>::Tuple
    where
        F: AsRefs<'a>,
        F::Output: IntoTuple,
    {
        self.fields.as_refs().into_tuple()
    }

    /// Destructures into mutable references; writes go to this record.
    pub fn as_fields_mut<'a>(&'a mut self) -> <<F as AsMuts<'a>>::Output as IntoTuple>::Tuple
    where
        F: AsMuts<'a>,
        F::Output: IntoTuple,
    {
        self.fields.as_muts().into_tuple()
    }

    pub fn into_tuple(self) -> F::Tuple
    where
        F: IntoTuple,
    {
        self.fields.into_tuple()
    }
}

/// The value type behind key `K` in the field list `F`.
pub type Value<F, K> = <<F as Pick<K>>::Target as FieldValue>::Value;

impl<Tag, F, S> Index<Name<S>> for NamedTuple<Tag, F>
where
    S: 'static,
    F: Pick<Name<S>>,
    F::Target: FieldValue,
{
    type Output = Value<F, Name<S>>;

    fn index(&self, name: Name<S>) -> &Self::Output {
        self.value(name)
    }
}

impl<Tag, F, S> IndexMut<Name<S>> for NamedTuple<Tag, F>
where
    S: 'static,
    F: Pick<Name<S>>,
    F::Target: FieldValue,
{
    fn index_mut(&mut self, name: Name<S>) -> &mut Self::Output {
        self.value_mut(name)
    }
}

// ----------------------------------------------------------------------------
// construction

pub trait FromValues<Vs> {
    fn from_values(values: Vs) -> Self;
}

impl FromValues<HNil> for HNil {
    fn from_values(_: HNil) -> Self {
        HNil
    }
}

impl<K, V, T, X, Xs> FromValues<HCons<X, Xs>> for HCons<Field<K, V>, T>
where
    X: Into<V>,
    T: FromValues<Xs>,
{
    fn from_values(values: HCons<X, Xs>) -> Self {
        HCons::new(
            Field::new(values.head.into()),
            T::from_values(values.tail),
        )
    }
}

pub trait FromFields<G> {
    fn from_fields(fields: G) -> Self;
}

impl FromFields<HNil> for HNil {
    fn from_fields(_: HNil) -> Self {
        HNil
    }
}

impl<K, V, W, T, U> FromFields<HCons<Field<K, W>, U>> for HCons<Field<K, V>, T>
where
    W: Into<V>,
    T: FromFields<U>,
{
    fn from_fields(fields: HCons<Field<K, W>, U>) -> Self {
        HCons::new(
            Field::new(fields.head.value.into()),
            T::from_fields(fields.tail),
        )
    }
}

/// Anything `named_tuple!` can splice into a new record: a single field,
/// a record (moved) or a borrowed record (cloned).
pub trait Splice {
    type Fields;

    fn splice(self) -> Self::Fields;
}

impl<K, V> Splice for Field<K, V> {
    type Fields = HCons<Self, HNil>;

    fn splice(self) -> Self::Fields {
        HCons::new(self, HNil)
    }
}

impl<Tag, F> Splice for NamedTuple<Tag, F> {
    type Fields = F;

    fn splice(self) -> F {
        self.fields
    }
}

impl<Tag, F: Clone> Splice for &NamedTuple<Tag, F> {
    type Fields = F;

    fn splice(self) -> F {
        self.fields.clone()
    }
}

// ----------------------------------------------------------------------------
// assignment

/// Assignment shape: one plain value per field, in order.
pub enum Positional {}

/// Assignment shape: named fields, any subset, any order.
pub enum ByName {}

#[diagnostic::on_unimplemented(
    message = "cannot assign `{Args}` to the fields `{Self}`",
    label = "arguments do not match the record",
    note = "pass either one convertible value per field, in order, or only named fields like `name!(price).set(1)`"
)]
pub trait Assign<Args, Shape> {
    fn assign(&mut self, args: Args);
}

impl<F, Args> Assign<Args, Positional> for F
where
    Args: IntoHList,
    F: FromValues<Args::Output>,
{
    fn assign(&mut self, args: Args) {
        *self = F::from_values(args.into_hlist());
    }
}

impl<F, Args> Assign<Args, ByName> for F
where
    Args: IntoHList,
    F: AssignFields<Args::Output>,
{
    fn assign(&mut self, args: Args) {
        AssignFields::<Args::Output>::assign_fields(self, args.into_hlist());
    }
}

pub trait AssignFields<Args> {
    fn assign_fields(&mut self, args: Args);
}

impl<F> AssignFields<HNil> for F {
    fn assign_fields(&mut self, _: HNil) {}
}

impl<F, K, W, Rest> AssignFields<HCons<Field<K, W>, Rest>> for F
where
    F: Pick<K> + AssignFields<Rest>,
    F::Target: FieldValue,
    W: Into<Value<F, K>>,
{
    fn assign_fields(&mut self, args: HCons<Field<K, W>, Rest>) {
        *Pick::<K>::pick_mut(self).value_mut() = args.head.value.into();
        AssignFields::<Rest>::assign_fields(self, args.tail);
    }
}

// ----------------------------------------------------------------------------
// bulk reads

/// Gathers `&value` for each key of the list `Ks`.
pub trait Select<'a, Ks> {
    type Output;

    fn select(&'a self) -> Self::Output;
}

pub type Selected<'a, F, Ks> = <F as Select<'a, Ks>>::Output;

impl<'a, F> Select<'a, HNil> for F {
    type Output = HNil;

    fn select(&'a self) -> HNil {
        HNil
    }
}

impl<'a, F, K, Ks> Select<'a, HCons<K, Ks>> for F
where
    F: Pick<K> + Select<'a, Ks>,
    F::Target: FieldValue + 'a,
{
    type Output = HCons<&'a Value<F, K>, Selected<'a, F, Ks>>;

    fn select(&'a self) -> Self::Output {
        HCons::new(
            Pick::<K>::pick(self).value_ref(),
            Select::<'a, Ks>::select(self),
        )
    }
}

/// Receives the name and value of each field, in declared order.
pub trait FieldVisitor<V: ?Sized> {
    fn visit(&mut self, name: &'static str, value: &V);
}

pub trait VisitFields<Vis> {
    fn visit_fields(&self, visitor: &mut Vis);
}

impl<Vis> VisitFields<Vis> for HNil {
    fn visit_fields(&self, _: &mut Vis) {}
}

impl<Vis, K, V, T> VisitFields<Vis> for HCons<Field<K, V>, T>
where
    Vis: FieldVisitor<V>,
    K: Label,
    T: VisitFields<Vis>,
{
    fn visit_fields(&self, visitor: &mut Vis) {
        visitor.visit(K::NAME, &self.head.value);
        self.tail.visit_fields(visitor);
    }
}

// ----------------------------------------------------------------------------
// rendering

#[doc(hidden)]
pub trait DisplayFields {
    fn fmt_fields(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result;
}

impl DisplayFields for HNil {
    fn fmt_fields(&self, _: &mut fmt::Formatter<'_>, _: bool) -> fmt::Result {
        Ok(())
    }
}

impl<K: Label, V: fmt::Display, T: DisplayFields> DisplayFields for HCons<Field<K, V>, T> {
    fn fmt_fields(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            f.write_str(",")?;
        }
        write!(f, "{}", self.head)?;
        self.tail.fmt_fields(f, false)
    }
}

#[doc(hidden)]
pub trait DebugFields {
    fn debug_fields(&self, entry: &mut dyn FnMut(&'static str, &dyn fmt::Debug));
}

impl DebugFields for HNil {
    fn debug_fields(&self, _: &mut dyn FnMut(&'static str, &dyn fmt::Debug)) {}
}

impl<K: Label, V: fmt::Debug, T: DebugFields> DebugFields for HCons<Field<K, V>, T> {
    fn debug_fields(&self, entry: &mut dyn FnMut(&'static str, &dyn fmt::Debug)) {
        entry(K::NAME, &self.head.value);
        self.tail.debug_fields(entry);
    }
}

/// `Tag{name:value,...}`, fields in declared order. Display only.
impl<Tag: Label, F: DisplayFields> fmt::Display for NamedTuple<Tag, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", Tag::NAME)?;
        self.fields.fmt_fields(f, true)?;
        f.write_str("}")
    }
}

/// `Tag { name: value, .. }`; without a tag, `{name: value, ..}`.
impl<Tag: Label, F: DebugFields> fmt::Debug for NamedTuple<Tag, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Tag::NAME.is_empty() {
            let mut out = f.debug_map();
            self.fields.debug_fields(&mut |name, value| {
                out.entry(&format_args!("{name}"), value);
            });
            out.finish()
        } else {
            let mut out = f.debug_struct(Tag::NAME);
            self.fields.debug_fields(&mut |name, value| {
                out.field(name, value);
            });
            out.finish()
        }
    }
}

// ----------------------------------------------------------------------------
// value semantics follow the fields

impl<Tag, F: Clone> Clone for NamedTuple<Tag, F> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            tag: PhantomData,
        }
    }
}

impl<Tag, F: Copy> Copy for NamedTuple<Tag, F> {}

impl<Tag, F: Default + UniqueKeys> Default for NamedTuple<Tag, F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<Tag, F: PartialEq> PartialEq for NamedTuple<Tag, F> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<Tag, F: Eq> Eq for NamedTuple<Tag, F> {}

impl<Tag, F: Hash> Hash for NamedTuple<Tag, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::Any;
    use crate::{name, named_tuple, NamedTuple};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_record_renders_its_tag_only() {
        let empty = named_tuple!();
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.to_string(), "{}");
        assert_eq!(named_tuple!(Unit {}).to_string(), "Unit{}");
    }

    #[test]
    fn direct_initialisation() {
        let trade = named_tuple!(Trade { price = 42, size = 100 });
        assert_eq!(trade[name!(price)], 42);
        assert_eq!(trade[name!(size)], 100);
        assert_eq!(trade.tag(), "Trade");
        assert_eq!(trade.to_string(), "Trade{price:42,size:100}");
        assert_eq!(format!("{trade:?}"), "Trade { price: 42, size: 100 }");
    }

    #[test]
    fn debug_without_tag_has_no_leading_space() {
        let trade = named_tuple!(price = 42, venue = "X");
        assert_eq!(format!("{trade:?}"), r#"{price: 42, venue: "X"}"#);
        assert_eq!(format!("{:?}", named_tuple!()), "{}");
        assert_eq!(format!("{:?}", named_tuple!(Unit {})), "Unit");
    }

    #[test]
    fn assign_by_position_then_by_name() {
        let mut trade = named_tuple!(price: i32, size: u64);
        assert_eq!((trade[name!(price)], trade[name!(size)]), (0, 0));

        trade.assign((42, 99u64));
        assert_eq!((trade[name!(price)], trade[name!(size)]), (42, 99));

        trade.assign((name!(size).set(1234u64), name!(price).set(11)));
        assert_eq!((trade[name!(price)], trade[name!(size)]), (11, 1234));

        trade.assign((name!(price).set(7i16),));
        assert_eq!((trade[name!(price)], trade[name!(size)]), (7, 1234));
    }

    #[test]
    fn index_assignment_writes_through() {
        let mut trade = named_tuple!(price: i32, size: u64);
        trade[name!(price)] = 12;
        trade[name!(size)] = 34;
        *trade.value_mut(name!(size)) += 1;
        assert_eq!(trade, named_tuple!(price = 12, size = 35u64));
    }

    #[test]
    fn composition_splices_in_argument_order() {
        let quantity = named_tuple!(quantity = 42);
        let value = named_tuple!(value = 100u32);
        let mut msg = named_tuple!(Msg { &quantity, "price", "size", value });

        msg[name!(price)] = 12.into();
        msg[name!(size)] = 34u32.into();

        assert_eq!(msg.size(), 4);
        assert_eq!(msg.get::<0>().name(), "quantity");
        assert_eq!(msg.get::<1>().name(), "price");
        assert_eq!(msg.get::<2>().name(), "size");
        assert_eq!(msg.get::<3>().name(), "value");
        assert_eq!(msg[name!(price)].get::<i32>().ok(), Some(&12));
        assert_eq!(msg[name!(quantity)], 42);
        assert_eq!(quantity[name!(quantity)], 42);
        assert_eq!(msg.to_string(), "Msg{quantity:42,price:12,size:34,value:100}");
    }

    #[test]
    fn nested_records_index_through() {
        let person = named_tuple!("first", "last");
        let mut attendee = named_tuple!(Attendee { name = person, "position" });

        attendee[name!(name)][name!(first)] = "Lho".into();
        attendee[name!(name)][name!(last)] = "Hyung-Suk".into();
        attendee[name!(position)] = "CEO".into();

        assert_eq!(
            attendee.to_string(),
            "Attendee{name:{first:Lho,last:Hyung-Suk},position:CEO}"
        );
    }

    #[test]
    fn positional_access_follows_declaration_order() {
        let mut trade = named_tuple!(price = 100, size = 42u32);
        assert_eq!(trade.get::<0>().value, 100);
        assert_eq!(trade.get::<1>().value, 42);

        trade.get_mut::<1>().value = 7;
        assert_eq!(trade[name!(size)], 7);

        let _: &FieldAt<NamedTuple!(price: i32, size: u32), 1> = trade.get::<1>();
        assert_eq!(<NamedTuple!(price: i32, size: u32) as Record>::SIZE, 2);
    }

    #[test]
    fn decomposition_binds_field_references() {
        let mut trade = named_tuple!(price = 100, size = 42u32);
        let (price, size) = trade.as_fields_mut();
        price.value = 50;
        size.value = 40;
        assert_eq!(price.name(), "price");
        assert_eq!(trade.to_string(), "{price:50,size:40}");

        let (price, size) = trade.as_fields();
        assert_eq!((price.value, size.value), (50, 40));

        let (price, size) = trade.into_tuple();
        assert_eq!((price.into_value(), size.into_value()), (50, 40));
    }

    #[test]
    fn layout_follows_c_rules() {
        let packed = named_tuple!(_1: u8, _2: i32, _3: u8);
        assert_eq!(std::mem::size_of_val(&packed), 12);
        assert_eq!(std::mem::align_of_val(&packed), 4);
    }

    #[test]
    fn lists_go_into_placeholders() {
        let mut person = named_tuple!(Person { name: String, "children" });
        person.assign((
            name!(name).set(String::from("Hyung-Suk")),
            name!(children).set(Any::list(["Yoon-Jung", "BM"])),
        ));
        assert_eq!(person.to_string(), "Person{name:Hyung-Suk,children:Yoon-Jung,BM}");

        person.assign(("Mike", ["John"]));
        assert_eq!(person.to_string(), "Person{name:Mike,children:John}");
    }

    #[test]
    fn apply_passes_values_by_name() {
        let item = named_tuple!(price = 42, size = 100, name = String::from("Item"));
        let text = item.apply((name!(name), name!(price)), |(name, price)| format!("{name}@{price}"));
        assert_eq!(text, "Item@42");

        let rendered = item.apply_all(|(price, size, name)| {
            format!("{{\"{}\": {}, \"{}\": {}, \"{}\": {}}}", price.name(), price.value, size.name(), size.value, name.name(), name.value)
        });
        assert_eq!(rendered, "{\"price\": 42, \"size\": 100, \"name\": Item}");
    }

    struct Names(Vec<&'static str>);

    impl<V> FieldVisitor<V> for Names {
        fn visit(&mut self, name: &'static str, _: &V) {
            self.0.push(name);
        }
    }

    #[test]
    fn visitor_sees_every_field_in_order() {
        let employee = named_tuple!(Employee { "name", "age", "title" });
        let mut names = Names(Vec::new());
        employee.for_each_field(&mut names);
        assert_eq!(names.0, vec!["name", "age", "title"]);
    }

    #[test]
    fn aggregate_construction_and_conversion() {
        type Employee = NamedTuple!(Employee { name, age, title });
        let employees = vec![
            Employee::from_values((String::from("Hyung-Suk"), 20, String::from("Dad"))),
            Employee::from_values((String::from("Yoon-Jung"), 3, String::from("Baby"))),
        ];
        assert_eq!(employees[1][name!(age)].get::<i32>().ok(), Some(&3));

        let narrow = named_tuple!(Point { x = 1i32, y = 2i32 });
        let wide: NamedTuple!(Point { x: i64, y: i64 }) = NamedTuple::from_record(narrow);
        assert_eq!(wide[name!(y)], 2i64);

        let mut target: NamedTuple!(Point { x: f64, y: f64 }) = Default::default();
        target.assign_record(narrow);
        assert_eq!((target[name!(x)], target[name!(y)]), (1.0, 2.0));
    }
}

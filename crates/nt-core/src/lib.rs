//! Compile-time named tuples.
//!
//! A [`NamedTuple`] is a fixed, ordered list of [`Field`]s whose names are
//! part of their types. Every name-based operation (indexing, assignment,
//! shape checks) is resolved by the trait system, so a misspelled field is a
//! compile error and a program that compiles never looks a name up at run time.
//!
//! The `name!`, `Name!`, `field!`, `named_tuple!` and `NamedTuple!` macros
//! from `nt-macros` are re-exported here; they expand to `::nt_core` paths.

extern crate self as nt_core;

#[macro_use]
pub mod macros;

pub mod any;
pub mod error;
pub mod extends;
pub mod field;
pub mod hlist;
pub mod label;
pub mod literal;
pub mod lookup;
pub mod record;
pub mod to_json;

pub use any::Any;
pub use extends::{extends, ContainsAll, Extends, Has};
pub use field::{Field, FieldValue};
pub use hlist::{HCons, HNil};
pub use label::{Label, Name, Untagged};
pub use literal::Literal;
pub use lookup::{ElementAt, Lookup, LookupOf, NotFound};
pub use record::{FieldVisitor, NamedTuple, Record, Splice};
pub use to_json::ToJson;

pub use nt_macros::{field, name, named_tuple, Name, NamedTuple};

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;

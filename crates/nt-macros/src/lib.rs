//! Macros for `nt-core`. Use them through `nt_core`, which re-exports them;
//! the expansions refer to `::nt_core` paths.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod label;
mod record;

use label::FieldName;
use record::{FieldDecl, RecordExpr, RecordType};

/// A name token: `name!(price)` or `name!("price")`.
#[proc_macro]
pub fn name(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as FieldName);
    name.value_tokens().into()
}

/// The type of a name token: `Name!(price)`.
#[proc_macro]
#[allow(non_snake_case)]
pub fn Name(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as FieldName);
    name.type_tokens().into()
}

/// A single field: `field!(price = 42)`, `field!(price: f64)` or the open
/// placeholder `field!(price)`.
#[proc_macro]
pub fn field(input: TokenStream) -> TokenStream {
    let field = parse_macro_input!(input as FieldDecl);
    field.expr_tokens().into()
}

/// Builds a record value from fields and spliced records.
///
/// `named_tuple!(Tag { price = 42, size: u64, "note", other, &shared })`;
/// the `Tag { .. }` wrapper is optional.
#[proc_macro]
pub fn named_tuple(input: TokenStream) -> TokenStream {
    let record = parse_macro_input!(input as RecordExpr);
    record
        .expand()
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Spells a record type: `NamedTuple!(Tag { price: i32, note, ..Other })`.
#[proc_macro]
#[allow(non_snake_case)]
pub fn NamedTuple(input: TokenStream) -> TokenStream {
    let record = parse_macro_input!(input as RecordType);
    record
        .expand()
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::discouraged::Speculative;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{braced, token, Expr, Token, Type};

use crate::label::FieldName;

/// How a declared field gets its value.
#[derive(Debug)]
pub enum Init {
    /// `name = expr`
    Value(Expr),
    /// `name: Type`, default-initialised
    Typed(Type),
    /// `name` alone; the value type is `Any`
    Open,
}

#[derive(Debug)]
pub struct FieldDecl {
    pub name: FieldName,
    pub init: Init,
}

impl FieldDecl {
    fn starts(input: ParseStream) -> bool {
        if input.peek(syn::LitStr) {
            return true;
        }
        FieldName::peek(input)
            && ((input.peek2(Token![=]) && !input.peek2(Token![==]))
                || (input.peek2(Token![:]) && !input.peek2(Token![::])))
    }

    pub fn expr_tokens(&self) -> TokenStream {
        let key = self.name.type_tokens();
        match &self.init {
            Init::Value(expr) => quote!(::nt_core::field::Field::<#key, _>::new(#expr)),
            Init::Typed(ty) => {
                quote!(::nt_core::field::Field::<#key, #ty>::new(::core::default::Default::default()))
            }
            Init::Open => quote!(::nt_core::field::Field::<#key, ::nt_core::any::Any>::new(
                ::core::default::Default::default()
            )),
        }
    }

    fn type_tokens(&self) -> syn::Result<TokenStream> {
        let key = self.name.type_tokens();
        match &self.init {
            Init::Typed(ty) => Ok(quote!(::nt_core::field::Field<#key, #ty>)),
            Init::Open => Ok(quote!(::nt_core::field::Field<#key, ::nt_core::any::Any>)),
            Init::Value(expr) => Err(syn::Error::new_spanned(
                expr,
                "a record type takes `name: Type` or `name`, not a value",
            )),
        }
    }
}

impl Parse for FieldDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: FieldName = input.parse()?;
        let init = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Init::Value(input.parse()?)
        } else if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Init::Typed(input.parse()?)
        } else {
            Init::Open
        };
        Ok(FieldDecl { name, init })
    }
}

/// One argument of `named_tuple!`.
#[derive(Debug)]
pub enum ExprItem {
    Field(FieldDecl),
    /// A record, borrowed record or field whose fields are spliced in.
    Splice(Expr),
}

impl Parse for ExprItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if FieldDecl::starts(input) {
            Ok(ExprItem::Field(input.parse()?))
        } else {
            Ok(ExprItem::Splice(input.parse()?))
        }
    }
}

/// One entry of `NamedTuple!`.
#[derive(Debug)]
pub enum TypeItem {
    Field(FieldDecl),
    /// `..Record`
    Spread(Type),
}

impl Parse for TypeItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            Ok(TypeItem::Spread(input.parse()?))
        } else {
            Ok(TypeItem::Field(input.parse()?))
        }
    }
}

/// `Tag { items }` or bare `items`.
#[derive(Debug)]
pub struct Tagged<T> {
    pub tag: Option<FieldName>,
    pub items: Punctuated<T, Comma>,
}

impl<T: Parse> Parse for Tagged<T> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if FieldName::peek(input) && input.peek2(token::Brace) {
            let fork = input.fork();
            let tag: FieldName = fork.parse()?;
            let content;
            braced!(content in fork);
            if fork.is_empty() {
                let items = Punctuated::parse_terminated(&content)?;
                input.advance_to(&fork);
                return Ok(Tagged {
                    tag: Some(tag),
                    items,
                });
            }
        }
        Ok(Tagged {
            tag: None,
            items: Punctuated::parse_terminated(input)?,
        })
    }
}

impl<T> Tagged<T> {
    fn tag_tokens(&self) -> TokenStream {
        match &self.tag {
            Some(tag) => tag.type_tokens(),
            None => quote!(::nt_core::label::Untagged),
        }
    }
}

/// Names that are written out more than once. Names that arrive through a
/// splice are checked by the `UniqueKeys` bound instead.
fn check_duplicates<'a>(fields: impl Iterator<Item = &'a FieldDecl>) -> syn::Result<()> {
    let mut seen = HashSet::new();
    let mut errors = fields
        .filter(|field| !seen.insert(field.name.text.clone()))
        .map(|field| {
            syn::Error::new(
                field.name.span,
                format!("duplicate field name `{}`", field.name.text),
            )
        });
    match errors.next() {
        Some(mut first) => {
            errors.for_each(|err| first.combine(err));
            Err(first)
        }
        None => Ok(()),
    }
}

pub type RecordExpr = Tagged<ExprItem>;

impl RecordExpr {
    pub fn expand(&self) -> syn::Result<TokenStream> {
        check_duplicates(self.items.iter().filter_map(|item| match item {
            ExprItem::Field(field) => Some(field),
            ExprItem::Splice(_) => None,
        }))?;

        let tag = self.tag_tokens();
        let mut fields = quote!(::nt_core::hlist::HNil);
        for item in self.items.iter().rev() {
            fields = match item {
                ExprItem::Field(field) => {
                    let field = field.expr_tokens();
                    quote!(::nt_core::hlist::HCons::new(#field, #fields))
                }
                ExprItem::Splice(expr) => quote!(::nt_core::hlist::Concat::concat(
                    ::nt_core::record::Splice::splice(#expr),
                    #fields
                )),
            };
        }
        Ok(quote!(::nt_core::record::NamedTuple::<#tag, _>::new(#fields)))
    }
}

pub type RecordType = Tagged<TypeItem>;

impl RecordType {
    pub fn expand(&self) -> syn::Result<TokenStream> {
        check_duplicates(self.items.iter().filter_map(|item| match item {
            TypeItem::Field(field) => Some(field),
            TypeItem::Spread(_) => None,
        }))?;

        let tag = self.tag_tokens();
        let mut fields = quote!(::nt_core::hlist::HNil);
        for item in self.items.iter().rev() {
            fields = match item {
                TypeItem::Field(field) => {
                    let field = field.type_tokens()?;
                    quote!(::nt_core::hlist::HCons<#field, #fields>)
                }
                TypeItem::Spread(ty) => quote!(::nt_core::hlist::Concatenated<
                    <#ty as ::nt_core::record::Record>::Fields,
                    #fields
                >),
            };
        }
        Ok(quote!(::nt_core::record::NamedTuple<#tag, #fields>))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items(tokens: TokenStream) -> RecordExpr {
        syn::parse2(tokens).unwrap()
    }

    fn kinds(record: &RecordExpr) -> Vec<String> {
        record
            .items
            .iter()
            .map(|item| match item {
                ExprItem::Field(FieldDecl { name, init }) => match init {
                    Init::Value(_) => format!("{} =", name.text),
                    Init::Typed(_) => format!("{}:", name.text),
                    Init::Open => name.text.clone(),
                },
                ExprItem::Splice(_) => "splice".to_string(),
            })
            .collect()
    }

    #[test]
    fn items_are_told_apart() {
        let record = items(quote!(price = 42, size: u64, "note", other, &shared, a == b, path::to::record));
        assert!(record.tag.is_none());
        assert_eq!(
            kinds(&record),
            vec!["price =", "size:", "note", "splice", "splice", "splice", "splice"]
        );
    }

    #[test]
    fn tag_wraps_the_whole_input() {
        let record = items(quote!(Trade { price = 42 }));
        assert_eq!(record.tag.as_ref().map(|tag| tag.text.as_str()), Some("Trade"));
        assert_eq!(kinds(&record), vec!["price ="]);

        let empty = items(quote!(Unit {}));
        assert_eq!(empty.tag.map(|tag| tag.text), Some("Unit".to_string()));
        assert!(empty.items.is_empty());

        assert!(items(quote!()).tag.is_none());
    }

    #[test]
    fn duplicate_names_are_reported() {
        let err = items(quote!(price = 1, size = 2, "price" = 3)).expand().unwrap_err();
        assert_eq!(err.to_string(), "duplicate field name `price`");

        let err = syn::parse2::<RecordType>(quote!(Trade { a: i32, a }))
            .unwrap()
            .expand()
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate field name `a`");
    }

    #[test]
    fn record_types_reject_values() {
        let err = syn::parse2::<RecordType>(quote!(price = 42))
            .unwrap()
            .expand()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "a record type takes `name: Type` or `name`, not a value"
        );
    }

    #[test]
    fn expansion_folds_fields_and_splices_in_order() {
        let record = items(quote!(base, "note"));
        let note = FieldName {
            text: "note".to_string(),
            span: proc_macro2::Span::call_site(),
        }
        .type_tokens();
        let expected = quote!(::nt_core::record::NamedTuple::<::nt_core::label::Untagged, _>::new(
            ::nt_core::hlist::Concat::concat(
                ::nt_core::record::Splice::splice(base),
                ::nt_core::hlist::HCons::new(
                    ::nt_core::field::Field::<#note, ::nt_core::any::Any>::new(
                        ::core::default::Default::default()
                    ),
                    ::nt_core::hlist::HNil
                )
            )
        ));
        assert_eq!(record.expand().unwrap().to_string(), expected.to_string());
    }
}

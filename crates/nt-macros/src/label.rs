use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitStr};

/// Keep in step with `nt_core::label::MAX_NAME_LEN`.
pub const MAX_NAME_LEN: usize = 64;

/// A field or tag name, written as an identifier or a string literal.
#[derive(Debug, Clone)]
pub struct FieldName {
    pub text: String,
    pub span: Span,
}

impl FieldName {
    pub fn peek(input: ParseStream) -> bool {
        input.peek(LitStr) || input.peek(Ident::peek_any)
    }

    /// `Name<Chars<Byte<..>, Chars<.., End>>>`, bits most significant first.
    pub fn type_tokens(&self) -> TokenStream {
        let mut chars = quote!(::nt_core::label::End);
        for byte in self.text.bytes().rev() {
            let bits = (0..8).rev().map(|shift| {
                if (byte >> shift) & 1 == 1 {
                    quote!(::nt_core::label::Bit1)
                } else {
                    quote!(::nt_core::label::Bit0)
                }
            });
            chars = quote!(::nt_core::label::Chars<::nt_core::label::Byte<#(#bits),*>, #chars>);
        }
        quote!(::nt_core::label::Name<#chars>)
    }

    pub fn value_tokens(&self) -> TokenStream {
        let ty = self.type_tokens();
        quote!(<#ty>::new())
    }
}

impl Parse for FieldName {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        let name = if lookahead.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            FieldName {
                text: lit.value(),
                span: lit.span(),
            }
        } else if lookahead.peek(Ident::peek_any) {
            let ident = Ident::parse_any(input)?;
            FieldName {
                text: ident.unraw().to_string(),
                span: ident.span(),
            }
        } else {
            return Err(lookahead.error());
        };
        if name.text.len() > MAX_NAME_LEN {
            return Err(syn::Error::new(
                name.span,
                format!(
                    "name `{}` is {} bytes long, the limit is {}",
                    name.text,
                    name.text.len(),
                    MAX_NAME_LEN
                ),
            ));
        }
        Ok(name)
    }
}

use proc_macro2::TokenStream;
use quote::quote;

use crate::attrs::{DocumentField, SectionField, SectionFieldKind};

/// Encode-side `render` method of a generated `IniDocument` impl.
///
/// Sections render in declaration order; absent sections emit nothing.
pub fn document_render_method(fields: &[DocumentField]) -> TokenStream {
    if fields.is_empty() {
        return quote! {
            fn render<W: ::std::fmt::Write>(&self, _w: &mut W) -> ::std::fmt::Result {
                Ok(())
            }
        };
    }

    let steps: Vec<TokenStream> = fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            let name = &field.ini_name;
            quote! {
                if let Some(ref section) = self.#ident {
                    ::ini_config::IniSection::render(section, w, #name)?;
                }
            }
        })
        .collect();

    quote! {
        fn render<W: ::std::fmt::Write>(&self, w: &mut W) -> ::std::fmt::Result {
            #(#steps)*
            Ok(())
        }
    }
}

/// Encode-side `render` method of a generated `IniSection` impl.
///
/// Absent scalars and empty lists emit nothing; the block ends with a
/// blank separator line.
pub fn section_render_method(fields: &[SectionField]) -> TokenStream {
    let steps: Vec<TokenStream> = fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            let name = &field.ini_name;
            match &field.kind {
                SectionFieldKind::Scalar(_) => quote! {
                    if let Some(ref value) = self.#ident {
                        ::ini_config::write_scalar(w, #name, value)?;
                    }
                },
                SectionFieldKind::List => quote! {
                    if !self.#ident.is_empty() {
                        ::ini_config::write_list(w, #name, &self.#ident)?;
                    }
                },
            }
        })
        .collect();

    quote! {
        fn render<W: ::std::fmt::Write>(&self, w: &mut W, name: &str) -> ::std::fmt::Result {
            ::ini_config::write_section_header(w, name)?;
            #(#steps)*
            w.write_str("\n")
        }
    }
}

mod attrs;
mod parse_gen;
mod render_gen;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use attrs::{parse_struct_attrs, DocumentField, SectionField};

#[proc_macro_derive(IniDocument, attributes(ini))]
pub fn derive_ini_document(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_ini_document_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_ini_document_impl(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = named_fields(input, "IniDocument")?;

    let mut fields: Vec<DocumentField> = Vec::new();
    for field in named {
        if let Some(info) = DocumentField::from_field(field, struct_attrs.rename_all)? {
            fields.push(info);
        }
    }

    let struct_name_str = struct_name.to_string();
    let decode_methods = parse_gen::document_decode_methods(struct_name, &fields);
    let render_method = render_gen::document_render_method(&fields);

    Ok(quote::quote! {
        impl ::ini_config::IniDocument for #struct_name {
            const NAME: &'static str = #struct_name_str;

            #decode_methods

            #render_method
        }
    })
}

#[proc_macro_derive(IniSection, attributes(ini))]
pub fn derive_ini_section(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_ini_section_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_ini_section_impl(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = named_fields(input, "IniSection")?;

    let mut fields: Vec<SectionField> = Vec::new();
    for field in named {
        if let Some(info) = SectionField::from_field(field, struct_attrs.rename_all)? {
            fields.push(info);
        }
    }

    let struct_name_str = struct_name.to_string();
    let decode_methods = parse_gen::section_decode_methods(struct_name, &fields);
    let render_method = render_gen::section_render_method(&fields);

    Ok(quote::quote! {
        impl ::ini_config::IniSection for #struct_name {
            const NAME: &'static str = #struct_name_str;

            #decode_methods

            #render_method
        }
    })
}

fn named_fields<'a>(
    input: &'a DeriveInput,
    derive_name: &str,
) -> syn::Result<&'a syn::punctuated::Punctuated<syn::Field, syn::Token![,]>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(&named.named),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                format!("{derive_name} requires a struct with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive_name} can only be derived for structs"),
        )),
    }
}

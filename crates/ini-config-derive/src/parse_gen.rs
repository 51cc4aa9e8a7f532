use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::attrs::{DocumentField, SectionField, SectionFieldKind};

/// Decode-side methods of a generated `IniDocument` impl.
pub fn document_decode_methods(struct_name: &Ident, fields: &[DocumentField]) -> TokenStream {
    let struct_name_str = struct_name.to_string();

    let open_arms: Vec<TokenStream> = fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            let name = &field.ini_name;
            let section_ty = &field.section_ty;
            quote! {
                #name => {
                    if self.#ident.is_none() {
                        self.#ident = Some(<#section_ty as ::core::default::Default>::default());
                    }
                    Ok(())
                }
            }
        })
        .collect();

    let open_section = quote! {
        fn open_section(&mut self, name: &str) -> ::core::result::Result<(), ::ini_config::IniConfigError> {
            match name {
                #(#open_arms)*
                _ => Err(::ini_config::IniConfigError::unknown_section(#struct_name_str, name)),
            }
        }
    };

    let set_scalar = if fields.is_empty() {
        quote! {
            fn set_scalar(&mut self, _section: &str, _key: &str, _raw: &str) -> ::core::result::Result<(), ::ini_config::IniConfigError> {
                Ok(())
            }
        }
    } else {
        let arms: Vec<TokenStream> = fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.ini_name;
                quote! {
                    #name => match self.#ident.as_mut() {
                        Some(section) => ::ini_config::IniSection::set_scalar(section, key, raw),
                        None => Ok(()),
                    },
                }
            })
            .collect();

        quote! {
            fn set_scalar(&mut self, section: &str, key: &str, raw: &str) -> ::core::result::Result<(), ::ini_config::IniConfigError> {
                match section {
                    #(#arms)*
                    _ => Ok(()),
                }
            }
        }
    };

    let set_list = if fields.is_empty() {
        quote! {
            fn set_list(&mut self, _section: &str, _key: &str, _values: ::std::vec::Vec<::std::string::String>) {}
        }
    } else {
        let arms: Vec<TokenStream> = fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.ini_name;
                quote! {
                    #name => {
                        if let Some(section) = self.#ident.as_mut() {
                            ::ini_config::IniSection::set_list(section, key, values);
                        }
                    }
                }
            })
            .collect();

        quote! {
            fn set_list(&mut self, section: &str, key: &str, values: ::std::vec::Vec<::std::string::String>) {
                match section {
                    #(#arms)*
                    _ => {}
                }
            }
        }
    };

    let is_list_key = if fields.is_empty() {
        quote! {
            fn is_list_key(_section: &str, _key: &str) -> bool {
                false
            }
        }
    } else {
        let arms: Vec<TokenStream> = fields
            .iter()
            .map(|field| {
                let name = &field.ini_name;
                let section_ty = &field.section_ty;
                quote! {
                    #name => <#section_ty as ::ini_config::IniSection>::is_list_key(key),
                }
            })
            .collect();

        quote! {
            fn is_list_key(section: &str, key: &str) -> bool {
                match section {
                    #(#arms)*
                    _ => false,
                }
            }
        }
    };

    quote! {
        #open_section

        #set_scalar

        #set_list

        #is_list_key
    }
}

/// Decode-side methods of a generated `IniSection` impl.
pub fn section_decode_methods(struct_name: &Ident, fields: &[SectionField]) -> TokenStream {
    let struct_name_str = struct_name.to_string();

    let set_scalar = if fields.is_empty() {
        quote! {
            fn set_scalar(&mut self, _key: &str, _raw: &str) -> ::core::result::Result<(), ::ini_config::IniConfigError> {
                Ok(())
            }
        }
    } else {
        let arms: Vec<TokenStream> = fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.ini_name;
                let field_name_str = ident.to_string();
                match &field.kind {
                    SectionFieldKind::Scalar(inner) => quote! {
                        #name => {
                            self.#ident = Some(::ini_config::convert_scalar::<#inner>(
                                raw,
                                #struct_name_str,
                                #field_name_str,
                                key,
                            )?);
                            Ok(())
                        }
                    },
                    // A bare `key = value` aimed at a list field has no
                    // scalar coercion.
                    SectionFieldKind::List => quote! {
                        #name => Err(::ini_config::IniConfigError::unsupported_kind(
                            #struct_name_str,
                            #field_name_str,
                            key,
                            "Vec<String>",
                        )),
                    },
                }
            })
            .collect();

        quote! {
            fn set_scalar(&mut self, key: &str, raw: &str) -> ::core::result::Result<(), ::ini_config::IniConfigError> {
                match key {
                    #(#arms)*
                    _ => Ok(()),
                }
            }
        }
    };

    let list_fields: Vec<&SectionField> = fields
        .iter()
        .filter(|field| matches!(field.kind, SectionFieldKind::List))
        .collect();

    let set_list = if list_fields.is_empty() {
        quote! {
            fn set_list(&mut self, _key: &str, _values: ::std::vec::Vec<::std::string::String>) {}
        }
    } else {
        let arms: Vec<TokenStream> = list_fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.ini_name;
                quote! {
                    #name => self.#ident = values,
                }
            })
            .collect();

        quote! {
            fn set_list(&mut self, key: &str, values: ::std::vec::Vec<::std::string::String>) {
                match key {
                    #(#arms)*
                    _ => {}
                }
            }
        }
    };

    let is_list_key = if list_fields.is_empty() {
        quote! {
            fn is_list_key(_key: &str) -> bool {
                false
            }
        }
    } else {
        let names: Vec<&String> = list_fields.iter().map(|field| &field.ini_name).collect();
        quote! {
            fn is_list_key(key: &str) -> bool {
                matches!(key, #(#names)|*)
            }
        }
    };

    quote! {
        #set_scalar

        #set_list

        #is_list_key
    }
}

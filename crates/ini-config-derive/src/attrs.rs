//! `#[ini(...)]` attribute model and field classification.
//!
//! Attributes are parsed with manual `parse_nested_meta`; enum-valued
//! attribute strings go through `darling::FromMeta`.

use darling::FromMeta;
use syn::{Attribute, Field, Ident, LitStr, Type, TypePath};

/// Rename strategy applied to field identifiers without an explicit name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromMeta)]
pub enum RenameStrategy {
    #[default]
    #[darling(rename = "none")]
    None,
    #[darling(rename = "PascalCase")]
    PascalCase,
    #[darling(rename = "camelCase")]
    CamelCase,
    #[darling(rename = "kebab-case")]
    KebabCase,
    #[darling(rename = "snake_case")]
    SnakeCase,
    #[darling(rename = "lowercase")]
    Lowercase,
    #[darling(rename = "UPPERCASE")]
    Uppercase,
}

impl RenameStrategy {
    pub fn apply(&self, name: &str) -> String {
        match self {
            RenameStrategy::None => name.to_string(),
            RenameStrategy::PascalCase => to_pascal_case(name),
            RenameStrategy::CamelCase => to_camel_case(name),
            RenameStrategy::KebabCase => to_kebab_case(name),
            RenameStrategy::SnakeCase => to_snake_case(name),
            RenameStrategy::Lowercase => name.to_lowercase(),
            RenameStrategy::Uppercase => name.to_uppercase(),
        }
    }
}

/// Container-level `#[ini(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    pub rename_all: RenameStrategy,
}

pub fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut result = StructAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("ini") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: LitStr = meta.value()?.parse()?;
                result.rename_all = RenameStrategy::from_string(&value.value())
                    .map_err(|err| syn::Error::new(value.span(), err.to_string()))?;
                return Ok(());
            }

            Err(meta.error("unsupported ini container attribute"))
        })?;
    }

    Ok(result)
}

/// Field-level `#[ini(...)]` attributes.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub name: Option<String>,
    pub skip: bool,
}

pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut result = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("ini") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                result.name = Some(value.value());
                return Ok(());
            }

            if meta.path.is_ident("skip") {
                result.skip = true;
                return Ok(());
            }

            Err(meta.error("unsupported ini field attribute"))
        })?;
    }

    Ok(result)
}

/// A document field: `Option<Section>` keyed by section name.
#[derive(Debug)]
pub struct DocumentField {
    pub ident: Ident,
    pub ini_name: String,
    pub section_ty: Type,
}

impl DocumentField {
    /// Classify one named field; `Ok(None)` means the field is skipped.
    pub fn from_field(field: &Field, rename_all: RenameStrategy) -> syn::Result<Option<Self>> {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            return Ok(None);
        }

        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };

        let inner = if is_option_type(&field.ty) {
            extract_inner_type(&field.ty)
        } else {
            None
        };
        let Some(section_ty) = inner else {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "document fields must be Option<Section>",
            ));
        };

        let ini_name = attrs
            .name
            .unwrap_or_else(|| rename_all.apply(&ident.to_string()));

        Ok(Some(Self {
            ident,
            ini_name,
            section_ty: section_ty.clone(),
        }))
    }
}

/// Value shape of a section field.
#[derive(Debug)]
pub enum SectionFieldKind {
    /// `Option<T>`, carrying the inner scalar type.
    Scalar(Type),
    /// `Vec<String>`.
    List,
}

/// A section field: a scalar or list entry keyed by its ini name.
#[derive(Debug)]
pub struct SectionField {
    pub ident: Ident,
    pub ini_name: String,
    pub kind: SectionFieldKind,
}

impl SectionField {
    /// Classify one named field; `Ok(None)` means the field is skipped.
    pub fn from_field(field: &Field, rename_all: RenameStrategy) -> syn::Result<Option<Self>> {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            return Ok(None);
        }

        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let ini_name = attrs
            .name
            .unwrap_or_else(|| rename_all.apply(&ident.to_string()));

        if is_option_type(&field.ty) {
            let Some(inner) = extract_inner_type(&field.ty) else {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "scalar fields must name their value type, as in Option<i64>",
                ));
            };
            return Ok(Some(Self {
                ident,
                ini_name,
                kind: SectionFieldKind::Scalar(inner.clone()),
            }));
        }

        if is_vec_type(&field.ty) {
            return match extract_inner_type(&field.ty) {
                Some(inner) if is_string_type(inner) => Ok(Some(Self {
                    ident,
                    ini_name,
                    kind: SectionFieldKind::List,
                })),
                _ => Err(syn::Error::new_spanned(
                    &field.ty,
                    "list fields must be Vec<String>",
                )),
            };
        }

        Err(syn::Error::new_spanned(
            &field.ty,
            "section fields must be Option<T> for scalars or Vec<String> for lists",
        ))
    }
}

/// Check if a type is `Option<T>`.
fn is_option_type(ty: &Type) -> bool {
    match ty {
        Type::Path(TypePath { path, .. }) => path
            .segments
            .last()
            .map(|segment| segment.ident == "Option")
            .unwrap_or(false),
        _ => false,
    }
}

/// Check if a type is `Vec<T>`.
fn is_vec_type(ty: &Type) -> bool {
    match ty {
        Type::Path(TypePath { path, .. }) => path
            .segments
            .last()
            .map(|segment| segment.ident == "Vec")
            .unwrap_or(false),
        _ => false,
    }
}

/// Check if a type is `String`.
fn is_string_type(ty: &Type) -> bool {
    match ty {
        Type::Path(TypePath { path, .. }) => path
            .segments
            .last()
            .map(|segment| segment.ident == "String")
            .unwrap_or(false),
        _ => false,
    }
}

/// Extract the inner type from `Option<T>` or `Vec<T>`.
fn extract_inner_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(TypePath { path, .. }) = ty {
        if let Some(segment) = path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return Some(inner);
                }
            }
        }
    }
    None
}

fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            upper_next = true;
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut result = first.to_ascii_lowercase().to_string();
            result.push_str(chars.as_str());
            result
        }
        None => pascal,
    }
}

fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' {
            result.push('-');
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_ascii_lowercase();
        }
    }

    result
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '-' {
            result.push('_');
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_ascii_lowercase();
        }
    }

    result
}

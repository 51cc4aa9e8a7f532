pub mod convert;
pub mod error;
pub mod helpers;
pub mod loader;
pub mod parse;
pub mod render;

pub use convert::{convert_scalar, IniScalar};
pub use error::{ErrorKind, IniConfigError};
pub use loader::{load_ini_file, save_ini_file, LoadError};
pub use parse::LineDecoder;
pub use render::{write_list, write_scalar, write_section_header};

#[cfg(feature = "async")]
pub use loader::load_ini_file_async;

/// Root of a decoded INI document; one `Option<Section>` field per section.
///
/// Implemented by `#[derive(IniDocument)]`. Sections stay `None` until their
/// header appears in the input, and absent sections are never rendered.
pub trait IniDocument: Default {
    const NAME: &'static str;

    /// Instantiate the named section with defaults if it is still absent.
    fn open_section(&mut self, name: &str) -> Result<(), IniConfigError>;
    /// Coerce and assign a scalar key within an already-opened section.
    fn set_scalar(&mut self, section: &str, key: &str, raw: &str) -> Result<(), IniConfigError>;
    /// Replace a list field's contents within an already-opened section.
    fn set_list(&mut self, section: &str, key: &str, values: Vec<String>);
    /// Whether `key` names a list field of the named section.
    fn is_list_key(section: &str, key: &str) -> bool;
    /// Emit all present sections in declaration order.
    fn render<W: std::fmt::Write>(&self, w: &mut W) -> std::fmt::Result;
}

/// One `[name]` block: scalar `Option<T>` fields and `Vec<String>` lists.
///
/// Implemented by `#[derive(IniSection)]`.
pub trait IniSection: Default {
    const NAME: &'static str;

    fn set_scalar(&mut self, key: &str, raw: &str) -> Result<(), IniConfigError>;
    fn set_list(&mut self, key: &str, values: Vec<String>);
    fn is_list_key(key: &str) -> bool;
    fn render<W: std::fmt::Write>(&self, w: &mut W, name: &str) -> std::fmt::Result;
}

/// Decode a typed document from INI text.
pub fn parse_str<T: IniDocument>(contents: &str) -> Result<T, IniConfigError> {
    parse_lines(contents.lines())
}

/// Decode a typed document from a sequence of lines.
pub fn parse_lines<T, I>(lines: I) -> Result<T, IniConfigError>
where
    T: IniDocument,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut decoder = LineDecoder::new();
    for line in lines {
        decoder.feed_line(line.as_ref())?;
    }
    Ok(decoder.finish())
}

/// Encode a typed document to INI text, trailing whitespace trimmed.
pub fn to_ini<T: IniDocument>(value: &T) -> String {
    let mut rendered = String::new();
    let _ = value.render(&mut rendered);
    rendered.truncate(rendered.trim_end().len());
    rendered
}

// Re-export derive macros so users only need to depend on `ini-config`.
pub use ini_config_derive::{IniDocument, IniSection};

//! Line-oriented INI emission helpers used by generated `render` impls.

use std::fmt;

use crate::convert::IniScalar;

/// Write a `[name]` header line.
pub fn write_section_header<W: fmt::Write>(w: &mut W, name: &str) -> fmt::Result {
    writeln!(w, "[{name}]")
}

/// Write a `key = value` line.
pub fn write_scalar<W: fmt::Write, T: IniScalar>(w: &mut W, key: &str, value: &T) -> fmt::Result {
    writeln!(w, "{key} = {}", value.format_ini())
}

/// Write one `key[] = element` line per list element, in order.
pub fn write_list<W: fmt::Write>(w: &mut W, key: &str, values: &[String]) -> fmt::Result {
    for value in values {
        writeln!(w, "{key}[] = {value}")?;
    }
    Ok(())
}

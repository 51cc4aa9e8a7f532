//! Line-oriented INI decoding.

use crate::error::IniConfigError;
use crate::helpers::ListBuffer;
use crate::IniDocument;

/// Incremental decoder: feed lines in source order, then call `finish`.
///
/// Splitting decode into per-line steps keeps the async file loader honest:
/// it may await between lines but never inside the transition logic.
pub struct LineDecoder<T: IniDocument> {
    doc: T,
    section: Option<String>,
    pending: ListBuffer,
}

impl<T: IniDocument> LineDecoder<T> {
    pub fn new() -> Self {
        Self {
            doc: T::default(),
            section: None,
            pending: ListBuffer::new(),
        }
    }

    /// Process one line, without its trailing newline.
    pub fn feed_line(&mut self, line: &str) -> Result<(), IniConfigError> {
        if line.trim().is_empty() {
            return Ok(());
        }

        if let Some(name) = header_name(line) {
            // Pending lists belong to the section they were read in.
            self.flush();
            self.doc.open_section(name)?;
            self.section = Some(name.to_string());
            return Ok(());
        }

        let Some(section) = self.section.as_deref() else {
            // Key line before any header has no home; drop it.
            return Ok(());
        };

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            return Ok(());
        };
        let key = raw_key.trim();
        let value = raw_value.trim();

        if let Some(list_key) = key.strip_suffix("[]") {
            if T::is_list_key(section, list_key) {
                self.pending.push(list_key, value.to_string());
            }
            return Ok(());
        }

        self.doc.set_scalar(section, key, value)
    }

    /// Flush buffered lists and return the finished document.
    pub fn finish(mut self) -> T {
        self.flush();
        self.doc
    }

    fn flush(&mut self) {
        let Some(section) = self.section.as_deref() else {
            return;
        };
        for (key, values) in self.pending.drain() {
            self.doc.set_list(section, &key, values);
        }
    }
}

impl<T: IniDocument> Default for LineDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A header line carries `[` and `]` as its first and last raw characters,
/// with no further bracket characters between them.
fn header_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.contains('[') || name.contains(']') {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::header_name;

    #[test]
    fn recognizes_plain_headers() {
        assert_eq!(header_name("[Server]"), Some("Server"));
        assert_eq!(header_name("[My Section]"), Some("My Section"));
        assert_eq!(header_name("[]"), Some(""));
    }

    #[test]
    fn rejects_lines_with_surrounding_text_or_whitespace() {
        assert_eq!(header_name(" [Server]"), None);
        assert_eq!(header_name("[Server] "), None);
        assert_eq!(header_name("x[Server]"), None);
        assert_eq!(header_name("Server"), None);
    }

    #[test]
    fn rejects_stray_brackets() {
        assert_eq!(header_name("[Ser[ver]"), None);
        assert_eq!(header_name("[Ser]ver]"), None);
        assert_eq!(header_name("["), None);
        assert_eq!(header_name("]"), None);
    }
}

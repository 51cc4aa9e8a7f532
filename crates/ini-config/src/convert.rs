use crate::error::IniConfigError;

/// A scalar value kind with a matched parse/format pair.
///
/// The built-in implementations cover the closed set of supported kinds;
/// implementing this trait for another type extends the set.
pub trait IniScalar: Sized {
    const TYPE_NAME: &'static str;
    fn parse_ini(raw: &str) -> Option<Self>;
    fn format_ini(&self) -> String;
}

impl IniScalar for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_ini(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn format_ini(&self) -> String {
        self.clone()
    }
}

impl IniScalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_ini(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn format_ini(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

impl IniScalar for char {
    const TYPE_NAME: &'static str = "char";

    fn parse_ini(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for i8 {
    const TYPE_NAME: &'static str = "i8";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for i16 {
    const TYPE_NAME: &'static str = "i16";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for i32 {
    const TYPE_NAME: &'static str = "i32";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for u8 {
    const TYPE_NAME: &'static str = "u8";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for u16 {
    const TYPE_NAME: &'static str = "u16";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for u32 {
    const TYPE_NAME: &'static str = "u32";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for u64 {
    const TYPE_NAME: &'static str = "u64";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

impl IniScalar for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn parse_ini(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn format_ini(&self) -> String {
        self.to_string()
    }
}

pub fn convert_scalar<T: IniScalar>(
    raw: &str,
    struct_name: &str,
    field_name: &str,
    key: &str,
) -> Result<T, IniConfigError> {
    T::parse_ini(raw).ok_or_else(|| {
        IniConfigError::invalid_scalar(struct_name, field_name, key, raw, T::TYPE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::{convert_scalar, IniScalar};
    use crate::error::ErrorKind;

    #[test]
    fn bool_tokens_are_case_insensitive() {
        assert_eq!(bool::parse_ini("true"), Some(true));
        assert_eq!(bool::parse_ini("TRUE"), Some(true));
        assert_eq!(bool::parse_ini("False"), Some(false));
        assert_eq!(bool::parse_ini("yes"), None);
        assert_eq!(bool::parse_ini("1"), None);
    }

    #[test]
    fn integers_reject_out_of_range_values() {
        assert_eq!(u8::parse_ini("255"), Some(255));
        assert_eq!(u8::parse_ini("256"), None);
        assert_eq!(u8::parse_ini("-1"), None);
        assert_eq!(i16::parse_ini("-32768"), Some(-32768));
        assert_eq!(i16::parse_ini("-32769"), None);
    }

    #[test]
    fn integers_reject_non_decimal_forms() {
        assert_eq!(i32::parse_ini("0x10"), None);
        assert_eq!(i32::parse_ini("1_000"), None);
        assert_eq!(i32::parse_ini("1.0"), None);
        assert_eq!(i64::parse_ini("9000"), Some(9000));
    }

    #[test]
    fn floats_parse_plain_decimal_notation() {
        assert_eq!(f32::parse_ini("3.14"), Some(3.14));
        assert_eq!(f64::parse_ini("6.2866545"), Some(6.2866545));
        assert_eq!(f64::parse_ini("ten"), None);
    }

    #[test]
    fn char_requires_exactly_one_character() {
        assert_eq!(char::parse_ini("A"), Some('A'));
        assert_eq!(char::parse_ini(""), None);
        assert_eq!(char::parse_ini("AB"), None);
    }

    #[test]
    fn formatting_matches_what_parsing_accepts() {
        assert_eq!(true.format_ini(), "true");
        assert_eq!(false.format_ini(), "false");
        assert_eq!(42i64.format_ini(), "42");
        assert_eq!(3.14f64.format_ini(), "3.14");
        assert_eq!("plain text".to_string().format_ini(), "plain text");
    }

    #[test]
    fn failed_conversion_names_value_and_kind() {
        let err = convert_scalar::<u16>("abc", "Server", "port", "Port").unwrap_err();
        assert_eq!(err.struct_name, "Server");
        assert_eq!(err.field_name.as_deref(), Some("port"));
        assert_eq!(err.key.as_deref(), Some("Port"));
        match err.kind {
            ErrorKind::InvalidScalar { ref value, target_type } => {
                assert_eq!(value, "abc");
                assert_eq!(target_type, "u16");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}

use std::fmt;

#[derive(Debug, Clone)]
pub struct IniConfigError {
    pub struct_name: String,
    pub field_name: Option<String>,
    pub key: Option<String>,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone)]
pub enum ErrorKind {
    UnknownSection { name: String },
    InvalidScalar { value: String, target_type: &'static str },
    UnsupportedKind { type_name: &'static str },
    Custom(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnknownSection { name } => write!(f, "unknown section '[{name}]'"),
            ErrorKind::InvalidScalar { value, target_type } => {
                write!(f, "cannot convert '{value}' to {target_type}")
            }
            ErrorKind::UnsupportedKind { type_name } => {
                write!(f, "no scalar conversion for {type_name}")
            }
            ErrorKind::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for IniConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error decoding {}", self.struct_name)?;

        if let Some(ref field) = self.field_name {
            write!(f, " field '{field}'")?;
        }

        if let Some(ref key) = self.key {
            if self.field_name.as_deref() != Some(key.as_str()) {
                write!(f, " (ini key: '{key}')")?;
            }
        }

        write!(f, ": {}", self.kind)
    }
}

impl std::error::Error for IniConfigError {}

impl IniConfigError {
    pub fn unknown_section(struct_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            struct_name: struct_name.into(),
            field_name: None,
            key: None,
            kind: ErrorKind::UnknownSection { name: name.into() },
        }
    }

    pub fn invalid_scalar(
        struct_name: impl Into<String>,
        field_name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        target_type: &'static str,
    ) -> Self {
        Self {
            struct_name: struct_name.into(),
            field_name: Some(field_name.into()),
            key: Some(key.into()),
            kind: ErrorKind::InvalidScalar { value: value.into(), target_type },
        }
    }

    pub fn unsupported_kind(
        struct_name: impl Into<String>,
        field_name: impl Into<String>,
        key: impl Into<String>,
        type_name: &'static str,
    ) -> Self {
        Self {
            struct_name: struct_name.into(),
            field_name: Some(field_name.into()),
            key: Some(key.into()),
            kind: ErrorKind::UnsupportedKind { type_name },
        }
    }

    pub fn custom(struct_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            struct_name: struct_name.into(),
            field_name: None,
            key: None,
            kind: ErrorKind::Custom(message.into()),
        }
    }
}

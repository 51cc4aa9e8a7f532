//! INI file loading and saving.

use std::path::{Path, PathBuf};

use crate::error::IniConfigError;
use crate::{parse_str, to_ini, IniDocument};

#[cfg(feature = "async")]
use crate::parse::LineDecoder;
#[cfg(feature = "async")]
use tokio::io::AsyncBufReadExt;

/// Errors that can occur at the file boundary.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(IniConfigError),
    Extension(PathBuf),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "io error: {err}"),
            LoadError::Parse(err) => write!(f, "parse error: {err}"),
            LoadError::Extension(path) => {
                write!(f, "not an ini file: {}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<IniConfigError> for LoadError {
    fn from(err: IniConfigError) -> Self {
        LoadError::Parse(err)
    }
}

/// Load a typed document from an INI file.
///
/// An empty path, or a path that is not an existing file, yields `Ok(None)`
/// rather than an error; nothing to parse is not a failure.
pub fn load_ini_file<T: IniDocument>(path: &Path) -> Result<Option<T>, LoadError> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)?;
    Ok(Some(parse_str(&contents)?))
}

/// Load a typed document from an INI file, awaiting only between lines.
///
/// Same absent-file contract as [`load_ini_file`].
#[cfg(feature = "async")]
pub async fn load_ini_file_async<T: IniDocument>(path: &Path) -> Result<Option<T>, LoadError> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Ok(None);
    }

    let file = tokio::fs::File::open(path).await?;
    let mut lines = tokio::io::BufReader::new(file).lines();
    let mut decoder = LineDecoder::new();
    while let Some(line) = lines.next_line().await? {
        decoder.feed_line(&line)?;
    }
    Ok(Some(decoder.finish()))
}

/// Encode a document and write it to `path`.
///
/// An empty path is a silent no-op; any other path must end in `.ini`.
pub fn save_ini_file<T: IniDocument>(path: &Path, value: &T) -> Result<(), LoadError> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }

    if path.extension().and_then(|ext| ext.to_str()) != Some("ini") {
        return Err(LoadError::Extension(path.to_path_buf()));
    }

    std::fs::write(path, to_ini(value))?;
    Ok(())
}

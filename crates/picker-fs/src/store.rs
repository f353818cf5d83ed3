//! Format-aware document loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// On-disk formats understood by [`DocumentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
        }
    }
}

/// Loads and saves serde documents, picking the format from the file extension.
///
/// Saves go through [`io::write_atomic`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a document from `path`.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = DocumentFormat::from_path(path)?;
        let content = io::read_text(path)?;
        Self::parse(path, format, &content)
    }

    /// Load a document, returning `None` when the file does not exist.
    pub fn load_if_exists<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        let format = DocumentFormat::from_path(path)?;
        match io::read_text_if_exists(path)? {
            Some(content) => Self::parse(path, format, &content).map(Some),
            None => Ok(None),
        }
    }

    /// Serialize `value` and write it atomically to `path`.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let format = DocumentFormat::from_path(path)?;
        let serialize_error = |message: String| Error::Serialize {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        };

        let content = match format {
            DocumentFormat::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            DocumentFormat::Json => {
                let mut json = serde_json::to_string_pretty(value)
                    .map_err(|e| serialize_error(e.to_string()))?;
                json.push('\n');
                json
            }
        };

        io::write_atomic(path, content.as_bytes())
    }

    fn parse<T: DeserializeOwned>(path: &Path, format: DocumentFormat, content: &str) -> Result<T> {
        let parse_error = |message: String| Error::Parse {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        };

        match format {
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}

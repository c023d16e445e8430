//! Document decoding from strings, files and standard input

use crate::error::{JaxonError, Result};
use crate::io::YamlJsonConverter;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Which decoder turns document text into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentFormat {
    /// YAML for `.yaml`/`.yml` files, JSON for everything else
    #[default]
    Auto,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Resolve `Auto` against a file path; explicit formats are kept
    pub fn for_path(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let ext = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
                if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
                    Self::Yaml
                } else {
                    Self::Json
                }
            }
            explicit => explicit,
        }
    }

    /// Decode document text; `Auto` decodes as JSON
    pub fn decode(self, text: &str) -> Result<Value> {
        match self {
            Self::Auto | Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => {
                let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
                YamlJsonConverter::yaml_to_json(&yaml)
            }
        }
    }
}

/// Configuration for the document reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Decoder to use
    pub format: DocumentFormat,
    /// Maximum document size to read (in bytes)
    pub max_file_size: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Auto,
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
        }
    }
}

/// Reads and decodes documents
#[derive(Debug, Clone, Default)]
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Get the reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read and decode a document from a file path, picking the decoder from
    /// the configured format and the file extension
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Value> {
        let path = path.as_ref();
        self.read_file_as(path, self.config.format.for_path(path))
    }

    /// Read and decode a document from a file path with the given decoder
    pub fn read_file_as<P: AsRef<Path>>(&self, path: P, format: DocumentFormat) -> Result<Value> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(JaxonError::file_not_found(path));
        }

        if let Some(max_size) = self.config.max_file_size {
            let metadata = fs::metadata(path)?;
            if metadata.len() > max_size as u64 {
                return Err(JaxonError::validation(format!(
                    "File too large: {} bytes (limit: {} bytes)",
                    metadata.len(),
                    max_size
                )));
            }
        }

        let content = fs::read_to_string(path)?;
        debug!("Decoding {} as {:?}", path.display(), format);
        format.decode(&content)
    }

    /// Read and decode a document from any reader, such as standard input
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Value> {
        let mut content = String::new();
        match self.config.max_file_size {
            Some(max_size) => {
                let read = reader
                    .take((max_size as u64).saturating_add(1))
                    .read_to_string(&mut content)?;
                if read > max_size {
                    return Err(JaxonError::validation(format!(
                        "Input too large (limit: {} bytes)",
                        max_size
                    )));
                }
            }
            None => {
                let mut reader = reader;
                reader.read_to_string(&mut content)?;
            }
        }
        self.parse_content(&content)
    }

    /// Decode document text
    pub fn parse_content(&self, content: &str) -> Result<Value> {
        self.config.format.decode(content)
    }
}

//! Image sources for the exported document.
//!
//! The exported document has no external references, so the selected image
//! is embedded as a `data:` URI. An [`ImageSource`] is created once per
//! selected file and never edited; choosing a new file replaces it.

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// Fallback MIME type when neither the bytes nor the browser identify the file.
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Errors creating an image source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The selected file has no content.
    #[error("Selected file is empty")]
    EmptyFile,

    /// The string is not a `data:` URI.
    #[error("Not a data URI: {0}")]
    NotDataUri(String),
}

/// An immutable `data:` URI holding the selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    uri: String,
}

impl ImageSource {
    /// Encode file bytes as a base64 `data:` URI.
    ///
    /// The MIME type is sniffed from the bytes; `declared_mime` (what the
    /// browser reported for the file) is used when sniffing fails.
    pub fn from_bytes(bytes: &[u8], declared_mime: &str) -> Result<Self, SourceError> {
        if bytes.is_empty() {
            return Err(SourceError::EmptyFile);
        }

        let mime = match image::guess_format(bytes) {
            Ok(format) => format.to_mime_type(),
            Err(_) if !declared_mime.trim().is_empty() => declared_mime.trim(),
            Err(_) => FALLBACK_MIME_TYPE,
        };

        let encoded = general_purpose::STANDARD.encode(bytes);
        log::debug!("created image source: {} bytes as {}", bytes.len(), mime);

        Ok(Self {
            uri: format!("data:{mime};base64,{encoded}"),
        })
    }

    /// Wrap an existing `data:` URI.
    pub fn from_data_uri(uri: impl Into<String>) -> Result<Self, SourceError> {
        let uri = uri.into();
        if !uri.starts_with("data:") {
            let preview: String = uri.chars().take(32).collect();
            return Err(SourceError::NotDataUri(preview));
        }
        Ok(Self { uri })
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// MIME type declared in the URI header, if any.
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.uri.strip_prefix("data:")?;
        let end = header.find([';', ','])?;
        let mime = &header[..end];
        (!mime.is_empty()).then_some(mime)
    }

    pub fn into_string(self) -> String {
        self.uri
    }
}

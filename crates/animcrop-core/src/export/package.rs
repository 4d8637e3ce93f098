//! Download packaging for rendered documents.

use super::config::ExportConfig;
use super::document::render;

/// File name offered to the browser's save dialog.
pub const EXPORT_FILE_NAME: &str = "animated-image.html";

/// MIME type of the exported document.
pub const EXPORT_MIME_TYPE: &str = "text/html";

/// A rendered document ready to hand to a download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Wrap an already rendered document.
    pub fn from_document(contents: String) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            contents,
        }
    }

    /// Render `config` and wrap the result.
    pub fn render(config: &ExportConfig) -> Self {
        Self::from_document(render(config))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }
}

//! Image source WASM bindings.
//!
//! Turns the bytes of the file chosen in the file picker into the `data:` URI
//! used by both the preview `<img>` and the exported document.

use animcrop_core::source::{ImageSource, SourceError};
use wasm_bindgen::prelude::*;

/// Convert a selected file into a `data:` URI.
///
/// Pass `undefined` when the picker was closed without a selection: the
/// miss is logged and `undefined` is returned, leaving the current image in
/// place.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const file = input.files?.[0];
/// const bytes = file ? new Uint8Array(await file.arrayBuffer()) : undefined;
/// const src = load_image_source(bytes, file?.type ?? '');
/// if (src) { imageSrc = src; engine.reset(); }
/// ```
#[wasm_bindgen]
pub fn load_image_source(bytes: Option<Vec<u8>>, mime_type: &str) -> Result<Option<String>, JsValue> {
    source_from_selection(bytes.as_deref(), mime_type)
        .map(|source| source.map(ImageSource::into_string))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn source_from_selection(bytes: Option<&[u8]>, mime_type: &str) -> Result<Option<ImageSource>, SourceError> {
    let Some(bytes) = bytes else {
        log::error!("No file selected");
        return Ok(None);
    };
    ImageSource::from_bytes(bytes, mime_type).map(Some)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_load_image_source() {
        let src = load_image_source(Some(vec![0xFF, 0xD8, 0xFF, 0xE0]), "").unwrap();
        assert_eq!(src.as_deref(), Some("data:image/jpeg;base64,/9j/4A=="));
        assert_eq!(load_image_source(None, "").unwrap(), None);
        assert!(load_image_source(Some(Vec::new()), "image/png").is_err());
    }
}

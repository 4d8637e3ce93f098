//! Export WASM bindings.
//!
//! This module exposes document rendering to JavaScript and performs the
//! browser side of the download: wrapping the document in a `Blob`, clicking
//! a temporary link and revoking the object URL.
//!
//! # Example
//!
//! ```typescript
//! import { render_document, download_document, validate_form } from '@animcrop/wasm';
//!
//! const form = { containerWidthPercent: 100, containerHeightPercent: 100,
//!                animation: 'slideFromTop', quality: 1, scale: 1 };
//! validate_form(form);                         // throws if no animation
//! const html = render_document(form, imageSrc, engine.gen_offset);
//! download_document(html);                     // saves animated-image.html
//! ```

use crate::position::JsPositionEngine;
use animcrop_core::export::{
    render, AnimationPreset, DisplayConstants, ExportConfig, ExportFile, FormValues,
};
use animcrop_core::position::Offset;
use animcrop_core::source::ImageSource;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

/// Render the standalone document.
///
/// # Arguments
///
/// * `form` - Form values object (`containerWidthPercent`, `containerHeightPercent`,
///   `animation`, `quality`, `scale`); missing keys use the form defaults
/// * `image_src` - `data:` URI of the selected image, or `undefined`
/// * `gen_offset` - Generation offset in CSS form, e.g. `"60px 30px"`
///
/// # Errors
///
/// Fails only on malformed arguments. An empty animation or missing image
/// still renders.
#[wasm_bindgen]
pub fn render_document(
    form: JsValue,
    image_src: Option<String>,
    gen_offset: &str,
) -> Result<String, JsValue> {
    let form = form_from_js(form)?;
    let offset: Offset = gen_offset.parse().map_err(to_js_error)?;
    let config = build_config(&form, image_src, offset)?;
    Ok(render(&config))
}

/// Render using the engine's current generation offset and save the file.
#[wasm_bindgen]
pub fn export_document(
    form: JsValue,
    image_src: Option<String>,
    engine: &JsPositionEngine,
) -> Result<(), JsValue> {
    let form = form_from_js(form)?;
    let config = build_config(&form, image_src, engine.gen_offset_value())?;
    trigger_download(&ExportFile::render(&config))
}

/// Save an already rendered document as `animated-image.html`.
#[wasm_bindgen]
pub fn download_document(html: String) -> Result<(), JsValue> {
    trigger_download(&ExportFile::from_document(html))
}

/// Check the form can be exported. Throws when no animation is selected.
#[wasm_bindgen]
pub fn validate_form(form: JsValue) -> Result<(), JsValue> {
    form_from_js(form)?.validate().map_err(to_js_error)
}

/// Names of the built-in keyframe animations, for the animation picker.
#[wasm_bindgen]
pub fn animation_presets() -> Vec<String> {
    AnimationPreset::ALL
        .iter()
        .map(|preset| preset.name().to_string())
        .collect()
}

/// Display constants used for the preview (`genScale`, `imageHeight`, ...).
#[wasm_bindgen]
pub fn display_constants() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&DisplayConstants::default()).map_err(JsValue::from)
}

fn form_from_js(form: JsValue) -> Result<FormValues, JsValue> {
    if form.is_undefined() || form.is_null() {
        return Ok(FormValues::default());
    }
    serde_wasm_bindgen::from_value(form).map_err(JsValue::from)
}

fn build_config(
    form: &FormValues,
    image_src: Option<String>,
    gen_offset: Offset,
) -> Result<ExportConfig, JsValue> {
    let image = image_src
        .map(ImageSource::from_data_uri)
        .transpose()
        .map_err(to_js_error)?;
    Ok(ExportConfig::new(
        form,
        image.as_ref(),
        gen_offset,
        DisplayConstants::default(),
    ))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Hand `file` to the browser as a download.
///
/// The object URL is revoked whether or not the click succeeded.
fn trigger_download(file: &ExportFile) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available for download"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_download_link(&document, &url, file.file_name);
    let revoked = Url::revoke_object_url(&url);

    clicked?;
    revoked?;
    log::debug!("downloaded {} ({} bytes)", file.file_name, file.contents.len());
    Ok(())
}

fn click_download_link(document: &Document, url: &str, file_name: &str) -> Result<(), JsValue> {
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| JsValue::from_str("Failed to create download link"))?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn form(animation: &str) -> JsValue {
        let mut values = FormValues::default();
        values.animation = animation.to_string();
        serde_wasm_bindgen::to_value(&values).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_render_document_scenario() {
        let html = render_document(form("slideFromTop"), None, "0px 0px").unwrap();
        assert!(html.contains("width: 600px;"));
        assert!(html.contains("height: 300px;"));
        assert!(html.contains("slideFromTop"));
    }

    #[wasm_bindgen_test]
    fn test_render_document_defaults_for_missing_form() {
        let html = render_document(JsValue::UNDEFINED, None, "0px 0px").unwrap();
        assert!(html.contains("' 2s ease forwards'"));
    }

    #[wasm_bindgen_test]
    fn test_render_document_rejects_bad_offset() {
        assert!(render_document(form("slideFromTop"), None, "left top").is_err());
    }

    #[wasm_bindgen_test]
    fn test_render_document_rejects_non_data_uri() {
        let src = Some("https://example.com/a.png".to_string());
        assert!(render_document(form("slideFromTop"), src, "0px 0px").is_err());
    }

    #[wasm_bindgen_test]
    fn test_validate_form() {
        assert!(validate_form(form("")).is_err());
        assert!(validate_form(form("zoomFromButton")).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_display_constants() {
        let value = display_constants().unwrap();
        let constants: DisplayConstants = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(constants.gen_scale, 2);
    }
}

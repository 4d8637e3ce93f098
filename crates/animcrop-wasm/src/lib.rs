//! Animcrop WASM - WebAssembly bindings for Animcrop
//!
//! This crate exposes animcrop-core to the JavaScript/TypeScript UI.
//!
//! # Module Structure
//!
//! - `position` - Drag engine keeping preview and generation offsets in step
//! - `export` - Document rendering and the browser download
//! - `source` - Selected file to `data:` URI conversion
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPositionEngine, render_document, download_document } from '@animcrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const engine = new JsPositionEngine();
//! // ...wire pointer events, see JsPositionEngine...
//! const html = render_document(form.value, imageSrc, engine.gen_offset);
//! download_document(html);
//! ```

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

/// Most verbose level forwarded to the console after `init`.
#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: Level = Level::Warn;

mod export;
mod position;
mod source;

// Re-export public types
pub use export::{
    animation_presets, display_constants, download_document, export_document, render_document,
    validate_form,
};
pub use position::JsPositionEngine;
pub use source::load_image_source;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console_log::init_with_level(DEFAULT_LOG_LEVEL).ok();
}

/// Change how much is logged to the console (`"error"` .. `"trace"`, `"off"`).
///
/// Unknown names are ignored.
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    match parse_log_level(level) {
        Some(filter) => log::set_max_level(filter),
        None => log::warn!("unknown log level {level:?}"),
    }
}

fn parse_log_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

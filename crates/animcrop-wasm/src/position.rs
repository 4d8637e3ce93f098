//! Drag engine WASM bindings.
//!
//! Wire `start_drag` to `mousedown` on the preview image and
//! `on_pointer_move`/`end_drag` to `mousemove`/`mouseup` on the document, so
//! a release outside the image still ends the drag.

use animcrop_core::position::{Offset, PositionEngine};
use wasm_bindgen::prelude::*;

/// Drag engine wrapper for JavaScript
///
/// # Example (TypeScript)
///
/// ```typescript
/// const engine = new JsPositionEngine();
///
/// img.addEventListener('mousedown', (e) => {
///   if (engine.start_drag(e.clientX, e.clientY)) e.preventDefault();
/// });
/// document.addEventListener('mousemove', (e) => {
///   if (engine.on_pointer_move(e.clientX, e.clientY)) {
///     e.preventDefault();
///     img.style.objectPosition = engine.preview_offset;
///   }
/// });
/// document.addEventListener('mouseup', () => engine.end_drag());
/// ```
#[wasm_bindgen]
pub struct JsPositionEngine {
    inner: PositionEngine,
}

impl Default for JsPositionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsPositionEngine {
    /// Create an idle engine at `0px 0px` with the default generation scale.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: PositionEngine::default(),
        }
    }

    /// Create an engine with a custom generation scale.
    pub fn with_gen_scale(gen_scale: i32) -> Self {
        Self {
            inner: PositionEngine::new(gen_scale),
        }
    }

    /// Begin a drag. Returns true when the caller should call `preventDefault`.
    pub fn start_drag(&mut self, client_x: f64, client_y: f64) -> bool {
        self.inner
            .start_drag(to_pixel(client_x), to_pixel(client_y))
            .prevents_default()
    }

    /// Follow the pointer. Returns true while a drag is active, meaning the
    /// offsets were recomputed and the caller should call `preventDefault`.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        self.inner
            .pointer_moved(to_pixel(client_x), to_pixel(client_y))
            .prevents_default()
    }

    /// End the current drag, keeping the offsets where they are.
    pub fn end_drag(&mut self) {
        self.inner.end_drag();
    }

    /// Return to `0px 0px`, e.g. after a new image is selected.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn gen_scale(&self) -> i32 {
        self.inner.gen_scale()
    }

    /// Preview offset as a CSS `object-position` value
    #[wasm_bindgen(getter)]
    pub fn preview_offset(&self) -> String {
        self.inner.preview_offset().to_css()
    }

    /// Generation offset as a CSS `object-position` value
    #[wasm_bindgen(getter)]
    pub fn gen_offset(&self) -> String {
        self.inner.gen_offset().to_css()
    }

    /// Restore the resting preview offset from its CSS form.
    pub fn set_preview_offset(&mut self, value: &str) -> Result<(), JsValue> {
        let offset: Offset = value.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
        self.inner.set_preview_offset(offset);
        Ok(())
    }

    /// Restore the resting generation offset from its CSS form.
    pub fn set_gen_offset(&mut self, value: &str) -> Result<(), JsValue> {
        let offset: Offset = value.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
        self.inner.set_gen_offset(offset);
        Ok(())
    }
}

impl JsPositionEngine {
    /// Current generation offset, for the export bindings.
    pub(crate) fn gen_offset_value(&self) -> Offset {
        self.inner.gen_offset()
    }
}

/// Round a client coordinate to whole pixels. NaN maps to 0.
fn to_pixel(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_scenario() {
        let mut engine = JsPositionEngine::new();
        assert!(engine.start_drag(100.0, 100.0));
        assert!(engine.is_dragging());
        assert!(engine.on_pointer_move(130.0, 115.0));
        engine.end_drag();

        assert!(!engine.is_dragging());
        assert_eq!(engine.preview_offset(), "30px 15px");
        assert_eq!(engine.gen_offset(), "60px 30px");
        assert_eq!(engine.gen_offset_value(), Offset::new(60, 30));
    }

    #[test]
    fn test_move_without_drag_not_handled() {
        let mut engine = JsPositionEngine::new();
        assert!(!engine.on_pointer_move(10.0, 10.0));
        assert_eq!(engine.preview_offset(), "0px 0px");
    }

    #[test]
    fn test_fractional_pointer_coordinates_round() {
        let mut engine = JsPositionEngine::new();
        engine.start_drag(10.4, 10.6);
        engine.on_pointer_move(12.6, 9.4);
        assert_eq!(engine.preview_offset(), "3px -2px");
    }

    #[test]
    fn test_custom_gen_scale() {
        let mut engine = JsPositionEngine::with_gen_scale(3);
        assert_eq!(engine.gen_scale(), 3);
        engine.start_drag(0.0, 0.0);
        engine.on_pointer_move(1.0, -1.0);
        assert_eq!(engine.gen_offset(), "3px -3px");
    }

    #[test]
    fn test_reset() {
        let mut engine = JsPositionEngine::new();
        engine.start_drag(0.0, 0.0);
        engine.on_pointer_move(5.0, 5.0);
        engine.reset();
        assert!(!engine.is_dragging());
        assert_eq!(engine.gen_offset(), "0px 0px");
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(to_pixel(1.5), 2);
        assert_eq!(to_pixel(-1.5), -2);
        assert_eq!(to_pixel(f64::NAN), 0);
    }
}

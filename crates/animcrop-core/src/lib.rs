//! Animcrop Core - crop positioning and animated export
//!
//! This crate provides the logic behind Animcrop: dragging an image inside a
//! fixed viewport, and exporting a standalone HTML document that reproduces
//! the crop and plays a keyframe animation on demand.
//!
//! - [`position`] - drag gesture state machine keeping preview and
//!   generation offsets in step
//! - [`export`] - export configuration and the document renderer
//! - [`source`] - `data:` URI image sources
//!
//! No pixels are touched: the crop is expressed with CSS `object-position`.

pub mod export;
pub mod position;
pub mod source;

pub use export::{render, DisplayConstants, ExportConfig, ExportFile, FormValues};
pub use position::{CropPosition, Offset, PositionEngine};
pub use source::ImageSource;

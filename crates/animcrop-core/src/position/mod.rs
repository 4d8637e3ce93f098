//! Drag-to-position engine.
//!
//! Converts pointer movement during a press-move-release gesture into two
//! offsets that move together:
//!
//! - **preview** offset, in on-screen pixels, follows the pointer 1:1
//! - **generation** offset follows the same pointer delta multiplied by
//!   `gen_scale`, so the exported document can be larger than the preview
//!
//! # Coordinate System
//!
//! - Offsets are CSS `object-position` values in whole pixels
//! - Positive x moves the image right, positive y moves it down
//! - Pointer positions are client coordinates

mod drag;
mod engine;
mod offset;

pub use drag::{CropPosition, Disposition, DragSession, DragState, PointerEvent, Transition};
pub use engine::PositionEngine;
pub use offset::{Offset, OffsetParseError, Point};

//! Animated document export.
//!
//! This module turns the current crop position and form values into a single
//! self-contained HTML document:
//! - a fixed-size clipping container
//! - the image, positioned with `object-position` in generation pixels
//! - a button whose script restarts the chosen keyframe animation
//!
//! # Dimensions
//!
//! With the default [`DisplayConstants`]:
//!
//! | Value            | Formula                                  |
//! |------------------|------------------------------------------|
//! | container width  | `width_percent * 3 * gen_scale`          |
//! | container height | `height_percent * 1.5 * gen_scale`       |
//! | image height     | `scale * image_height * gen_scale`       |
//!
//! # Example
//!
//! ```ignore
//! use animcrop_core::export::{render, DisplayConstants, ExportConfig, FormValues};
//! use animcrop_core::position::Offset;
//!
//! let mut form = FormValues::default();
//! form.animation = "slideFromTop".to_string();
//! let config = ExportConfig::new(&form, None, Offset::ZERO, DisplayConstants::default());
//! let html = render(&config);
//! assert!(html.contains("width: 600px;"));
//! ```

mod animation;
mod config;
mod document;
mod package;
mod template;

pub use animation::{AnimationPreset, AnimationSpec};
pub use config::{DisplayConstants, ExportConfig, FormError, FormValues};
pub use document::{render, render_with};
pub use package::{ExportFile, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};

//! Export configuration.
//!
//! [`FormValues`] is what the user types, [`DisplayConstants`] are the fixed
//! display factors, and [`ExportConfig`] is the immutable snapshot built from
//! both at the moment the user clicks export.

use crate::position::Offset;
use crate::source::ImageSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for the export form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// No animation was chosen.
    #[error("An animation must be selected before exporting")]
    MissingAnimation,
}

/// Fixed display factors shared by the preview and the exported document.
///
/// The percentage-to-pixel factors were tuned by eye; a form value of `100`
/// means "the design size", not a CSS percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConstants {
    /// Generation-space pixels per preview pixel
    pub gen_scale: i32,
    /// Container width in preview pixels per form percent
    pub width_factor: f64,
    /// Container height in preview pixels per form percent
    pub height_factor: f64,
    /// Base image height in preview pixels at scale 1
    pub image_height: f64,
    /// Base image width in preview pixels at scale 1
    pub image_width: f64,
}

impl Default for DisplayConstants {
    fn default() -> Self {
        Self {
            gen_scale: 2,
            width_factor: 3.0,
            height_factor: 1.5,
            image_height: 150.0,
            image_width: 300.0,
        }
    }
}

/// Values from the export form, keyed the way the UI names them.
///
/// Missing keys fall back to the form's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    pub container_width_percent: f64,
    pub container_height_percent: f64,
    /// Keyframes name to play
    pub animation: String,
    /// Carried through to the export config, not rendered
    pub quality: f64,
    /// Image scale relative to the base image height
    pub scale: f64,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            container_width_percent: 100.0,
            container_height_percent: 100.0,
            animation: String::new(),
            quality: 1.0,
            scale: 1.0,
        }
    }
}

impl FormValues {
    /// Check the form is complete enough to export.
    ///
    /// Only the animation is required. [`render`](super::render) does not
    /// call this; the UI uses it to gate the export action.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.animation.trim().is_empty() {
            return Err(FormError::MissingAnimation);
        }
        Ok(())
    }
}

/// Everything needed to render the exported document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub container_width_percent: f64,
    pub container_height_percent: f64,
    pub animation: String,
    pub quality: f64,
    pub scale: f64,
    /// `None` when no file was selected; the document shows a broken image.
    pub image: Option<ImageSource>,
    pub gen_offset: Offset,
    pub constants: DisplayConstants,
}

impl ExportConfig {
    /// Snapshot the form, image and generation offset.
    pub fn new(
        form: &FormValues,
        image: Option<&ImageSource>,
        gen_offset: Offset,
        constants: DisplayConstants,
    ) -> Self {
        Self {
            container_width_percent: form.container_width_percent,
            container_height_percent: form.container_height_percent,
            animation: form.animation.clone(),
            quality: form.quality,
            scale: form.scale,
            image: image.cloned(),
            gen_offset,
            constants,
        }
    }

    /// Container width in generation pixels.
    pub fn container_width_px(&self) -> f64 {
        self.container_width_percent * self.constants.width_factor * self.gen_scale()
    }

    /// Container height in generation pixels.
    pub fn container_height_px(&self) -> f64 {
        self.container_height_percent * self.constants.height_factor * self.gen_scale()
    }

    /// Image height in generation pixels. Width follows the aspect ratio.
    pub fn image_height_px(&self) -> f64 {
        self.scale * self.constants.image_height * self.gen_scale()
    }

    fn gen_scale(&self) -> f64 {
        f64::from(self.constants.gen_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let form = FormValues::default();
        assert_eq!(form.container_width_percent, 100.0);
        assert_eq!(form.container_height_percent, 100.0);
        assert_eq!(form.animation, "");
        assert_eq!(form.quality, 1.0);
        assert_eq!(form.scale, 1.0);
    }

    #[test]
    fn test_display_constant_defaults() {
        let c = DisplayConstants::default();
        assert_eq!(c.gen_scale, 2);
        assert_eq!(c.width_factor, 3.0);
        assert_eq!(c.height_factor, 1.5);
        assert_eq!(c.image_height, 150.0);
        assert_eq!(c.image_width, 300.0);
    }

    #[test]
    fn test_validate_requires_animation() {
        let mut form = FormValues::default();
        assert_eq!(form.validate(), Err(FormError::MissingAnimation));

        form.animation = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingAnimation));

        form.animation = "slideFromTop".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_default_dimensions() {
        let config = ExportConfig::new(
            &FormValues::default(),
            None,
            Offset::ZERO,
            DisplayConstants::default(),
        );
        assert_eq!(config.container_width_px(), 600.0);
        assert_eq!(config.container_height_px(), 300.0);
        assert_eq!(config.image_height_px(), 300.0);
    }

    #[test]
    fn test_dimensions_follow_form_and_constants() {
        let mut form = FormValues::default();
        form.container_width_percent = 50.0;
        form.container_height_percent = 33.0;
        form.scale = 1.5;

        let mut constants = DisplayConstants::default();
        constants.gen_scale = 3;

        let config = ExportConfig::new(&form, None, Offset::ZERO, constants);
        assert_eq!(config.container_width_px(), 450.0);
        assert_eq!(config.container_height_px(), 148.5);
        assert_eq!(config.image_height_px(), 675.0);
    }

    #[test]
    fn test_snapshot_is_independent_of_form() {
        let mut form = FormValues::default();
        form.animation = "zoomFromButton".to_string();
        let config = ExportConfig::new(&form, None, Offset::new(4, 2), DisplayConstants::default());

        form.animation = "slideFromTop".to_string();
        assert_eq!(config.animation, "zoomFromButton");
        assert_eq!(config.gen_offset, Offset::new(4, 2));
    }
}

//! Keyframe presets and playback settings for exported documents.

use serde::{Deserialize, Serialize};

/// Built-in keyframe animations embedded in every exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationPreset {
    /// Slides the image down from above the container.
    SlideFromTop,
    /// Grows the image from a tenth of its size.
    ZoomFromButton,
}

impl AnimationPreset {
    pub const ALL: [AnimationPreset; 2] = [AnimationPreset::SlideFromTop, AnimationPreset::ZoomFromButton];

    /// The `@keyframes` identifier.
    pub fn name(self) -> &'static str {
        match self {
            AnimationPreset::SlideFromTop => "slideFromTop",
            AnimationPreset::ZoomFromButton => "zoomFromButton",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// The `@keyframes` rule, indented for the document's `<style>` block.
    pub fn keyframes_css(self) -> &'static str {
        match self {
            AnimationPreset::SlideFromTop => concat!(
                "    @keyframes slideFromTop {\n",
                "      0% {\n",
                "        transform: translateY(-100%);\n",
                "      }\n",
                "      100% {\n",
                "        transform: translateY(0);\n",
                "      }\n",
                "    }\n",
            ),
            AnimationPreset::ZoomFromButton => concat!(
                "    @keyframes zoomFromButton {\n",
                "      from {\n",
                "        transform: scale(0.1);\n",
                "      }\n",
                "      to {\n",
                "        transform: scale(1);\n",
                "      }\n",
                "    }\n",
            ),
        }
    }
}

/// How the chosen animation is played back by the exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationSpec {
    pub duration_secs: f64,
    /// CSS timing function
    pub timing: String,
    /// CSS fill mode; `forwards` keeps the final frame
    pub fill: String,
    /// Delay between clearing and re-applying the animation
    pub restart_delay_ms: u32,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            timing: "ease".to_string(),
            fill: "forwards".to_string(),
            restart_delay_ms: 10,
        }
    }
}

impl AnimationSpec {
    /// CSS `animation` shorthand for `name`, e.g. `slideFromTop 2s ease forwards`.
    pub fn shorthand(&self, name: &str) -> String {
        format!("{} {}s {} {}", name, self.duration_secs, self.timing, self.fill)
    }
}

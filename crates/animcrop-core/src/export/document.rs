//! Standalone animated document rendering.

use super::animation::{AnimationPreset, AnimationSpec};
use super::config::ExportConfig;
use super::template::{css_number, escape_html_attr, escape_js_string, fill, Slot};

/// Document skeleton. Slots are filled by [`render`].
///
/// `playAnimation` clears the animation before re-applying it on a timer:
/// assigning the same animation name twice does not restart it.
const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Animated Image</title>
  <style>
    .container {
      width: {{container_width}}px;
      height: {{container_height}}px;
      overflow: hidden;
      position: relative;
      margin: 50px;
      box-shadow: 0 0 10px rgba(0, 0, 0, 0.5);
    }

    img {
      position: absolute;
      height: {{image_height}}px;
      object-position: {{object_position}};
      object-fit: cover;
    }

    button {
      padding: 10px;
      border: none;
      border-radius: 5px;
      background-color: #007bff;
      color: white;
      cursor: pointer;
    }

{{keyframes}}  </style>
</head>
<body>
  <div class="container">
    <img id="animatedImage" src="{{image_src}}" alt="Animated Image">
  </div>

  <button onclick="playAnimation()">Play Animation</button>

  <script>
    function playAnimation() {
      const image = document.getElementById('animatedImage');
      image.style.animation = 'none';
      setTimeout(() => {
        image.style.animation = '';
        image.style.animation = '{{animation}}';
      }, {{restart_delay}});
    }
  </script>
</body>
</html>
"#;

/// Render the exported document for `config`.
///
/// Pure and deterministic. Nothing is validated: an empty animation name
/// gives a button that plays nothing and a missing image gives a broken
/// image, but the document is always complete.
pub fn render(config: &ExportConfig) -> String {
    render_with(config, &AnimationSpec::default())
}

/// Render with explicit playback settings.
pub fn render_with(config: &ExportConfig, playback: &AnimationSpec) -> String {
    if config.animation.trim().is_empty() {
        log::warn!("rendering export without an animation; the play button will do nothing");
    }
    if config.image.is_none() {
        log::warn!("rendering export without an image source");
    }

    let html = fill(DOCUMENT_TEMPLATE, |slot| match slot {
        Slot::ContainerWidth => css_number(config.container_width_px()),
        Slot::ContainerHeight => css_number(config.container_height_px()),
        Slot::ImageHeight => css_number(config.image_height_px()),
        Slot::ObjectPosition => config.gen_offset.to_css(),
        Slot::Keyframes => keyframes_block(),
        Slot::ImageSrc => config
            .image
            .as_ref()
            .map(|image| escape_html_attr(image.as_str()))
            .unwrap_or_default(),
        Slot::AnimationShorthand => escape_js_string(&playback.shorthand(&config.animation)),
        Slot::RestartDelay => playback.restart_delay_ms.to_string(),
    });

    log::debug!(
        "rendered export document: {} bytes, animation {:?}, object-position {}",
        html.len(),
        config.animation,
        config.gen_offset
    );
    html
}

fn keyframes_block() -> String {
    AnimationPreset::ALL
        .into_iter()
        .map(AnimationPreset::keyframes_css)
        .collect::<Vec<_>>()
        .join("\n")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::export::{DisplayConstants, FormValues};
    use crate::position::Offset;

    use proptest::prelude::*;

    fn form_strategy() -> impl Strategy<Value = FormValues> {
        (1.0f64..=200.0, 1.0f64..=200.0, "[a-zA-Z]{0,16}", 0.1f64..=4.0).prop_map(
            |(width, height, animation, scale)| FormValues {
                container_width_percent: width,
                container_height_percent: height,
                animation,
                quality: 1.0,
                scale,
            },
        )
    }

    proptest! {
        /// Property: Rendering the same config twice gives identical output.
        #[test]
        fn prop_render_deterministic(
            form in form_strategy(),
            x in -2_000i32..=2_000,
            y in -2_000i32..=2_000,
        ) {
            let cfg = ExportConfig::new(&form, None, Offset::new(x, y), DisplayConstants::default());
            prop_assert_eq!(render(&cfg), render(&cfg.clone()));
        }

        /// Property: The document always carries the generation offset and the animation.
        #[test]
        fn prop_render_embeds_inputs(
            form in form_strategy(),
            x in -2_000i32..=2_000,
            y in -2_000i32..=2_000,
        ) {
            let offset = Offset::new(x, y);
            let cfg = ExportConfig::new(&form, None, offset, DisplayConstants::default());
            let html = render(&cfg);
            let object_position = format!("object-position: {};", offset);
            let shorthand = format!("'{} 2s ease forwards'", form.animation);
            prop_assert!(html.contains(&object_position));
            prop_assert!(html.contains(&shorthand));
        }
    }
}

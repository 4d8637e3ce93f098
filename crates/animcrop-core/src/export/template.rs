//! Named-slot templating for the exported document.
//!
//! Templates mark slots as `{{slot_name}}`. Filling is a single left-to-right
//! pass, so slot values are never re-scanned: an image URI that happens to
//! contain `{{...}}` is copied through untouched.

use std::fmt::Write;

/// A value the exported document is parameterised on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    ContainerWidth,
    ContainerHeight,
    ImageHeight,
    ObjectPosition,
    Keyframes,
    ImageSrc,
    AnimationShorthand,
    RestartDelay,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::ContainerWidth,
        Slot::ContainerHeight,
        Slot::ImageHeight,
        Slot::ObjectPosition,
        Slot::Keyframes,
        Slot::ImageSrc,
        Slot::AnimationShorthand,
        Slot::RestartDelay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::ContainerWidth => "container_width",
            Slot::ContainerHeight => "container_height",
            Slot::ImageHeight => "image_height",
            Slot::ObjectPosition => "object_position",
            Slot::Keyframes => "keyframes",
            Slot::ImageSrc => "image_src",
            Slot::AnimationShorthand => "animation",
            Slot::RestartDelay => "restart_delay",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

/// Replace every `{{slot}}` in `template` with `value_of(slot)`.
///
/// Unknown slot names and unterminated `{{` are copied verbatim.
pub fn fill<F>(template: &str, mut value_of: F) -> String
where
    F: FnMut(Slot) -> String,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after_open[..close];
        match Slot::from_name(name) {
            Some(slot) => out.push_str(&value_of(slot)),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}

/// Format a number the way a browser script would print it in CSS.
///
/// Whole numbers print without a fraction (`600`, not `600.0`), magnitudes
/// of `1e21` and above or below `1e-6` switch to exponent form (`1e+21`,
/// `1e-7`), and non-finite values print as `NaN` / `Infinity`.
pub fn css_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        // Covers -0.0
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        exponent_notation(value)
    } else {
        value.to_string()
    }
}

/// `1e21` -> `1e+21`, `1.5e-7` -> `1.5e-7`.
fn exponent_notation(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Escape text for a single-quoted JavaScript string inside `<script>`.
pub fn escape_js_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            // Keeps `</script>` from closing the element early
            '<' => out.push_str("\\x3C"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted HTML attribute value.
pub fn escape_html_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

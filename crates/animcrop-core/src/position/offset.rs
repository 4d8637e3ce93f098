//! Pixel offsets and pointer coordinates.
//!
//! An [`Offset`] is the typed form of a CSS `object-position` value. It is
//! kept as an integer pair everywhere inside the crate and only turned into
//! the `"{x}px {y}px"` string when it is handed to a renderer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when reading an offset from its CSS string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffsetParseError {
    /// The value did not contain exactly two components.
    #[error("Expected two offset components, got {0}")]
    ComponentCount(usize),

    /// A component was not a whole number of pixels.
    #[error("Invalid offset component: {0:?}")]
    InvalidComponent(String),
}

/// A signed pixel position, rendered as `"{x}px {y}px"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// The resting position of a freshly loaded image.
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by an integer factor, saturating at the
    /// `i32` bounds.
    #[inline]
    pub fn scaled(self, factor: i32) -> Self {
        Self {
            x: self.x.saturating_mul(factor),
            y: self.y.saturating_mul(factor),
        }
    }

    /// CSS `object-position` value for this offset.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl Add for Offset {
    type Output = Offset;

    /// Saturates at the `i32` bounds.
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px", self.x, self.y)
    }
}

impl FromStr for Offset {
    type Err = OffsetParseError;

    /// Parse `"{x}px {y}px"`. The `px` unit is optional and any run of
    /// whitespace separates the two components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(OffsetParseError::ComponentCount(parts.len()));
        }
        Ok(Offset::new(parse_component(parts[0])?, parse_component(parts[1])?))
    }
}

fn parse_component(raw: &str) -> Result<i32, OffsetParseError> {
    let digits = raw.strip_suffix("px").unwrap_or(raw);
    digits
        .parse::<i32>()
        .map_err(|_| OffsetParseError::InvalidComponent(raw.to_string()))
}

/// A pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Offset;

    /// Pointer travel between two positions, as an offset delta.
    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

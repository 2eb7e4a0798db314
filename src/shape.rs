//! Rectangle value object.

use serde::{Deserialize, Serialize};

/// A rectangle with a computed area.
///
/// Fields are public and unvalidated; the struct stores whatever it is
/// given. The serde derives make it the canonical target type for
/// [`crate::json::decode`]: decoding a plain `{"width":..,"height":..}`
/// record yields a value that answers [`Rectangle::area`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from width and height, in that order.
    pub const fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }

    /// The product of width and height.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

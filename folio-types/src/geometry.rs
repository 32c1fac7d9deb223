//! Page geometry

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in backend page units.
///
/// `(x1, y1)` is the first corner and `(x2, y2)` the opposite one. The core
/// never normalizes the corners; backends decide the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Check whether the point lies inside (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (left, right) = min_max(self.x1, self.x2);
        let (low, high) = min_max(self.y1, self.y2);
        (left..=right).contains(&x) && (low..=high).contains(&y)
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

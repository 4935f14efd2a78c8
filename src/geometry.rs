//! Integer window geometry: points, sizes and rectangles
//!
//! All window coordinates are whole pixels. A [`Rectangle`] is stored as an
//! origin plus a size so that replacing one component never disturbs the others.

use serde::{Deserialize, Serialize};

/// A position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset by another point, saturating at the `i32` range
    pub const fn offset(self, by: Point) -> Self {
        Self::new(self.x.saturating_add(by.x), self.y.saturating_add(by.y))
    }

    /// Component-wise difference, saturating at the `i32` range
    pub const fn delta(self, from: Point) -> Self {
        Self::new(self.x.saturating_sub(from.x), self.y.saturating_sub(from.y))
    }
}

/// An extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Creates a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns true if either extent is zero or negative
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// An axis-aligned rectangle described by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size
    pub const fn from_parts(location: Point, size: Size) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    /// Top-left corner
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Same size, different origin
    pub const fn with_location(self, location: Point) -> Self {
        Self::from_parts(location, self.size())
    }

    /// Same origin, different size
    pub const fn with_size(self, size: Size) -> Self {
        Self::from_parts(self.location(), size)
    }

    pub const fn with_x(self, x: i32) -> Self {
        Self { x, ..self }
    }

    pub const fn with_y(self, y: i32) -> Self {
        Self { y, ..self }
    }

}

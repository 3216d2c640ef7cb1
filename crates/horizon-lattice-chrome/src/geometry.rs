//! Integer geometry used by hit-testing and monitor queries.
//!
//! Native window messages deliver coordinates as whole pixels, so the chrome
//! works in `i32` throughout. Whether a value is physical or logical is stated
//! by the API that produces or consumes it.

/// A point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a physical point to logical pixels, truncating toward zero.
    pub fn to_logical(self, scale_factor: f64) -> Self {
        Self {
            x: descale(self.x, scale_factor),
            y: descale(self.y, scale_factor),
        }
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Convert a physical size to logical pixels, truncating toward zero.
    pub fn to_logical(self, scale_factor: f64) -> Self {
        Self {
            width: descale(self.width, scale_factor),
            height: descale(self.height, scale_factor),
        }
    }

    /// Convert a logical size to physical pixels, truncating toward zero.
    pub fn to_physical(self, scale_factor: f64) -> Self {
        Self {
            width: (self.width as f64 * scale_factor) as i32,
            height: (self.height as f64 * scale_factor) as i32,
        }
    }
}

/// A rectangle stored by its edges, right and bottom exclusive.
///
/// This matches the layout of the native `RECT` so frame calculations can
/// move edges independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Check if a point lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

fn descale(value: i32, scale_factor: f64) -> i32 {
    if scale_factor > 0.0 {
        (value as f64 / scale_factor) as i32
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_right_open() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(19, 19)));
        assert!(!rect.contains(Point::new(20, 15)));
        assert!(!rect.contains(Point::new(15, 20)));
    }

    #[test]
    fn test_logical_conversion() {
        let p = Point::new(300, 45).to_logical(1.5);
        assert_eq!(p, Point::new(200, 30));

        let s = Size::new(400, 300).to_physical(1.25);
        assert_eq!(s, Size::new(500, 375));

        // A degenerate scale leaves coordinates untouched.
        assert_eq!(Point::new(7, 9).to_logical(0.0), Point::new(7, 9));
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(Point::new(-1920, 0), Size::new(1920, 1040));
        assert_eq!(rect.width(), 1920);
        assert_eq!(rect.height(), 1040);
        assert_eq!(rect.origin(), Point::new(-1920, 0));
    }
}

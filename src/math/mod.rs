/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Axis-aligned measured bounds of a laid-out element, in absolute client
/// coordinates (origin at the top-left, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point2,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

impl Rect {
    /// Creates a rect from its top-left corner and dimensions.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point2::new(x, y),
            width,
            height,
        }
    }

    /// Returns the center point of the rect.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rect_center() {
        let r = Rect::new(10.0, 20.0, 40.0, 60.0);
        let c = r.center();
        assert_relative_eq!(c.x, 30.0);
        assert_relative_eq!(c.y, 50.0);
    }

    #[test]
    fn rect_center_degenerate() {
        // Zero-sized rect: center is the origin itself.
        let r = Rect::new(5.0, -3.0, 0.0, 0.0);
        let c = r.center();
        assert_relative_eq!(c.x, 5.0);
        assert_relative_eq!(c.y, -3.0);
    }
}

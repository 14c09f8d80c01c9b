//! Projection of the pendulum angle onto canvas coordinates.
//!
//! Coordinates are integer pixels with the origin at the top-left corner and `y`
//! growing downward, so `theta = 0` hangs the bob straight below the pivot.

/// Pixel position on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position, growing downward.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a filled circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width and height.
    pub size: i32,
}

impl Bounds {
    fn centered(center: Point, size: i32) -> Self {
        Self {
            x: center.x - size / 2,
            y: center.y - size / 2,
            size,
        }
    }
}

/// Fixed drawing geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Canvas width.
    pub width: i32,
    /// Canvas height.
    pub height: i32,
    /// Rod length in pixels.
    pub rod_length: f64,
    /// Diameter of the pivot circle.
    pub pivot_diameter: i32,
    /// Diameter of the bob circle.
    pub bob_diameter: i32,
}

impl Geometry {
    /// Pivot position, at the canvas center.
    pub fn pivot(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    /// Project `theta` to pivot and bob positions.
    pub fn project(&self, theta: f64) -> Projection {
        let pivot = self.pivot();
        let (sin, cos) = theta.sin_cos();

        Projection {
            pivot,
            bob: Point::new(
                pivot.x + round_half_up(self.rod_length * sin),
                pivot.y + round_half_up(self.rod_length * cos),
            ),
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            rod_length: 150.,
            pivot_diameter: 10,
            bob_diameter: 40,
        }
    }
}

/// Drawable positions for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Projection {
    /// Pivot center.
    pub pivot: Point,
    /// Bob center.
    pub bob: Point,
}

impl Projection {
    /// Bounding box of the bob circle.
    pub fn bob_bounds(&self, geometry: &Geometry) -> Bounds {
        Bounds::centered(self.bob, geometry.bob_diameter)
    }

    /// Bounding box of the pivot circle.
    pub fn pivot_bounds(&self, geometry: &Geometry) -> Bounds {
        Bounds::centered(self.pivot, geometry.pivot_diameter)
    }
}

/// Project `theta` with the default [`Geometry`].
pub fn project(theta: f64) -> Projection {
    Geometry::default().project(theta)
}

// Halves round toward positive infinity.
fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn it_hangs_below_at_zero() {
        let projection = project(0.);
        assert_eq!(projection.pivot, Point::new(200, 200));
        assert_eq!(projection.bob, Point::new(200, 350));
    }

    #[test]
    fn it_stands_above_at_pi() {
        let projection = project(PI);
        assert_eq!(projection.bob, Point::new(200, 50));
    }

    #[test]
    fn it_swings_right_for_positive_theta() {
        let projection = project(FRAC_PI_2);
        assert_eq!(projection.bob, Point::new(350, 200));

        let projection = project(-FRAC_PI_2);
        assert_eq!(projection.bob, Point::new(50, 200));
    }

    #[test]
    fn it_rounds_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn it_bounds_circles() {
        let geometry = Geometry::default();
        let projection = geometry.project(0.);

        assert_eq!(
            projection.bob_bounds(&geometry),
            Bounds {
                x: 180,
                y: 330,
                size: 40
            }
        );
        assert_eq!(
            projection.pivot_bounds(&geometry),
            Bounds {
                x: 195,
                y: 195,
                size: 10
            }
        );
    }
}

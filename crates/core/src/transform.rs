//! Rotation transform applied to every logical drawing coordinate.
//!
//! A point is translated so the pivot sits at the origin, rotated by the
//! standard 2D rotation matrix, translated back and rounded to a cell.
//! Rounding is half away from zero on both axes.

use crate::types::Point;

/// Rotation state: an angle in radians about an integer pivot.
///
/// The pivot is not bounds-checked and may lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub angle_radians: f64,
    pub pivot_x: i32,
    pub pivot_y: i32,
}

impl Rotation {
    /// The identity rotation (angle zero).
    pub const IDENTITY: Rotation = Rotation {
        angle_radians: 0.0,
        pivot_x: 0,
        pivot_y: 0,
    };

    pub fn from_degrees(degrees: f64, pivot_x: i32, pivot_y: i32) -> Self {
        Self {
            angle_radians: degrees.to_radians(),
            pivot_x,
            pivot_y,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.angle_radians == 0.0
    }

    /// Map a logical point to the cell it lands on under this rotation.
    ///
    /// With a zero angle this is exactly `(round(x), round(y))`.
    #[inline]
    pub fn transform_point(&self, p: Point) -> (i32, i32) {
        if self.is_identity() {
            return (round_to_cell(p.x), round_to_cell(p.y));
        }

        let px = f64::from(self.pivot_x);
        let py = f64::from(self.pivot_y);
        let lx = p.x - px;
        let ly = p.y - py;

        let (sin_a, cos_a) = self.angle_radians.sin_cos();
        let rx = lx * cos_a - ly * sin_a;
        let ry = lx * sin_a + ly * cos_a;

        (round_to_cell(rx + px), round_to_cell(ry + py))
    }
}

#[inline(always)]
fn round_to_cell(v: f64) -> i32 {
    // `as` saturates, so far-off-canvas points stay far off-canvas.
    v.round() as i32
}

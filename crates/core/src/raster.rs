//! Outline primitives: points, lines, rectangles, triangles, circles, text.
//!
//! Every primitive maps its logical coordinates through the canvas rotation
//! exactly once and then writes through the clipped cell writer.

use crate::canvas::Canvas;
use crate::types::{Glyph, Point, Rgb};

/// Cells of a Bresenham line between two cell coordinates, endpoints included.
///
/// Equal endpoints yield exactly one cell. State is kept in `i64`, so lines
/// between any two `i32` cells step without overflow.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    remaining: i64,
}

impl LinePoints {
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        let (x0, y0) = (i64::from(start.0), i64::from(start.1));
        let (x1, y1) = (i64::from(end.0), i64::from(end.1));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            // The major axis advances on every step, so the walk reaches the
            // end point after exactly `max(dx, |dy|)` steps.
            remaining: dx.max(-dy) + 1,
        }
    }

    /// The same line with the steps outside a `width` x `height` grid along
    /// the major axis cut off.
    ///
    /// The cut is computed up front, so the walk is at most `width` (or
    /// `height`) cells long however far away the endpoints are. Every cell of
    /// the full line that lies inside the grid is still yielded; cells that
    /// are off-grid only along the minor axis may be yielded too.
    pub fn clipped(start: (i32, i32), end: (i32, i32), width: u16, height: u16) -> Self {
        let mut line = Self::new(start, end);
        let (origin, step, extent) = if line.dx >= -line.dy {
            (line.x, line.sx, i64::from(width))
        } else {
            (line.y, line.sy, i64::from(height))
        };
        let (first, last) = if step > 0 {
            (-origin, extent - 1 - origin)
        } else {
            (origin - (extent - 1), origin)
        };
        let first = first.max(0);
        let last = last.min(line.remaining - 1);
        if first > last {
            line.remaining = 0;
            return line;
        }
        line.skip_from_start(first);
        line.remaining = last - first + 1;
        line
    }

    /// Jump a fresh walk `k` steps ahead.
    ///
    /// After `k` steps the minor axis has moved
    /// `floor((2 * minor * k + major) / (2 * major))` times, which fixes the
    /// position and the error term.
    fn skip_from_start(&mut self, k: i64) {
        if k == 0 {
            return;
        }
        let a = i128::from(self.dx);
        let b = i128::from(-self.dy);
        let k = i128::from(k);
        if a >= b {
            let m = (2 * b * k + a) / (2 * a);
            self.x += self.sx * k as i64;
            self.y += self.sy * m as i64;
            self.err = (a - b - k * b + m * a) as i64;
        } else {
            let n = (2 * a * k + b) / (2 * b);
            self.x += self.sx * n as i64;
            self.y += self.sy * k as i64;
            self.err = (a - b + k * a - n * b) as i64;
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // Every cell lies between two i32 endpoints.
        let current = (self.x as i32, self.y as i32);
        self.remaining -= 1;
        if self.remaining > 0 {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.x += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl Canvas {
    /// Plot one logical point.
    pub fn set_pixel(&mut self, p: impl Into<Point>, glyph: impl Into<Glyph>) {
        let (x, y) = self.transform_point(p);
        self.write_cell(x, y, glyph.into());
    }

    /// Draw a line; both endpoints are transformed once, then stepped with Bresenham.
    pub fn draw_line(
        &mut self,
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        glyph: impl Into<Glyph>,
    ) {
        let glyph = glyph.into();
        let start = self.transform_point(p0);
        let end = self.transform_point(p1);
        for (x, y) in LinePoints::clipped(start, end, self.width(), self.height()) {
            self.write_cell(x, y, glyph);
        }
    }

    /// Outline of the `w`x`h` box anchored at `origin`, drawn as four lines.
    ///
    /// Each edge is rotated on its own, so a rotated outline is four rotated segments.
    pub fn draw_rect(
        &mut self,
        origin: impl Into<Point>,
        w: i32,
        h: i32,
        glyph: impl Into<Glyph>,
    ) {
        let glyph = glyph.into();
        let (right, bottom) = (f64::from(w) - 1.0, f64::from(h) - 1.0);
        let tl = origin.into();
        let tr = tl.offset(right, 0.0);
        let bl = tl.offset(0.0, bottom);
        let br = tl.offset(right, bottom);

        self.draw_line(tl, tr, glyph);
        self.draw_line(bl, br, glyph);
        self.draw_line(tl, bl, glyph);
        self.draw_line(tr, br, glyph);
    }

    pub fn draw_triangle(
        &mut self,
        v0: impl Into<Point>,
        v1: impl Into<Point>,
        v2: impl Into<Point>,
        glyph: impl Into<Glyph>,
    ) {
        let glyph = glyph.into();
        let (v0, v1, v2) = (v0.into(), v1.into(), v2.into());
        self.draw_line(v0, v1, glyph);
        self.draw_line(v1, v2, glyph);
        self.draw_line(v2, v0, glyph);
    }

    /// Midpoint circle outline.
    ///
    /// Only the center is transformed; rotation relocates a circle but never
    /// changes its shape. Negative radii draw nothing and `radius == 0` plots
    /// the center alone.
    pub fn draw_circle(
        &mut self,
        center: impl Into<Point>,
        radius: i32,
        glyph: impl Into<Glyph>,
    ) {
        if radius < 0 {
            return;
        }
        let glyph = glyph.into();
        let (cx, cy) = self.transform_point(center);
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        if self.ring_misses_canvas(cx, cy, r) {
            return;
        }

        let mut x = 0;
        let mut y = r;
        let mut d = 3 - 2 * r;
        while y >= x {
            self.plot_octants(cx, cy, x, y, glyph);
            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }
        }
    }

    /// True when no cell of a radius-`r` outline around `(cx, cy)` can land
    /// on the canvas: the ring's bounding box is disjoint from the canvas, or
    /// the whole canvas sits inside the ring's hole.
    fn ring_misses_canvas(&self, cx: i64, cy: i64, r: i64) -> bool {
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        if cx + r < 0 || cx - r >= w || cy + r < 0 || cy - r >= h {
            return true;
        }
        // Outline cells sit at distance greater than `r - 1` from the center.
        let far_x = i128::from(cx.abs().max((cx - (w - 1)).abs()));
        let far_y = i128::from(cy.abs().max((cy - (h - 1)).abs()));
        let inner = i128::from(r - 1);
        inner > 0 && far_x * far_x + far_y * far_y < inner * inner
    }

    fn plot_octants(&mut self, cx: i64, cy: i64, x: i64, y: i64, glyph: Glyph) {
        for (dx, dy) in [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ] {
            // Anything outside i32 is off-canvas anyway.
            if let (Ok(px), Ok(py)) = (i32::try_from(cx + dx), i32::try_from(cy + dy)) {
                self.write_cell(px, py, glyph);
            }
        }
    }

    /// Draw `text` with each character at logical `(x + i, y)`.
    ///
    /// Under rotation every character position is rotated on its own; the
    /// string is not rotated as a rigid block.
    pub fn draw_text(&mut self, origin: impl Into<Point>, text: &str, color: Option<Rgb>) {
        let origin = origin.into();
        for (i, ch) in text.chars().enumerate() {
            let p = Point::new(origin.x + i as f64, origin.y);
            self.set_pixel(p, Glyph::Plain(ch).with_optional_color(color));
        }
    }
}

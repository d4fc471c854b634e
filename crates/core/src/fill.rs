//! Span-based fills: horizontal spans, triangles, rectangles and circles.

use crate::canvas::Canvas;
use crate::types::{Glyph, Point};

/// X where the edge `(x_start, y_start) -> (x_end, y_end)` crosses scanline `y`.
///
/// A horizontal edge yields `x_start`.
#[inline]
fn edge_x(y: i32, y_start: i32, y_end: i32, x_start: i32, x_end: i32) -> i32 {
    if y_start == y_end {
        return x_start;
    }
    let t = (f64::from(y) - f64::from(y_start)) / (f64::from(y_end) - f64::from(y_start));
    // Truncates toward zero.
    (f64::from(x_start) + (f64::from(x_end) - f64::from(x_start)) * t) as i32
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Canvas {
    /// Fill cells `x_start..=x_end` (either order) on row `y`, clipped on both axes.
    pub fn fill_span(&mut self, x_start: i32, x_end: i32, y: i32, glyph: impl Into<Glyph>) {
        if y < 0 || y >= i32::from(self.height()) {
            return;
        }
        let glyph = glyph.into();
        let (lo, hi) = if x_start > x_end {
            (x_end, x_start)
        } else {
            (x_start, x_end)
        };
        let lo = lo.max(0);
        let hi = hi.min(i32::from(self.width()) - 1);
        for x in lo..=hi {
            self.write_cell(x, y, glyph);
        }
    }

    /// Scanline triangle fill.
    ///
    /// Vertices are transformed once and sorted by y (stable). Rows above the
    /// middle vertex use the short edge `v0 -> v1`; the middle row and everything
    /// below use `v1 -> v2`, so the split row is filled exactly once.
    pub fn fill_triangle(
        &mut self,
        v0: impl Into<Point>,
        v1: impl Into<Point>,
        v2: impl Into<Point>,
        glyph: impl Into<Glyph>,
    ) {
        let glyph = glyph.into();
        let mut verts = [
            self.transform_point(v0),
            self.transform_point(v1),
            self.transform_point(v2),
        ];
        verts.sort_by_key(|&(_, y)| y);
        let [(x0, y0), (x1, y1), (x2, y2)] = verts;
        // Rows off the canvas would be dropped by `fill_span`; skip them.
        let (top, bottom) = (0, i32::from(self.height()) - 1);

        for y in y0.max(top)..y1.min(bottom + 1) {
            let sx = edge_x(y, y0, y2, x0, x2);
            let ex = edge_x(y, y0, y1, x0, x1);
            self.fill_span(sx, ex, y, glyph);
        }
        for y in y1.max(top)..=y2.min(bottom) {
            let sx = edge_x(y, y0, y2, x0, x2);
            let ex = edge_x(y, y1, y2, x1, x2);
            self.fill_span(sx, ex, y, glyph);
        }
    }

    /// Filled `w`x`h` box, drawn as two triangles sharing the
    /// top-right/bottom-left diagonal.
    ///
    /// Under rotation the shared diagonal can show as a seam.
    pub fn fill_rect(
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
        let br = tl.offset(right, bottom);
        let bl = tl.offset(0.0, bottom);

        self.fill_triangle(tl, tr, bl, glyph);
        self.fill_triangle(tr, br, bl, glyph);
    }

    /// Scanline circle fill; only the center is transformed.
    ///
    /// Row `cy + dy` gets the span `cx - dx ..= cx + dx` with
    /// `dx = floor(sqrt(r^2 - dy^2))`. Negative radii fill nothing.
    pub fn fill_circle(
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
        let r2 = r * r;

        let first = (cy - r).max(0);
        let last = (cy + r).min(i64::from(self.height()) - 1);
        for row in first..=last {
            let dy = row - cy;
            let dx = isqrt(r2 - dy * dy);
            self.fill_span(saturate(cx - dx), saturate(cx + dx), row as i32, glyph);
        }
    }
}

/// `floor(sqrt(n))` for `n >= 0`, exact where `f64` alone would round.
fn isqrt(n: i64) -> i64 {
    let mut r = (n as f64).sqrt() as i64;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

//! End-to-end drawing scenarios on small canvases.

use monoglyph::core::{colorize, Canvas, CanvasError, CanvasConfig};
use monoglyph::types::{Glyph, Rgb};

fn painted(c: &Canvas, ch: char) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..i32::from(c.height()) {
        for x in 0..i32::from(c.width()) {
            if c.get(x, y).map(|g| g.ch()) == Some(ch) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn rect_outline_paints_exactly_the_border() {
    let mut c = Canvas::new(10, 10, '.').unwrap();
    c.draw_rect((1, 1), 5, 5, '#');

    let cells = painted(&c, '#');
    assert_eq!(cells.len(), 16);
    for (x, y) in &cells {
        let on_border = (1..=5).contains(x)
            && (1..=5).contains(y)
            && (*x == 1 || *x == 5 || *y == 1 || *y == 5);
        assert!(on_border, "unexpected cell ({x}, {y})");
    }
    assert_eq!(painted(&c, '.').len(), 100 - 16);
}

#[test]
fn triangle_outline_shares_vertices_between_edges() {
    let mut c = Canvas::new(8, 8, '.').unwrap();
    c.draw_triangle((1, 1), (6, 1), (1, 6), '#');

    assert_eq!(
        c.to_lines(),
        vec![
            "........",
            ".######.",
            ".#...#..",
            ".#..#...",
            ".#.#....",
            ".##.....",
            ".#......",
            "........",
        ]
    );
}

#[test]
fn rotated_triangle_outline_is_three_rotated_segments() {
    let (a, b, v) = ((3, 2), (12, 4), (6, 11));
    let mut outline = Canvas::new(16, 16, '.').unwrap();
    outline.set_rotation(37.0, 8, 8);
    outline.draw_triangle(a, b, v, '#');

    let mut segments = Canvas::new(16, 16, '.').unwrap();
    segments.set_rotation(37.0, 8, 8);
    segments.draw_line(a, b, '#');
    segments.draw_line(b, v, '#');
    segments.draw_line(v, a, '#');

    assert_eq!(outline.to_lines(), segments.to_lines());
    // Each vertex is transformed on its own and lands on the outline.
    for p in [a, b, v] {
        let (x, y) = outline.transform_point(p);
        assert_eq!(outline.get(x, y), Some(Glyph::from('#')));
    }
}

#[test]
fn rotated_rect_outline_is_four_rotated_segments() {
    let mut outline = Canvas::new(20, 20, '.').unwrap();
    outline.set_rotation(25.0, 10, 10);
    outline.draw_rect((5, 6), 9, 7, '#');

    let mut segments = Canvas::new(20, 20, '.').unwrap();
    segments.set_rotation(25.0, 10, 10);
    let (tl, tr, bl, br) = ((5, 6), (13, 6), (5, 12), (13, 12));
    segments.draw_line(tl, tr, '#');
    segments.draw_line(bl, br, '#');
    segments.draw_line(tl, bl, '#');
    segments.draw_line(tr, br, '#');

    assert_eq!(outline.to_lines(), segments.to_lines());
    for corner in [tl, tr, bl, br] {
        let (x, y) = outline.transform_point(corner);
        assert_eq!(outline.get(x, y), Some(Glyph::from('#')));
    }
}

#[test]
fn right_triangle_fill_matches_span_area() {
    let mut c = Canvas::new(6, 6, '.').unwrap();
    c.fill_triangle((0, 0), (4, 0), (0, 4), '*');

    // Rows 0..=4 get spans of 5, 4, 3, 2, 1 cells.
    assert_eq!(
        c.to_lines(),
        vec!["*****.", "****..", "***...", "**....", "*.....", "......"]
    );
    assert_eq!(painted(&c, '*').len(), 15);
}

#[test]
fn triangle_split_row_is_filled_once_without_gaps() {
    let mut c = Canvas::new(9, 9, '.').unwrap();
    c.fill_triangle((4, 0), (0, 4), (8, 8), '*');
    let lines = c.to_lines();
    for (y, row) in lines.iter().enumerate() {
        let first = row.find('*').expect("every row of the triangle is painted");
        let last = row.rfind('*').unwrap();
        assert!(row[first..=last].chars().all(|ch| ch == '*'), "gap in row {y}: {row}");
    }
}

#[test]
fn degenerate_line_writes_one_cell_at_transformed_point() {
    let mut c = Canvas::new(10, 10, '.').unwrap();
    c.set_rotation(90.0, 5, 5);
    c.draw_line((7, 5), (7, 5), 'x');
    assert_eq!(painted(&c, 'x'), vec![c.transform_point((7, 5))]);
    assert_eq!(c.transform_point((7, 5)), (5, 7));
}

#[test]
fn zero_radius_fill_circle_writes_one_cell() {
    let mut c = Canvas::new(7, 7, '.').unwrap();
    c.fill_circle((3, 3), 0, '@');
    assert_eq!(painted(&c, '@'), vec![(3, 3)]);
}

#[test]
fn rotation_applies_at_call_time_only() {
    let mut c = Canvas::new(10, 10, '.').unwrap();
    c.set_pixel((8, 5), 'a');
    c.set_rotation(180.0, 5, 5);
    c.set_pixel((8, 5), 'b');

    assert_eq!(painted(&c, 'a'), vec![(8, 5)]);
    assert_eq!(painted(&c, 'b'), vec![(2, 5)]);
}

#[test]
fn rotation_persists_across_clear() {
    let mut c = Canvas::new(10, 10, '.').unwrap();
    c.set_rotation(90.0, 0, 0);
    c.clear();
    c.set_pixel((0, 3), 'x');
    // (0, 3) rotated a quarter turn about the origin lands off-canvas at (-3, 0).
    assert!(painted(&c, 'x').is_empty());
}

#[test]
fn rotated_circle_outline_moves_center_only() {
    let mut plain = Canvas::new(20, 20, '.').unwrap();
    plain.draw_circle((10, 4), 3, 'o');

    let mut rotated = Canvas::new(20, 20, '.').unwrap();
    rotated.set_rotation(180.0, 10, 10);
    rotated.draw_circle((10, 16), 3, 'o');

    assert_eq!(painted(&plain, 'o'), painted(&rotated, 'o'));
}

#[test]
fn rotated_text_rotates_each_character_position() {
    let mut c = Canvas::new(10, 10, '.').unwrap();
    c.set_rotation(90.0, 0, 0);
    c.draw_text((3, 0), "abc", None);

    // Each character is placed independently: a quarter turn sends the
    // baseline (3..=5, 0) to the column (0, 3..=5). Characters are not
    // themselves rotated and spacing follows the rotated positions.
    assert_eq!(c.get(0, 3), Some(Glyph::from('a')));
    assert_eq!(c.get(0, 4), Some(Glyph::from('b')));
    assert_eq!(c.get(0, 5), Some(Glyph::from('c')));
}

#[test]
fn rotated_text_does_not_keep_rigid_spacing() {
    let mut c = Canvas::new(40, 40, ' ').unwrap();
    c.set_rotation(30.0, 0, 0);
    c.draw_text((10, 10), "abcdefgh", None);

    // Per-character rounding makes neighbouring steps differ in rotated space.
    let positions: Vec<(i32, i32)> = "abcdefgh"
        .chars()
        .map(|ch| painted(&c, ch)[0])
        .collect();
    let steps: Vec<(i32, i32)> = positions
        .windows(2)
        .map(|w| (w[1].0 - w[0].0, w[1].1 - w[0].1))
        .collect();
    assert!(steps.iter().any(|s| *s != steps[0]), "steps: {steps:?}");
}

#[test]
fn rotated_fill_rect_paints_cells_near_rotated_box() {
    let mut c = Canvas::new(30, 30, '.').unwrap();
    c.set_rotation(30.0, 15, 15);
    c.fill_rect((10, 10), 11, 11, '#');

    let cells = painted(&c, '#');
    assert!(cells.len() > 80, "only {} cells", cells.len());
    // The rotated box has a circumradius of ~7.1 around the pivot; allow for
    // vertex rounding and span truncation.
    for (x, y) in cells {
        let d = f64::from((x - 15).pow(2) + (y - 15).pow(2)).sqrt();
        assert!(d <= 9.0, "({x}, {y}) too far from pivot");
    }
}

#[test]
fn colored_glyphs_are_stored_opaquely() {
    let mut c = Canvas::new(4, 1, '.').unwrap();
    let g = colorize('#', 255, 0, 7);
    c.fill_span(0, 3, 0, g);
    assert!(c.cells().iter().all(|cell| *cell == g));
    assert_eq!(g.color(), Some(Rgb::new(255, 0, 7)));
}

#[test]
fn invalid_dimensions_from_config() {
    let err = Canvas::from_config(&CanvasConfig::new(0, 10, '.')).unwrap_err();
    assert_eq!(
        err,
        CanvasError::InvalidDimensions {
            width: 0,
            height: 10
        }
    );
}

#[test]
fn shade_zero_is_canvas_default() {
    let c = Canvas::new(2, 2, '~').unwrap();
    assert_eq!(c.shade_for_intensity(0.0), Glyph::from('~'));
    assert_eq!(c.shade_for_intensity(1.0), Glyph::from('@'));
}

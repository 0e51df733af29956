use bp_types::Point;

use crate::projection::Projection;
use crate::surface::{Color, Surface};

/// Interval between grid lines, in surface units.
pub const GRID_STEP: f64 = 40.0;

/// Render a point sequence onto a surface.
///
/// Draw order: clear, background fill, fixed-interval grid, connecting
/// polyline (only with two or more points), then a filled circular marker
/// per point with radius proportional to the projection scale, clamped to
/// `[2, 6]`. Malformed coordinates degrade to `(0, 0)`; an empty sequence
/// renders only background and grid. Identical input produces an identical
/// call sequence.
pub fn render<S: Surface>(points: &[Point], surface: &mut S, width: f64, height: f64) {
    surface.clear_rect(0.0, 0.0, width, height);
    surface.set_fill_color(Color::BACKGROUND);
    surface.fill_rect(0.0, 0.0, width, height);

    draw_grid(surface, width, height);

    let normalized: Vec<Point> = points.iter().map(|p| p.normalized()).collect();
    let projection = Projection::fit(&normalized, width, height);

    if normalized.len() > 1 {
        surface.set_stroke_color(Color::POLYLINE);
        surface.set_line_width(2.0);
        surface.begin_path();
        let (x0, y0) = projection.map(normalized[0]);
        surface.move_to(x0, y0);
        for &p in &normalized[1..] {
            let (x, y) = projection.map(p);
            surface.line_to(x, y);
        }
        surface.stroke();
    }

    let radius = (3.0 * projection.scale()).clamp(2.0, 6.0);
    surface.set_fill_color(Color::MARKER);
    for &p in &normalized {
        let (x, y) = projection.map(p);
        surface.begin_path();
        surface.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        surface.fill();
    }
}

fn draw_grid<S: Surface>(surface: &mut S, width: f64, height: f64) {
    surface.set_stroke_color(Color::GRID_LINE);
    surface.set_line_width(1.0);
    let mut x = 0.0;
    while x < width {
        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, height);
        surface.stroke();
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < height {
        surface.begin_path();
        surface.move_to(0.0, y);
        surface.line_to(width, y);
        surface.stroke();
        y += GRID_STEP;
    }
}

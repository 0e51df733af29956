use crate::surface::{Color, Surface};

/// One recorded draw primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Stroke,
    Fill,
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
}

/// Surface that records every draw call instead of drawing.
///
/// Used by tests to assert on call order and mapped coordinates, and to
/// check that identical input produces an identical call sequence.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in issue order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Centers of all filled arcs (the point markers), in draw order.
    pub fn marker_centers(&self) -> Vec<(f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Arc { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Radii of all filled arcs, in draw order.
    pub fn marker_radii(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }

    /// Vertices of the connecting polyline, in draw order.
    ///
    /// The polyline is the path begun after the polyline stroke color is
    /// set; grid paths are excluded by the color filter.
    pub fn polyline(&self) -> Vec<(f64, f64)> {
        let start = self
            .calls
            .iter()
            .position(|c| *c == DrawCall::SetStrokeColor(Color::POLYLINE));
        let Some(start) = start else {
            return Vec::new();
        };
        self.calls[start..]
            .iter()
            .take_while(|c| !matches!(c, DrawCall::Stroke))
            .filter_map(|c| match c {
                DrawCall::MoveTo { x, y } | DrawCall::LineTo { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(DrawCall::ClearRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(DrawCall::FillRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(DrawCall::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetLineWidth(width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.move_to(1.0, 2.0);
        surface.line_to(3.0, 4.0);
        surface.stroke();
        assert_eq!(
            surface.calls(),
            &[
                DrawCall::BeginPath,
                DrawCall::MoveTo { x: 1.0, y: 2.0 },
                DrawCall::LineTo { x: 3.0, y: 4.0 },
                DrawCall::Stroke,
            ]
        );
    }

    #[test]
    fn polyline_extraction_ignores_grid_paths() {
        let mut surface = RecordingSurface::new();
        // Grid-style path
        surface.set_stroke_color(Color::GRID_LINE);
        surface.begin_path();
        surface.move_to(40.0, 0.0);
        surface.line_to(40.0, 100.0);
        surface.stroke();
        // Polyline path
        surface.set_stroke_color(Color::POLYLINE);
        surface.begin_path();
        surface.move_to(1.0, 1.0);
        surface.line_to(2.0, 2.0);
        surface.stroke();

        assert_eq!(surface.polyline(), vec![(1.0, 1.0), (2.0, 2.0)]);
    }

    #[test]
    fn no_polyline_means_empty_extraction() {
        let surface = RecordingSurface::new();
        assert!(surface.polyline().is_empty());
        assert!(surface.marker_centers().is_empty());
    }
}

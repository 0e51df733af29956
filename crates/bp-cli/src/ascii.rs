use bp_canvas::{Color, Surface};

/// Terminal-cell implementation of the drawing surface.
///
/// Surface coordinates are scaled down onto a character grid. Stroke color
/// picks the glyph: grid lines draw faint dots, the polyline draws stars,
/// and filled arcs (point markers) draw `o` at their centers.
pub struct AsciiSurface {
    width: f64,
    height: f64,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    path: Vec<(f64, f64)>,
    arcs: Vec<(f64, f64)>,
    stroke_color: Color,
}

impl AsciiSurface {
    pub fn new(width: f64, height: f64, cols: usize, rows: usize) -> Self {
        Self {
            width,
            height,
            cols,
            rows,
            cells: vec![' '; cols * rows],
            path: Vec::new(),
            arcs: Vec::new(),
            stroke_color: Color::GRID_LINE,
        }
    }

    fn cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let col = (x / self.width * self.cols as f64).floor() as isize;
        let row = (y / self.height * self.rows as f64).floor() as isize;
        if col < 0 || row < 0 || col >= self.cols as isize || row >= self.rows as isize {
            return None;
        }
        Some((col as usize, row as usize))
    }

    fn plot(&mut self, x: f64, y: f64, glyph: char) {
        if let Some((col, row)) = self.cell(x, y) {
            self.cells[row * self.cols + col] = glyph;
        }
    }

    fn plot_segment(&mut self, from: (f64, f64), to: (f64, f64), glyph: char) {
        // Sample the segment densely enough to hit every crossed cell.
        let steps = self.cols.max(self.rows) * 2;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.plot(x, y, glyph);
        }
    }

    /// Render the grid as lines of text.
    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for AsciiSurface {
    fn clear_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
        self.cells.fill(' ');
    }

    fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
        // Background stays blank in a terminal.
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.arcs.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn arc(&mut self, x: f64, y: f64, _radius: f64, _start_angle: f64, _end_angle: f64) {
        self.arcs.push((x, y));
    }

    fn stroke(&mut self) {
        let glyph = if self.stroke_color == Color::POLYLINE {
            '*'
        } else {
            '.'
        };
        let path = std::mem::take(&mut self.path);
        for pair in path.windows(2) {
            self.plot_segment(pair[0], pair[1], glyph);
        }
    }

    fn fill(&mut self) {
        let arcs = std::mem::take(&mut self.arcs);
        for (x, y) in arcs {
            self.plot(x, y, 'o');
        }
    }

    fn set_fill_color(&mut self, _color: Color) {}

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, _width: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_canvas::render;
    use bp_types::Point;

    #[test]
    fn renders_markers_and_polyline() {
        let mut surface = AsciiSurface::new(520.0, 360.0, 64, 24);
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ];
        render(&points, &mut surface, 520.0, 360.0);
        let text = surface.to_text();
        assert_eq!(text.matches('o').count(), 3);
        assert!(text.contains('*'));
        assert!(text.contains('.'));
    }

    #[test]
    fn empty_input_draws_grid_only() {
        let mut surface = AsciiSurface::new(520.0, 360.0, 64, 24);
        render(&[], &mut surface, 520.0, 360.0);
        let text = surface.to_text();
        assert!(!text.contains('o'));
        assert!(!text.contains('*'));
        assert!(text.contains('.'));
    }

    #[test]
    fn out_of_range_plots_are_ignored() {
        let mut surface = AsciiSurface::new(100.0, 100.0, 10, 10);
        surface.plot(-5.0, 50.0, 'x');
        surface.plot(50.0, 500.0, 'x');
        surface.plot(f64::NAN, 0.0, 'x');
        assert!(!surface.to_text().contains('x'));
    }
}

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Surface background (deep navy).
    pub const BACKGROUND: Color = Color::rgb(0x0b, 0x12, 0x20);
    /// Grid lines (translucent slate).
    pub const GRID_LINE: Color = Color::rgba(148, 163, 184, 38);
    /// Connecting polyline (light blue).
    pub const POLYLINE: Color = Color::rgb(0x93, 0xc5, 0xfd);
    /// Point markers (amber).
    pub const MARKER: Color = Color::rgb(0xfb, 0xbf, 0x24);
}

/// Abstract 2D drawing context.
///
/// The minimal primitive set the renderer needs, modeled on the HTML canvas
/// path API: rectangles, a current path built from move/line segments and
/// arcs, and fill/stroke with the current style. Implementations interpret
/// the calls however they like (pixels, vectors, terminal cells, a log).
pub trait Surface {
    /// Erase a rectangle.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Fill a rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Start a new path.
    fn begin_path(&mut self);

    /// Move the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a line segment to the path.
    fn line_to(&mut self, x: f64, y: f64);

    /// Add a circular arc to the path. Angles are in radians.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    /// Stroke the current path with the current stroke color and width.
    fn stroke(&mut self);

    /// Fill the current path with the current fill color.
    fn fill(&mut self);

    /// Set the fill color for subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Set the stroke color for subsequent strokes.
    fn set_stroke_color(&mut self, color: Color);

    /// Set the stroke width for subsequent strokes.
    fn set_line_width(&mut self, width: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn theme_constants() {
        assert_eq!(Color::BACKGROUND, Color::rgb(11, 18, 32));
        assert_eq!(Color::GRID_LINE.a, 38);
        assert_eq!(Color::POLYLINE, Color::rgb(147, 197, 253));
        assert_eq!(Color::MARKER, Color::rgb(251, 191, 36));
    }
}

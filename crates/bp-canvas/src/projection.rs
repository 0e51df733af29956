use bp_types::Point;

/// Margin kept clear on every side of the surface, in surface units.
pub const PADDING: f64 = 20.0;

/// Floor for the available drawing area, so tiny surfaces still project.
pub const MIN_DRAW_SIZE: f64 = 10.0;

/// Floor for the data-space span in each axis. Keeps the scale finite when
/// all points share a coordinate.
pub const SPAN_EPSILON: f64 = 1e-4;

/// Uniform scale-and-translate mapping from data space into a surface.
///
/// Computed once per point set by [`Projection::fit`]; applying
/// [`Projection::map`] to the same input always yields the same output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    min_x: f64,
    min_y: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    /// Fit a point set into a `width` x `height` surface.
    ///
    /// The bounding box of the (normalized) points is scaled uniformly to
    /// fill the padded drawing area and centered within it. An empty set is
    /// treated as the degenerate box at the origin; a degenerate span is
    /// floored at [`SPAN_EPSILON`] so the scale stays finite.
    pub fn fit(points: &[Point], width: f64, height: f64) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for point in points {
            let p = point.normalized();
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if !min_x.is_finite() {
            min_x = 0.0;
            min_y = 0.0;
            max_x = 0.0;
            max_y = 0.0;
        }

        let span_x = SPAN_EPSILON.max(max_x - min_x);
        let span_y = SPAN_EPSILON.max(max_y - min_y);

        let avail_w = MIN_DRAW_SIZE.max(width - PADDING * 2.0);
        let avail_h = MIN_DRAW_SIZE.max(height - PADDING * 2.0);

        let scale = (avail_w / span_x).min(avail_h / span_y);
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };

        let drawn_w = span_x * scale;
        let drawn_h = span_y * scale;
        let offset_x = PADDING + ((avail_w - drawn_w) / 2.0).max(0.0);
        let offset_y = PADDING + ((avail_h - drawn_h) / 2.0).max(0.0);

        Self {
            min_x,
            min_y,
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Map a data-space point to surface coordinates.
    ///
    /// Non-finite components degrade to `0` rather than poisoning the
    /// whole render.
    pub fn map(&self, point: Point) -> (f64, f64) {
        let p = point.normalized();
        (
            self.offset_x + (p.x - self.min_x) * self.scale,
            self.offset_y + (p.y - self.min_y) * self.scale,
        )
    }

    /// The uniform scale factor applied to the point set.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

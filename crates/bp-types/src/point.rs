use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::TypeError;

/// A 2D coordinate in blueprint data space.
///
/// Points travel over the wire as `{"x": .., "y": ..}` objects, but user
/// input and older backends also produce `[x, y]` pairs and objects with
/// missing or non-numeric components. Deserialization accepts all of these;
/// anything that cannot be read as a finite number becomes `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from raw coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coerce non-finite components to `0`.
    ///
    /// Deserialization already guarantees finite values; this covers points
    /// constructed in code (e.g. from arithmetic that produced NaN).
    pub fn normalized(self) -> Self {
        Self {
            x: if self.x.is_finite() { self.x } else { 0.0 },
            y: if self.y.is_finite() { self.y } else { 0.0 },
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Wire-level shapes a point may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Object {
        #[serde(default, alias = "X")]
        x: Value,
        #[serde(default, alias = "Y")]
        y: Value,
    },
    Pair(Vec<Value>),
    Other(Value),
}

impl RawPoint {
    fn into_point(self) -> Point {
        match self {
            RawPoint::Object { x, y } => Point::new(coerce(&x), coerce(&y)),
            RawPoint::Pair(values) => Point::new(
                values.first().map_or(0.0, coerce),
                values.get(1).map_or(0.0, coerce),
            ),
            RawPoint::Other(_) => Point::default(),
        }
    }
}

/// Read a JSON value as a finite number, defaulting to `0`.
///
/// Numeric strings are accepted because the original wire format tolerated
/// them; everything else (null, booleans, nested structures) is `0`.
fn coerce(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(RawPoint::deserialize(deserializer)?.into_point())
    }
}

/// Parse a user-supplied JSON point sequence.
///
/// This is the form-input validation boundary: unparsable text is a
/// [`TypeError::InvalidPoints`], while individually malformed points degrade
/// to `(0, 0)` rather than failing the whole sequence.
pub fn parse_points(text: &str) -> Result<Vec<Point>, TypeError> {
    let points: Vec<Point> =
        serde_json::from_str(text).map_err(|e| TypeError::InvalidPoints(e.to_string()))?;
    Ok(points.into_iter().map(Point::normalized).collect())
}

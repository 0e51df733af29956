use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A named, author-owned point sequence rendered as a connected drawing.
///
/// Identity is the `(author, name)` pair. Uniqueness of that pair is
/// enforced by the data service, not here. Stored instances are replaced
/// wholesale on update, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub author: String,
    pub name: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Blueprint {
    /// Create a blueprint from its identity and point sequence.
    pub fn new(
        author: impl Into<String>,
        name: impl Into<String>,
        points: Vec<Point>,
    ) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            points,
        }
    }

    /// Returns `true` if this blueprint has the given identity.
    pub fn matches(&self, author: &str, name: &str) -> bool {
        self.author == author && self.name == name
    }

    /// Number of points in the drawing.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl std::fmt::Display for Blueprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.author, self.name)
    }
}

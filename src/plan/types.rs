//! Core model types for the floor-plan editor
//!
//! Rooms, wall openings and furniture all live in room space: centimeters,
//! y growing downward (screen convention). These types serialize directly
//! into both the render snapshot and the layout file.

use serde::{Deserialize, Serialize};

/// A 2D point in room-space centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Door or window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// A wall opening, parametrized as a sub-interval of its wall
///
/// `offset` is measured in cm from the wall's start vertex to the near edge
/// of the opening. `flip` and `side` only affect doors: `flip` selects which
/// end carries the hinge, `side` which side of the wall the swing arc sweeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    /// Index of the wall's start vertex
    pub wall: usize,
    pub offset: f64,
    pub width: f64,
    /// Hinge end: false = start endpoint of the sub-segment, true = far end
    #[serde(default)]
    pub flip: bool,
    /// +1 or -1
    #[serde(default = "default_side")]
    pub side: i8,
}

fn default_side() -> i8 {
    1
}

/// A furniture item: a rotated rectangle
///
/// `(x, y)` is the top-left corner of the *unrotated* bounding box, not the
/// center. The rectangle rotates about the center of that box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Furniture {
    pub id: String,
    pub category: String,
    pub name: String,
    pub width: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    /// Degrees, clockwise on screen. Normal interaction produces multiples
    /// of 90 but imported values may be arbitrary.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Furniture {
    /// Center of rotation (center of the unrotated bounding box)
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.depth / 2.0)
    }
}

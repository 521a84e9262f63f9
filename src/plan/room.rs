//! Room polygon model and wall derivation
//!
//! The room is an ordered vertex list. While open it is the polyline being
//! drawn; once closed the sequence is implicitly cyclic. Walls are always
//! derived on demand from the vertices; there is no cached wall list that
//! could go stale across a vertex edit.

use crate::plan::types::Point;
use serde::Serialize;

/// A derived wall: the segment from vertex `index` to the next vertex
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Wall {
    pub index: usize,
    pub a: Point,
    pub b: Point,
}

impl Wall {
    pub fn length(&self) -> f64 {
        self.a.distance_to(self.b)
    }

    /// Unit direction from `a` to `b`; `None` for a zero-length wall
    pub fn direction(&self) -> Option<(f64, f64)> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(((self.b.x - self.a.x) / len, (self.b.y - self.a.y) / len))
    }

    /// Unit normal, the wall direction rotated a quarter turn
    pub fn normal(&self) -> Option<(f64, f64)> {
        self.direction().map(|(ux, uy)| (-uy, ux))
    }

    /// Point at a distance in cm from the wall's start vertex
    pub fn point_at(&self, t: f64) -> Point {
        match self.direction() {
            Some((ux, uy)) => Point::new(self.a.x + ux * t, self.a.y + uy * t),
            None => self.a,
        }
    }

    /// Signed distance of `p`'s projection along the wall direction, in cm
    /// from the start vertex (unclamped)
    pub fn project(&self, p: Point) -> f64 {
        match self.direction() {
            Some((ux, uy)) => (p.x - self.a.x) * ux + (p.y - self.a.y) * uy,
            None => 0.0,
        }
    }
}

/// The room polygon: open polyline while drawing, cyclic once closed
#[derive(Debug, Clone, Default, Serialize)]
pub struct Room {
    pub vertices: Vec<Point>,
    pub closed: bool,
}

impl Room {
    /// Append a vertex; ignored once the room is closed
    pub fn push_vertex(&mut self, p: Point) {
        if !self.closed {
            self.vertices.push(p);
        }
    }

    /// Remove the last vertex; ignored once the room is closed
    pub fn pop_vertex(&mut self) -> Option<Point> {
        if self.closed {
            return None;
        }
        self.vertices.pop()
    }

    /// Transition open -> closed. Requires at least 3 vertices; the
    /// screen-space close gesture itself is validated by the caller.
    pub fn close(&mut self) -> bool {
        if self.closed || self.vertices.len() < 3 {
            return false;
        }
        self.closed = true;
        true
    }

    /// Overwrite a vertex in place. Unrestricted: no self-intersection
    /// check, and derived walls pick the change up immediately.
    pub fn move_vertex(&mut self, index: usize, p: Point) {
        if let Some(v) = self.vertices.get_mut(index) {
            *v = p;
        }
    }

    /// Derived walls: N cyclic segments when closed, N-1 when still open
    pub fn walls(&self) -> Vec<Wall> {
        let n = self.vertices.len();
        if n < 2 {
            return Vec::new();
        }
        let count = if self.closed { n } else { n - 1 };
        (0..count)
            .map(|i| Wall {
                index: i,
                a: self.vertices[i],
                b: self.vertices[(i + 1) % n],
            })
            .collect()
    }

    /// The wall starting at vertex `index`, if it exists
    pub fn wall(&self, index: usize) -> Option<Wall> {
        self.walls().into_iter().find(|w| w.index == index)
    }

    /// Mean of the vertices
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Some(Point::new(sx / n, sy / n))
    }

    /// Axis-aligned bounding box of the vertices
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Some((min, max))
    }

    /// Ray-casting point-in-polygon test over the vertex list
    pub fn contains(&self, p: Point) -> bool {
        let verts = &self.vertices;
        let mut inside = false;
        let mut j = verts.len().wrapping_sub(1);
        for i in 0..verts.len() {
            let (xi, yi) = (verts[i].x, verts[i].y);
            let (xj, yj) = (verts[j].x, verts[j].y);
            if (yi > p.y) != (yj > p.y) && p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Result of projecting a point onto the nearest wall
#[derive(Debug, Clone, Copy)]
pub struct WallHit {
    pub wall: usize,
    /// cm along the wall from its start vertex, clamped to the segment
    pub offset: f64,
    /// Euclidean distance from the point to the clamped projection, in cm
    pub distance: f64,
}

/// Find the wall closest to a room-space point. Each wall is a candidate
/// via its clamped-parameter projection; zero-length walls are skipped.
pub fn closest_wall(room: &Room, p: Point) -> Option<WallHit> {
    let mut best: Option<WallHit> = None;
    for wall in room.walls() {
        let dx = wall.b.x - wall.a.x;
        let dy = wall.b.y - wall.a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            continue;
        }
        let t = (((p.x - wall.a.x) * dx + (p.y - wall.a.y) * dy) / len_sq).clamp(0.0, 1.0);
        let nx = wall.a.x + t * dx - p.x;
        let ny = wall.a.y + t * dy - p.y;
        let dist = (nx * nx + ny * ny).sqrt();
        if best.map_or(true, |b| dist < b.distance) {
            best = Some(WallHit {
                wall: wall.index,
                offset: t * len_sq.sqrt(),
                distance: dist,
            });
        }
    }
    best
}

//! Rotated-rectangle overlap via the separating axis theorem
//!
//! Furniture items are convex quadrilaterals, so two items overlap exactly
//! when no edge-normal axis separates their corner projections. Touching
//! edges count as non-overlapping.

use crate::plan::types::{Furniture, Point};

/// The 4 world-space corners of a furniture item, rotated about its center
pub fn corners(item: &Furniture) -> [Point; 4] {
    let c = item.center();
    let hw = item.width / 2.0;
    let hd = item.depth / 2.0;
    let rad = item.rotation.to_radians();
    let (sin, cos) = rad.sin_cos();
    let local = [(-hw, -hd), (hw, -hd), (hw, hd), (-hw, hd)];
    local.map(|(lx, ly)| Point::new(c.x + lx * cos - ly * sin, c.y + lx * sin + ly * cos))
}

/// Edge-normal axes of a quadrilateral, unit length
fn axes(corners: &[Point; 4]) -> [(f64, f64); 4] {
    let mut out = [(0.0, 0.0); 4];
    for i in 0..4 {
        let j = (i + 1) % 4;
        let dx = corners[j].x - corners[i].x;
        let dy = corners[j].y - corners[i].y;
        let len = (dx * dx + dy * dy).sqrt();
        let len = if len == 0.0 { 1.0 } else { len };
        out[i] = (-dy / len, dx / len);
    }
    out
}

/// Projection interval of the corners onto an axis
fn project(corners: &[Point; 4], axis: (f64, f64)) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for c in corners {
        let dot = c.x * axis.0 + c.y * axis.1;
        min = min.min(dot);
        max = max.max(dot);
    }
    (min, max)
}

/// Separating axis test between two furniture items
pub fn overlap(a: &Furniture, b: &Furniture) -> bool {
    let ca = corners(a);
    let cb = corners(b);
    for axis in axes(&ca).into_iter().chain(axes(&cb)) {
        let (min_a, max_a) = project(&ca, axis);
        let (min_b, max_b) = project(&cb, axis);
        if max_a <= min_b || max_b <= min_a {
            return false;
        }
    }
    true
}

/// Does `target` overlap any other item in the list? Linear over the
/// furniture list; fine at this tool's scale (tens of items) but the
/// design's scaling ceiling.
pub fn any_overlap(furniture: &[Furniture], target: &Furniture, exclude_id: &str) -> bool {
    furniture
        .iter()
        .filter(|f| f.id != exclude_id)
        .any(|f| overlap(target, f))
}

//! Wall/opening segmentation algebra
//!
//! A wall with openings resolves into an ordered run of sub-segments
//! covering `[0, wall length]`: solid wall pieces interleaved with door and
//! window intervals. Openings are stored wall-relative, so the resolution
//! here is what ties them back to world space for rendering and hit
//! testing.

use crate::plan::room::Wall;
use crate::plan::types::{Opening, OpeningKind, Point};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// Kind of a resolved wall sub-segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Wall,
    Door,
    Window,
}

/// One resolved sub-segment of a wall, in cm from the wall's start vertex
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WallSegment {
    pub kind: SegmentKind,
    pub from: f64,
    pub to: f64,
    /// Index into the room's opening list for door/window segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<usize>,
}

/// Resolve a wall's openings into an ordered sub-segment run.
///
/// Openings are sorted by offset; ties keep insertion order (stable sort),
/// which is the deterministic tie-break for overlapping openings. Overlap
/// is not prevented here: a later opening in sort order may be clipped
/// oddly, but the output is always well-defined and covers the wall.
pub fn wall_segments(wall_len: f64, openings: &[(usize, &Opening)]) -> Vec<WallSegment> {
    let mut sorted: Vec<(usize, &Opening)> = openings.to_vec();
    sorted.sort_by(|a, b| a.1.offset.total_cmp(&b.1.offset));

    let mut segments = Vec::new();
    let mut cursor = 0.0;
    for (index, op) in sorted {
        let start = op.offset;
        let end = (op.offset + op.width).min(wall_len);
        if cursor < start {
            segments.push(WallSegment {
                kind: SegmentKind::Wall,
                from: cursor,
                to: start,
                opening: None,
            });
        }
        segments.push(WallSegment {
            kind: match op.kind {
                OpeningKind::Door => SegmentKind::Door,
                OpeningKind::Window => SegmentKind::Window,
            },
            from: start,
            to: end,
            opening: Some(index),
        });
        cursor = end;
    }
    if cursor < wall_len {
        segments.push(WallSegment {
            kind: SegmentKind::Wall,
            from: cursor,
            to: wall_len,
            opening: None,
        });
    }
    segments
}

/// Door leaf and swing arc resolved in world space
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoorGeometry {
    pub hinge: Point,
    pub tip: Point,
    /// Swing radius: the clamped sub-segment length
    pub radius: f64,
    /// Angle (radians) from hinge toward tip, i.e. the closed leaf
    pub leaf_angle: f64,
    /// End of the quarter-circle swing arc
    pub end_angle: f64,
    /// Sweep direction for the renderer's arc call
    pub counterclockwise: bool,
}

/// Resolve a door segment's hinge and swing arc.
///
/// The hinge sits at the near endpoint, or the far one when `flip` is set.
/// Flipping rotates the leaf angle by 180°, which on its own would push
/// the arc to the opposite side of the wall; the side is negated under
/// `flip` so the swept arc stays on the same physical wall side no matter
/// which end carries the hinge.
pub fn door_geometry(wall: &Wall, segment: &WallSegment, opening: &Opening) -> DoorGeometry {
    let p1 = wall.point_at(segment.from);
    let p2 = wall.point_at(segment.to);
    let (hinge, tip) = if opening.flip { (p2, p1) } else { (p1, p2) };

    let leaf_angle = (tip.y - hinge.y).atan2(tip.x - hinge.x);
    let effective_side = if opening.flip {
        -opening.side
    } else {
        opening.side
    };
    DoorGeometry {
        hinge,
        tip,
        radius: segment.to - segment.from,
        leaf_angle,
        end_angle: leaf_angle + f64::from(effective_side) * FRAC_PI_2,
        counterclockwise: effective_side < 0,
    }
}

/// Clamp an opening offset so the opening stays on its wall. Applied by
/// interactive edits and drags; initial placement deliberately does not
/// clamp.
pub fn clamp_offset(offset: f64, width: f64, wall_len: f64) -> f64 {
    offset.min(wall_len - width).max(0.0)
}

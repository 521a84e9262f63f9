//! Snapshot handler: the read-only frame description the client renders
//!
//! Everything the renderer needs in one tree: the room outline, each wall
//! resolved into its sub-segment run with door swing geometry, furniture
//! with world-space corners and overlap flags, the view transform, grid
//! settings and the current selection. Producing it is cheap enough to
//! re-run on every move event.

use crate::editor::protocol::Response;
use crate::editor::state::{EditorState, Selection};
use crate::plan::{
    any_overlap, category_color, corners, door_geometry, wall_segments, DoorGeometry, Furniture,
    Opening, Point, SegmentKind, WallSegment,
};
use serde::Serialize;

#[derive(Serialize)]
struct SegmentSnapshot {
    #[serde(flatten)]
    segment: WallSegment,
    /// World-space endpoints of the sub-segment
    start: Point,
    end: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    door: Option<DoorGeometry>,
}

#[derive(Serialize)]
struct WallSnapshot {
    index: usize,
    a: Point,
    b: Point,
    length: f64,
    direction: [f64; 2],
    normal: [f64; 2],
    segments: Vec<SegmentSnapshot>,
}

#[derive(Serialize)]
struct FurnitureSnapshot {
    #[serde(flatten)]
    item: Furniture,
    corners: [Point; 4],
    overlapping: bool,
    selected: bool,
    /// Custom color, or the category color when none is set
    #[serde(rename = "displayColor")]
    display_color: String,
}

fn wall_snapshots(state: &EditorState) -> Vec<WallSnapshot> {
    state
        .room
        .walls()
        .into_iter()
        .map(|wall| {
            let on_wall: Vec<(usize, &Opening)> = state
                .openings
                .iter()
                .enumerate()
                .filter(|(_, op)| op.wall == wall.index)
                .collect();
            let segments = wall_segments(wall.length(), &on_wall)
                .into_iter()
                .map(|segment| {
                    let door = match segment.kind {
                        SegmentKind::Door => segment
                            .opening
                            .and_then(|i| state.openings.get(i))
                            .map(|op| door_geometry(&wall, &segment, op)),
                        _ => None,
                    };
                    SegmentSnapshot {
                        start: wall.point_at(segment.from),
                        end: wall.point_at(segment.to),
                        door,
                        segment,
                    }
                })
                .collect();
            let (ux, uy) = wall.direction().unwrap_or((0.0, 0.0));
            let (nx, ny) = wall.normal().unwrap_or((0.0, 0.0));
            WallSnapshot {
                index: wall.index,
                a: wall.a,
                b: wall.b,
                length: wall.length(),
                direction: [ux, uy],
                normal: [nx, ny],
                segments,
            }
        })
        .collect()
}

fn furniture_snapshots(state: &EditorState) -> Vec<FurnitureSnapshot> {
    state
        .furniture
        .iter()
        .map(|item| FurnitureSnapshot {
            corners: corners(item),
            overlapping: any_overlap(&state.furniture, item, &item.id),
            selected: state.selection == Selection::Furniture(item.id.clone()),
            display_color: item
                .color
                .clone()
                .unwrap_or_else(|| category_color(&item.category).to_string()),
            item: item.clone(),
        })
        .collect()
}

/// Handle GetSnapshot - assemble the full frame description
pub fn handle_get_snapshot(state: &EditorState, id: Option<serde_json::Value>) -> Response {
    let walls = if state.room.closed {
        wall_snapshots(state)
    } else {
        Vec::new()
    };

    let result = serde_json::json!({
        "room": {
            "vertices": state.room.vertices,
            "closed": state.room.closed,
        },
        "walls": walls,
        "openings": state.openings,
        "furniture": furniture_snapshots(state),
        "view": state.view,
        "grid": state.grid,
        "mode": state.mode,
        "selection": state.selection,
    });
    Response::success(id, result)
}

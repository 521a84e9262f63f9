//! Point-to-entity hit testing
//!
//! All pick radii are screen pixels converted to room cm at the current
//! zoom, so picking feels the same at any zoom level. Furniture goes
//! through the R-tree broad phase plus an exact rotated-rectangle narrow
//! phase; vertices, handles and openings are linear scans over small lists.

use crate::editor::state::{EditorState, Mode, ResizeHandle};
use crate::plan::{Furniture, Point};
use serde::Serialize;

pub const VERTEX_TOLERANCE_PX: f64 = 10.0;
pub const HANDLE_TOLERANCE_PX: f64 = 15.0;
pub const OPENING_TOLERANCE_PX: f64 = 30.0;

/// Cursor hint the client applies after each pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CursorKind {
    #[serde(rename = "cursor-default")]
    Default,
    #[serde(rename = "cursor-crosshair")]
    Crosshair,
    #[serde(rename = "cursor-move")]
    Move,
    #[serde(rename = "cursor-grabbing")]
    Grabbing,
    #[serde(rename = "cursor-ew-resize")]
    EwResize,
    #[serde(rename = "cursor-ns-resize")]
    NsResize,
}

/// Pointer position expressed in the item's local (unrotated) frame,
/// relative to the center
fn to_local(item: &Furniture, p: Point) -> (f64, f64) {
    let c = item.center();
    let dx = p.x - c.x;
    let dy = p.y - c.y;
    let rad = -item.rotation.to_radians();
    let (sin, cos) = rad.sin_cos();
    (dx * cos - dy * sin, dx * sin + dy * cos)
}

/// Exact containment test against the rotated rectangle
pub fn point_in_furniture(item: &Furniture, p: Point) -> bool {
    let (lx, ly) = to_local(item, p);
    lx.abs() <= item.width / 2.0 && ly.abs() <= item.depth / 2.0
}

/// Topmost furniture item under a room-space point, by list order
pub fn furniture_at(state: &EditorState, p: Point) -> Option<String> {
    let tree = state.spatial_index.as_ref()?;
    tree.locate_all_at_point(&[p.x, p.y])
        .filter(|entry| {
            state
                .furniture_by_id(&entry.id)
                .is_some_and(|item| point_in_furniture(item, p))
        })
        .max_by_key(|entry| entry.order)
        .map(|entry| entry.id.clone())
}

/// Room vertex under a room-space point, within ~10 screen px
pub fn vertex_at(state: &EditorState, p: Point) -> Option<usize> {
    let tolerance = state.view.px_to_cm(VERTEX_TOLERANCE_PX);
    state
        .room
        .vertices
        .iter()
        .position(|v| v.distance_to(p) < tolerance)
}

/// Resize handle of the *selected* furniture item under a room-space
/// point. Handles sit at the edge midpoints of the local frame.
pub fn resize_handle_at(state: &EditorState, p: Point) -> Option<ResizeHandle> {
    let item = state.selected_furniture()?;
    let tolerance = state.view.px_to_cm(HANDLE_TOLERANCE_PX);
    let (lx, ly) = to_local(item, p);
    let hw = item.width / 2.0;
    let hd = item.depth / 2.0;

    let handles = [
        (ResizeHandle::East, hw, 0.0),
        (ResizeHandle::West, -hw, 0.0),
        (ResizeHandle::South, 0.0, hd),
        (ResizeHandle::North, 0.0, -hd),
    ];
    handles
        .into_iter()
        .find(|(_, hx, hy)| ((lx - hx).powi(2) + (ly - hy).powi(2)).sqrt() < tolerance)
        .map(|(handle, _, _)| handle)
}

/// Opening under a room-space point: within the opening's along-wall span
/// (widened by the tolerance) and close to the wall line
pub fn opening_at(state: &EditorState, p: Point) -> Option<usize> {
    let tolerance = state.view.px_to_cm(OPENING_TOLERANCE_PX);
    for (index, op) in state.openings.iter().enumerate() {
        let Some(wall) = state.room.wall(op.wall) else {
            continue;
        };
        if wall.direction().is_none() {
            continue;
        }
        let t = wall.project(p);
        if t < op.offset - tolerance || t > op.offset + op.width + tolerance {
            continue;
        }
        if wall.point_at(t).distance_to(p) < tolerance {
            return Some(index);
        }
    }
    None
}

/// Resize cursor orientation for a handle, given the item's rotation: an
/// east/west handle reads horizontal until the item turns past 45°
fn resize_cursor(state: &EditorState, handle: ResizeHandle) -> CursorKind {
    let rotation = state
        .selected_furniture()
        .map(|f| f.rotation.to_radians())
        .unwrap_or(0.0);
    let cos = rotation.cos().abs();
    let sin = rotation.sin().abs();
    let horizontal = match handle {
        ResizeHandle::East | ResizeHandle::West => cos >= sin,
        ResizeHandle::North | ResizeHandle::South => sin >= cos,
    };
    if horizontal {
        CursorKind::EwResize
    } else {
        CursorKind::NsResize
    }
}

/// Cursor hint for an idle pointer at a room-space point
pub fn cursor_at(state: &EditorState, p: Point) -> CursorKind {
    if !state.room.closed {
        return match state.mode {
            Mode::Draw | Mode::PlaceOpening => CursorKind::Crosshair,
            _ => CursorKind::Default,
        };
    }
    if let Some(handle) = resize_handle_at(state, p) {
        return resize_cursor(state, handle);
    }
    if vertex_at(state, p).is_some() {
        return CursorKind::Move;
    }
    if furniture_at(state, p).is_some() || opening_at(state, p).is_some() {
        return CursorKind::Move;
    }
    CursorKind::Default
}

//! Pointer handlers: PointerDown, PointerMove, PointerUp
//!
//! The interaction engine. Pointer-down picks at most one gesture by
//! priority: room vertex, resize handle of the selected item, furniture
//! body, opening body, then panning. Pointer-up ends whatever is active
//! unconditionally, keeping the state of the last processed move.

use crate::editor::hit::{self, CursorKind};
use crate::editor::protocol::Response;
use crate::editor::state::{EditorState, Interaction, Mode, ResizeHandle, ResizeStart, Selection};
use crate::editor::util::parse_params;
use crate::plan::{clamp_offset, closest_wall, Opening, Point};
use serde::Deserialize;

/// Screen-px radius of the close-the-loop gesture around vertex 0
pub const CLOSE_RADIUS_PX: f64 = 14.0;
/// Minimum furniture dimension reachable by dragging a resize handle, cm
pub const MIN_RESIZE_SIZE: f64 = 20.0;
/// Screen-px reach when clicking near a wall to place an opening
pub const WALL_PLACE_TOLERANCE_PX: f64 = 30.0;

#[derive(Deserialize)]
struct PointerParams {
    /// Screen px
    x: f64,
    y: f64,
}

fn ok_with_cursor(id: Option<serde_json::Value>, cursor: CursorKind) -> Response {
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "cursor": cursor }),
    )
}

/// Handle PointerDown - start at most one interaction
pub fn handle_pointer_down(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let p: PointerParams = match parse_params(id.clone(), params, "{x, y}") {
        Ok(p) => p,
        Err(e) => return e,
    };
    let pos = Point::new(p.x, p.y);
    let room_pos = state.view.screen_to_room(pos);

    // Drawing mode: close the loop near vertex 0, else append a vertex
    if !state.room.closed && state.mode == Mode::Draw {
        if state.room.vertices.len() >= 3 {
            // The close gesture is evaluated in screen space so the pick
            // radius is zoom-independent
            let first = state.view.room_to_screen(state.room.vertices[0]);
            if first.distance_to(pos) < CLOSE_RADIUS_PX {
                state.room.close();
                state.set_mode(Mode::Normal);
                eprintln!(
                    "[Plan Server] Room closed with {} vertices",
                    state.room.vertices.len()
                );
                return Response::success(
                    id,
                    serde_json::json!({ "status": "ok", "closed": true }),
                );
            }
        }
        let snapped = Point::new(state.grid.snap(room_pos.x), state.grid.snap(room_pos.y));
        state.room.push_vertex(snapped);
        return ok_with_cursor(id, CursorKind::Crosshair);
    }

    // Placement mode: drag an existing opening, or drop a new one on the
    // closest wall within reach
    if state.room.closed && state.mode == Mode::PlaceOpening {
        if let Some(index) = hit::opening_at(state, room_pos) {
            start_opening_drag(state, index, room_pos);
            return ok_with_cursor(id, CursorKind::Grabbing);
        }
        if let Some(wall_hit) = closest_wall(&state.room, room_pos) {
            if wall_hit.distance < state.view.px_to_cm(WALL_PLACE_TOLERANCE_PX) {
                // Center the opening on the click. The offset is snapped but
                // deliberately not clamped at creation; only interactive
                // edits clamp.
                let offset = state.grid.snap(wall_hit.offset - state.draft.width / 2.0);
                state.openings.push(Opening {
                    kind: state.draft.kind,
                    wall: wall_hit.wall,
                    offset,
                    width: state.draft.width,
                    flip: false,
                    side: 1,
                });
                state.set_mode(Mode::Normal);
                eprintln!(
                    "[Plan Server] Placed {:?} on wall {} at offset {:.1}",
                    state.draft.kind, wall_hit.wall, offset
                );
                return Response::success(
                    id,
                    serde_json::json!({
                        "status": "ok",
                        "placed": state.openings.len() - 1
                    }),
                );
            }
        }
        return ok_with_cursor(id, CursorKind::Crosshair);
    }

    if state.room.closed {
        // Room vertices first so the shape is always adjustable
        if let Some(index) = hit::vertex_at(state, room_pos) {
            state.deselect();
            state.interaction = Interaction::DragVertex { index };
            return ok_with_cursor(id, CursorKind::Grabbing);
        }

        // Resize handles before the furniture body
        if let Some(handle) = hit::resize_handle_at(state, room_pos) {
            if let Some(item) = state.selected_furniture() {
                let start = ResizeStart {
                    pointer: room_pos,
                    width: item.width,
                    depth: item.depth,
                    x: item.x,
                    y: item.y,
                    rotation: item.rotation,
                };
                state.interaction = Interaction::ResizeFurniture { handle, start };
                return ok_with_cursor(id, CursorKind::Grabbing);
            }
        }

        if let Some(item_id) = hit::furniture_at(state, room_pos) {
            let item = state.furniture_by_id(&item_id);
            let (grab_x, grab_y) = item
                .map(|f| (room_pos.x - f.x, room_pos.y - f.y))
                .unwrap_or((0.0, 0.0));
            state.select_furniture(item_id.clone());
            state.interaction = Interaction::DragFurniture {
                id: item_id,
                grab_x,
                grab_y,
            };
            return ok_with_cursor(id, CursorKind::Grabbing);
        }

        if let Some(index) = hit::opening_at(state, room_pos) {
            if state.mode == Mode::Normal {
                state.select_opening(index);
            }
            start_opening_drag(state, index, room_pos);
            return ok_with_cursor(id, CursorKind::Grabbing);
        }

        // Empty space: drop the selection and fall through to panning
        state.deselect();
    }

    state.interaction = Interaction::Pan { last: pos };
    ok_with_cursor(id, CursorKind::Grabbing)
}

fn start_opening_drag(state: &mut EditorState, index: usize, room_pos: Point) {
    let Some(op) = state.openings.get(index) else {
        return;
    };
    let Some(wall) = state.room.wall(op.wall) else {
        return;
    };
    if wall.direction().is_none() {
        return;
    }
    let t = wall.project(room_pos);
    state.interaction = Interaction::DragOpening {
        index,
        grab_delta: t - op.offset,
    };
}

/// Handle PointerMove - advance the active interaction, or just report a
/// cursor hint while idle
pub fn handle_pointer_move(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let p: PointerParams = match parse_params(id.clone(), params, "{x, y}") {
        Ok(p) => p,
        Err(e) => return e,
    };
    let pos = Point::new(p.x, p.y);
    let room_pos = state.view.screen_to_room(pos);

    match state.interaction.clone() {
        Interaction::DragVertex { index } => {
            let snapped = Point::new(state.grid.snap(room_pos.x), state.grid.snap(room_pos.y));
            state.room.move_vertex(index, snapped);
            ok_with_cursor(id, CursorKind::Grabbing)
        }
        Interaction::ResizeFurniture { handle, start } => {
            apply_resize(state, handle, &start, room_pos);
            ok_with_cursor(id, CursorKind::Grabbing)
        }
        Interaction::DragFurniture { id: item_id, grab_x, grab_y } => {
            let snapped_x = state.grid.snap(room_pos.x - grab_x);
            let snapped_y = state.grid.snap(room_pos.y - grab_y);
            if let Some(item) = state.furniture_by_id_mut(&item_id) {
                // Snapping the top-left corner also pulls any off-grid
                // position left behind by a resize back onto the grid
                item.x = snapped_x;
                item.y = snapped_y;
            }
            ok_with_cursor(id, CursorKind::Grabbing)
        }
        Interaction::DragOpening { index, grab_delta } => {
            drag_opening(state, index, grab_delta, room_pos);
            ok_with_cursor(id, CursorKind::Grabbing)
        }
        Interaction::Pan { last } => {
            state.view.pan_x += pos.x - last.x;
            state.view.pan_y += pos.y - last.y;
            state.interaction = Interaction::Pan { last: pos };
            ok_with_cursor(id, CursorKind::Grabbing)
        }
        Interaction::Idle => {
            let cursor = hit::cursor_at(state, room_pos);
            ok_with_cursor(id, cursor)
        }
    }
}

/// Anchored-edge resize under arbitrary rotation.
///
/// The pointer delta is rotated into the item's local frame; the dragged
/// edge follows it while the opposite edge stays fixed in world space.
/// Because `(x, y)` anchors the *unrotated* box but the item rotates about
/// its center, a size change shifts the center, and `(x, y)` has to move to
/// compensate. The closed forms below keep the anchored edge stationary
/// for any rotation; the sign conventions are load-bearing.
fn apply_resize(state: &mut EditorState, handle: ResizeHandle, start: &ResizeStart, room_pos: Point) {
    let dx = room_pos.x - start.pointer.x;
    let dy = room_pos.y - start.pointer.y;

    // Delta in the local frame: rotate by -rotation
    let rad = -start.rotation.to_radians();
    let (sin_r, cos_r) = rad.sin_cos();
    let local_dx = dx * cos_r - dy * sin_r;
    let local_dy = dx * sin_r + dy * cos_r;

    let grid = state.grid.clone();
    let mut width = start.width;
    let mut depth = start.depth;
    let mut x = start.x;
    let mut y = start.y;

    match handle {
        ResizeHandle::East => {
            // West edge anchored
            width = grid.snap(start.width + local_dx).max(MIN_RESIZE_SIZE);
            let dw = width - start.width;
            x = start.x + dw / 2.0 * (cos_r - 1.0);
            y = start.y - dw / 2.0 * sin_r;
        }
        ResizeHandle::West => {
            // East edge anchored
            width = grid.snap(start.width - local_dx).max(MIN_RESIZE_SIZE);
            let dw = width - start.width;
            x = start.x - dw / 2.0 * (1.0 + cos_r);
            y = start.y + dw / 2.0 * sin_r;
        }
        ResizeHandle::South => {
            // North edge anchored
            depth = grid.snap(start.depth + local_dy).max(MIN_RESIZE_SIZE);
            let dd = depth - start.depth;
            x = start.x + dd / 2.0 * sin_r;
            y = start.y + dd / 2.0 * (cos_r - 1.0);
        }
        ResizeHandle::North => {
            // South edge anchored
            depth = grid.snap(start.depth - local_dy).max(MIN_RESIZE_SIZE);
            let dd = depth - start.depth;
            x = start.x - dd / 2.0 * sin_r;
            y = start.y - dd / 2.0 * (1.0 + cos_r);
        }
    }

    if let Some(item) = state.selected_furniture_mut() {
        item.width = width;
        item.depth = depth;
        item.x = x;
        item.y = y;
    }
}

fn drag_opening(state: &mut EditorState, index: usize, grab_delta: f64, room_pos: Point) {
    let Some(op) = state.openings.get(index) else {
        return;
    };
    let Some(wall) = state.room.wall(op.wall) else {
        return;
    };
    if wall.direction().is_none() {
        return;
    }
    let t = wall.project(room_pos);
    let snapped = state.grid.snap(t - grab_delta);
    let offset = clamp_offset(snapped, op.width, wall.length());
    state.openings[index].offset = offset;
}

/// Handle PointerUp - end the active interaction unconditionally. Whatever
/// the last move produced is kept; overlapping furniture is flagged in the
/// snapshot, never reverted.
pub fn handle_pointer_up(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    let was_active = !matches!(state.interaction, Interaction::Idle);
    state.interaction = Interaction::Idle;
    if was_active {
        // Furniture may have moved or resized during the gesture
        state.rebuild_spatial_index();
    }

    let cursor = if state.room.closed {
        match state.selection {
            Selection::None => CursorKind::Default,
            _ => CursorKind::Move,
        }
    } else {
        CursorKind::Crosshair
    };
    ok_with_cursor(id, cursor)
}

//! Opening handlers: ArmOpening, UpdateOpening, FlipDoor, SwingDoor

use crate::editor::protocol::{error_codes, Response};
use crate::editor::state::{EditorState, Mode};
use crate::editor::util::parse_params;
use crate::plan::{clamp_offset, OpeningKind};
use serde::Deserialize;

/// Default opening width staged for placement, cm
pub const DEFAULT_OPENING_WIDTH: f64 = 90.0;

/// Handle ArmOpening - stage a door/window for placement and toggle
/// placement mode. Arming the kind that is already armed disarms it.
pub fn handle_arm_opening(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        kind: OpeningKind,
        #[serde(default)]
        width: Option<f64>,
    }

    let p: Params = match parse_params(id.clone(), params, "{kind, width?}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    if !state.room.closed {
        return Response::error(
            id,
            error_codes::ROOM_NOT_CLOSED,
            "Draw and close a room first".to_string(),
        );
    }

    if let Some(width) = p.width {
        state.draft.width = if width.is_finite() && width > 0.0 {
            width
        } else {
            DEFAULT_OPENING_WIDTH
        };
    }

    let armed = !(state.mode == Mode::PlaceOpening && state.draft.kind == p.kind);
    state.draft.kind = p.kind;
    state.set_mode(if armed { Mode::PlaceOpening } else { Mode::Normal });
    Response::success(id, serde_json::json!({ "status": "ok", "armed": armed }))
}

/// Handle UpdateOpening - sidebar edits on the selected opening. The
/// offset clamps so the opening stays on its wall; the width is set as
/// given (only offsets clamp).
pub fn handle_update_opening(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        #[serde(default, rename = "type")]
        kind: Option<OpeningKind>,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        offset: Option<f64>,
    }

    let p: Params = match parse_params(id.clone(), params, "{type?, width?, offset?}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let Some((index, op)) = state.selected_opening() else {
        return Response::success(id, serde_json::json!({ "status": "ok", "applied": false }));
    };
    let wall_len = state.room.wall(op.wall).map(|w| w.length());
    let op = &mut state.openings[index];

    if let Some(kind) = p.kind {
        op.kind = kind;
    }
    if let Some(width) = p.width {
        op.width = if width.is_finite() && width > 0.0 {
            width
        } else {
            DEFAULT_OPENING_WIDTH
        };
    }
    if let Some(offset) = p.offset {
        if let Some(len) = wall_len {
            let offset = if offset.is_finite() { offset } else { 0.0 };
            op.offset = clamp_offset(offset, op.width, len);
        }
    }
    Response::success(id, serde_json::json!({ "status": "ok", "applied": true }))
}

/// Handle FlipDoor - move the hinge to the other end of the opening
pub fn handle_flip_door(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    let mut applied = false;
    if let Some((index, _)) = state.selected_opening() {
        let op = &mut state.openings[index];
        op.flip = !op.flip;
        applied = true;
    }
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "applied": applied }),
    )
}

/// Handle SwingDoor - sweep the arc to the other side of the wall
pub fn handle_swing_door(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    let mut applied = false;
    if let Some((index, _)) = state.selected_opening() {
        let op = &mut state.openings[index];
        op.side = -op.side;
        applied = true;
    }
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "applied": applied }),
    )
}

//! Room handlers: SetMode, MakeRect, UndoVertex, ClearRoom

use crate::editor::protocol::Response;
use crate::editor::state::{EditorState, Interaction, Mode};
use crate::editor::util::parse_params;
use crate::plan::{Point, Room};
use serde::Deserialize;

/// Handle SetMode - sidebar tab changes. Draw is ignored once the room is
/// closed; PlaceOpening is only entered by arming an opening.
pub fn handle_set_mode(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        mode: Mode,
    }

    let p: Params = match parse_params(id.clone(), params, "{mode}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let applied = match p.mode {
        Mode::Draw => {
            if state.room.closed {
                false
            } else {
                state.set_mode(Mode::Draw);
                true
            }
        }
        Mode::PlaceOpening => false,
        mode => {
            state.set_mode(mode);
            true
        }
    };
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "applied": applied }),
    )
}

/// Handle MakeRect - rectangular room shortcut. Replaces the room outright;
/// openings do not survive a new outline.
pub fn handle_make_rect(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        width: f64,
        depth: f64,
    }

    let p: Params = match parse_params(id.clone(), params, "{width, depth}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    if !(p.width.is_finite() && p.depth.is_finite()) || p.width < 10.0 || p.depth < 10.0 {
        return Response::success(id, serde_json::json!({ "status": "ok", "applied": false }));
    }

    state.room = Room {
        vertices: vec![
            Point::new(0.0, 0.0),
            Point::new(p.width, 0.0),
            Point::new(p.width, p.depth),
            Point::new(0.0, p.depth),
        ],
        closed: true,
    };
    state.openings.clear();
    state.set_mode(Mode::Normal);
    state.fit_view();
    eprintln!(
        "[Plan Server] Created {}x{} cm rectangular room",
        p.width, p.depth
    );
    Response::success(id, serde_json::json!({ "status": "ok", "applied": true }))
}

/// Handle UndoVertex - remove the last vertex while still drawing
pub fn handle_undo_vertex(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    let removed = state.room.pop_vertex().is_some();
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "removed": removed }),
    )
}

/// Handle ClearRoom - full reset back to drawing mode
pub fn handle_clear_room(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    state.room = Room::default();
    state.openings.clear();
    state.furniture.clear();
    state.deselect();
    state.interaction = Interaction::Idle;
    state.set_mode(Mode::Draw);
    state.rebuild_spatial_index();
    eprintln!("[Plan Server] Cleared room and furniture");
    Response::success(id, serde_json::json!({ "status": "ok" }))
}

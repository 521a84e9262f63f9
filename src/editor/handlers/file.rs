//! File operations: SaveLayout, LoadLayout

use crate::editor::protocol::{error_codes, Response};
use crate::editor::state::{EditorState, Interaction, Mode};
use crate::editor::util::parse_params;
use crate::plan::{from_file, to_file, LayoutFile};
use serde::Deserialize;

#[derive(Deserialize)]
struct SaveParams {
    /// Target path; when absent the document is returned inline
    #[serde(default)]
    file_path: Option<String>,
}

/// Handle SaveLayout - serialize the current layout, to disk or inline
pub fn handle_save_layout(
    state: &EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let p: SaveParams = match params {
        // Params are optional: no path means an inline save
        None => SaveParams { file_path: None },
        Some(params) => match parse_params(id.clone(), Some(params), "{file_path?}") {
            Ok(p) => p,
            Err(e) => return e,
        },
    };

    let layout =
        LayoutFile::from_model(&state.room, &state.openings, &state.furniture, &state.grid);

    match p.file_path {
        Some(path) => {
            if let Err(e) = to_file(&path, &layout) {
                return Response::error(id, error_codes::SAVE_FAILED, format!("{:#}", e));
            }
            eprintln!("[Plan Server] Saved layout to {}", path);
            Response::success(id, serde_json::json!({ "status": "ok", "file_path": path }))
        }
        None => {
            let layout = match serde_json::to_value(&layout) {
                Ok(v) => v,
                Err(e) => {
                    return Response::error(id, error_codes::INTERNAL_ERROR, e.to_string())
                }
            };
            Response::success(id, serde_json::json!({ "status": "ok", "layout": layout }))
        }
    }
}

#[derive(Deserialize)]
struct LoadParams {
    #[serde(default)]
    file_path: Option<String>,
    /// Inline layout document, as parsed JSON
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Handle LoadLayout - replace the session's layout from a file or an
/// inline document. Malformed input is surfaced once and leaves the
/// current state untouched; missing optional fields default.
pub fn handle_load_layout(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let p: LoadParams = match parse_params(id.clone(), params, "{file_path?} or {data?}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let layout: LayoutFile = match (p.file_path, p.data) {
        (Some(path), _) => match from_file(&path) {
            Ok(layout) => layout,
            Err(e) => {
                eprintln!("[Plan Server] Failed to load {}: {:#}", path, e);
                return Response::error(
                    id,
                    error_codes::INVALID_LAYOUT,
                    "invalid layout data".to_string(),
                );
            }
        },
        (None, Some(data)) => match serde_json::from_value(data) {
            Ok(layout) => layout,
            Err(e) => {
                eprintln!("[Plan Server] Failed to parse inline layout: {}", e);
                return Response::error(
                    id,
                    error_codes::INVALID_LAYOUT,
                    "invalid layout data".to_string(),
                );
            }
        },
        (None, None) => {
            return Response::error(
                id,
                error_codes::INVALID_PARAMS,
                "Invalid params: expected {file_path} or {data}".to_string(),
            )
        }
    };

    state.room = layout.room();
    state.openings = layout.room.openings.clone();
    state.furniture = layout.furniture.clone();
    state.grid = layout.grid.clone();
    state.deselect();
    state.interaction = Interaction::Idle;
    if state.room.closed {
        state.set_mode(Mode::Normal);
    }
    state.rebuild_spatial_index();
    state.fit_view();

    eprintln!(
        "[Plan Server] Loaded layout: {} vertices, {} openings, {} furniture items",
        state.room.vertices.len(),
        state.openings.len(),
        state.furniture.len()
    );
    Response::success(
        id,
        serde_json::json!({
            "status": "ok",
            "closed": state.room.closed,
            "furniture_count": state.furniture.len(),
        }),
    )
}

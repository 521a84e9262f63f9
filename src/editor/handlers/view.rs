//! View handlers: SetViewport, Zoom, FitView, SetGrid

use crate::editor::protocol::Response;
use crate::editor::state::EditorState;
use crate::editor::util::parse_params;
use crate::plan::{Point, ViewTransform};
use serde::Deserialize;

/// Handle SetViewport - record the canvas size in device px. The very
/// first viewport centers the room-space origin, matching a fresh canvas.
pub fn handle_set_viewport(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        width: f64,
        height: f64,
    }

    let p: Params = match parse_params(id.clone(), params, "{width, height}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let first = state.canvas_width == 0.0 && state.canvas_height == 0.0;
    state.canvas_width = p.width;
    state.canvas_height = p.height;
    if first && state.view == ViewTransform::default() {
        state.view.pan_x = p.width / 2.0;
        state.view.pan_y = p.height / 2.0;
    }
    Response::success(id, serde_json::json!({ "status": "ok" }))
}

/// Handle Zoom - apply a zoom ratio toward a focal screen point. Wheel
/// ticks and pinch gestures both arrive as a ratio.
pub fn handle_zoom(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        ratio: f64,
        x: f64,
        y: f64,
    }

    let p: Params = match parse_params(id.clone(), params, "{ratio, x, y}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    if !(p.ratio.is_finite() && p.ratio > 0.0) {
        return Response::success(id, serde_json::json!({ "status": "ok", "applied": false }));
    }
    state.view.zoom_toward(p.ratio, Point::new(p.x, p.y));
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "zoom": state.view.zoom }),
    )
}

/// Handle FitView - center the room in the canvas; no-op without vertices
pub fn handle_fit_view(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    state.fit_view();
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "zoom": state.view.zoom }),
    )
}

/// Handle SetGrid - update grid pitch, snapping and measurement flags
pub fn handle_set_grid(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        #[serde(default)]
        size: Option<f64>,
        #[serde(default)]
        enabled: Option<bool>,
        #[serde(default, rename = "showMeasurements")]
        show_measurements: Option<bool>,
    }

    let p: Params = match parse_params(id.clone(), params, "{size?, enabled?, showMeasurements?}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    if let Some(size) = p.size {
        if size.is_finite() && size >= 0.0 {
            state.grid.size = size;
        }
    }
    if let Some(enabled) = p.enabled {
        state.grid.enabled = enabled;
    }
    if let Some(show) = p.show_measurements {
        state.grid.show_measurements = show;
    }
    Response::success(id, serde_json::json!({ "status": "ok" }))
}

//! Furniture handlers: AddFurniture, RotateSelected, DeleteSelected,
//! UpdateFurniture, NudgeSelected, GetCatalog

use crate::editor::protocol::{error_codes, Response};
use crate::editor::state::{EditorState, Selection};
use crate::editor::util::parse_params;
use crate::plan::{catalog_json, clamp_offset, Furniture};
use serde::Deserialize;

/// Manual width/depth edits clamp to this range, cm
pub const MIN_MANUAL_SIZE: f64 = 10.0;
pub const MAX_MANUAL_SIZE: f64 = 1000.0;

/// Handle AddFurniture - construct an item at the room's vertex centroid,
/// shifted by half its size and grid-snapped, then select it
pub fn handle_add_furniture(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        category: String,
        name: String,
        width: f64,
        depth: f64,
    }

    let p: Params = match parse_params(id.clone(), params, "{category, name, width, depth}") {
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
    if !(p.width.is_finite() && p.depth.is_finite()) || p.width <= 0.0 || p.depth <= 0.0 {
        return Response::error(
            id,
            error_codes::INVALID_PARAMS,
            "Furniture dimensions must be positive".to_string(),
        );
    }

    let centroid = match state.room.centroid() {
        Some(c) => c,
        None => {
            return Response::error(
                id,
                error_codes::ROOM_NOT_CLOSED,
                "Room has no vertices".to_string(),
            )
        }
    };
    let x = state.grid.snap((centroid.x - p.width / 2.0).round());
    let y = state.grid.snap((centroid.y - p.depth / 2.0).round());

    let item_id = state.next_id();
    state.furniture.push(Furniture {
        id: item_id.clone(),
        category: p.category,
        name: p.name,
        width: p.width,
        depth: p.depth,
        x,
        y,
        rotation: 0.0,
        color: None,
    });
    state.select_furniture(item_id.clone());
    state.rebuild_spatial_index();
    eprintln!("[Plan Server] Added furniture {}", item_id);
    Response::success(id, serde_json::json!({ "status": "ok", "id": item_id }))
}

/// Handle RotateSelected - quarter turn about the center; dimensions are
/// not swapped
pub fn handle_rotate_selected(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    let mut rotated = false;
    if let Some(item) = state.selected_furniture_mut() {
        item.rotation = (item.rotation + 90.0) % 360.0;
        rotated = true;
    }
    if rotated {
        state.rebuild_spatial_index();
    }
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "applied": rotated }),
    )
}

/// Handle DeleteSelected - remove the selected furniture item or opening
pub fn handle_delete_selected(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    _params: Option<serde_json::Value>,
) -> Response {
    match state.selection.clone() {
        Selection::Furniture(item_id) => {
            state.furniture.retain(|f| f.id != item_id);
            state.deselect();
            state.rebuild_spatial_index();
            eprintln!("[Plan Server] Deleted furniture {}", item_id);
            Response::success(id, serde_json::json!({ "status": "ok", "deleted": item_id }))
        }
        Selection::Opening(index) => {
            if index < state.openings.len() {
                state.openings.remove(index);
            }
            state.deselect();
            eprintln!("[Plan Server] Deleted opening {}", index);
            Response::success(id, serde_json::json!({ "status": "ok", "deleted": index }))
        }
        Selection::None => {
            Response::success(id, serde_json::json!({ "status": "ok", "deleted": null }))
        }
    }
}

/// Handle UpdateFurniture - per-field edits from the sidebar form. Sizes
/// clamp to [10, 1000] cm rather than rejecting; an empty name falls back
/// to "Unnamed"; `resetColor` clears the custom color so the renderer
/// falls back to the category color.
pub fn handle_update_furniture(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        depth: Option<f64>,
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        color: Option<String>,
        #[serde(default, rename = "resetColor")]
        reset_color: bool,
    }

    let p: Params = match parse_params(
        id.clone(),
        params,
        "{name?, width?, depth?, x?, y?, category?, color?, resetColor?}",
    ) {
        Ok(p) => p,
        Err(e) => return e,
    };

    let mut applied = false;
    if let Some(item) = state.selected_furniture_mut() {
        if let Some(name) = p.name {
            let trimmed = name.trim();
            item.name = if trimmed.is_empty() {
                "Unnamed".to_string()
            } else {
                trimmed.to_string()
            };
        }
        if let Some(width) = p.width {
            if width.is_finite() {
                item.width = width.clamp(MIN_MANUAL_SIZE, MAX_MANUAL_SIZE);
            }
        }
        if let Some(depth) = p.depth {
            if depth.is_finite() {
                item.depth = depth.clamp(MIN_MANUAL_SIZE, MAX_MANUAL_SIZE);
            }
        }
        if let Some(x) = p.x {
            if x.is_finite() {
                item.x = x;
            }
        }
        if let Some(y) = p.y {
            if y.is_finite() {
                item.y = y;
            }
        }
        if let Some(category) = p.category {
            item.category = category;
        }
        if p.reset_color {
            item.color = None;
        } else if let Some(color) = p.color {
            item.color = Some(color);
        }
        applied = true;
    }
    if applied {
        state.rebuild_spatial_index();
    }
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "applied": applied }),
    )
}

/// Handle NudgeSelected - arrow-key movement. Furniture translates by one
/// grid step (1 cm with the grid off); a selected opening slides along its
/// wall when the arrow direction mostly agrees with the wall direction.
pub fn handle_nudge_selected(
    state: &mut EditorState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        /// Unit arrow direction: one of (-1|0|1) per axis
        dx: f64,
        dy: f64,
    }

    let p: Params = match parse_params(id.clone(), params, "{dx, dy}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let step = if state.grid.enabled { state.grid.size } else { 1.0 };

    match state.selection.clone() {
        Selection::Furniture(item_id) => {
            if let Some(item) = state.furniture_by_id_mut(&item_id) {
                item.x += p.dx * step;
                item.y += p.dy * step;
            }
            state.rebuild_spatial_index();
        }
        Selection::Opening(index) => {
            if let Some(op) = state.openings.get(index) {
                if let Some(wall) = state.room.wall(op.wall) {
                    if let Some((ux, uy)) = wall.direction() {
                        // Project the arrow onto the wall direction; ignore
                        // arrows running across the wall
                        let along = p.dx * ux + p.dy * uy;
                        if along.abs() > 0.5 {
                            let offset = clamp_offset(
                                op.offset + along.signum() * step,
                                op.width,
                                wall.length(),
                            );
                            state.openings[index].offset = offset;
                        }
                    }
                }
            }
        }
        Selection::None => {}
    }
    Response::success(id, serde_json::json!({ "status": "ok" }))
}

/// Handle GetCatalog - category table and stock items for the sidebar
pub fn handle_get_catalog(id: Option<serde_json::Value>) -> Response {
    Response::success(id, catalog_json())
}

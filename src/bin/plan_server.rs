use plan_extension::editor::handlers::{
    handle_add_furniture, handle_arm_opening, handle_clear_room, handle_delete_selected,
    handle_fit_view, handle_flip_door, handle_get_catalog, handle_get_snapshot,
    handle_load_layout, handle_make_rect, handle_nudge_selected, handle_pointer_down,
    handle_pointer_move, handle_pointer_up, handle_rotate_selected, handle_save_layout,
    handle_set_grid, handle_set_mode, handle_set_viewport, handle_swing_door,
    handle_undo_vertex, handle_update_furniture, handle_update_opening, handle_zoom,
};
use plan_extension::editor::protocol::{error_codes, Request, Response};
use plan_extension::editor::EditorState;
use std::io::{self, BufRead, Write};

fn main() {
    eprintln!("[Plan Server] Starting floor-plan editor server...");
    let mut state = EditorState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("[Plan Server] Error reading stdin: {}", e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                eprintln!("[Plan Server] Failed to parse request: {}", e);
                continue;
            }
        };

        let response = match request.method.as_str() {
            "PointerDown" => handle_pointer_down(&mut state, request.id, request.params),
            "PointerMove" => handle_pointer_move(&mut state, request.id, request.params),
            "PointerUp" => handle_pointer_up(&mut state, request.id, request.params),
            "Zoom" => handle_zoom(&mut state, request.id, request.params),
            "FitView" => handle_fit_view(&mut state, request.id, request.params),
            "SetViewport" => handle_set_viewport(&mut state, request.id, request.params),
            "SetGrid" => handle_set_grid(&mut state, request.id, request.params),
            "SetMode" => handle_set_mode(&mut state, request.id, request.params),
            "MakeRect" => handle_make_rect(&mut state, request.id, request.params),
            "UndoVertex" => handle_undo_vertex(&mut state, request.id, request.params),
            "ClearRoom" => handle_clear_room(&mut state, request.id, request.params),
            "ArmOpening" => handle_arm_opening(&mut state, request.id, request.params),
            "UpdateOpening" => handle_update_opening(&mut state, request.id, request.params),
            "FlipDoor" => handle_flip_door(&mut state, request.id, request.params),
            "SwingDoor" => handle_swing_door(&mut state, request.id, request.params),
            "AddFurniture" => handle_add_furniture(&mut state, request.id, request.params),
            "RotateSelected" => handle_rotate_selected(&mut state, request.id, request.params),
            "DeleteSelected" => handle_delete_selected(&mut state, request.id, request.params),
            "UpdateFurniture" => handle_update_furniture(&mut state, request.id, request.params),
            "NudgeSelected" => handle_nudge_selected(&mut state, request.id, request.params),
            "GetCatalog" => handle_get_catalog(request.id),
            "GetSnapshot" => handle_get_snapshot(&state, request.id),
            "SaveLayout" => handle_save_layout(&state, request.id, request.params),
            "LoadLayout" => handle_load_layout(&mut state, request.id, request.params),
            _ => {
                eprintln!("[Plan Server] Unknown method: {}", request.method);
                Response::error(
                    request.id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Unknown method: {}", request.method),
                )
            }
        };

        let response_json = serde_json::to_string(&response).unwrap();
        writeln!(stdout, "{}", response_json).unwrap();
        stdout.flush().unwrap();
    }

    eprintln!("[Plan Server] Input closed, shutting down");
}

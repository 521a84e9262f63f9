// Scenario tests driving the editor through its request handlers, the way
// the WebView client does: pointer events in screen px, state inspected
// between events.

use plan_extension::editor::handlers::{
    handle_arm_opening, handle_make_rect, handle_pointer_down, handle_pointer_move,
    handle_pointer_up, handle_set_mode, handle_set_viewport, handle_zoom,
};
use plan_extension::editor::{EditorState, Interaction, Mode, Selection};
use plan_extension::plan::{Furniture, Opening, OpeningKind, Point, ViewTransform};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    /// An 800x600 canvas with a closed 400x300 room and a neutral view
    /// (zoom 1, no pan) so screen px = 4 * room cm
    fn rect_state() -> EditorState {
        let mut state = EditorState::new();
        let r = handle_set_viewport(&mut state, None, Some(json!({"width": 800.0, "height": 600.0})));
        assert!(r.error.is_none());
        let r = handle_make_rect(&mut state, None, Some(json!({"width": 400.0, "depth": 300.0})));
        assert!(r.error.is_none());
        state.view = ViewTransform::default();
        state
    }

    fn item(id: &str, x: f64, y: f64, w: f64, d: f64, rotation: f64) -> Furniture {
        Furniture {
            id: id.to_string(),
            category: "table".to_string(),
            name: id.to_string(),
            width: w,
            depth: d,
            x,
            y,
            rotation,
            color: None,
        }
    }

    fn down(state: &mut EditorState, sx: f64, sy: f64) {
        let r = handle_pointer_down(state, None, Some(json!({"x": sx, "y": sy})));
        assert!(r.error.is_none());
    }

    fn mv(state: &mut EditorState, sx: f64, sy: f64) {
        let r = handle_pointer_move(state, None, Some(json!({"x": sx, "y": sy})));
        assert!(r.error.is_none());
    }

    fn up(state: &mut EditorState) {
        let r = handle_pointer_up(state, None, None);
        assert!(r.error.is_none());
    }

    /// Screen position of a room point under the current view
    fn screen(state: &EditorState, x: f64, y: f64) -> (f64, f64) {
        let p = state.view.room_to_screen(Point::new(x, y));
        (p.x, p.y)
    }

    #[test]
    fn test_draw_and_close_room_gesture() {
        let mut state = EditorState::new();
        handle_set_viewport(&mut state, None, Some(json!({"width": 800.0, "height": 600.0})));
        handle_set_mode(&mut state, None, Some(json!({"mode": "draw"})));
        assert_eq!(state.mode, Mode::Draw);

        // Initial view centers the origin at (400, 300)
        for (x, y) in [(400.0, 300.0), (800.0, 300.0), (800.0, 620.0)] {
            down(&mut state, x, y);
        }
        assert_eq!(state.room.vertices.len(), 3);
        assert!(!state.room.closed);

        // Click just inside the 14 px close radius of vertex 0
        down(&mut state, 410.0, 305.0);
        assert!(state.room.closed);
        assert_eq!(state.room.vertices.len(), 3);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_click_outside_close_radius_adds_vertex() {
        let mut state = EditorState::new();
        handle_set_viewport(&mut state, None, Some(json!({"width": 800.0, "height": 600.0})));
        handle_set_mode(&mut state, None, Some(json!({"mode": "draw"})));
        for (x, y) in [(400.0, 300.0), (800.0, 300.0), (800.0, 620.0)] {
            down(&mut state, x, y);
        }
        // Twice the close radius away from vertex 0: a fourth vertex
        down(&mut state, 428.0, 300.0);
        assert!(!state.room.closed);
        assert_eq!(state.room.vertices.len(), 4);
    }

    #[test]
    fn test_resize_east_handle_unrotated() {
        let mut state = rect_state();
        state.furniture.push(item("a", 0.0, 0.0, 100.0, 100.0, 0.0));
        state.rebuild_spatial_index();
        state.select_furniture("a".to_string());

        // Grab the east handle at room (100, 50) and pull +30 cm in x
        let (sx, sy) = screen(&state, 100.0, 50.0);
        down(&mut state, sx, sy);
        assert!(matches!(state.interaction, Interaction::ResizeFurniture { .. }));
        let (sx, sy) = screen(&state, 130.0, 50.0);
        mv(&mut state, sx, sy);

        let f = state.furniture_by_id("a").expect("item");
        assert_eq!(f.width, 130.0);
        assert_eq!(f.depth, 100.0);
        // West edge anchored: the origin must not move at rotation 0
        assert!(f.x.abs() < 1e-9);
        assert!(f.y.abs() < 1e-9);
    }

    #[test]
    fn test_resize_east_handle_rotated_90_keeps_west_edge_fixed() {
        let mut state = rect_state();
        state.furniture.push(item("a", 0.0, 0.0, 100.0, 100.0, 90.0));
        state.rebuild_spatial_index();
        state.select_furniture("a".to_string());

        // At 90° the east handle sits at world (50, 100); drag +30 world-y,
        // which is +30 local-x
        let (sx, sy) = screen(&state, 50.0, 100.0);
        down(&mut state, sx, sy);
        assert!(matches!(state.interaction, Interaction::ResizeFurniture { .. }));
        let (sx, sy) = screen(&state, 50.0, 130.0);
        mv(&mut state, sx, sy);

        let f = state.furniture_by_id("a").expect("item");
        assert_eq!(f.width, 130.0);
        assert!((f.x - (-15.0)).abs() < 1e-9, "x = {}", f.x);
        assert!((f.y - 15.0).abs() < 1e-9, "y = {}", f.y);

        // The anchored (west) edge midpoint must be exactly where it was:
        // world (50, 0) both before and after
        let rad = f.rotation.to_radians();
        let (cx, cy) = (f.x + f.width / 2.0, f.y + f.depth / 2.0);
        let (lx, ly) = (-f.width / 2.0, 0.0);
        let wx = cx + lx * rad.cos() - ly * rad.sin();
        let wy = cy + lx * rad.sin() + ly * rad.cos();
        assert!((wx - 50.0).abs() < 1e-9, "west edge drifted to x = {}", wx);
        assert!(wy.abs() < 1e-9, "west edge drifted to y = {}", wy);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut state = rect_state();
        state.furniture.push(item("a", 0.0, 0.0, 100.0, 100.0, 0.0));
        state.rebuild_spatial_index();
        state.select_furniture("a".to_string());

        let (sx, sy) = screen(&state, 100.0, 50.0);
        down(&mut state, sx, sy);
        // Pull the east handle far past the west edge
        let (sx, sy) = screen(&state, -200.0, 50.0);
        mv(&mut state, sx, sy);
        let f = state.furniture_by_id("a").expect("item");
        assert_eq!(f.width, 20.0);
    }

    #[test]
    fn test_furniture_drag_snaps_result() {
        let mut state = rect_state();
        state.furniture.push(item("a", 0.0, 0.0, 100.0, 100.0, 0.0));
        state.rebuild_spatial_index();

        // Grab at room (30, 20), drag to (67, 41): the new origin snaps
        let (sx, sy) = screen(&state, 30.0, 20.0);
        down(&mut state, sx, sy);
        assert_eq!(state.selection, Selection::Furniture("a".to_string()));
        let (sx, sy) = screen(&state, 67.0, 41.0);
        mv(&mut state, sx, sy);

        let f = state.furniture_by_id("a").expect("item");
        assert_eq!(f.x, 40.0);
        assert_eq!(f.y, 20.0);
    }

    #[test]
    fn test_overlapping_drop_is_kept() {
        let mut state = rect_state();
        state.furniture.push(item("a", 0.0, 0.0, 100.0, 100.0, 0.0));
        state.furniture.push(item("b", 200.0, 0.0, 100.0, 100.0, 0.0));
        state.rebuild_spatial_index();

        // Drag b onto a and release: the overlap is kept, only flagged
        let (sx, sy) = screen(&state, 250.0, 50.0);
        down(&mut state, sx, sy);
        let (sx, sy) = screen(&state, 90.0, 50.0);
        mv(&mut state, sx, sy);
        up(&mut state);

        let b = state.furniture_by_id("b").expect("item");
        assert_eq!(b.x, 40.0);
        let b = b.clone();
        assert!(plan_extension::plan::any_overlap(&state.furniture, &b, &b.id));
    }

    #[test]
    fn test_vertex_beats_furniture_on_pointer_down() {
        let mut state = rect_state();
        // Furniture covering vertex 0
        state.furniture.push(item("a", -50.0, -50.0, 100.0, 100.0, 0.0));
        state.rebuild_spatial_index();
        state.select_furniture("a".to_string());

        let (sx, sy) = screen(&state, 1.0, 1.0);
        down(&mut state, sx, sy);
        assert!(matches!(state.interaction, Interaction::DragVertex { index: 0 }));
        // Vertex drag drops any selection
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn test_vertex_drag_reshapes_closed_room() {
        let mut state = rect_state();
        let (sx, sy) = screen(&state, 0.0, 0.0);
        down(&mut state, sx, sy);
        let (sx, sy) = screen(&state, -52.0, -49.0);
        mv(&mut state, sx, sy);
        up(&mut state);

        assert!(state.room.closed);
        let v = state.room.vertices[0];
        assert_eq!((v.x, v.y), (-50.0, -50.0));
        assert!(matches!(state.interaction, Interaction::Idle));
    }

    #[test]
    fn test_opening_drag_clamps_to_wall() {
        let mut state = rect_state();
        state.openings.push(Opening {
            kind: OpeningKind::Door,
            wall: 0,
            offset: 100.0,
            width: 90.0,
            flip: false,
            side: 1,
        });

        // Grab mid-opening just off the wall line
        let (sx, sy) = screen(&state, 150.0, 2.0);
        down(&mut state, sx, sy);
        assert!(matches!(state.interaction, Interaction::DragOpening { .. }));
        assert_eq!(state.selection, Selection::Opening(0));

        // Far past the wall end: clamps to wall_len - width
        let (sx, sy) = screen(&state, 500.0, 2.0);
        mv(&mut state, sx, sy);
        assert_eq!(state.openings[0].offset, 310.0);

        // Far before the wall start: clamps to 0
        let (sx, sy) = screen(&state, -200.0, 2.0);
        mv(&mut state, sx, sy);
        assert_eq!(state.openings[0].offset, 0.0);
    }

    #[test]
    fn test_place_opening_centered_snapped_and_unclamped() {
        let mut state = rect_state();
        let r = handle_arm_opening(&mut state, None, Some(json!({"kind": "door", "width": 90.0})));
        assert!(r.error.is_none());
        assert_eq!(state.mode, Mode::PlaceOpening);

        // Click 143 cm along the top wall: center the opening and snap
        let (sx, sy) = screen(&state, 143.0, 3.0);
        down(&mut state, sx, sy);
        assert_eq!(state.openings.len(), 1);
        let op = &state.openings[0];
        assert_eq!(op.wall, 0);
        assert_eq!(op.offset, 100.0);
        assert!(!op.flip);
        assert_eq!(op.side, 1);
        // Placement auto-disarms
        assert_eq!(state.mode, Mode::Normal);

        // Near the wall end the creation offset is NOT clamped to fit
        handle_arm_opening(&mut state, None, Some(json!({"kind": "window"})));
        let (sx, sy) = screen(&state, 390.0, 2.0);
        down(&mut state, sx, sy);
        let op = &state.openings[1];
        assert_eq!(op.offset, 350.0);
        assert!(op.offset + op.width > 400.0);
    }

    #[test]
    fn test_pointer_up_always_clears_interaction() {
        let mut state = rect_state();
        // Pan from empty space
        let (sx, sy) = screen(&state, 1000.0, 1000.0);
        down(&mut state, sx, sy);
        assert!(matches!(state.interaction, Interaction::Pan { .. }));
        up(&mut state);
        assert!(matches!(state.interaction, Interaction::Idle));
    }

    #[test]
    fn test_pan_accumulates_screen_delta() {
        let mut state = rect_state();
        let (sx, sy) = screen(&state, 1000.0, 1000.0);
        down(&mut state, sx, sy);
        mv(&mut state, sx + 25.0, sy - 10.0);
        mv(&mut state, sx + 40.0, sy - 10.0);
        assert_eq!(state.view.pan_x, 40.0);
        assert_eq!(state.view.pan_y, -10.0);
    }

    #[test]
    fn test_zoom_handler_keeps_focal_point() {
        let mut state = rect_state();
        let focal = Point::new(640.0, 480.0);
        let before = state.view.screen_to_room(focal);
        for ratio in [1.1, 1.1, 0.91, 2.0] {
            let r = handle_zoom(
                &mut state,
                None,
                Some(json!({"ratio": ratio, "x": focal.x, "y": focal.y})),
            );
            assert!(r.error.is_none());
        }
        let after = state.view.screen_to_room(focal);
        assert!((after.x - before.x).abs() < 1e-6);
        assert!((after.y - before.y).abs() < 1e-6);
    }
}

// Tests for the sidebar-driven edit operations: form-field updates with
// their clamps, rotate/flip/swing toggles, deletion, and arrow-key nudges.

use plan_extension::editor::handlers::{
    handle_add_furniture, handle_arm_opening, handle_delete_selected, handle_flip_door,
    handle_make_rect, handle_nudge_selected, handle_rotate_selected, handle_set_grid,
    handle_set_viewport, handle_swing_door, handle_update_furniture, handle_update_opening,
};
use plan_extension::editor::{EditorState, Selection};
use plan_extension::plan::{Opening, OpeningKind, Point, ViewTransform};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_state() -> EditorState {
        let mut state = EditorState::new();
        handle_set_viewport(&mut state, None, Some(json!({"width": 800.0, "height": 600.0})));
        handle_make_rect(&mut state, None, Some(json!({"width": 400.0, "depth": 300.0})));
        state.view = ViewTransform::default();
        state
    }

    fn state_with_door() -> EditorState {
        let mut state = rect_state();
        state.openings.push(Opening {
            kind: OpeningKind::Door,
            wall: 0,
            offset: 100.0,
            width: 90.0,
            flip: false,
            side: 1,
        });
        state.select_opening(0);
        state
    }

    fn add_item(state: &mut EditorState) -> String {
        let r = handle_add_furniture(
            state,
            None,
            Some(json!({"category": "table", "name": "Desk", "width": 140.0, "depth": 70.0})),
        );
        assert!(r.error.is_none());
        r.result.expect("result")["id"]
            .as_str()
            .expect("id")
            .to_string()
    }

    #[test]
    fn test_add_furniture_places_at_centroid() {
        let mut state = rect_state();
        let id = add_item(&mut state);
        // Centroid (200, 150) minus half of 140x70, rounded and snapped
        let f = state.furniture_by_id(&id).expect("item");
        assert_eq!(f.x, 130.0);
        assert_eq!(f.y, 120.0);
        assert_eq!(state.selection, Selection::Furniture(id));
    }

    #[test]
    fn test_add_furniture_requires_closed_room() {
        let mut state = EditorState::new();
        let r = handle_add_furniture(
            &mut state,
            None,
            Some(json!({"category": "bed", "name": "Double Bed", "width": 160.0, "depth": 200.0})),
        );
        assert!(r.error.is_some());
        assert!(state.furniture.is_empty());
    }

    #[test]
    fn test_update_furniture_clamps_sizes() {
        let mut state = rect_state();
        let id = add_item(&mut state);

        handle_update_furniture(&mut state, None, Some(json!({"width": 5000.0, "depth": 3.0})));
        let f = state.furniture_by_id(&id).expect("item");
        assert_eq!(f.width, 1000.0);
        assert_eq!(f.depth, 10.0);

        handle_update_furniture(&mut state, None, Some(json!({"name": "   "})));
        let f = state.furniture_by_id(&id).expect("item");
        assert_eq!(f.name, "Unnamed");
    }

    #[test]
    fn test_update_furniture_color_set_and_reset() {
        let mut state = rect_state();
        let id = add_item(&mut state);

        handle_update_furniture(&mut state, None, Some(json!({"color": "#112233"})));
        assert_eq!(
            state.furniture_by_id(&id).expect("item").color.as_deref(),
            Some("#112233")
        );
        handle_update_furniture(&mut state, None, Some(json!({"resetColor": true})));
        assert!(state.furniture_by_id(&id).expect("item").color.is_none());
    }

    #[test]
    fn test_rotate_selected_steps_by_quarter_turn() {
        let mut state = rect_state();
        let id = add_item(&mut state);
        for expected in [90.0, 180.0, 270.0, 0.0] {
            handle_rotate_selected(&mut state, None, None);
            let f = state.furniture_by_id(&id).expect("item");
            assert_eq!(f.rotation, expected);
            // Dimensions never swap on rotate
            assert_eq!(f.width, 140.0);
            assert_eq!(f.depth, 70.0);
        }
    }

    #[test]
    fn test_delete_selected_furniture_then_opening() {
        let mut state = state_with_door();
        let id = add_item(&mut state);
        assert_eq!(state.furniture.len(), 1);

        handle_delete_selected(&mut state, None, None);
        assert!(state.furniture.is_empty());
        assert!(state.furniture_by_id(&id).is_none());
        assert_eq!(state.selection, Selection::None);

        state.select_opening(0);
        handle_delete_selected(&mut state, None, None);
        assert!(state.openings.is_empty());
    }

    #[test]
    fn test_update_opening_offset_clamps() {
        let mut state = state_with_door();

        // Wall 0 is 400 cm, the door 90 cm wide
        handle_update_opening(&mut state, None, Some(json!({"offset": 500.0})));
        assert_eq!(state.openings[0].offset, 310.0);

        handle_update_opening(&mut state, None, Some(json!({"offset": -40.0})));
        assert_eq!(state.openings[0].offset, 0.0);

        handle_update_opening(&mut state, None, Some(json!({"offset": 120.0})));
        assert_eq!(state.openings[0].offset, 120.0);
    }

    #[test]
    fn test_update_opening_kind_and_width() {
        let mut state = state_with_door();
        handle_update_opening(
            &mut state,
            None,
            Some(json!({"type": "window", "width": 140.0})),
        );
        assert_eq!(state.openings[0].kind, OpeningKind::Window);
        assert_eq!(state.openings[0].width, 140.0);
    }

    #[test]
    fn test_flip_and_swing_toggles() {
        let mut state = state_with_door();
        handle_flip_door(&mut state, None, None);
        assert!(state.openings[0].flip);
        handle_flip_door(&mut state, None, None);
        assert!(!state.openings[0].flip);

        handle_swing_door(&mut state, None, None);
        assert_eq!(state.openings[0].side, -1);
        handle_swing_door(&mut state, None, None);
        assert_eq!(state.openings[0].side, 1);
    }

    #[test]
    fn test_arm_opening_toggles_placement_mode() {
        let mut state = rect_state();
        let r = handle_arm_opening(&mut state, None, Some(json!({"kind": "door"})));
        assert!(r.error.is_none());
        assert_eq!(state.mode, plan_extension::editor::Mode::PlaceOpening);
        // Arming the same kind again disarms
        handle_arm_opening(&mut state, None, Some(json!({"kind": "door"})));
        assert_eq!(state.mode, plan_extension::editor::Mode::Normal);
    }

    #[test]
    fn test_nudge_furniture_uses_grid_step() {
        let mut state = rect_state();
        let id = add_item(&mut state);
        let before = {
            let f = state.furniture_by_id(&id).expect("item");
            Point::new(f.x, f.y)
        };

        handle_nudge_selected(&mut state, None, Some(json!({"dx": 1.0, "dy": 0.0})));
        handle_nudge_selected(&mut state, None, Some(json!({"dx": 0.0, "dy": -1.0})));
        let f = state.furniture_by_id(&id).expect("item");
        assert_eq!(f.x, before.x + 10.0);
        assert_eq!(f.y, before.y - 10.0);

        // With the grid off the step drops to 1 cm
        handle_set_grid(&mut state, None, Some(json!({"enabled": false})));
        handle_nudge_selected(&mut state, None, Some(json!({"dx": 1.0, "dy": 0.0})));
        let f = state.furniture_by_id(&id).expect("item");
        assert_eq!(f.x, before.x + 11.0);
    }

    #[test]
    fn test_nudge_opening_slides_along_wall_only() {
        let mut state = state_with_door();

        // Wall 0 runs along +x: left/right arrows slide the opening
        handle_nudge_selected(&mut state, None, Some(json!({"dx": 1.0, "dy": 0.0})));
        assert_eq!(state.openings[0].offset, 110.0);
        handle_nudge_selected(&mut state, None, Some(json!({"dx": -1.0, "dy": 0.0})));
        assert_eq!(state.openings[0].offset, 100.0);

        // An arrow across the wall does nothing
        handle_nudge_selected(&mut state, None, Some(json!({"dx": 0.0, "dy": 1.0})));
        assert_eq!(state.openings[0].offset, 100.0);

        // And the slide clamps at the wall end
        for _ in 0..40 {
            handle_nudge_selected(&mut state, None, Some(json!({"dx": 1.0, "dy": 0.0})));
        }
        assert_eq!(state.openings[0].offset, 310.0);
    }
}

//! View transform between device pixels and room-space centimeters
//!
//! The transform is fully described by a pan offset (screen px) and a zoom
//! factor. Room space is authored in cm; `PX_PER_CM` fixes the scale at
//! zoom 1 so that zoom math never touches the model.

use crate::plan::types::Point;
use serde::Serialize;

/// Screen pixels per cm at zoom 1
pub const PX_PER_CM: f64 = 4.0;
pub const MIN_ZOOM: f64 = 0.02;
pub const MAX_ZOOM: f64 = 5.0;
/// Canvas padding in px kept around the room when fitting it to view
pub const FIT_PADDING: f64 = 60.0;

/// Pan/zoom state; process-wide, never persisted with a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    /// Room cm -> screen px
    pub fn room_to_screen(&self, p: Point) -> Point {
        Point::new(
            p.x * PX_PER_CM * self.zoom + self.pan_x,
            p.y * PX_PER_CM * self.zoom + self.pan_y,
        )
    }

    /// Screen px -> room cm; exact inverse of `room_to_screen`
    pub fn screen_to_room(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.pan_x) / self.zoom / PX_PER_CM,
            (p.y - self.pan_y) / self.zoom / PX_PER_CM,
        )
    }

    /// A cm extent expressed in screen px at the current zoom
    pub fn scale(&self, cm: f64) -> f64 {
        cm * PX_PER_CM * self.zoom
    }

    /// A screen-px tolerance expressed in room cm at the current zoom
    pub fn px_to_cm(&self, px: f64) -> f64 {
        px / (self.zoom * PX_PER_CM)
    }

    /// Apply a zoom ratio while keeping the room point under the focal
    /// screen point stationary. Wheel and pinch gestures both land here.
    pub fn zoom_toward(&mut self, ratio: f64, focal: Point) {
        let new_zoom = (self.zoom * ratio).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan_x = focal.x - (focal.x - self.pan_x) * (new_zoom / self.zoom);
        self.pan_y = focal.y - (focal.y - self.pan_y) * (new_zoom / self.zoom);
        self.zoom = new_zoom;
    }

    /// Center a room bounding box in the canvas with `FIT_PADDING` around
    /// it. The fit zoom is floored at `MIN_ZOOM` but deliberately not
    /// capped at `MAX_ZOOM`: a tiny room may legitimately fit above it.
    pub fn fit_bounds(&mut self, min: Point, max: Point, canvas_w: f64, canvas_h: f64) {
        let w = max.x - min.x;
        let h = max.y - min.y;

        let mut fit_zoom = f64::INFINITY;
        if w > 0.0 {
            fit_zoom = fit_zoom.min((canvas_w - FIT_PADDING * 2.0) / (w * PX_PER_CM));
        }
        if h > 0.0 {
            fit_zoom = fit_zoom.min((canvas_h - FIT_PADDING * 2.0) / (h * PX_PER_CM));
        }
        if fit_zoom.is_finite() {
            self.zoom = fit_zoom.max(MIN_ZOOM);
        }

        let room_px_w = w * PX_PER_CM * self.zoom;
        let room_px_h = h * PX_PER_CM * self.zoom;
        self.pan_x = (canvas_w - room_px_w) / 2.0 - min.x * PX_PER_CM * self.zoom;
        self.pan_y = (canvas_h - room_px_h) / 2.0 - min.y * PX_PER_CM * self.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_transform_inverse_law() {
        let view = ViewTransform {
            pan_x: 123.0,
            pan_y: -45.0,
            zoom: 0.37,
        };
        for &(sx, sy) in &[(0.0, 0.0), (640.0, 360.0), (-12.5, 900.25)] {
            let p = Point::new(sx, sy);
            let back = view.room_to_screen(view.screen_to_room(p));
            assert!((back.x - sx).abs() < EPS, "x drifted: {} -> {}", sx, back.x);
            assert!((back.y - sy).abs() < EPS, "y drifted: {} -> {}", sy, back.y);
        }
    }

    #[test]
    fn test_zoom_anchor_invariance() {
        let mut view = ViewTransform::default();
        let focal = Point::new(400.0, 300.0);
        let before = view.screen_to_room(focal);
        // Repeated zooms must not drift the anchored point
        for &ratio in &[1.1, 1.1, 0.91, 1.1, 0.5, 2.0, 0.91] {
            view.zoom_toward(ratio, focal);
            let after = view.screen_to_room(focal);
            assert!((after.x - before.x).abs() < 1e-6);
            assert!((after.y - before.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zoom_clamped_to_range() {
        let mut view = ViewTransform::default();
        view.zoom_toward(1000.0, Point::new(0.0, 0.0));
        assert_eq!(view.zoom, MAX_ZOOM);
        view.zoom_toward(1e-9, Point::new(0.0, 0.0));
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_fit_bounds_centers_room() {
        let mut view = ViewTransform::default();
        // 400x300 cm room in an 800x600 canvas
        view.fit_bounds(Point::new(0.0, 0.0), Point::new(400.0, 300.0), 800.0, 600.0);
        let center = view.room_to_screen(Point::new(200.0, 150.0));
        assert!((center.x - 400.0).abs() < EPS);
        assert!((center.y - 300.0).abs() < EPS);
        // Both extents must fit inside the padded canvas
        assert!(view.scale(400.0) <= 800.0 - FIT_PADDING * 2.0 + EPS);
        assert!(view.scale(300.0) <= 600.0 - FIT_PADDING * 2.0 + EPS);
    }

    #[test]
    fn test_fit_bounds_degenerate_extent_keeps_zoom() {
        let mut view = ViewTransform::default();
        view.fit_bounds(Point::new(50.0, 50.0), Point::new(50.0, 50.0), 800.0, 600.0);
        assert_eq!(view.zoom, 1.0);
        let p = view.room_to_screen(Point::new(50.0, 50.0));
        assert!((p.x - 400.0).abs() < EPS);
        assert!((p.y - 300.0).abs() < EPS);
    }
}

//! Geometry and model layer for the floor-plan editor
//!
//! Everything here is pure: no session state, no protocol. The editor
//! module owns the mutable session and calls into these.
//!
//! # Submodules
//! - `types` - Core model types (Point, Opening, Furniture)
//! - `room` - Room polygon, derived walls, closest-wall projection
//! - `openings` - Wall/opening segmentation and door swing geometry
//! - `collision` - Rotated-rectangle overlap (separating axis theorem)
//! - `spatial` - R-tree entries for furniture hit testing
//! - `view` - Screen/room coordinate transform, zoom, fit-to-view
//! - `grid` - Grid snapping
//! - `catalog` - Default furniture catalog
//! - `persist` - Layout file format and I/O

mod catalog;
mod collision;
mod grid;
mod openings;
mod persist;
mod room;
mod spatial;
mod types;
mod view;

pub use types::{Furniture, Opening, OpeningKind, Point};

pub use room::{closest_wall, Room, Wall, WallHit};

pub use openings::{clamp_offset, door_geometry, wall_segments, DoorGeometry, SegmentKind, WallSegment};

pub use collision::{any_overlap, corners, overlap};

pub use spatial::IndexedFurniture;

pub use view::{ViewTransform, FIT_PADDING, MAX_ZOOM, MIN_ZOOM, PX_PER_CM};

pub use grid::GridSettings;

pub use catalog::{categories, catalog_json, category_color, CategoryInfo, DEFAULT_FURNITURE};

pub use persist::{from_file, to_file, LayoutFile, RoomData};

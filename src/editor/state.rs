//! Editor session state
//!
//! One authoritative state object per session, mutated only on the request
//! thread in direct response to input events. Exactly one pointer
//! interaction is active at a time, enforced by the pointer-down dispatch
//! rather than a lock.

use crate::plan::{
    Furniture, GridSettings, IndexedFurniture, Opening, OpeningKind, Point, Room, ViewTransform,
};
use rstar::RTree;
use serde::{Deserialize, Serialize};

/// Sidebar-driven editing mode. Draw and Rect build the room; PlaceOpening
/// is entered by arming a door/window; Normal is everything after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Draw,
    Rect,
    PlaceOpening,
    Normal,
}

/// Resize handle at an edge midpoint of the selected item's local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeHandle {
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
}

/// Current selection, reported in every snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    None,
    Furniture(String),
    Opening(usize),
}

/// Values captured at resize-gesture start. The whole anchored-edge
/// algebra works off these, never off intermediate positions.
#[derive(Debug, Clone, Copy)]
pub struct ResizeStart {
    /// Pointer position in room space at gesture start
    pub pointer: Point,
    pub width: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// The single active pointer interaction
#[derive(Debug, Clone)]
pub enum Interaction {
    Idle,
    DragVertex {
        index: usize,
    },
    ResizeFurniture {
        handle: ResizeHandle,
        start: ResizeStart,
    },
    DragFurniture {
        id: String,
        /// Pointer-to-origin offset captured at gesture start, room cm
        grab_x: f64,
        grab_y: f64,
    },
    DragOpening {
        index: usize,
        /// Along-wall distance from the opening's offset to the grab point
        grab_delta: f64,
    },
    Pan {
        /// Last pointer position, screen px
        last: Point,
    },
}

/// Door/window choice staged for the next placement click
#[derive(Debug, Clone, Copy)]
pub struct OpeningDraft {
    pub kind: OpeningKind,
    pub width: f64,
}

impl Default for OpeningDraft {
    fn default() -> Self {
        Self {
            kind: OpeningKind::Door,
            width: 90.0,
        }
    }
}

/// In-memory state for one editor session
pub struct EditorState {
    pub room: Room,
    pub openings: Vec<Opening>,
    pub furniture: Vec<Furniture>,
    pub grid: GridSettings,
    pub view: ViewTransform,
    pub mode: Mode,
    pub selection: Selection,
    pub interaction: Interaction,
    pub draft: OpeningDraft,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub spatial_index: Option<RTree<IndexedFurniture>>,
    next_furniture_id: u64,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            room: Room::default(),
            openings: Vec::new(),
            furniture: Vec::new(),
            grid: GridSettings::default(),
            view: ViewTransform::default(),
            mode: Mode::Rect,
            selection: Selection::None,
            interaction: Interaction::Idle,
            draft: OpeningDraft::default(),
            canvas_width: 0.0,
            canvas_height: 0.0,
            spatial_index: None,
            next_furniture_id: 0,
        }
    }

    /// Mint a furniture id. Ids persist as opaque strings, so a loaded
    /// layout may already occupy counter values; skip past those.
    pub fn next_id(&mut self) -> String {
        loop {
            self.next_furniture_id += 1;
            let id = format!("item-{}", self.next_furniture_id);
            if self.furniture_by_id(&id).is_none() {
                return id;
            }
        }
    }

    /// Rebuild the furniture spatial index. Call after any furniture
    /// mutation; hit testing must never see a stale tree.
    pub fn rebuild_spatial_index(&mut self) {
        let entries: Vec<IndexedFurniture> = self
            .furniture
            .iter()
            .enumerate()
            .map(|(order, item)| IndexedFurniture::new(order, item))
            .collect();
        self.spatial_index = Some(RTree::bulk_load(entries));
    }

    pub fn furniture_by_id(&self, id: &str) -> Option<&Furniture> {
        self.furniture.iter().find(|f| f.id == id)
    }

    pub fn furniture_by_id_mut(&mut self, id: &str) -> Option<&mut Furniture> {
        self.furniture.iter_mut().find(|f| f.id == id)
    }

    pub fn selected_furniture(&self) -> Option<&Furniture> {
        match &self.selection {
            Selection::Furniture(id) => self.furniture_by_id(id),
            _ => None,
        }
    }

    pub fn selected_furniture_mut(&mut self) -> Option<&mut Furniture> {
        match self.selection.clone() {
            Selection::Furniture(id) => self.furniture_by_id_mut(&id),
            _ => None,
        }
    }

    pub fn selected_opening(&self) -> Option<(usize, &Opening)> {
        match self.selection {
            Selection::Opening(index) => self.openings.get(index).map(|op| (index, op)),
            _ => None,
        }
    }

    pub fn select_furniture(&mut self, id: String) {
        self.selection = Selection::Furniture(id);
    }

    pub fn select_opening(&mut self, index: usize) {
        self.selection = Selection::Opening(index);
    }

    pub fn deselect(&mut self) {
        self.selection = Selection::None;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Center the room in the canvas (zoom-to-fit); no-op without vertices
    pub fn fit_view(&mut self) {
        if let Some((min, max)) = self.room.bounds() {
            self.view
                .fit_bounds(min, max, self.canvas_width, self.canvas_height);
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

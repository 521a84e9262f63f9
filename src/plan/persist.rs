//! Layout persistence
//!
//! The layout file is a flat JSON tree: room vertices and openings,
//! furniture, grid settings. Optional fields default on load, and the
//! room's closed flag is not stored; it is re-derived from the vertex
//! count, so an imported 2-vertex "room" comes back open.

use crate::plan::grid::GridSettings;
use crate::plan::room::Room;
use crate::plan::types::{Furniture, Opening, Point};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// On-disk layout document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default)]
    pub room: RoomData,
    #[serde(default)]
    pub furniture: Vec<Furniture>,
    #[serde(default)]
    pub grid: GridSettings,
}

/// Room section of the layout document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomData {
    /// Vertices as `[x, y]` pairs in cm
    #[serde(default)]
    pub vertices: Vec<[f64; 2]>,
    #[serde(default)]
    pub openings: Vec<Opening>,
}

impl LayoutFile {
    /// Assemble a document from live model state
    pub fn from_model(
        room: &Room,
        openings: &[Opening],
        furniture: &[Furniture],
        grid: &GridSettings,
    ) -> Self {
        Self {
            room: RoomData {
                vertices: room.vertices.iter().map(|v| [v.x, v.y]).collect(),
                openings: openings.to_vec(),
            },
            furniture: furniture.to_vec(),
            grid: grid.clone(),
        }
    }

    /// Rebuild the room; closed is derived, never trusted from the file
    pub fn room(&self) -> Room {
        let vertices: Vec<Point> = self
            .room
            .vertices
            .iter()
            .map(|v| Point::new(v[0], v[1]))
            .collect();
        let closed = vertices.len() >= 3;
        Room { vertices, closed }
    }
}

/// Write a layout document as pretty-printed JSON
pub fn to_file<P: AsRef<Path>>(path: P, layout: &LayoutFile) -> anyhow::Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.as_ref().display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), layout)
        .with_context(|| format!("failed to write {}", path.as_ref().display()))?;
    Ok(())
}

/// Read and parse a layout document
pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<LayoutFile> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open {}", path.as_ref().display()))?;
    let layout = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.as_ref().display()))?;
    Ok(layout)
}

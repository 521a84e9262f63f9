//! Spatial indexing for furniture hit testing
//!
//! An R-tree over world-space furniture envelopes serves as the broad
//! phase for point hit testing; the exact rotated-rectangle narrow phase
//! lives in the editor's hit module.

use crate::plan::collision::corners;
use crate::plan::types::Furniture;
use rstar::{PointDistance, RTreeObject, AABB};

/// Furniture entry in the spatial index
#[derive(Clone, Debug)]
pub struct IndexedFurniture {
    pub id: String,
    /// Position in the furniture list; later items render on top and win
    /// hit-testing ties
    pub order: usize,
    pub bounds: AABB<[f64; 2]>,
}

impl IndexedFurniture {
    pub fn new(order: usize, item: &Furniture) -> Self {
        let cs = corners(item);
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for c in cs {
            min[0] = min[0].min(c.x);
            min[1] = min[1].min(c.y);
            max[0] = max[0].max(c.x);
            max[1] = max[1].max(c.y);
        }
        Self {
            id: item.id.clone(),
            order,
            bounds: AABB::from_corners(min, max),
        }
    }
}

impl RTreeObject for IndexedFurniture {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

impl PointDistance for IndexedFurniture {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.bounds.distance_2(point)
    }
}

//! Default furniture catalog
//!
//! Categories with display colors plus the stock items the client offers.
//! Category order is presentation order, so the table is insertion-ordered.

use indexmap::IndexMap;
use serde::Serialize;

/// Display metadata for a furniture category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub color: &'static str,
}

/// The category table, in presentation order
pub fn categories() -> IndexMap<&'static str, CategoryInfo> {
    IndexMap::from([
        ("bed", CategoryInfo { label: "Bed", color: "#7EB8D4" }),
        ("sofa", CategoryInfo { label: "Seating", color: "#5BA8A0" }),
        ("table", CategoryInfo { label: "Table", color: "#E8B84B" }),
        ("wardrobe", CategoryInfo { label: "Storage", color: "#C4956A" }),
        ("other", CategoryInfo { label: "Other", color: "#9E9E9E" }),
    ])
}

/// Display color for a category, falling back to "other"
pub fn category_color(category: &str) -> &'static str {
    let table = categories();
    table
        .get(category)
        .or_else(|| table.get("other"))
        .map(|c| c.color)
        .unwrap_or("#9E9E9E")
}

/// The full catalog as the JSON the sidebar consumes: the ordered category
/// table plus the stock items
pub fn catalog_json() -> serde_json::Value {
    let mut cats = serde_json::Map::new();
    for (key, info) in categories() {
        cats.insert(
            key.to_string(),
            serde_json::json!({ "label": info.label, "color": info.color }),
        );
    }
    let items: Vec<serde_json::Value> = DEFAULT_FURNITURE
        .iter()
        .map(|&(category, name, width, depth)| {
            serde_json::json!({
                "category": category,
                "name": name,
                "width": width,
                "depth": depth,
            })
        })
        .collect();
    serde_json::json!({ "categories": cats, "items": items })
}

/// Stock catalog items: (category, name, width cm, depth cm)
pub const DEFAULT_FURNITURE: &[(&str, &str, f64, f64)] = &[
    ("bed", "Double Bed", 160.0, 200.0),
    ("bed", "Single Bed", 90.0, 200.0),
    ("bed", "King Bed", 180.0, 200.0),
    ("sofa", "Sofa", 220.0, 90.0),
    ("sofa", "Armchair", 90.0, 85.0),
    ("sofa", "Chair", 50.0, 50.0),
    ("sofa", "Corner Sofa", 250.0, 180.0),
    ("table", "Dining Table", 120.0, 80.0),
    ("table", "Coffee Table", 110.0, 60.0),
    ("table", "Round Table", 100.0, 100.0),
    ("table", "Desk", 140.0, 70.0),
    ("table", "Corner Desk", 160.0, 120.0),
    ("wardrobe", "Wardrobe", 120.0, 60.0),
    ("wardrobe", "Bookshelf", 80.0, 30.0),
    ("wardrobe", "Chest of Drawers", 80.0, 50.0),
    ("other", "Bathtub", 170.0, 75.0),
    ("other", "Toilet", 40.0, 65.0),
    ("other", "Washing Machine", 60.0, 60.0),
];

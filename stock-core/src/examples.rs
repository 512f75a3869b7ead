//! Example stock items used to seed a fresh store.
//!
//! A mix of categories with some items deliberately under their threshold
//! so that the low-stock filter has something to return.

use crate::item::StockItem;

/// Returns the canonical example stock items.
#[must_use]
pub fn example_items() -> Vec<StockItem> {
    vec![
        StockItem::new(
            "ART-001",
            "Watercolor Paint Set",
            "Art Supplies",
            15,
            "set",
            "Art Room Cabinet A",
            10,
        ),
        StockItem::new(
            "ART-002",
            "Sketch Pads",
            "Art Supplies",
            4,
            "pad",
            "Art Room Cabinet B",
            20,
        ),
        StockItem::new(
            "SPT-001",
            "Basketballs",
            "Sports Equipment",
            12,
            "piece",
            "Gym Storage Room",
            8,
        ),
        StockItem::new(
            "SPT-002",
            "Soccer Cones",
            "Sports Equipment",
            6,
            "pack",
            "Field Shed",
            6,
        ),
        StockItem::new(
            "LAB-001",
            "Safety Goggles",
            "Science Lab",
            30,
            "pair",
            "Chemistry Lab Drawer 3",
            25,
        ),
        StockItem::new(
            "LAB-002",
            "Test Tubes",
            "Science Lab",
            40,
            "piece",
            "Chemistry Lab Shelf 1",
            100,
        ),
        StockItem::new(
            "OFF-001",
            "Printer Paper",
            "Office Supplies",
            8,
            "ream",
            "Main Office Closet",
            10,
        ),
    ]
}

/// Teacher usernames accepted as credentials when no others are configured.
pub const EXAMPLE_TEACHERS: &[&str] = &["mrodriguez", "mchen", "principal"];

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// A tracked stock item.
///
/// Field names are the wire format of the `/stock` endpoints. `quantity` may
/// sit below `min_quantity`; that is the low-stock condition, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct StockItem {
    /// Unique, caller-assigned identifier.
    pub item_id: ItemId,
    /// Display name.
    pub name: String,
    /// Free-text category (e.g. `"Art Supplies"`).
    pub category: String,
    /// Units currently on hand.
    ///
    /// Expected to be non-negative, but only the integer type is checked;
    /// negative values are stored as given.
    pub quantity: i64,
    /// Unit of measure (e.g. `"box"`, `"piece"`).
    pub unit: String,
    /// Where the item is stored.
    pub location: String,
    /// Threshold below which the item counts as low stock.
    pub min_quantity: i64,
}

impl StockItem {
    /// Create a stock item.
    #[must_use]
    pub fn new(
        item_id: impl Into<ItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        unit: impl Into<String>,
        location: impl Into<String>,
        min_quantity: i64,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit: unit.into(),
            location: location.into(),
            min_quantity,
        }
    }

    /// Returns `true` when `quantity` is strictly below `min_quantity`.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.min_quantity
    }
}

/// Body of a quantity replacement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct QuantityUpdate {
    /// New absolute quantity. Replaces the stored value.
    pub quantity: i64,
}

impl QuantityUpdate {
    /// Creates a `QuantityUpdate`.
    #[must_use]
    pub const fn new(quantity: i64) -> Self {
        Self { quantity }
    }
}

/// Keep only the items that are below their minimum threshold, preserving order.
#[must_use]
pub fn retain_low_stock(items: Vec<StockItem>) -> Vec<StockItem> {
    items.into_iter().filter(StockItem::is_low_stock).collect()
}

/// Distinct categories, each exactly once, in lexicographic order.
#[must_use]
pub fn sorted_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    categories
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

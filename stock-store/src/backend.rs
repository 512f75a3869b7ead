//! Store abstraction traits.
//!
//! Allows swapping the in-memory store for a document database without
//! changing the request handling logic. Every write is a single conditional
//! operation that reports what it did, so callers never need a separate
//! existence check before writing.

use async_trait::async_trait;
use stock_core::{CredentialId, ItemId, StockItem};

use crate::StoreError;

/// Query filter for [`StockStore::find`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct StockFilter {
    /// Exact category match; `None` matches every item.
    pub category: Option<String>,
}

impl StockFilter {
    /// A filter matching every item.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter matching items whose category equals `category` exactly.
    #[must_use]
    pub fn by_category(category: impl Into<String>) -> Self {
        Self { category: Some(category.into()) }
    }

    /// Returns `true` if `item` passes this filter.
    #[must_use]
    pub fn matches(&self, item: &StockItem) -> bool {
        self.category.as_deref().is_none_or(|c| item.category == c)
    }
}

/// Result of [`StockStore::insert_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The item was stored.
    Inserted,
    /// An item with the same identifier already existed; nothing was written.
    Duplicate,
}

/// Result of [`StockStore::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Number of items whose identifier matched.
    pub matched: u64,
    /// Number of items whose stored value actually changed.
    pub modified: u64,
}

/// Result of [`StockStore::delete_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    /// Number of items removed.
    pub deleted: u64,
}

/// Record store holding stock items keyed by [`ItemId`].
///
/// Implementations must be `Send + Sync` to allow sharing across request tasks.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Return all items passing `filter`, in the store's natural order.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the backend cannot be queried.
    async fn find(&self, filter: &StockFilter) -> Result<Vec<StockItem>, StoreError>;

    /// Return the distinct category values. Order is unspecified.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the backend cannot be queried.
    async fn distinct_categories(&self) -> Result<Vec<String>, StoreError>;

    /// Look up a single item by identifier.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the backend cannot be queried.
    async fn find_one(&self, id: &ItemId) -> Result<Option<StockItem>, StoreError>;

    /// Store `item` unless its identifier is already taken.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the write cannot be performed.
    async fn insert_if_absent(&self, item: StockItem) -> Result<InsertOutcome, StoreError>;

    /// Replace the quantity of the item with identifier `id`.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the write cannot be performed.
    async fn set_quantity(&self, id: &ItemId, quantity: i64) -> Result<UpdateOutcome, StoreError>;

    /// Remove the item with identifier `id`, if present.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the write cannot be performed.
    async fn delete_one(&self, id: &ItemId) -> Result<DeleteOutcome, StoreError>;
}

/// Opaque lookup of teacher credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns `true` if `id` is a known credential.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the backend cannot be queried.
    async fn contains(&self, id: &CredentialId) -> Result<bool, StoreError>;
}

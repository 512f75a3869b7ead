//! In-memory store backends.
//!
//! Items live in an insertion-ordered map so listings come back in the order
//! items were created, like a document collection's natural order.

use std::{
    collections::{BTreeSet, HashSet},
    sync::RwLock,
};

use async_trait::async_trait;
use indexmap::IndexMap;
use stock_core::{CredentialId, ItemId, StockItem};

use crate::{
    CredentialStore, DeleteOutcome, InsertOutcome, StockFilter, StockStore, StoreError,
    UpdateOutcome,
};

/// Thread-safe in-memory stock collection.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    items: RwLock<IndexMap<ItemId, StockItem>>,
}

impl InMemoryStockStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    ///
    /// Later items with a duplicate identifier are skipped.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = StockItem>) -> Self {
        let mut map = IndexMap::new();
        for item in items {
            map.entry(item.item_id.clone()).or_insert(item);
        }
        Self { items: RwLock::new(map) }
    }

    /// Number of stored items.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let items = self.items.read().expect("stock store read lock poisoned");
        items.len()
    }

    /// Returns `true` if the store holds no items.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StockStore for InMemoryStockStore {
    async fn find(&self, filter: &StockFilter) -> Result<Vec<StockItem>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let items = self.items.read().expect("stock store read lock poisoned");
        Ok(items.values().filter(|i| filter.matches(i)).cloned().collect())
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let items = self.items.read().expect("stock store read lock poisoned");
        let distinct: BTreeSet<&str> = items.values().map(|i| i.category.as_str()).collect();
        Ok(distinct.into_iter().map(str::to_owned).collect())
    }

    async fn find_one(&self, id: &ItemId) -> Result<Option<StockItem>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let items = self.items.read().expect("stock store read lock poisoned");
        Ok(items.get(id).cloned())
    }

    async fn insert_if_absent(&self, item: StockItem) -> Result<InsertOutcome, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut items = self.items.write().expect("stock store write lock poisoned");
        if items.contains_key(&item.item_id) {
            return Ok(InsertOutcome::Duplicate);
        }
        tracing::debug!(item_id = %item.item_id, "inserting stock item");
        items.insert(item.item_id.clone(), item);
        Ok(InsertOutcome::Inserted)
    }

    async fn set_quantity(&self, id: &ItemId, quantity: i64) -> Result<UpdateOutcome, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut items = self.items.write().expect("stock store write lock poisoned");
        let Some(item) = items.get_mut(id) else {
            return Ok(UpdateOutcome::default());
        };
        // A write of the current value matches but does not modify.
        if item.quantity == quantity {
            return Ok(UpdateOutcome { matched: 1, modified: 0 });
        }
        item.quantity = quantity;
        Ok(UpdateOutcome { matched: 1, modified: 1 })
    }

    async fn delete_one(&self, id: &ItemId) -> Result<DeleteOutcome, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let removed = self
            .items
            .write()
            .expect("stock store write lock poisoned")
            .shift_remove(id)
            .is_some();
        Ok(DeleteOutcome { deleted: u64::from(removed) })
    }
}

/// Fixed set of known teacher credentials.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    known: HashSet<String>,
}

impl InMemoryCredentialStore {
    /// Create a store accepting exactly the given identifiers.
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { known: ids.into_iter().map(Into::into).collect() }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn contains(&self, id: &CredentialId) -> Result<bool, StoreError> {
        Ok(self.known.contains(id.as_str()))
    }
}

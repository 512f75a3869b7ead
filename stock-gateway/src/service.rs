//! Stock item request handling, independent of the HTTP layer.
//!
//! Each operation runs the credential gate (for mutations) and then a single
//! store call. Conflict and not-found are derived from the outcome the store
//! reports for its conditional write, so there is no gap between an
//! existence check and the write.

use std::sync::Arc;

use stock_core::{
    examples::example_items, retain_low_stock, sorted_categories, CredentialId, ItemId, StockItem,
};
use stock_store::{
    CredentialStore, InMemoryCredentialStore, InMemoryStockStore, InsertOutcome, StockFilter,
    StockStore,
};
use tracing::{error, info, warn};

use crate::{
    config::{GatewayConfig, UpdatePolicy},
    error::{AuthFailure, GatewayError},
};

/// The stock resource handler.
#[derive(Clone)]
pub struct StockService {
    items: Arc<dyn StockStore>,
    credentials: Arc<dyn CredentialStore>,
    update_policy: UpdatePolicy,
}

impl std::fmt::Debug for StockService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockService")
            .field("update_policy", &self.update_policy)
            .finish_non_exhaustive()
    }
}

impl StockService {
    /// Create a service over the given stores with the default update policy.
    #[must_use]
    pub fn new(items: Arc<dyn StockStore>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            items,
            credentials,
            update_policy: UpdatePolicy::default(),
        }
    }

    /// Build a service backed by in-memory stores as described by `config`.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        let items = if config.seed_examples {
            InMemoryStockStore::with_items(example_items())
        } else {
            InMemoryStockStore::new()
        };
        let credentials = InMemoryCredentialStore::new(config.teachers.iter().cloned());
        Self::new(Arc::new(items), Arc::new(credentials))
            .with_update_policy(config.update_policy)
    }

    /// Replace the update policy.
    #[must_use]
    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.update_policy = policy;
        self
    }

    /// List items, optionally restricted to one category and/or to low stock.
    ///
    /// An empty `category` is treated as no filter.
    ///
    /// # Errors
    /// Returns [`GatewayError::Store`] if the store cannot be queried.
    pub async fn list_items(
        &self,
        category: Option<&str>,
        low_stock: bool,
    ) -> Result<Vec<StockItem>, GatewayError> {
        let filter = match category {
            Some(c) if !c.is_empty() => StockFilter::by_category(c),
            _ => StockFilter::all(),
        };
        let items = self.items.find(&filter).await?;
        Ok(if low_stock { retain_low_stock(items) } else { items })
    }

    /// Distinct categories, sorted.
    ///
    /// # Errors
    /// Returns [`GatewayError::Store`] if the store cannot be queried.
    pub async fn list_categories(&self) -> Result<Vec<String>, GatewayError> {
        let categories = self.items.distinct_categories().await?;
        Ok(sorted_categories(categories))
    }

    /// Fetch a single item.
    ///
    /// # Errors
    /// Returns [`GatewayError::NotFound`] if no item has identifier `id`.
    pub async fn get_item(&self, id: &ItemId) -> Result<StockItem, GatewayError> {
        self.items
            .find_one(id)
            .await?
            .ok_or_else(|| GatewayError::NotFound(id.clone()))
    }

    /// Create `item`. Returns a confirmation message, not the record.
    ///
    /// # Errors
    /// Returns [`GatewayError::Unauthorized`] if `credential` is missing or
    /// unknown, and [`GatewayError::Conflict`] if the identifier is taken.
    pub async fn create_item(
        &self,
        item: StockItem,
        credential: Option<&str>,
    ) -> Result<String, GatewayError> {
        let teacher = self.authorize(credential).await?;
        let id = item.item_id.clone();
        match self.items.insert_if_absent(item).await? {
            InsertOutcome::Inserted => {
                info!(item_id = %id, teacher = %teacher, "stock item created");
                Ok(format!("Stock item {id} created successfully"))
            }
            InsertOutcome::Duplicate => {
                warn!(item_id = %id, "rejected duplicate stock item");
                Err(GatewayError::Conflict(id))
            }
        }
    }

    /// Replace the quantity of item `id`.
    ///
    /// # Errors
    /// Returns [`GatewayError::Unauthorized`] if `credential` is missing or
    /// unknown, [`GatewayError::NotFound`] if the item does not exist, and
    /// [`GatewayError::Internal`] if the store fails or, under
    /// [`UpdatePolicy::Strict`], reports that nothing was modified.
    pub async fn update_quantity(
        &self,
        id: &ItemId,
        quantity: i64,
        credential: Option<&str>,
    ) -> Result<String, GatewayError> {
        let teacher = self.authorize(credential).await?;
        let outcome = self.items.set_quantity(id, quantity).await.map_err(|e| {
            error!(item_id = %id, error = %e, "quantity update failed");
            GatewayError::Internal("Failed to update stock item".to_owned())
        })?;

        if outcome.matched == 0 {
            return Err(GatewayError::NotFound(id.clone()));
        }
        if outcome.modified == 0 && self.update_policy == UpdatePolicy::Strict {
            error!(item_id = %id, quantity, "quantity update modified nothing");
            return Err(GatewayError::Internal("Failed to update stock item".to_owned()));
        }

        info!(item_id = %id, quantity, teacher = %teacher, "stock quantity updated");
        Ok(format!("Stock item {id} quantity updated to {quantity}"))
    }

    /// Delete item `id`.
    ///
    /// # Errors
    /// Returns [`GatewayError::Unauthorized`] if `credential` is missing or
    /// unknown, [`GatewayError::NotFound`] if the item does not exist, and
    /// [`GatewayError::Internal`] if the store fails.
    pub async fn delete_item(
        &self,
        id: &ItemId,
        credential: Option<&str>,
    ) -> Result<String, GatewayError> {
        let teacher = self.authorize(credential).await?;
        let outcome = self.items.delete_one(id).await.map_err(|e| {
            error!(item_id = %id, error = %e, "stock item delete failed");
            GatewayError::Internal("Failed to delete stock item".to_owned())
        })?;

        if outcome.deleted == 0 {
            return Err(GatewayError::NotFound(id.clone()));
        }

        info!(item_id = %id, teacher = %teacher, "stock item deleted");
        Ok(format!("Stock item {id} deleted successfully"))
    }

    /// Credential gate for mutations. Runs before any item is read or written.
    async fn authorize(&self, credential: Option<&str>) -> Result<CredentialId, GatewayError> {
        let Some(id) = credential.and_then(|c| CredentialId::new(c).ok()) else {
            warn!("mutation attempted without credential");
            return Err(GatewayError::Unauthorized(AuthFailure::Missing));
        };
        if !self.credentials.contains(&id).await? {
            warn!(credential = %id, "mutation attempted with unknown credential");
            return Err(GatewayError::Unauthorized(AuthFailure::Unknown));
        }
        Ok(id)
    }
}

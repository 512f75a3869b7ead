//! Axum route handlers for the `/stock` resource.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use stock_core::{ItemId, QuantityUpdate, StockItem};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::parse_flag, error::GatewayError, service::StockService};

// ── Shared state ─────────────────────────────────────────────────────────────

type Service = Arc<StockService>;

// ── Request / response types ──────────────────────────────────────────────────

/// Query parameters of `GET /stock`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub low_stock: Option<bool>,
}

/// Accepts the same boolean spellings as the configuration flags.
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_flag(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid boolean '{raw}'")))
        })
        .transpose()
}

/// Credential query parameter of the mutating endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    pub teacher_username: Option<String>,
}

/// Confirmation returned by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given service.
pub fn create_router(service: Service) -> Router {
    Router::new()
        .route("/stock", get(list_items).post(create_item))
        .route("/stock/", get(list_items).post(create_item))
        .route(
            "/stock/categories",
            get(list_categories)
                .put(update_categories_item)
                .delete(delete_categories_item),
        )
        .route(
            "/stock/{item_id}",
            get(get_item).put(update_quantity).delete(delete_item),
        )
        .route("/health", get(health))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /stock` — list items, filtered by `category` and `low_stock`.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the query string is malformed.
pub async fn list_items(
    State(service): State<Service>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<StockItem>>, GatewayError> {
    let Query(query) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let items = service
        .list_items(query.category.as_deref(), query.low_stock.unwrap_or(false))
        .await?;
    Ok(Json(items))
}

/// `GET /stock/categories` — sorted distinct categories.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the store cannot be queried.
pub async fn list_categories(
    State(service): State<Service>,
) -> Result<Json<Vec<String>>, GatewayError> {
    Ok(Json(service.list_categories().await?))
}

// The static `/stock/categories` route shadows `/stock/{item_id}` for an item
// whose id is literally `categories`; PUT and DELETE still have to reach it.

/// `PUT /stock/categories?teacher_username=` — quantity update of the item `categories`.
///
/// # Errors
/// See [`update_quantity`].
pub async fn update_categories_item(
    state: State<Service>,
    auth: Query<AuthQuery>,
    update: Json<QuantityUpdate>,
) -> Result<Json<MessageResponse>, GatewayError> {
    update_quantity(state, Path(CATEGORIES_ITEM_ID.to_owned()), auth, update).await
}

/// `DELETE /stock/categories?teacher_username=` — removes the item `categories`.
///
/// # Errors
/// See [`delete_item`].
pub async fn delete_categories_item(
    state: State<Service>,
    auth: Query<AuthQuery>,
) -> Result<Json<MessageResponse>, GatewayError> {
    delete_item(state, Path(CATEGORIES_ITEM_ID.to_owned()), auth).await
}

const CATEGORIES_ITEM_ID: &str = "categories";

/// `GET /stock/:item_id` — fetch one item.
///
/// # Errors
/// Returns [`GatewayError::NotFound`] if the item does not exist.
pub async fn get_item(
    State(service): State<Service>,
    Path(item_id): Path<String>,
) -> Result<Json<StockItem>, GatewayError> {
    Ok(Json(service.get_item(&ItemId::from(item_id)).await?))
}

/// `POST /stock?teacher_username=` — create an item.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] without a known credential and
/// [`GatewayError::Conflict`] if the identifier exists.
pub async fn create_item(
    State(service): State<Service>,
    Query(auth): Query<AuthQuery>,
    Json(item): Json<StockItem>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let message = service.create_item(item, auth.teacher_username.as_deref()).await?;
    Ok(Json(MessageResponse { message }))
}

/// `PUT /stock/:item_id?teacher_username=` — replace the quantity.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`], [`GatewayError::NotFound`] or
/// [`GatewayError::Internal`]; see [`StockService::update_quantity`].
pub async fn update_quantity(
    State(service): State<Service>,
    Path(item_id): Path<String>,
    Query(auth): Query<AuthQuery>,
    Json(update): Json<QuantityUpdate>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let message = service
        .update_quantity(
            &ItemId::from(item_id),
            update.quantity,
            auth.teacher_username.as_deref(),
        )
        .await?;
    Ok(Json(MessageResponse { message }))
}

/// `DELETE /stock/:item_id?teacher_username=` — remove an item.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] or [`GatewayError::NotFound`].
pub async fn delete_item(
    State(service): State<Service>,
    Path(item_id): Path<String>,
    Query(auth): Query<AuthQuery>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let message = service
        .delete_item(&ItemId::from(item_id), auth.teacher_username.as_deref())
        .await?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use stock_store::{InMemoryCredentialStore, InMemoryStockStore};
    use tower::ServiceExt;

    fn test_service() -> Service {
        Arc::new(StockService::new(
            Arc::new(InMemoryStockStore::with_items([StockItem::new(
                "A1",
                "Sketch Pads",
                "Art Supplies",
                2,
                "pad",
                "Art Room",
                5,
            )])),
            Arc::new(InMemoryCredentialStore::new(["mchen"])),
        ))
    }

    fn mixed_stock_service() -> Service {
        Arc::new(StockService::new(
            Arc::new(InMemoryStockStore::with_items([
                StockItem::new("A1", "Sketch Pads", "Art Supplies", 2, "pad", "Art Room", 5),
                StockItem::new("S1", "Footballs", "Sports Equipment", 9, "piece", "Gym", 3),
            ])),
            Arc::new(InMemoryCredentialStore::new(["mchen"])),
        ))
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        }
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let app = create_router(test_service());
        let req = match Request::builder().uri("/health").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn low_stock_flag_accepts_boolean_spellings_and_rejects_others() {
        let app = create_router(test_service());
        let req = match Request::builder().uri("/stock?low_stock=perhaps").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(
            body["detail"].as_str().is_some_and(|d| d.starts_with("invalid request")),
            "unexpected body {body}"
        );

        for (flag, expected_len) in [
            ("1", 1),
            ("yes", 1),
            ("ON", 1),
            ("True", 1),
            ("0", 2),
            ("no", 2),
            ("off", 2),
            ("false", 2),
        ] {
            let app = create_router(mixed_stock_service());
            let req = match Request::builder()
                .uri(format!("/stock?low_stock={flag}"))
                .body(Body::empty())
            {
                Ok(r) => r,
                Err(e) => panic!("failed to build request: {e}"),
            };
            let resp = match app.oneshot(req).await {
                Ok(r) => r,
                Err(e) => panic!("handler error: {e}"),
            };
            assert_eq!(resp.status(), StatusCode::OK, "low_stock={flag} must be accepted");
            let body = body_json(resp).await;
            assert_eq!(body.as_array().map(Vec::len), Some(expected_len), "low_stock={flag}");
        }
    }

    #[tokio::test]
    async fn trailing_slash_lists_items() {
        let app = create_router(test_service());
        let req = match Request::builder().uri("/stock/").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["item_id"], "A1");
    }

    #[test]
    fn message_response_serializes_message_field() {
        let resp = MessageResponse { message: "Stock item A1 deleted successfully".to_owned() };
        let json = match serde_json::to_string(&resp) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"message":"Stock item A1 deleted successfully"}"#);
    }
}

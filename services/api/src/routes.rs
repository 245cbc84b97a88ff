use crate::infra::{AppState, ListingService};
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use pg_finder::error::AppError;
use pg_finder::listings::{
    derive, limit_from_query, FilterStateStore, Listing, ListingId, LocationSummary,
    MemoryNavigator, SortKey,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_SIMILAR_LIMIT: usize = 3;

#[derive(Debug, Serialize)]
pub(crate) struct ListingsResponse {
    /// Canonical form of the filter query that produced this page.
    pub(crate) query: String,
    pub(crate) sort: SortKey,
    pub(crate) count: usize,
    pub(crate) total: usize,
    pub(crate) listings: Vec<Listing>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SavedToggleResponse {
    pub(crate) listing_id: ListingId,
    pub(crate) saved: bool,
}

pub(crate) fn listing_router(service: Arc<ListingService>) -> Router {
    Router::new()
        .route("/api/v1/listings", get(search_listings))
        .route("/api/v1/listings/featured", get(featured_listings))
        .route("/api/v1/listings/:listing_id", get(listing_detail))
        .route("/api/v1/listings/:listing_id/similar", get(similar_listings))
        .route("/api/v1/locations", get(locations))
        .route("/api/v1/saved", get(saved_listings))
        .route("/api/v1/saved/:listing_id/toggle", post(toggle_saved))
        .with_state(service)
}

pub(crate) fn with_listing_routes(service: Arc<ListingService>) -> Router {
    listing_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn search_listings(
    State(service): State<Arc<ListingService>>,
    RawQuery(raw): RawQuery,
) -> Json<ListingsResponse> {
    let raw = raw.unwrap_or_default();
    let limit = limit_from_query(&raw);
    let store = FilterStateStore::new(MemoryNavigator::new(raw), service.bounds);
    let listings = derive(
        service.catalog.listings(),
        store.criteria(),
        store.sort_key(),
        limit,
    );

    debug!(query = store.query_string(), matches = listings.len(), "listing search");

    Json(ListingsResponse {
        query: store.query_string().to_string(),
        sort: store.sort_key(),
        count: listings.len(),
        total: service.catalog.len(),
        listings,
    })
}

pub(crate) async fn featured_listings(
    State(service): State<Arc<ListingService>>,
) -> Json<Vec<Listing>> {
    Json(service.catalog.featured().into_iter().cloned().collect())
}

pub(crate) async fn listing_detail(
    State(service): State<Arc<ListingService>>,
    Path(listing_id): Path<u32>,
) -> Result<Json<Listing>, AppError> {
    let id = ListingId(listing_id);
    service
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ListingNotFound(id))
}

pub(crate) async fn similar_listings(
    State(service): State<Arc<ListingService>>,
    Path(listing_id): Path<u32>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<Listing>>, AppError> {
    let id = ListingId(listing_id);
    if service.catalog.get(id).is_none() {
        return Err(AppError::ListingNotFound(id));
    }

    let limit = raw
        .as_deref()
        .and_then(limit_from_query)
        .unwrap_or(DEFAULT_SIMILAR_LIMIT);
    Ok(Json(
        service
            .catalog
            .similar(id, limit)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

pub(crate) async fn locations(
    State(service): State<Arc<ListingService>>,
) -> Json<Vec<LocationSummary>> {
    Json(service.catalog.locations())
}

pub(crate) async fn saved_listings(
    State(service): State<Arc<ListingService>>,
) -> Result<Json<Vec<Listing>>, AppError> {
    Ok(Json(service.saved.details(&service.catalog)?))
}

pub(crate) async fn toggle_saved(
    State(service): State<Arc<ListingService>>,
    Path(listing_id): Path<u32>,
) -> Result<Json<SavedToggleResponse>, AppError> {
    let id = ListingId(listing_id);
    if service.catalog.get(id).is_none() {
        return Err(AppError::ListingNotFound(id));
    }

    let saved = service.saved.toggle(id)?;
    Ok(Json(SavedToggleResponse {
        listing_id: id,
        saved,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use pg_finder::listings::{Catalog, MemoryStorage, PriceBounds};
    use serde_json::Value;
    use tower::ServiceExt;

    fn service() -> Arc<ListingService> {
        Arc::new(ListingService::new(
            Catalog::seeded(),
            Arc::new(MemoryStorage::default()),
            PriceBounds::default(),
        ))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn search_handler_applies_filters_sort_and_limit() {
        let Json(body) = search_listings(
            State(service()),
            RawQuery(Some("roomType=Single&sort=price_high&utm=1&limit=2".to_string())),
        )
        .await;

        assert_eq!(body.query, "roomType=single&sort=price_high");
        assert_eq!(body.sort, SortKey::PriceHigh);
        assert_eq!(body.count, 2);
        assert_eq!(body.total, 8);
        assert_eq!(body.listings[0].id, ListingId(4));
        assert_eq!(body.listings[1].id, ListingId(8));
    }

    #[tokio::test]
    async fn search_route_accepts_repeated_amenities() {
        let (status, body) = get_json(
            listing_router(service()),
            "/api/v1/listings?amenities=Gym&amenities=Parking",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "amenities=Gym&amenities=Parking");
        let ids: Vec<u64> = body["listings"]
            .as_array()
            .expect("listings array")
            .iter()
            .map(|l| l["id"].as_u64().expect("numeric id"))
            .collect();
        assert_eq!(ids, vec![8, 3]);
    }

    #[tokio::test]
    async fn malformed_limit_falls_back_to_all_results() {
        for uri in ["/api/v1/listings?limit=", "/api/v1/listings?limit=x&roomType=single"] {
            let (status, body) = get_json(listing_router(service()), uri).await;

            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["count"], body["listings"].as_array().map(Vec::len).unwrap_or(0));
        }

        let (_, body) = get_json(listing_router(service()), "/api/v1/listings?limit=").await;
        assert_eq!(body["count"], 8);
        assert_eq!(body["query"], "");

        let (_, body) =
            get_json(listing_router(service()), "/api/v1/listings?limit=x&roomType=single").await;
        assert_eq!(body["count"], 4);
    }

    #[tokio::test]
    async fn listing_detail_includes_landlord_and_reviews() {
        let (status, body) = get_json(listing_router(service()), "/api/v1/listings/4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Royal Residency PG");
        assert_eq!(body["reviewCount"], 34);
        assert_eq!(body["verified"], true);
        assert_eq!(body["landlord"]["name"], "Ajay Desai");
        assert_eq!(body["reviews"][0]["userName"], "Vikram Kapoor");
        assert!(body["description"]
            .as_str()
            .expect("description")
            .starts_with("Royal Residency PG"));
    }

    #[tokio::test]
    async fn unknown_listing_returns_not_found() {
        let (status, body) = get_json(listing_router(service()), "/api/v1/listings/404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("404"));
    }

    #[tokio::test]
    async fn toggling_saved_listings_round_trips() {
        let service = service();

        let Json(first) = toggle_saved(State(service.clone()), Path(2))
            .await
            .expect("toggle on");
        assert!(first.saved);

        let Json(saved) = saved_listings(State(service.clone()))
            .await
            .expect("saved list");
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, ListingId(2));

        let Json(second) = toggle_saved(State(service.clone()), Path(2))
            .await
            .expect("toggle off");
        assert!(!second.saved);

        let err = toggle_saved(State(service), Path(999))
            .await
            .expect_err("unknown listing rejected");
        assert!(matches!(err, AppError::ListingNotFound(ListingId(999))));
    }

    #[tokio::test]
    async fn similar_route_defaults_to_three() {
        let (status, body) =
            get_json(listing_router(service()), "/api/v1/listings/1/similar").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().expect("array").len(), 3);

        let (status, body) =
            get_json(listing_router(service()), "/api/v1/listings/1/similar?limit=oops").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().expect("array").len(), 3);
    }
}

//! HTTP server mode for REST API access to content listings

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::content::{ContentClient, EntryQuery, SortSpec, DEFAULT_PER_PAGE};
use crate::error::{Error, Result};

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    client: Arc<ContentClient>,
}

/// Query parameters for the listing endpoint
#[derive(Debug, Deserialize)]
struct ListParams {
    /// Pagination mode: `page` (default), `limit-offset`, or `all`
    #[serde(rename = "type", default)]
    mode: Option<String>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    paginate: Option<u32>,
    #[serde(default)]
    limit: Option<u32>,
    #[serde(default)]
    offset: Option<u32>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    sort: Option<String>,
}

/// Query parameters for the single-entry endpoint
#[derive(Debug, Deserialize)]
struct EntryParams {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    translation_locale: Option<String>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Start the HTTP server
pub async fn serve(client: ContentClient, port: u16) -> Result<()> {
    let state = AppState {
        client: Arc::new(client),
    };

    // Allow all origins for development use
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/entries/:collection", get(list_entries))
        .route("/entries/:collection/:uuid", get(get_entry))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Other(format!("Server error: {e}")))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "name": crate::NAME,
        "version": crate::VERSION,
    }))
}

async fn list_entries(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Query(params): Query<ListParams>,
) -> Response {
    match fetch_listing(&state.client, &collection, params).await {
        Ok(payload) => (StatusCode::OK, Json(ApiResponse::success(payload))).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn fetch_listing(
    client: &ContentClient,
    collection: &str,
    params: ListParams,
) -> Result<Value> {
    match params.mode.as_deref().unwrap_or("page") {
        "limit-offset" => {
            let limit = params.limit.unwrap_or(DEFAULT_PER_PAGE);
            let offset = params.offset.unwrap_or(0);
            let slice = client
                .entries_slice(collection, limit, offset, params.locale.as_deref())
                .await?;

            Ok(json!({
                "data": slice.items,
                "limit": slice.limit,
                "offset": slice.offset,
                "next_offset": slice.next_offset(),
                "has_more": slice.has_more(),
            }))
        }
        "all" => {
            let items = client
                .all_entries(collection, params.locale.as_deref())
                .await?;
            Ok(json!({ "data": items }))
        }
        _ => {
            let mut query = EntryQuery::new()
                .page(params.page.unwrap_or(1))
                .per_page(params.paginate.unwrap_or(DEFAULT_PER_PAGE));
            if let Some(locale) = params.locale {
                query = query.locale(locale);
            }
            if let Some(category) = params.category {
                query = query.category(category);
            }
            if let Some(search) = params.search {
                query = query.search(search);
            }
            if let Some(sort) = &params.sort {
                let spec: SortSpec = sort.parse()?;
                query = query.sort_spec(spec);
            }

            let page = client.entries(collection, &query).await?;
            Ok(json!({
                "data": page.items,
                "pagination": {
                    "page": page.page,
                    "per_page": page.per_page,
                    "total": page.total,
                    "total_pages": page.total_pages(),
                    "has_more": page.has_more(),
                    "window": page.window(),
                },
            }))
        }
    }
}

async fn get_entry(
    State(state): State<AppState>,
    Path((collection, uuid)): Path<(String, String)>,
    Query(params): Query<EntryParams>,
) -> Response {
    let result = match params.translation_locale.as_deref() {
        Some(target_locale) => {
            state
                .client
                .translation(&collection, &uuid, target_locale)
                .await
        }
        None => {
            state
                .client
                .entry(&collection, &uuid, params.locale.as_deref())
                .await
        }
    };

    match result {
        Ok(entry) => (StatusCode::OK, Json(ApiResponse::success(entry))).into_response(),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &Error) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        match err {
            Error::InvalidConfigValue { .. } => StatusCode::BAD_REQUEST,
            Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::Timeout { .. }
            | Error::RateLimited { .. }
            | Error::MaxRetriesExceeded { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    };

    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}

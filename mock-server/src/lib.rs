use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use uuid::Uuid;

/// Photo id the stub answers 404 for.
pub const MISSING_PHOTO_ID: &str = "missing";

const TOTAL_RESULTS: u64 = 100;
const MAX_PER_PAGE: u32 = 30;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub color: Option<String>,
    pub description: Option<String>,
    pub urls: PhotoUrls,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<Photo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default)]
struct ServerState {
    /// When set, only this exact key is accepted.
    access_key: Option<String>,
}

type Params = Query<HashMap<String, String>>;

/// Router that accepts any non-empty `Client-ID` credential.
pub fn app() -> Router {
    router(ServerState::default())
}

/// Router that only accepts `Client-ID <access_key>`.
pub fn app_with_access_key(access_key: &str) -> Router {
    router(ServerState {
        access_key: Some(access_key.to_string()),
    })
}

fn router(state: ServerState) -> Router {
    let state = Arc::new(state);
    Router::new()
        .route("/search/photos", get(search_photos))
        .route("/photos", get(list_photos))
        .route("/photos/curated", get(curated_photos))
        .route("/photos/random", get(random_photo))
        .route("/photos/{id}", get(get_photo))
        .route("/photos/{id}/statistics", get(photo_statistics))
        .route("/photos/{id}/download", get(download_photo))
        .layer(middleware::from_fn_with_state(state, require_client_id))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn require_client_id(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Response {
    let key = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Client-ID "))
        .map(str::trim)
        .filter(|key| !key.is_empty());

    let authorized = match (&state.access_key, key) {
        (_, None) => false,
        (Some(expected), Some(key)) => expected == key,
        (None, Some(_)) => true,
    };
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "OAuth error: The access token is invalid");
    }
    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    let body = ErrorBody {
        errors: vec![message.to_string()],
    };
    (status, Json(body)).into_response()
}

fn number(params: &HashMap<String, String>, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn per_page(params: &HashMap<String, String>) -> u32 {
    number(params, "per_page", 10).clamp(1, MAX_PER_PAGE)
}

fn photo(id: String, width: u32, height: u32) -> Photo {
    let base = format!("https://images.example.test/{id}");
    Photo {
        urls: PhotoUrls {
            raw: base.clone(),
            full: format!("{base}?q=85"),
            regular: format!("{base}?w=1080"),
            small: format!("{base}?w=400"),
            thumb: format!("{base}?w=200"),
        },
        id,
        width,
        height,
        color: Some("#262626".to_string()),
        description: None,
    }
}

fn page_of(prefix: &str, params: &HashMap<String, String>) -> Vec<Photo> {
    let page = number(params, "page", 1);
    (0..per_page(params))
        .map(|n| photo(format!("{prefix}-{page}-{n}"), 4000, 3000))
        .collect()
}

fn random_id() -> String {
    Uuid::new_v4().simple().to_string()
}

async fn search_photos(Query(params): Params) -> Response {
    if params.get("query").is_none_or(|q| q.is_empty()) {
        return error(StatusCode::BAD_REQUEST, "query is missing");
    }
    let per_page = per_page(&params);
    let results = SearchResults {
        total: TOTAL_RESULTS,
        total_pages: TOTAL_RESULTS.div_ceil(u64::from(per_page)),
        results: page_of("search", &params),
    };
    Json(results).into_response()
}

async fn list_photos(Query(params): Params) -> Json<Vec<Photo>> {
    let order_by = params.get("order_by").map_or("latest", String::as_str);
    Json(page_of(order_by, &params))
}

async fn curated_photos(Query(params): Params) -> Json<Vec<Photo>> {
    Json(page_of("curated", &params))
}

async fn random_photo(Query(params): Params) -> Json<Value> {
    let w = number(&params, "w", 4000);
    let h = number(&params, "h", 3000);
    match params.get("count").and_then(|c| c.parse::<u32>().ok()) {
        Some(count) => {
            let photos: Vec<Photo> = (0..count.min(MAX_PER_PAGE))
                .map(|_| photo(random_id(), w, h))
                .collect();
            Json(serde_json::json!(photos))
        }
        None => Json(serde_json::json!(photo(random_id(), w, h))),
    }
}

async fn get_photo(Path(id): Path<String>, Query(params): Params) -> Response {
    if id == MISSING_PHOTO_ID {
        return error(StatusCode::NOT_FOUND, "Couldn't find Photo");
    }
    let w = number(&params, "w", 4000);
    let h = number(&params, "h", 3000);
    Json(photo(id, w, h)).into_response()
}

async fn photo_statistics(Path(id): Path<String>, Query(params): Params) -> Response {
    if id == MISSING_PHOTO_ID {
        return error(StatusCode::NOT_FOUND, "Couldn't find Photo");
    }
    let resolution = params.get("resolution").map_or("days", String::as_str);
    let quantity = number(&params, "quantity", 30);
    let series = |per_day: u64| {
        let values: Vec<Value> = (1..=u64::from(quantity))
            .map(|day| serde_json::json!({ "date": format!("day-{day}"), "value": per_day }))
            .collect();
        serde_json::json!({
            "total": per_day * u64::from(quantity),
            "historical": { "resolution": resolution, "quantity": quantity, "values": values },
        })
    };
    Json(serde_json::json!({
        "id": id,
        "downloads": series(3),
        "views": series(40),
        "likes": series(1),
    }))
    .into_response()
}

async fn download_photo(Path(id): Path<String>) -> Response {
    if id == MISSING_PHOTO_ID {
        return error(StatusCode::NOT_FOUND, "Couldn't find Photo");
    }
    Json(serde_json::json!({ "url": format!("https://images.example.test/{id}?dl=1") }))
        .into_response()
}

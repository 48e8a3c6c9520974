//! In-process stand-in for the beets backend API.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const LIBRARY_TOTAL: u64 = 120;

/// Start the stub on an ephemeral port and return its base URL.
pub async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router()).await.ok();
    });
    format!("http://{}", addr)
}

fn router() -> Router {
    Router::new()
        .route("/api/library", get(library))
        .route("/api/search", get(search))
        .route("/api/artists", get(artists))
        .route("/api/albums", get(albums))
        .route("/api/item/:id", get(item))
        .route("/api/albumart/:id", get(album_art))
        .route("/api/command", post(command))
        .route("/api/import", post(import))
        .route("/api/connection/mode", get(connection_mode))
        .route("/api/beets/check_paths", get(check_paths))
        .route("/api/beets/info", get(info))
        .route("/api/beets/plugins", get(plugins))
        .route("/api/beets/config", get(config).post(update_config))
        .route("/api/beets/reset", post(reset))
        .route("/api/beets/initialize", post(initialize))
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

/// Items are titled `{sort}-{page}-{n}` so tests can see what was asked for.
async fn library(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let page: u64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: u64 = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(50);
    let sort = params.get("sort").cloned().unwrap_or_default();

    let start = (page - 1) * limit;
    let end = (start + limit).min(LIBRARY_TOTAL);
    let items: Vec<Value> = (start..end.max(start))
        .map(|i| {
            json!({
                "id": i + 1,
                "title": format!("{}-{}-{}", sort, page, i + 1),
                "artist": "Stub Artist",
                "album": "Stub Album",
                "year": 2001,
                "length": 200.0,
                "length_formatted": "3:20",
                "format": "MP3",
                "bitrate": 256000
            })
        })
        .collect();
    Json(json!({ "items": items, "total": LIBRARY_TOTAL }))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let query = params.get("query").cloned().unwrap_or_default();
    if query == "boom" {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "database is locked").into_response();
    }
    Json(json!({ "results": [{ "id": 9, "title": query }] })).into_response()
}

async fn artists() -> impl IntoResponse {
    Json(json!({ "artists": ["Low", null, "", "Miles Davis"] }))
}

async fn albums(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let artist = params.get("artist").cloned().unwrap_or_default();
    Json(json!({
        "albums": [
            { "album": "Kind of Blue", "artist": artist, "albumartist": artist, "year": 1959 },
            { "album": "Sketches of Spain", "artist": artist, "albumartist": null, "year": 1960 }
        ]
    }))
}

async fn item(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 42 {
        Json(json!({
            "id": 42,
            "title": "X",
            "artist": "Y",
            "album": "Z",
            "track": 3,
            "length": 245.2,
            "bitrate": 320000,
            "path": "/music/Y/Z/03 X.flac"
        }))
    } else {
        Json(Value::Null)
    }
}

async fn album_art(Path(id): Path<i64>) -> impl IntoResponse {
    match id {
        42 => Json(json!({ "albumArt": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAAB" })).into_response(),
        7 => Json(json!({ "albumArt": null })).into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "art backend exploded").into_response(),
    }
}

async fn command(Json(body): Json<Value>) -> impl IntoResponse {
    let command = body["command"].as_str().unwrap_or_default().trim().to_string();
    if command.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No command provided").into_response();
    }
    let failed = command.starts_with("modify");
    Json(json!({
        "result": {
            "success": !failed,
            "stdout": format!("ran {}\n", command),
            "stderr": if failed { "no matching items" } else { "" },
            "returncode": if failed { 1 } else { 0 }
        }
    }))
    .into_response()
}

async fn import(Json(body): Json<Value>) -> impl IntoResponse {
    let path = body["path"].as_str().unwrap_or_default();
    Json(json!({
        "result": { "success": false, "message": format!("Path does not exist: {}", path) }
    }))
}

async fn connection_mode() -> impl IntoResponse {
    Json(json!({ "mode": "remote", "remote_config": { "host": "nas.local", "port": 22 } }))
}

async fn check_paths() -> impl IntoResponse {
    Json(json!({
        "beets_installed": true,
        "config_exists": true,
        "db_exists": false,
        "config_path": "/home/stub/.config/beets/config.yaml",
        "db_path": "/home/stub/.config/beets/library.db"
    }))
}

async fn info() -> impl IntoResponse {
    Json(json!({ "version": "1.6.0", "python": "3.11" }))
}

async fn plugins() -> impl IntoResponse {
    Json(json!(["fetchart", "lyrics"]))
}

async fn config() -> impl IntoResponse {
    Json(json!({ "directory": "~/Music", "import": { "copy": true } }))
}

async fn update_config(Json(body): Json<Value>) -> impl IntoResponse {
    if body.get("directory").is_none() {
        return error(StatusCode::BAD_REQUEST, "directory is required").into_response();
    }
    Json(json!({ "success": true })).into_response()
}

async fn reset() -> impl IntoResponse {
    Json(json!({ "success": true, "message": "Database reset. Backup saved." }))
}

async fn initialize() -> impl IntoResponse {
    Json(json!({ "success": false, "message": "Database already exists" }))
}

//! QuranReader Mirror Server — HTTP endpoint for the one-shot mirror operation.
//!
//! Any request to `/` ensures the source PDF is mirrored into the local
//! object directory and returns `{"url": ..., "status": "exists"|"uploaded"}`,
//! or 500 `{"error": ...}` when the download or store fails. The permissive
//! CORS layer answers the `OPTIONS` preflight. Mirrored objects are re-hosted
//! under `/files`.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::any;
use axum::{Json, Router};
use clap::Parser;
use log::info;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use quranreader::mirror::{DriveSource, FsObjectStore, MirrorService};

type Service = MirrorService<FsObjectStore, DriveSource>;

#[derive(Parser, Debug)]
#[command(name = "quran-mirror", about = "Mirrors the source PDF into durable storage and re-hosts it")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "QURAN_MIRROR_LISTEN", default_value = "127.0.0.1:8787")]
    listen: String,

    /// Directory mirrored objects are stored in.
    #[arg(long, env = "QURAN_MIRROR_DATA_DIR", default_value = "mirror-data")]
    data_dir: PathBuf,

    /// Public base URL the stored objects are served from.
    #[arg(long, env = "QURAN_MIRROR_PUBLIC_BASE", default_value = "http://127.0.0.1:8787/files")]
    public_base: String,

    /// Google Drive file id of the source document.
    #[arg(long, env = "QURAN_MIRROR_SOURCE_ID", default_value = "1Gim4R2qkvPpYfwl3RXwdQjQyg4Gr6vXw")]
    source_id: String,
}

async fn ensure_mirrored(State(service): State<Arc<Service>>) -> impl IntoResponse {
    match service.ensure_mirrored().await {
        Ok(outcome) => (StatusCode::OK, Json(json!(outcome))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        ),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let store = FsObjectStore::new(args.data_dir.clone(), args.public_base);
    let source = DriveSource::new(args.source_id);
    let service = Arc::new(MirrorService::new(store, source));

    let router = Router::new()
        .route("/", any(ensure_mirrored))
        .nest_service("/files", ServeDir::new(args.data_dir))
        .layer(CorsLayer::permissive())
        .with_state(service);

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .expect("Failed to bind listen address");
    info!("mirror server listening on {}", args.listen);

    axum::serve(listener, router)
        .await
        .expect("Mirror server failed");
}

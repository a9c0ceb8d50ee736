use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use api::AppState;
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

pub fn build_app(state: AppState, photo_path: PathBuf) -> Router {
    let photo_path = Arc::new(photo_path);

    api::app_with_state(state)
        .route("/", get(index))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(script))
        .route(
            "/photo",
            get(move || {
                let photo_path = Arc::clone(&photo_path);
                async move { serve_photo(&photo_path).await }
            }),
        )
        .route("/health", get(healthcheck))
        .layer(TraceLayer::new_for_http())
}

async fn healthcheck() -> &'static str {
    "ok"
}

async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], ui::styles_css())
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

async fn serve_photo(path: &Path) -> Response {
    let Some(content_type) = photo_content_type(path) else {
        warn!(path = %path.display(), "photo has unsupported extension");
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "photo not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read photo");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn photo_content_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

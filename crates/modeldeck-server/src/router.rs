use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use modeldeck_core::{ModelListing, PageRenderer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::state::AppState;

pub const NOT_FOUND_BODY: &str = "Page not found";

/// Every request lands in [`dispatch`]. The root path is compared literally
/// rather than registered as a route, so it never acts as a pattern.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn dispatch(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path() == state.config.server.root_path {
        model_page(&state).await.into_response()
    } else {
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}

async fn model_page(state: &AppState) -> Html<String> {
    let result = state.source.list_models().await;
    match &result {
        Ok(models) => debug!(count = models.len(), "Rendering model page"),
        Err(err) => warn!(error = %err, "Model listing fetch failed"),
    }

    let listing = ModelListing::from(result);
    Html(PageRenderer::new(&state.config).render(&listing))
}

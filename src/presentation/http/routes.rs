use crate::application::binding::ModelBinder;
use crate::presentation::http::binding::SlugRouter;
use crate::presentation::http::controllers::{articles, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Json, Router,
    response::{IntoResponse, Redirect},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    let fallback_path = state.articles_fallback_path.clone();

    SlugRouter::new()
        .model(
            "article",
            ModelBinder::new(Arc::clone(&state.articles))
                .with_fallback(move || Redirect::to(&fallback_path).into_response()),
        )
        .model(
            "article_id",
            ModelBinder::new(Arc::clone(&state.articles)).force_id(true),
        )
        .model("user", ModelBinder::new(Arc::clone(&state.users)))
        .route("/health", get(health))
        .route("/articles", get(articles::index))
        .route("/articles/{article}", get(articles::show))
        .route("/articles/by-id/{article_id}", get(articles::show))
        .route("/users/{user}", get(users::show))
        .route("/feed", get(users::feed))
        .route("/feed/{user}", get(users::feed))
        .into_router()
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

// src/presentation/http/controllers/articles.rs
use crate::application::dto::ArticleDto;
use crate::domain::article::Article;
use crate::presentation::http::extractors::Bound;
use axum::Json;
use serde_json::{Value, json};

pub async fn index() -> Json<Value> {
    Json(json!({ "message": "article index" }))
}

/// Serves both `/articles/{article}` (slug) and `/articles/by-id/{article_id}`.
pub async fn show(Bound(article): Bound<Article>) -> Json<ArticleDto> {
    Json(article.into())
}

// src/presentation/http/state.rs
use crate::domain::{article::Article, binding::RecordStore, user::User};
use std::sync::Arc;

/// Stores and settings the route bindings are built from.
#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<dyn RecordStore<Article>>,
    pub users: Arc<dyn RecordStore<User>>,
    pub articles_fallback_path: String,
}

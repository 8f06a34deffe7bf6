// src/presentation/http/controllers/users.rs
use crate::application::dto::UserDto;
use crate::domain::user::User;
use crate::presentation::http::extractors::{Bound, MaybeBound};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub scope: &'static str,
    pub user: Option<UserDto>,
}

pub async fn show(Bound(user): Bound<User>) -> Json<UserDto> {
    Json(user.into())
}

/// `/feed` is the global feed; `/feed/{user}` narrows it to one user.
pub async fn feed(MaybeBound(user): MaybeBound<User>) -> Json<FeedResponse> {
    let scope = if user.is_some() { "user" } else { "global" };
    Json(FeedResponse {
        scope,
        user: user.map(UserDto::from),
    })
}

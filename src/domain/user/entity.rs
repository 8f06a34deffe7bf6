// src/domain/user/entity.rs
use crate::domain::binding::{RouteModel, SlugColumn};
use crate::domain::user::value_objects::{UserId, Username};

/// Users are only ever bound by primary key.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
}

impl RouteModel for User {
    const TABLE: &'static str = "users";

    fn slug_column() -> Option<SlugColumn> {
        None
    }
}

use crate::domain::article::{Article, ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainError;
use crate::domain::user::{User, UserId, Username};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::from_stored(row.slug)?,
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct UserRow {
    id: i64,
    username: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
        })
    }
}

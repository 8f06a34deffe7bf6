// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::binding::{RouteModel, SlugColumn, Sluggable};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
}

impl RouteModel for Article {
    const TABLE: &'static str = "articles";

    fn slug_column() -> Option<SlugColumn> {
        Some(SlugColumn::of::<Self>())
    }
}

impl Sluggable for Article {
    fn slug_identifier() -> &'static str {
        "slug"
    }
}

// tests/support/builders.rs
use chrono::Utc;

use slug_routes::domain::article::*;
use slug_routes::domain::user::{User, UserId, Username};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Hello World".into(),
            slug: "hello-world".into(),
            body: "Test body".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            created_at: Utc::now(),
        }
    }
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
    }
}

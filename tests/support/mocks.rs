// tests/support/mocks.rs
use async_trait::async_trait;
use std::sync::Mutex;

use slug_routes::domain::article::Article;
use slug_routes::domain::binding::RecordStore;
use slug_routes::domain::errors::{DomainError, DomainResult};
use slug_routes::domain::user::User;

/// A lookup as seen by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Find(String),
    Where(String, String),
}

/// In-memory store that records every lookup it serves.
pub struct MemoryStore<M> {
    rows: Vec<M>,
    lookups: Mutex<Vec<Lookup>>,
    fail_with: Option<String>,
}

impl<M> MemoryStore<M> {
    pub fn new(rows: Vec<M>) -> Self {
        Self {
            rows,
            lookups: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            lookups: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    pub fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().unwrap().clone()
    }

    fn record(&self, lookup: Lookup) -> DomainResult<()> {
        self.lookups.lock().unwrap().push(lookup);
        match &self.fail_with {
            Some(message) => Err(DomainError::Persistence(message.clone())),
            None => Ok(()),
        }
    }
}

/// Column access for the in-memory rows.
pub trait Columns {
    fn primary_key(&self) -> String;
    fn column(&self, name: &str) -> Option<String>;
}

impl Columns for Article {
    fn primary_key(&self) -> String {
        i64::from(self.id).to_string()
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "slug" => Some(self.slug.to_string()),
            "title" => Some(self.title.to_string()),
            _ => None,
        }
    }
}

impl Columns for User {
    fn primary_key(&self) -> String {
        i64::from(self.id).to_string()
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "username" => Some(self.username.to_string()),
            _ => None,
        }
    }
}

#[async_trait]
impl<M> RecordStore<M> for MemoryStore<M>
where
    M: Columns + Clone + Send + Sync,
{
    async fn find(&self, key: &str) -> DomainResult<Option<M>> {
        self.record(Lookup::Find(key.to_string()))?;
        Ok(self.rows.iter().find(|row| row.primary_key() == key).cloned())
    }

    async fn first_where(&self, column: &str, value: &str) -> DomainResult<Option<M>> {
        self.record(Lookup::Where(column.to_string(), value.to_string()))?;
        Ok(self
            .rows
            .iter()
            .find(|row| row.column(column).as_deref() == Some(value))
            .cloned())
    }
}

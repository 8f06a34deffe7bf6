// src/application/binding/resolver.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::binding::{RecordStore, RouteModel, SlugColumn},
};
use std::{fmt, sync::Arc};

/// Called with no arguments when a lookup finds nothing.
pub type Fallback<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Outcome of resolving one route parameter. A miss without a fallback is
/// reported as [`ApplicationError::NotFound`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<M, T> {
    /// The parameter was not supplied; nothing was looked up.
    Missing,
    Found(M),
    Fallback(T),
}

impl<M, T> Resolution<M, T> {
    pub fn found(self) -> Option<M> {
        match self {
            Resolution::Found(record) => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    PrimaryKey(&'static str),
    Slug(SlugColumn),
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupStrategy::PrimaryKey(column) => write!(f, "primary key `{column}`"),
            LookupStrategy::Slug(column) => write!(f, "slug column `{column}`"),
        }
    }
}

/// Turns a raw route parameter into a record of type `M`.
pub struct ModelBinder<M, T> {
    store: Arc<dyn RecordStore<M>>,
    fallback: Option<Fallback<T>>,
    force_id: bool,
}

impl<M, T> Clone for ModelBinder<M, T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            fallback: self.fallback.clone(),
            force_id: self.force_id,
        }
    }
}

impl<M: RouteModel, T> ModelBinder<M, T> {
    pub fn new(store: Arc<dyn RecordStore<M>>) -> Self {
        Self {
            store,
            fallback: None,
            force_id: false,
        }
    }

    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    /// Always look up by primary key, even for sluggable records.
    pub fn force_id(mut self, force_id: bool) -> Self {
        self.force_id = force_id;
        self
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn strategy(&self) -> LookupStrategy {
        match M::slug_column() {
            Some(column) if !self.force_id => LookupStrategy::Slug(column),
            _ => LookupStrategy::PrimaryKey(M::PRIMARY_KEY),
        }
    }

    pub async fn resolve(&self, raw: Option<&str>) -> ApplicationResult<Resolution<M, T>> {
        let Some(value) = raw else {
            return Ok(Resolution::Missing);
        };

        let strategy = self.strategy();
        tracing::debug!(table = M::TABLE, %strategy, value, "resolving route model");

        let record = match strategy {
            LookupStrategy::Slug(column) => self.store.first_where(column.as_str(), value).await?,
            LookupStrategy::PrimaryKey(_) => self.store.find(value).await?,
        };

        if let Some(record) = record {
            return Ok(Resolution::Found(record));
        }

        match &self.fallback {
            Some(fallback) => {
                tracing::debug!(table = M::TABLE, value, "no record matched, using fallback");
                Ok(Resolution::Fallback(fallback()))
            }
            None => Err(ApplicationError::not_found(format!(
                "no {} record matches '{value}'",
                M::TABLE
            ))),
        }
    }
}

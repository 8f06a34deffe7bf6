// src/domain/binding/store.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Lookups route binding needs from the data layer.
#[async_trait]
pub trait RecordStore<M>: Send + Sync {
    /// Primary-key equality against the raw parameter value.
    async fn find(&self, key: &str) -> DomainResult<Option<M>>;

    /// First record, in store order, whose `column` equals `value`.
    async fn first_where(&self, column: &str, value: &str) -> DomainResult<Option<M>>;
}

// src/presentation/http/binding.rs
//! Route model binding for axum routers.
//!
//! [`SlugRouter::model`] registers a [`ModelBinder`] for a named path
//! parameter. Handlers then take [`Bound<M>`](super::extractors::Bound) and
//! receive the resolved record instead of the raw segment.

use crate::{application::binding::ModelBinder, domain::binding::RouteModel};
use axum::{Extension, Router, response::Response, routing::MethodRouter};
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

/// Binder whose fallback renders an HTTP response.
pub type RouteBinder<M> = ModelBinder<M, Response>;

struct Registration {
    model: TypeId,
    binder: Arc<dyn Any + Send + Sync>,
}

/// Path parameter bindings shared with every request through an extension.
#[derive(Clone, Default)]
pub struct BindingRegistry {
    bindings: Arc<HashMap<String, Registration>>,
}

impl BindingRegistry {
    /// Binder registered for `key`, if it targets `M`.
    pub fn binder_for<M: RouteModel>(&self, key: &str) -> Option<&RouteBinder<M>> {
        let registration = self.bindings.get(key)?;
        let binder: &(dyn Any + Send + Sync) = &*registration.binder;
        binder.downcast_ref::<RouteBinder<M>>()
    }

    /// First binder (by key order) targeting `M`; used when the route
    /// carries none of its parameters.
    pub fn any_binder_for<M: RouteModel>(&self) -> Option<&RouteBinder<M>> {
        let mut keys: Vec<&String> = self
            .bindings
            .iter()
            .filter(|(_, registration)| registration.model == TypeId::of::<M>())
            .map(|(key, _)| key)
            .collect();
        keys.sort();
        keys.first().and_then(|key| self.binder_for::<M>(key))
    }
}

/// An axum [`Router`] that knows how to turn path parameters into records.
pub struct SlugRouter<S = ()> {
    router: Router<S>,
    bindings: HashMap<String, Registration>,
}

impl<S> SlugRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::from(Router::new())
    }

    /// Bind the path parameter `key` to records of type `M`. Binding the same
    /// key again replaces the earlier binder.
    pub fn model<M: RouteModel>(mut self, key: impl Into<String>, binder: RouteBinder<M>) -> Self {
        let key = key.into();
        tracing::debug!(
            key = %key,
            table = M::TABLE,
            strategy = %binder.strategy(),
            fallback = binder.has_fallback(),
            "registering route model binding"
        );
        let registration = Registration {
            model: TypeId::of::<M>(),
            binder: Arc::new(binder),
        };
        if self.bindings.insert(key.clone(), registration).is_some() {
            tracing::warn!(key = %key, "route model binding replaced");
        }
        self
    }

    pub fn route(mut self, path: &str, method_router: MethodRouter<S>) -> Self {
        self.router = self.router.route(path, method_router);
        self
    }

    pub fn merge(mut self, other: Router<S>) -> Self {
        self.router = self.router.merge(other);
        self
    }

    /// Finish the router, making the bindings visible to extractors on every
    /// route added so far.
    pub fn into_router(self) -> Router<S> {
        let registry = BindingRegistry {
            bindings: Arc::new(self.bindings),
        };
        self.router.layer(Extension(registry))
    }
}

impl<S> Default for SlugRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> From<Router<S>> for SlugRouter<S> {
    fn from(router: Router<S>) -> Self {
        Self {
            router,
            bindings: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        article::Article,
        binding::RecordStore,
        errors::DomainResult,
        user::User,
    };
    use async_trait::async_trait;

    struct EmptyStore;

    #[async_trait]
    impl<M: Send + 'static> RecordStore<M> for EmptyStore {
        async fn find(&self, _key: &str) -> DomainResult<Option<M>> {
            Ok(None)
        }

        async fn first_where(&self, _column: &str, _value: &str) -> DomainResult<Option<M>> {
            Ok(None)
        }
    }

    fn registry(router: SlugRouter) -> BindingRegistry {
        BindingRegistry {
            bindings: Arc::new(router.bindings),
        }
    }

    #[test]
    fn binders_are_looked_up_by_key_and_model() {
        let router = SlugRouter::<()>::new()
            .model("article", RouteBinder::<Article>::new(Arc::new(EmptyStore)))
            .model("user", RouteBinder::<User>::new(Arc::new(EmptyStore)));

        let registry = registry(router);

        assert!(registry.binder_for::<User>("user").is_some());
        assert!(registry.binder_for::<Article>("article").is_some());
        assert!(registry.binder_for::<User>("article").is_none());
        assert!(registry.binder_for::<Article>("post").is_none());
    }

    #[test]
    fn rebinding_a_key_replaces_the_binder() {
        let router = SlugRouter::<()>::new()
            .model("record", RouteBinder::<Article>::new(Arc::new(EmptyStore)))
            .model("record", RouteBinder::<User>::new(Arc::new(EmptyStore)));

        let registry = registry(router);

        assert_eq!(registry.bindings.len(), 1);
        assert!(registry.binder_for::<Article>("record").is_none());
        assert!(registry.binder_for::<User>("record").is_some());
    }

    #[test]
    fn any_binder_prefers_lowest_key() {
        let router = SlugRouter::<()>::new()
            .model("post", RouteBinder::<Article>::new(Arc::new(EmptyStore)))
            .model(
                "article",
                RouteBinder::<Article>::new(Arc::new(EmptyStore)).force_id(true),
            );

        let registry = registry(router);
        let binder = registry.any_binder_for::<Article>().expect("binder");

        assert_eq!(
            binder.strategy(),
            crate::application::binding::LookupStrategy::PrimaryKey("id")
        );
        assert!(registry.any_binder_for::<User>().is_none());
        assert!(BindingRegistry::default().any_binder_for::<User>().is_none());
    }
}

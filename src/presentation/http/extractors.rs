// src/presentation/http/extractors.rs
use crate::{
    application::{binding::Resolution, error::ApplicationError},
    domain::binding::RouteModel,
    presentation::http::binding::BindingRegistry,
};
use axum::{
    extract::{FromRequestParts, RawPathParams, rejection::RawPathParamsRejection},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use super::error::HttpError;

/// A record resolved from the route's bound path parameter.
#[derive(Debug, Clone)]
pub struct Bound<M>(pub M);

/// Like [`Bound`], but `None` when the route does not carry the parameter.
#[derive(Debug, Clone)]
pub struct MaybeBound<M>(pub Option<M>);

pub enum BindingRejection {
    Http(HttpError),
    Path(RawPathParamsRejection),
    /// The binder's fallback response, returned as-is.
    Fallback(Response),
}

impl IntoResponse for BindingRejection {
    fn into_response(self) -> Response {
        match self {
            BindingRejection::Http(err) => err.into_response(),
            BindingRejection::Path(rejection) => rejection.into_response(),
            BindingRejection::Fallback(response) => response,
        }
    }
}

impl From<ApplicationError> for BindingRejection {
    fn from(err: ApplicationError) -> Self {
        if !matches!(err, ApplicationError::NotFound(_)) {
            tracing::warn!(error = %err, "route model binding failed");
        }
        Self::Http(HttpError::from_error(err))
    }
}

async fn resolve_bound<M, S>(
    parts: &mut Parts,
    state: &S,
) -> Result<Resolution<M, Response>, BindingRejection>
where
    M: RouteModel,
    S: Send + Sync,
{
    let registry = parts
        .extensions
        .get::<BindingRegistry>()
        .cloned()
        .ok_or_else(|| ApplicationError::infrastructure("route model bindings not installed"))?;

    let params: Vec<(String, String)> = match RawPathParams::from_request_parts(parts, state).await
    {
        Ok(params) => params
            .iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect(),
        Err(RawPathParamsRejection::MissingPathParams(_)) => Vec::new(),
        Err(rejection) => return Err(BindingRejection::Path(rejection)),
    };

    let bound = params
        .iter()
        .find_map(|(key, value)| registry.binder_for::<M>(key).map(|binder| (binder, value)));

    let resolution = match bound {
        Some((binder, value)) => binder.resolve(Some(value.as_str())).await?,
        None => {
            let binder = registry.any_binder_for::<M>().ok_or_else(|| {
                ApplicationError::infrastructure(format!(
                    "no route model binding registered for {}",
                    M::TABLE
                ))
            })?;
            binder.resolve(None).await?
        }
    };

    Ok(resolution)
}

impl<S, M> FromRequestParts<S> for Bound<M>
where
    S: Send + Sync,
    M: RouteModel,
{
    type Rejection = BindingRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_bound::<M, S>(parts, state).await? {
            Resolution::Found(record) => Ok(Self(record)),
            Resolution::Fallback(response) => Err(BindingRejection::Fallback(response)),
            Resolution::Missing => Err(ApplicationError::not_found(format!(
                "route parameter for {} not supplied",
                M::TABLE
            ))
            .into()),
        }
    }
}

impl<S, M> FromRequestParts<S> for MaybeBound<M>
where
    S: Send + Sync,
    M: RouteModel,
{
    type Rejection = BindingRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_bound::<M, S>(parts, state).await? {
            Resolution::Found(record) => Ok(Self(Some(record))),
            Resolution::Fallback(response) => Err(BindingRejection::Fallback(response)),
            Resolution::Missing => Ok(Self(None)),
        }
    }
}

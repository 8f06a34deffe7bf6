// src/domain/binding/capability.rs
use std::fmt;

/// A record type that can be bound to a route parameter.
///
/// `TABLE` and `PRIMARY_KEY` describe where the record lives. Every model
/// states its lookup column explicitly: a [`Sluggable`] type returns
/// `Some(SlugColumn::of::<Self>())`, anything else returns `None`.
pub trait RouteModel: Send + Sync + 'static {
    const TABLE: &'static str;
    const PRIMARY_KEY: &'static str = "id";

    fn slug_column() -> Option<SlugColumn>;
}

/// Records that expose a unique, URL-safe identifier column.
///
/// The column should be unique within the table; the store enforces that,
/// route binding only reads it.
pub trait Sluggable: RouteModel {
    fn slug_identifier() -> &'static str;
}

/// Column name proven to come from a [`Sluggable`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugColumn(&'static str);

impl SlugColumn {
    pub fn of<M: Sluggable>() -> Self {
        Self(M::slug_identifier())
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SlugColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

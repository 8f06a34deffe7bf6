pub mod entity;
pub mod value_objects;

pub use entity::Article;
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};

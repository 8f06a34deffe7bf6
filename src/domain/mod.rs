pub mod article;
pub mod binding;
pub mod errors;
pub mod user;

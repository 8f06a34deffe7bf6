pub mod binding;
pub mod dto;
pub mod error;

pub use error::ApplicationResult;

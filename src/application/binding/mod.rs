pub mod resolver;

pub use resolver::{Fallback, LookupStrategy, ModelBinder, Resolution};

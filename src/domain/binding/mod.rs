pub mod capability;
pub mod store;

pub use capability::{RouteModel, SlugColumn, Sluggable};
pub use store::RecordStore;

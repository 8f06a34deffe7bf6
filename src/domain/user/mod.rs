pub mod entity;
pub mod value_objects;

pub use entity::User;
pub use value_objects::{UserId, Username};

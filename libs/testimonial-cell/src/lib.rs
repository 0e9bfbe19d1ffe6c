pub mod models;
pub mod rating;

pub use models::*;
pub use rating::*;

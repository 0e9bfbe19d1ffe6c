pub mod booking;
pub mod content;

pub use booking::*;
pub use content::*;

pub mod content;
pub mod source;

pub use content::ContentService;
pub use source::ContentSource;

pub mod page;

pub use page::PageController;

pub mod book_catalog;
pub mod user_registry;

pub use book_catalog::*;
pub use user_registry::*;

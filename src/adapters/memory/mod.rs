pub mod book_catalog;
pub mod user_registry;

pub use book_catalog::BookCatalog as InMemoryBookCatalog;
pub use user_registry::UserRegistry as InMemoryUserRegistry;

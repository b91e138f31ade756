pub mod book;
pub mod errors;
pub mod events;
pub mod user;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use value_objects::*;

mod errors;
mod user_service;

pub use errors::{Result, UserServiceError};
pub use user_service::UserService;

use crate::domain::UsernameError;
use thiserror::Error;

/// ユーザーアプリケーション層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserServiceError {
    /// ユーザー名が空
    #[error("Username must not be empty")]
    EmptyUsername,

    /// ユーザー名が他のユーザーに使われている
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// ユーザーが登録されていない
    #[error("User not found")]
    UserNotFound,

    /// パスワードが一致しない
    #[error("Incorrect password")]
    IncorrectPassword,
}

impl From<UsernameError> for UserServiceError {
    fn from(err: UsernameError) -> Self {
        match err {
            UsernameError::Empty => UserServiceError::EmptyUsername,
        }
    }
}

/// ユーザーアプリケーション層の Result型
pub type Result<T> = std::result::Result<T, UserServiceError>;

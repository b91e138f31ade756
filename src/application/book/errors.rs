use crate::domain::{AddReviewError, PurchaseBookError};
use thiserror::Error;

/// 書籍アプリケーション層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookServiceError {
    /// カタログに構造的に等しい書籍がない
    #[error("Book is not in the catalog")]
    BookNotInCatalog,

    /// タイトル・著者・ジャンルのいずれかが空
    #[error("Book details are incomplete")]
    MissingBookDetails,

    /// 対象の書籍を購入していない
    #[error("User has not purchased the book")]
    NotPurchased,
}

impl From<PurchaseBookError> for BookServiceError {
    fn from(err: PurchaseBookError) -> Self {
        match err {
            PurchaseBookError::MissingDetails => BookServiceError::MissingBookDetails,
        }
    }
}

impl From<AddReviewError> for BookServiceError {
    fn from(err: AddReviewError) -> Self {
        match err {
            AddReviewError::NotPurchased => BookServiceError::NotPurchased,
        }
    }
}

/// 書籍アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookServiceError>;

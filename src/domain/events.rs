use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Price;

/// イベント：書籍が購入された
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPurchased {
    pub username: String,
    pub title: String,
    pub author: String,
    pub price: Price,
    pub purchased_at: DateTime<Utc>,
}

/// イベント：レビューが投稿された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAdded {
    pub username: String,
    pub title: String,
    pub author: String,
    pub review: String,
    /// 投稿後のレビュー件数
    pub review_count: usize,
    pub reviewed_at: DateTime<Utc>,
}

/// イベント：ユーザーが登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistered {
    pub username: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// イベント：プロフィールが更新された
///
/// パスワードはイベントに含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileUpdated {
    pub previous_username: String,
    pub username: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    BookPurchased(BookPurchased),
    ReviewAdded(ReviewAdded),
    UserRegistered(UserRegistered),
    UserProfileUpdated(UserProfileUpdated),
}

impl From<BookPurchased> for DomainEvent {
    fn from(event: BookPurchased) -> Self {
        DomainEvent::BookPurchased(event)
    }
}

impl From<ReviewAdded> for DomainEvent {
    fn from(event: ReviewAdded) -> Self {
        DomainEvent::ReviewAdded(event)
    }
}

impl From<UserRegistered> for DomainEvent {
    fn from(event: UserRegistered) -> Self {
        DomainEvent::UserRegistered(event)
    }
}

impl From<UserProfileUpdated> for DomainEvent {
    fn from(event: UserProfileUpdated) -> Self {
        DomainEvent::UserProfileUpdated(event)
    }
}

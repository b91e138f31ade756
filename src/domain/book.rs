use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AddReviewError, BookPurchased, Price, PurchaseBookError, ReviewAdded, user::User};

/// Book エンティティ - カタログに並ぶ1冊の書籍
///
/// 同一性は値で判定する（タイトル・著者・ジャンル・価格の構造的等価性）。
/// 生成されたIDは持たない。レビューは追記のみ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    genre: String,
    price: Price,
    #[serde(default)]
    reviews: Vec<String>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
            reviews: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// 投稿順のレビュー
    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    /// タイトル・著者・ジャンルがすべて空でないか
    pub fn has_details(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty() && !self.genre.is_empty()
    }

    /// キーワードがタイトル・著者・ジャンルのいずれかに含まれるか
    ///
    /// 大文字小文字を区別する部分一致。
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.contains(keyword)
            || self.author.contains(keyword)
            || self.genre.contains(keyword)
    }
}

/// 構造的等価性：reviews は比較に含めない
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.genre == other.genre
            && self.price == other.price
    }
}

/// 純粋関数：書籍を購入する
///
/// ビジネスルール：
/// - タイトル・著者・ジャンルが空の書籍は購入できない
/// - 購入した書籍はユーザーの購入履歴に追加される（重複可）
///
/// カタログに存在するかの確認はアプリケーション層の責務。
pub fn purchase_book(
    user: &mut User,
    book: &Book,
    purchased_at: DateTime<Utc>,
) -> Result<BookPurchased, PurchaseBookError> {
    // バリデーション：書籍情報が揃っていること
    if !book.has_details() {
        return Err(PurchaseBookError::MissingDetails);
    }

    user.record_purchase(book.clone());

    Ok(BookPurchased {
        username: user.username().to_string(),
        title: book.title.clone(),
        author: book.author.clone(),
        price: book.price,
        purchased_at,
    })
}

/// 純粋関数：レビューを投稿する
///
/// ビジネスルール：
/// - 構造的に等しい書籍を購入済みのユーザーのみ投稿可能
/// - 本文の内容は検証しない（空文字も受け付ける）
///
/// 失敗時は書籍を変更しない。
pub fn add_review(
    book: &mut Book,
    reviewer: &User,
    review: String,
    reviewed_at: DateTime<Utc>,
) -> Result<ReviewAdded, AddReviewError> {
    if !reviewer.has_purchased(book) {
        return Err(AddReviewError::NotPurchased);
    }

    book.reviews.push(review.clone());

    Ok(ReviewAdded {
        username: reviewer.username().to_string(),
        title: book.title.clone(),
        author: book.author.clone(),
        review,
        review_count: book.reviews.len(),
        reviewed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nineteen_eighty_four() -> Book {
        Book::new(
            "1984",
            "George Orwell",
            "Dystopian",
            Price::new(9.99).unwrap(),
        )
    }

    fn reader() -> User {
        User::new("JohnDoe", "password", "johndoe@example.com")
    }

    #[test]
    fn test_book_equality_is_structural() {
        let a = nineteen_eighty_four();
        let b = nineteen_eighty_four();
        assert_eq!(a, b);

        let cheaper = Book::new("1984", "George Orwell", "Dystopian", Price::free());
        assert_ne!(a, cheaper);
    }

    #[test]
    fn test_book_equality_ignores_reviews() {
        let mut reviewed = nineteen_eighty_four();
        let mut user = reader();
        purchase_book(&mut user, &reviewed, Utc::now()).unwrap();
        add_review(&mut reviewed, &user, "Chilling".to_string(), Utc::now()).unwrap();

        assert_eq!(reviewed, nineteen_eighty_four());
    }

    #[test]
    fn test_matches_keyword_title_author_genre() {
        let book = nineteen_eighty_four();
        assert!(book.matches_keyword("1984"));
        assert!(book.matches_keyword("George"));
        assert!(book.matches_keyword("Dystop"));
        assert!(!book.matches_keyword("Brave New World"));
    }

    #[test]
    fn test_matches_keyword_is_case_sensitive() {
        let book = nineteen_eighty_four();
        assert!(!book.matches_keyword("george"));
    }

    #[test]
    fn test_has_details() {
        assert!(nineteen_eighty_four().has_details());
        assert!(!Book::new("", "", "", Price::free()).has_details());
        assert!(!Book::new("Title", "Author", "", Price::free()).has_details());
    }

    // TDD: purchase_book のテスト
    #[test]
    fn test_purchase_book_records_purchase() {
        let book = nineteen_eighty_four();
        let mut user = reader();
        let now = Utc::now();

        let event = purchase_book(&mut user, &book, now).unwrap();

        assert!(user.has_purchased(&book));
        assert_eq!(event.username, "JohnDoe");
        assert_eq!(event.title, "1984");
        assert_eq!(event.purchased_at, now);
    }

    #[test]
    fn test_purchase_book_missing_details() {
        let empty = Book::new("", "", "", Price::free());
        let mut user = reader();

        let result = purchase_book(&mut user, &empty, Utc::now());

        assert_eq!(result.unwrap_err(), PurchaseBookError::MissingDetails);
        assert!(user.purchased_books().is_empty());
    }

    #[test]
    fn test_purchase_book_allows_duplicates() {
        let book = nineteen_eighty_four();
        let mut user = reader();

        purchase_book(&mut user, &book, Utc::now()).unwrap();
        purchase_book(&mut user, &book, Utc::now()).unwrap();

        assert_eq!(user.purchased_books().len(), 2);
    }

    // TDD: add_review のテスト
    #[test]
    fn test_add_review_after_purchase() {
        let mut book = nineteen_eighty_four();
        let mut user = reader();
        purchase_book(&mut user, &book, Utc::now()).unwrap();

        let event = add_review(&mut book, &user, "Amazing book!".to_string(), Utc::now()).unwrap();

        assert_eq!(book.reviews(), ["Amazing book!".to_string()]);
        assert_eq!(event.review_count, 1);
    }

    #[test]
    fn test_add_review_empty_text_is_accepted() {
        let mut book = nineteen_eighty_four();
        let mut user = reader();
        purchase_book(&mut user, &book, Utc::now()).unwrap();

        let result = add_review(&mut book, &user, String::new(), Utc::now());

        assert!(result.is_ok());
        assert_eq!(book.reviews(), [String::new()]);
    }

    #[test]
    fn test_add_review_not_purchased() {
        let mut book = nineteen_eighty_four();
        let user = reader();

        let result = add_review(&mut book, &user, "Great book!".to_string(), Utc::now());

        assert_eq!(result.unwrap_err(), AddReviewError::NotPurchased);
        assert!(book.reviews().is_empty());
    }

    #[test]
    fn test_book_deserialize_defaults_reviews() {
        let book: Book = serde_json::from_str(
            r#"{"title":"1984","author":"George Orwell","genre":"Dystopian","price":9.99}"#,
        )
        .unwrap();

        assert_eq!(book, nineteen_eighty_four());
        assert!(book.reviews().is_empty());
    }
}

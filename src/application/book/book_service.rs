use crate::adapters::memory::InMemoryBookCatalog;
use crate::domain::{
    BookPurchased, ReviewAdded,
    book::{self, Book},
    user::User,
};
use crate::ports::BookCatalog;
use chrono::Utc;

use super::errors::{BookServiceError, Result};

/// 書籍サービス
///
/// カタログを明示的に所有し、検索・購入・レビュー投稿を提供する。
/// 各操作は `try_*` で失敗理由を返し、bool版はその成否のみを返す。
#[derive(Debug, Default)]
pub struct BookService<C = InMemoryBookCatalog> {
    catalog: C,
}

impl BookService {
    /// 空のインメモリカタログで作成する
    pub fn new() -> Self {
        Self::with_catalog(InMemoryBookCatalog::new())
    }
}

impl<C: BookCatalog> BookService<C> {
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    /// 書籍をカタログに追加する
    ///
    /// 重複排除・バリデーションは行わない。
    pub fn add_book(&mut self, book: Book) {
        tracing::debug!(
            title = book.title(),
            author = book.author(),
            "Book added to catalog"
        );
        self.catalog.add(book);
    }

    /// キーワード検索
    ///
    /// タイトル・著者・ジャンルのいずれかにキーワードを含む書籍を
    /// カタログ順で返す（大文字小文字を区別する部分一致）。
    pub fn search_book(&self, keyword: &str) -> Vec<&Book> {
        self.catalog
            .books()
            .iter()
            .filter(|book| book.matches_keyword(keyword))
            .collect()
    }

    /// 書籍を購入する
    ///
    /// ビジネスルール：
    /// - 構造的に等しい書籍がカタログにあること
    /// - 書籍情報（タイトル・著者・ジャンル）が揃っていること
    ///
    /// 成功時はユーザーの購入履歴に追加される。失敗時はユーザーを変更しない。
    pub fn try_purchase_book(&self, user: &mut User, book: &Book) -> Result<BookPurchased> {
        // 1. カタログの存在確認
        let listed = self
            .catalog
            .find(book)
            .ok_or(BookServiceError::BookNotInCatalog)?;

        // 2. ドメイン層の純粋関数を呼び出し
        let event = book::purchase_book(user, listed, Utc::now())?;

        tracing::info!(
            username = %event.username,
            title = %event.title,
            price = %event.price,
            "Book purchased"
        );

        Ok(event)
    }

    pub fn purchase_book(&self, user: &mut User, book: &Book) -> bool {
        self.try_purchase_book(user, book)
            .inspect_err(|e| {
                tracing::debug!(
                    username = user.username(),
                    title = book.title(),
                    "Purchase rejected: {}",
                    e
                )
            })
            .is_ok()
    }

    /// レビューを投稿する
    ///
    /// ビジネスルール：
    /// - ユーザーが構造的に等しい書籍を購入済みであること
    /// - 本文の内容は問わない（空文字も可）
    ///
    /// レビューはカタログ上の該当書籍に追記される。
    pub fn try_add_book_review(
        &mut self,
        user: &User,
        book: &Book,
        review_text: impl Into<String>,
    ) -> Result<ReviewAdded> {
        // 購入処理はカタログの書籍のみ受け付けるため、通常は必ず見つかる
        let listed = self
            .catalog
            .find_mut(book)
            .ok_or(BookServiceError::BookNotInCatalog)?;

        let event = book::add_review(listed, user, review_text.into(), Utc::now())?;

        tracing::info!(
            username = %event.username,
            title = %event.title,
            review_count = event.review_count,
            "Review added"
        );

        Ok(event)
    }

    pub fn add_book_review(
        &mut self,
        user: &User,
        book: &Book,
        review_text: impl Into<String>,
    ) -> bool {
        self.try_add_book_review(user, book, review_text)
            .inspect_err(|e| {
                tracing::debug!(
                    username = user.username(),
                    title = book.title(),
                    "Review rejected: {}",
                    e
                )
            })
            .is_ok()
    }

    /// 構造的に等しいカタログ上の書籍
    pub fn find_book(&self, book: &Book) -> Option<&Book> {
        self.catalog.find(book)
    }

    pub fn books(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

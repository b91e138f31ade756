#![allow(dead_code)]

use rusty_bookstore_ddd::application::book::BookService;
use rusty_bookstore_ddd::domain::{Price, book::Book, user::User};

/// テスト用の書籍
pub fn nineteen_eighty_four() -> Book {
    book("1984", "George Orwell", "Dystopian", 9.99)
}

pub fn book(title: &str, author: &str, genre: &str, price: f64) -> Book {
    Book::new(title, author, genre, Price::new(price).expect("valid test price"))
}

/// テスト用のユーザー
pub fn john_doe() -> User {
    User::new("JohnDoe", "password", "johndoe@example.com")
}

/// 書籍を登録済みのBookServiceを作成
pub fn book_service_with(books: &[Book]) -> BookService {
    let mut service = BookService::new();
    for book in books {
        service.add_book(book.clone());
    }
    service
}

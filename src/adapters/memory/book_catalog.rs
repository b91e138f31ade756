use crate::domain::book::Book;
use crate::ports::book_catalog::BookCatalog as BookCatalogTrait;

/// BookCatalogのインメモリ実装
///
/// 追加順を保持するVecで書籍を管理する。プロセス終了とともに破棄される。
#[derive(Debug, Default)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }
}

impl From<Vec<Book>> for BookCatalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl BookCatalogTrait for BookCatalog {
    fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    fn books(&self) -> &[Book] {
        &self.books
    }

    fn find_mut(&mut self, book: &Book) -> Option<&mut Book> {
        self.books.iter_mut().find(|listed| **listed == *book)
    }
}

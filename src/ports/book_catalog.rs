use crate::domain::book::Book;

/// 書籍カタログポート
///
/// BookServiceが保持する書籍の集合を抽象化する。
/// カタログは追加順を保持し、重複排除は行わない。
pub trait BookCatalog {
    /// 書籍を末尾に追加する
    fn add(&mut self, book: Book);

    /// 追加順のすべての書籍
    fn books(&self) -> &[Book];

    /// 構造的に等しい最初の書籍を探す
    fn find(&self, book: &Book) -> Option<&Book> {
        self.books().iter().find(|listed| *listed == book)
    }

    /// 構造的に等しい最初の書籍を可変参照で探す
    ///
    /// レビューの追記に使用される。
    fn find_mut(&mut self, book: &Book) -> Option<&mut Book>;

    fn len(&self) -> usize {
        self.books().len()
    }

    fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}

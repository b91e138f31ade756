use crate::domain::book::Book;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// シードカタログ読み込みのエラー
#[derive(Debug, Error)]
pub enum SeedError {
    /// ファイルを読めない
    #[error("Failed to read seed catalog")]
    Io(#[from] std::io::Error),

    /// JSONとして不正、または価格が不正
    #[error("Invalid seed catalog")]
    Json(#[from] serde_json::Error),
}

/// JSON配列から書籍一覧を読み込む
///
/// 各要素は `{title, author, genre, price, reviews?}`。
/// reviews は省略可能で、負の価格は読み込み時に拒否される。
pub fn load_catalog<R: Read>(reader: R) -> Result<Vec<Book>, SeedError> {
    let books = serde_json::from_reader(reader)?;
    Ok(books)
}

/// ファイルパスから書籍一覧を読み込む
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<Book>, SeedError> {
    let file = File::open(path)?;
    load_catalog(BufReader::new(file))
}

/// 価格のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// 負の値
    Negative,
    /// NaNまたは無限大
    NotFinite,
}

// serdeのtry_fromにはDisplayが必要
impl std::fmt::Display for PriceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceError::Negative => write!(f, "price must not be negative"),
            PriceError::NotFinite => write!(f, "price must be a finite number"),
        }
    }
}

/// 購入のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseBookError {
    /// タイトル・著者・ジャンルのいずれかが空
    MissingDetails,
}

/// レビュー投稿のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddReviewError {
    /// 対象の書籍を購入していない
    NotPurchased,
}

/// ユーザー名のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// 空のユーザー名
    Empty,
}

use chrono::{DateTime, Utc};

use super::{UserProfileUpdated, UserRegistered, UsernameError, book::Book};

/// User エンティティ - 書店の利用者
///
/// 一意性はユーザー名で判定する（レジストリ内で一意）。
/// パスワードは平文で保持する（認証の安全性は対象外）。
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    username: String,
    password: String,
    email: String,
    purchased_books: Vec<Book>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            purchased_books: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// 購入順の購入履歴（重複あり）
    pub fn purchased_books(&self) -> &[Book] {
        &self.purchased_books
    }

    /// 構造的に等しい書籍を購入済みか
    pub fn has_purchased(&self, book: &Book) -> bool {
        self.purchased_books.iter().any(|purchased| purchased == book)
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// 購入履歴への追加は購入処理（book::purchase_book）からのみ行う
    pub(crate) fn record_purchase(&mut self, book: Book) {
        self.purchased_books.push(book);
    }
}

/// ユーザー名のバリデーション
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.is_empty() {
        return Err(UsernameError::Empty);
    }
    Ok(())
}

/// 純粋関数：ユーザーを登録する
///
/// ビジネスルール：
/// - ユーザー名が空でないこと
///
/// 重複の確認はレジストリを持つアプリケーション層の責務。
pub fn register_user(
    user: &User,
    registered_at: DateTime<Utc>,
) -> Result<UserRegistered, UsernameError> {
    validate_username(&user.username)?;

    Ok(UserRegistered {
        username: user.username.clone(),
        email: user.email.clone(),
        registered_at,
    })
}

/// 純粋関数：プロフィールを更新する
///
/// ビジネスルール：
/// - 新しいユーザー名が空でないこと
/// - ユーザー名・パスワード・メールアドレスをまとめて上書きする
///
/// 失敗時はユーザーを変更しない。
pub fn update_profile(
    user: &mut User,
    new_username: &str,
    new_password: &str,
    new_email: &str,
    updated_at: DateTime<Utc>,
) -> Result<UserProfileUpdated, UsernameError> {
    validate_username(new_username)?;

    let previous_username = std::mem::replace(&mut user.username, new_username.to_string());
    user.password = new_password.to_string();
    user.email = new_email.to_string();

    Ok(UserProfileUpdated {
        previous_username,
        username: user.username.clone(),
        email: user.email.clone(),
        updated_at,
    })
}

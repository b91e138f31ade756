use crate::adapters::memory::InMemoryUserRegistry;
use crate::domain::{
    UserProfileUpdated, UserRegistered,
    user::{self, User},
};
use crate::ports::UserRegistry;
use chrono::Utc;

use super::errors::{Result, UserServiceError};

/// ユーザーサービス
///
/// ユーザー名をキーとするレジストリを明示的に所有し、
/// 登録・ログイン・プロフィール更新を提供する。
#[derive(Debug, Default)]
pub struct UserService<R = InMemoryUserRegistry> {
    registry: R,
}

impl UserService {
    /// 空のインメモリレジストリで作成する
    pub fn new() -> Self {
        Self::with_registry(InMemoryUserRegistry::new())
    }
}

impl<R: UserRegistry> UserService<R> {
    pub fn with_registry(registry: R) -> Self {
        Self { registry }
    }

    /// ユーザーを登録する
    ///
    /// ビジネスルール：
    /// - ユーザー名が空でないこと
    /// - 同じユーザー名が登録されていないこと
    pub fn try_register_user(&mut self, user: User) -> Result<UserRegistered> {
        let event = user::register_user(&user, Utc::now())?;

        if self.registry.contains(user.username()) {
            return Err(UserServiceError::UsernameTaken(user.username().to_string()));
        }

        self.registry.insert(user);

        tracing::info!(username = %event.username, "User registered");

        Ok(event)
    }

    pub fn register_user(&mut self, user: User) -> bool {
        let username = user.username().to_string();
        self.try_register_user(user)
            .inspect_err(|e| tracing::debug!(%username, "Registration rejected: {}", e))
            .is_ok()
    }

    /// ログインする
    ///
    /// ユーザー名が登録済みで、パスワードが一致する場合のみ登録ユーザーを返す。
    pub fn try_login_user(&self, username: &str, password: &str) -> Result<&User> {
        let user = self
            .registry
            .get(username)
            .ok_or(UserServiceError::UserNotFound)?;

        if !user.verify_password(password) {
            return Err(UserServiceError::IncorrectPassword);
        }

        tracing::info!(username, "User logged in");

        Ok(user)
    }

    pub fn login_user(&self, username: &str, password: &str) -> Option<&User> {
        self.try_login_user(username, password)
            .inspect_err(|e| tracing::debug!(username, "Login rejected: {}", e))
            .ok()
    }

    /// プロフィールを更新する
    ///
    /// ビジネスルール：
    /// - 新しいユーザー名が空でないこと
    /// - 新しいユーザー名が現在のものと同じか、登録済みの他ユーザーに使われていないこと
    ///
    /// `user` が登録済みである必要はない。レジストリに更新前の `user` と
    /// 等しい登録内容がある場合のみ、その登録内容も同じ値で更新し
    /// 新しいユーザー名で登録し直す。ユーザー名が同じだけの別ユーザーでは
    /// 登録内容を変更しない。
    pub fn try_update_user_profile(
        &mut self,
        user: &mut User,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> Result<UserProfileUpdated> {
        // 1. ユーザー名のバリデーション
        user::validate_username(new_username)?;

        // 2. 一意性の確認（自分自身のユーザー名は除く）
        if new_username != user.username() && self.registry.contains(new_username) {
            return Err(UserServiceError::UsernameTaken(new_username.to_string()));
        }

        // 3. ドメイン層の純粋関数を呼び出し
        let before = user.clone();
        let now = Utc::now();
        let event = user::update_profile(user, new_username, new_password, new_email, now)?;

        // 4. 登録内容そのものを更新した場合のみキーごと差し替え
        if self.registry.get(before.username()) == Some(&before) {
            if let Some(mut registered) = self.registry.remove(before.username()) {
                let rekeyed = user::update_profile(
                    &mut registered,
                    new_username,
                    new_password,
                    new_email,
                    now,
                );
                self.registry.insert(registered);
                rekeyed?;
            }
        }

        tracing::info!(
            previous_username = %event.previous_username,
            username = %event.username,
            "User profile updated"
        );

        Ok(event)
    }

    pub fn update_user_profile(
        &mut self,
        user: &mut User,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> bool {
        self.try_update_user_profile(user, new_username, new_password, new_email)
            .inspect_err(|e| {
                tracing::debug!(
                    username = user.username(),
                    new_username,
                    "Profile update rejected: {}",
                    e
                )
            })
            .is_ok()
    }

    /// 登録ユーザーを参照する
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.registry.get(username)
    }

    /// 登録ユーザーを可変参照で取得する
    ///
    /// 登録済みユーザーとして書籍を購入する場合に使用する。
    pub fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.registry.get_mut(username)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

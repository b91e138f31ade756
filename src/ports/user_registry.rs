use crate::domain::user::User;

/// ユーザーレジストリポート
///
/// UserServiceが保持する登録ユーザーを、ユーザー名をキーとして管理する。
/// 一意性の判定はUserServiceの責務で、レジストリは判定済みのユーザーのみ受け取る。
pub trait UserRegistry {
    fn contains(&self, username: &str) -> bool;

    fn get(&self, username: &str) -> Option<&User>;

    fn get_mut(&mut self, username: &str) -> Option<&mut User>;

    /// ユーザー名をキーとして保存する
    ///
    /// 同じユーザー名が既にある場合は置き換える。
    fn insert(&mut self, user: User);

    fn remove(&mut self, username: &str) -> Option<User>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

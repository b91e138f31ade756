use crate::domain::user::User;
use crate::ports::user_registry::UserRegistry as UserRegistryTrait;
use std::collections::HashMap;

/// UserRegistryのインメモリ実装
///
/// ユーザー名からユーザーへの直接のマッピングで管理する。
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashMap<String, User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }
}

impl UserRegistryTrait for UserRegistry {
    fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    fn insert(&mut self, user: User) {
        self.users.insert(user.username().to_string(), user);
    }

    fn remove(&mut self, username: &str) -> Option<User> {
        self.users.remove(username)
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_keyed_by_username() {
        let mut registry = UserRegistry::new();
        registry.insert(User::new("JohnDoe", "password", "johndoe@example.com"));

        assert!(registry.contains("JohnDoe"));
        assert!(!registry.contains("johndoe"));
        assert_eq!(registry.get("JohnDoe").unwrap().email(), "johndoe@example.com");
    }

    #[test]
    fn test_insert_same_username_replaces() {
        let mut registry = UserRegistry::new();
        registry.insert(User::new("JohnDoe", "password", "old@example.com"));
        registry.insert(User::new("JohnDoe", "password", "new@example.com"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("JohnDoe").unwrap().email(), "new@example.com");
    }

    #[test]
    fn test_remove() {
        let mut registry = UserRegistry::new();
        registry.insert(User::new("JohnDoe", "password", "johndoe@example.com"));

        assert!(registry.remove("JohnDoe").is_some());
        assert!(registry.remove("JohnDoe").is_none());
        assert!(registry.is_empty());
    }
}

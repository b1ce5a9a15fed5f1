/*
 * Responsibility
 * - 登録ユーザの保存 (in-memory) と email 検索
 * - password digest を持つが、外には出さない
 */
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::repos::error::RepoError;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_digest: String,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

#[derive(Debug, Default)]
pub struct UserStore {
    registry: RwLock<Registry>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Emails are unique; the check and the insert share the write lock.
    pub fn create(
        &self,
        email: &str,
        name: &str,
        password_digest: &str,
    ) -> Result<User, RepoError> {
        let mut registry = self.write();

        if registry.users.values().any(|u| u.email == email) {
            return Err(RepoError::EmailTaken);
        }

        registry.next_id += 1;
        let user = User {
            id: registry.next_id,
            email: email.to_string(),
            name: name.to_string(),
            password_digest: password_digest.to_string(),
        };
        registry.users.insert(user.id, user.clone());

        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.read().users.values().find(|u| u.email == email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_find_by_email() {
        let store = UserStore::new();
        let user = store.create("a@example.com", "a", "digest").unwrap();
        assert_eq!(user.id, 1);

        let found = store.find_by_email("a@example.com").unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.find_by_email("b@example.com").is_none());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let store = UserStore::new();
        store.create("a@example.com", "a", "digest").unwrap();
        assert!(matches!(
            store.create("a@example.com", "other", "digest"),
            Err(RepoError::EmailTaken)
        ));
    }
}

//! In-memory user store
//!
//! The store lives as long as the process. It only grows: users are appended
//! and never updated or removed. The list sits behind a `RwLock` because
//! handlers run on a multi-threaded runtime.

use tokio::sync::RwLock;

use crate::model::User;

/// Ordered, append-only collection of users
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every user in insertion order
    ///
    /// Returns a copy so callers cannot reach into the store.
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Add a user at the end of the list
    pub async fn append(&self, user: User) {
        self.users.write().await.push(user);
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no user has been added yet
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = UserStore::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order_and_duplicates() {
        let store = UserStore::new();
        store.append(user("Alice")).await;
        store.append(user("Bob")).await;
        store.append(user("Alice")).await;

        let users = store.list().await;
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Alice"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_list_returns_a_copy() {
        let store = UserStore::new();
        store.append(user("Alice")).await;

        let mut snapshot = store.list().await;
        snapshot.clear();

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(UserStore::new());

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.append(user(&format!("User{i}"))).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.len().await, 64);
    }
}

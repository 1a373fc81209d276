use std::collections::HashMap;

use crate::models::User;

/// The user directory collaborator the engine consumes.
///
/// Supplies the candidate population and individual user records keyed by
/// their string identifier. How the records got into memory (database,
/// remote API, fixtures) is the implementor's concern; the engine only
/// reads snapshots.
pub trait UserDirectory {
    /// Look up a single user by id.
    fn user(&self, id: &str) -> Option<&User>;

    /// The full candidate population.
    fn users(&self) -> &[User];
}

/// A directory backed by an in-memory vector, with an id index.
///
/// `users()` preserves insertion order, which is what the stable ranking
/// sort falls back to on score ties.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    users: Vec<User>,
    index: HashMap<String, usize>,
}

impl InMemoryDirectory {
    pub fn new(users: Vec<User>) -> Self {
        let index = users
            .iter()
            .enumerate()
            .map(|(position, user)| (user.id.clone(), position))
            .collect();
        Self { users, index }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for InMemoryDirectory {
    fn user(&self, id: &str) -> Option<&User> {
        self.index.get(id).map(|&position| &self.users[position])
    }

    fn users(&self) -> &[User] {
        &self.users
    }
}

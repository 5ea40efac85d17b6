//! Demo credential check.
//!
//! Illustrative only: a fixed in-memory map of demo accounts.
//! Not persisted and not configurable from outside the process.

use std::collections::HashMap;

pub struct CredentialStore {
    users: HashMap<&'static str, &'static str>,
}

impl CredentialStore {
    /// The built-in demo accounts.
    pub fn demo() -> Self {
        let users = HashMap::from([
            ("admin@example.com", "1234"),
            ("manager@example.com", "manager"),
        ]);
        Self { users }
    }

    /// True iff `email` is a known account and `password` matches exactly.
    /// Both comparisons are case-sensitive.
    pub fn authenticate(&self, email: &str, password: &str) -> bool {
        self.users.get(email).is_some_and(|stored| *stored == password)
    }

    pub fn account_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::demo()
    }
}

use crate::model::User;
use serde::{Deserialize, Serialize};

/// JSON payload for `userbook list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
    pub count: usize,
}

impl From<Vec<User>> for UserList {
    fn from(users: Vec<User>) -> Self {
        let count = users.len();
        Self { users, count }
    }
}

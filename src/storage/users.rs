//! User record writes.
//!
//! Both operations validate first; nothing reaches the engine when
//! validation fails.

use super::Database;
use crate::error::Result;
use crate::model::{UserId, Value};
use crate::validation::UserValidator;
use tracing::info;

pub const INSERT_USER_SQL: &str = "INSERT INTO Users (Name, Age) VALUES (?, ?);";
pub const UPDATE_USER_SQL: &str = "UPDATE Users SET Name = ?, Age = ? WHERE ID = ?;";

impl Database {
    /// Insert a new user and return the identifier the engine assigned.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::InvalidArgument` if validation fails, or the
    /// executor's `PrepareFailed` / `ExecFailed` if the write does not land.
    pub fn insert_user(&self, name: &str, age: i64) -> Result<UserId> {
        UserValidator::validate(name, age)?;
        self.execute(INSERT_USER_SQL, &[Value::from(name), Value::from(age)])?;
        let id = self.last_insert_id()?;
        info!(id, name, age, "Inserted user");
        Ok(id)
    }

    /// Overwrite the name and age of the user with identifier `id`.
    ///
    /// An identifier with no matching row is not an error.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::InvalidArgument` if validation fails, or the
    /// executor's `PrepareFailed` / `ExecFailed` if the write does not land.
    pub fn update_user(&self, id: UserId, name: &str, age: i64) -> Result<()> {
        UserValidator::validate(name, age)?;
        self.execute(
            UPDATE_USER_SQL,
            &[Value::from(name), Value::from(age), Value::from(id)],
        )?;
        info!(id, name, age, "Updated user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserbookError;
    use crate::model::User;
    use tempfile::TempDir;

    fn fresh_db(dir: &TempDir) -> Database {
        let db = Database::open(dir.path().join("users.db")).unwrap();
        db.ensure_schema().unwrap();
        db
    }

    #[test]
    fn inserts_get_sequential_ids_in_order() {
        let dir = TempDir::new().unwrap();
        let db = fresh_db(&dir);

        assert_eq!(db.insert_user("Alice", 25).unwrap(), 1);
        assert_eq!(db.insert_user("Bob", 30).unwrap(), 2);

        let users = db.list_users().unwrap();
        let summary: Vec<(i64, &str, i64)> = users
            .iter()
            .map(|u| (u.id, u.name.as_str(), u.age))
            .collect();
        assert_eq!(summary, [(1, "Alice", 25), (2, "Bob", 30)]);
    }

    #[test]
    fn round_trip_ids_are_fresh() {
        let dir = TempDir::new().unwrap();
        let db = fresh_db(&dir);

        let mut ids = Vec::new();
        for (name, age) in [("A", 1), ("B", 2), ("C", 3)] {
            let id = db.insert_user(name, age).unwrap();
            assert!(id >= 1);
            assert!(!ids.contains(&id));
            ids.push(id);
        }
        let stored: Vec<i64> = db.list_users().unwrap().iter().map(|u| u.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn update_changes_fields_and_keeps_id() {
        let dir = TempDir::new().unwrap();
        let db = fresh_db(&dir);

        let id = db.insert_user("Bob", 30).unwrap();
        db.update_user(id, "Bob", 35).unwrap();

        assert_eq!(
            db.list_users().unwrap(),
            vec![User {
                id,
                name: "Bob".to_string(),
                age: 35
            }]
        );
    }

    #[test]
    fn update_of_missing_id_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let db = fresh_db(&dir);

        db.update_user(42, "Nobody", 1).unwrap();
        assert!(db.list_users().unwrap().is_empty());
    }

    #[test]
    fn invalid_insert_leaves_table_unchanged() {
        let dir = TempDir::new().unwrap();
        let db = fresh_db(&dir);
        db.insert_user("Alice", 25).unwrap();

        let err = db.insert_user("", 25).unwrap_err();
        assert!(err.is_validation());
        let err = db.insert_user("Old", 151).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(db.list_users().unwrap().len(), 1);
    }

    #[test]
    fn invalid_update_leaves_row_unchanged() {
        let dir = TempDir::new().unwrap();
        let db = fresh_db(&dir);
        let id = db.insert_user("Bob", 30).unwrap();

        let err = db.update_user(id, "Bob", -5).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(db.list_users().unwrap()[0].age, 30);
    }

    #[test]
    fn validation_runs_before_handle_check() {
        let dir = TempDir::new().unwrap();
        let mut db = fresh_db(&dir);
        db.close();

        assert!(db.insert_user("", 10).unwrap_err().is_validation());
    }

    #[test]
    fn writes_after_close_fail_cleanly() {
        let dir = TempDir::new().unwrap();
        let mut db = fresh_db(&dir);
        db.close();

        let err = db.insert_user("Alice", 25).unwrap_err();
        assert!(matches!(err, UserbookError::PrepareFailed(_)), "{err:?}");
        assert!(err.to_string().contains("closed"));

        let err = db.update_user(1, "Alice", 26).unwrap_err();
        assert!(matches!(err, UserbookError::PrepareFailed(_)), "{err:?}");
    }

    #[test]
    fn insert_without_table_is_prepare_failure() {
        let dir = TempDir::new().unwrap();
        let db = Database::open(dir.path().join("users.db")).unwrap();

        let err = db.insert_user("Alice", 25).unwrap_err();
        match err {
            UserbookError::PrepareFailed(reason) => assert!(reason.contains("no such table")),
            other => panic!("expected PrepareFailed, got {other:?}"),
        }
    }

    #[test]
    fn records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.db");
        {
            let db = Database::open(&path).unwrap();
            db.ensure_schema().unwrap();
            db.insert_user("Alice", 25).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let users = db.list_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Alice");
    }
}

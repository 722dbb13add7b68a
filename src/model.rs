//! Data types for `userbook`.
//!
//! - [`User`] is the persisted record.
//! - [`Value`] is a single typed SQL value, used both for statement
//!   arguments and for columns read back from a result set.
//! - [`Row`] is one result row as ordered `(column, value)` pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-assigned identifier of a user record (`ID` column).
pub type UserId = i64;

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i64,
}

/// A typed SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// A named column within a result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub value: Value,
}

/// One result row, columns in select order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub columns: Vec<Column>,
}

impl Row {
    /// Look up a column by name (case-insensitive, like SQLite identifiers).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
            .map(|column| &column.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row {
            columns: vec![
                Column {
                    name: "ID".to_string(),
                    value: Value::Integer(1),
                },
                Column {
                    name: "Name".to_string(),
                    value: Value::from("Alice"),
                },
                Column {
                    name: "Age".to_string(),
                    value: Value::Null,
                },
            ],
        }
    }

    #[test]
    fn null_displays_as_marker() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7_i64)).to_string(), "7");
    }

    #[test]
    fn row_lookup_ignores_case() {
        let row = sample_row();
        assert_eq!(row.get("name").and_then(Value::as_text), Some("Alice"));
        assert_eq!(row.get("id").and_then(Value::as_integer), Some(1));
        assert!(row.get("missing").is_none());
    }
}

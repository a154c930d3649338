//! Embedded fixture dataset backing the default interception rules.
//!
//! The dataset is fixed at 30 records and is never regenerated at runtime,
//! so tests can assert against specific entries by position.

use crate::record::{User, UsersPayload};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

static FIXTURES_JSON: &str = include_str!("../data/users.json");

static FIXTURES: Lazy<FixtureStore> = Lazy::new(|| {
    FixtureStore::from_json(FIXTURES_JSON).expect("Failed to load embedded fixture dataset")
});

/// The embedded dataset, parsed on first access.
pub fn builtin() -> &'static FixtureStore {
    &FIXTURES
}

/// Errors raised while validating a fixture dataset at load time.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to parse fixture data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Fixture id '{0}' is not numeric")]
    NonNumericId(String),
    #[error("Duplicate fixture id {0}")]
    DuplicateId(u64),
}

/// Immutable, ordered set of user records with a numeric id index.
pub struct FixtureStore {
    records: Vec<User>,
    by_id: HashMap<u64, usize>,
}

impl FixtureStore {
    /// Parse a `{ "users": [...] }` payload and validate its ids.
    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let payload: UsersPayload = serde_json::from_str(raw)?;
        Self::from_records(payload.users)
    }

    /// Build a store from already-decoded records. Ids must be numeric and
    /// unique; record order is preserved.
    pub fn from_records(records: Vec<User>) -> Result<Self, FixtureError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let id: u64 = record
                .id
                .parse()
                .map_err(|_| FixtureError::NonNumericId(record.id.clone()))?;
            if by_id.insert(id, index).is_some() {
                return Err(FixtureError::DuplicateId(id));
            }
        }
        Ok(Self { records, by_id })
    }

    /// All records in dataset order.
    pub fn all(&self) -> &[User] {
        &self.records
    }

    /// Look up a single record by numeric id.
    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str) -> User {
        User {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("user{id}@example.com"),
            image_url: format!("https://robohash.org/user{id}.png?set=set4"),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_builtin_has_thirty_records() {
        let store = builtin();
        assert_eq!(store.len(), 30);
        assert_eq!(store.all().len(), 30);
    }

    #[test]
    fn test_builtin_fixed_entries() {
        let store = builtin();
        assert_eq!(store.all()[0].full_name(), "Umair Medhurst");
        assert_eq!(store.all()[0].email, "atuny0@sohu.com");
        assert_eq!(store.all()[14].full_name(), "Jeanne Halvorson");
        assert_eq!(store.all()[14].email, "kminchelle@qq.com");
        assert_eq!(store.all()[29].full_name(), "Maurine Stracke");
        assert_eq!(store.all()[29].email, "kdulyt@umich.edu");
    }

    #[test]
    fn test_builtin_ids_are_sequential() {
        let store = builtin();
        for (index, user) in store.all().iter().enumerate() {
            assert_eq!(user.id, (index + 1).to_string());
        }
    }

    #[test]
    fn test_find_by_id_hit_and_miss() {
        let store = builtin();
        let user = store.find_by_id(15).unwrap();
        assert_eq!(user.email, "kminchelle@qq.com");
        assert!(store.find_by_id(9999).is_none());
        assert!(store.find_by_id(0).is_none());
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result = FixtureStore::from_records(vec![record("1"), record("abc")]);
        assert!(matches!(result, Err(FixtureError::NonNumericId(id)) if id == "abc"));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let result = FixtureStore::from_records(vec![record("1"), record("1")]);
        assert!(matches!(result, Err(FixtureError::DuplicateId(1))));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            FixtureStore::from_json(r#"{"items": []}"#),
            Err(FixtureError::Parse(_))
        ));
    }
}

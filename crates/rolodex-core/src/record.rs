//! Wire types for the user directory API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user record as returned by the list and lookup endpoints.
///
/// `id` is the record identity, unique within a fetched batch. The order of
/// records in a payload is the display order; index-based assertions in the
/// fixture tests rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image_url: String,
    pub birth_date: NaiveDate,
}

impl User {
    /// Display name: first and last name joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Collection payload of `GET /users`. Unknown sibling fields are ignored;
/// a 2xx body without a `users` array is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersPayload {
    pub users: Vec<User>,
}

/// Structured error body returned by the lookup endpoint (404/400).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_camel_case() {
        let json = r#"{
            "id": "7",
            "firstName": "Oleta",
            "lastName": "Abbott",
            "email": "dpettegre6@columbia.edu",
            "imageUrl": "https://robohash.org/oleta-abbott.png?set=set4",
            "birthDate": "1982-02-09"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.full_name(), "Oleta Abbott");
        assert_eq!(user.birth_date, NaiveDate::from_ymd_opt(1982, 2, 9).unwrap());
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: "1".to_string(),
            first_name: "Umair".to_string(),
            last_name: "Medhurst".to_string(),
            email: "atuny0@sohu.com".to_string(),
            image_url: "https://robohash.org/umair-medhurst.png?set=set4".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 12, 25).unwrap(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["firstName"], "Umair");
        assert_eq!(value["imageUrl"], "https://robohash.org/umair-medhurst.png?set=set4");
        assert_eq!(value["birthDate"], "2000-12-25");
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let json = r#"{"users": [], "total": 100, "skip": 0, "limit": 30}"#;
        let payload: UsersPayload = serde_json::from_str(json).unwrap();
        assert!(payload.users.is_empty());
    }

    #[test]
    fn test_payload_without_users_is_an_error() {
        let json = r#"{"items": []}"#;
        assert!(serde_json::from_str::<UsersPayload>(json).is_err());
    }
}

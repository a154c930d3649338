//! Default interception rules serving the embedded user fixtures.
//!
//! Two endpoints are covered: the collection (`GET /users`) and the single
//! record lookup (`GET /users/{id}`). The collection rule deliberately
//! ignores paging parameters and always returns the full dataset.

use super::{MockResponse, MockRule, UrlPattern};
use crate::fixture::FixtureStore;
use regex::Regex;
use serde_json::json;
use std::sync::OnceLock;

static USER_LOOKUP_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `/users/{id}` and captures the trailing segment. The segment is
/// validated by the responder, not the pattern, so non-numeric ids still
/// route here and produce the structured 400 body.
fn user_lookup_regex() -> &'static Regex {
    USER_LOOKUP_REGEX
        .get_or_init(|| Regex::new(r"/users/([^/]+)$").expect("Failed to compile lookup pattern"))
}

/// The rules for both user directory endpoints, in registration order.
pub fn default_rules(store: &'static FixtureStore) -> Vec<MockRule> {
    vec![users_collection_rule(store), user_by_id_rule(store)]
}

/// `GET /users`: the full fixture dataset, regardless of query parameters.
pub fn users_collection_rule(store: &'static FixtureStore) -> MockRule {
    MockRule::new(UrlPattern::Suffix("/users".to_string()), move |_request| {
        MockResponse::json(200, json!({ "users": store.all() }))
    })
}

/// `GET /users/{id}`: fixture lookup by numeric id. Unknown ids get a 404
/// with `{"message": "User not found"}`; non-numeric ids get a 400 with
/// `{"message": "Invalid user ID"}`.
pub fn user_by_id_rule(store: &'static FixtureStore) -> MockRule {
    MockRule::new(
        UrlPattern::Regex(user_lookup_regex().clone()),
        move |request| {
            let raw = request.params.first().map(String::as_str).unwrap_or_default();
            match raw.parse::<u64>() {
                Ok(id) => match store.find_by_id(id) {
                    Some(user) => MockResponse::json(200, json!(user)),
                    None => MockResponse::message(404, "User not found"),
                },
                Err(_) => MockResponse::message(400, "Invalid user ID"),
            }
        },
    )
}

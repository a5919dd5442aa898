//! Mock fixtures for integration tests.
//!
//! Re-exports the mocks from `chitchat::adapters::mock` and adds JSON
//! builders for wiremock responses.

#![allow(dead_code)]

pub use chitchat::adapters::mock::{
    fixture_page, fixture_post, MockCall, MockFailure, MockPostsApi, Operation,
};

use serde_json::{json, Value};

/// A post as the backend returns it.
pub fn post_json(id: &str, owner_id: &str) -> Value {
    json!({
        "_id": id,
        "title": format!("Post {}", id),
        "body": "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod",
        "image": "data:image/png;base64,AA==",
        "tags": [{"_id": "t1", "name": "general"}],
        "user": {"_id": owner_id, "firstName": "Test", "lastName": "User"},
        "likeInfo": {"usersId": [], "users": []},
        "createdAt": "2024-05-01T12:00:00.000Z"
    })
}

/// Paged-fetch response body.
pub fn page_json(ids: &[&str], count: u64) -> Value {
    let posts: Vec<Value> = ids.iter().map(|id| post_json(id, "owner")).collect();
    json!({"data": {"posts": posts, "count": count}})
}

/// Search response body.
pub fn search_json(ids: &[&str]) -> Value {
    let posts: Vec<Value> = ids.iter().map(|id| post_json(id, "owner")).collect();
    json!({"data": posts})
}

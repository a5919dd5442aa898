use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag attached to a post. The backend identifies tags by name on create
/// and returns an `_id` on reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Tag {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// Owner of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl PostAuthor {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A user listed as having liked a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeUser {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Who liked a post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LikeInfo {
    #[serde(rename = "usersId", default)]
    pub user_ids: Vec<String>,
    #[serde(default)]
    pub users: Vec<LikeUser>,
}

/// A post as returned by the posts collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(rename = "user")]
    pub author: PostAuthor,
    #[serde(default)]
    pub like_info: Option<LikeInfo>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn owner_id(&self) -> &str {
        &self.author.id
    }

    /// Whether `user_id` appears among the likers.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.like_info
            .as_ref()
            .map(|info| info.user_ids.iter().any(|id| id == user_id))
            .unwrap_or(false)
    }

    pub fn like_count(&self) -> usize {
        self.like_info
            .as_ref()
            .map(|info| info.users.len().max(info.user_ids.len()))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "65f0a1",
            "title": "Sunset",
            "body": "Went to the beach",
            "image": "data:image/png;base64,AAAA",
            "tags": [{"_id": "t1", "name": "travel"}],
            "user": {"_id": "u1", "firstName": "Ana", "lastName": "Petrovic"},
            "likeInfo": {"usersId": ["u2", "u3"], "users": [{"_id": "u2"}, {"_id": "u3"}]},
            "createdAt": "2024-03-12T10:15:00.000Z"
        }"#
    }

    #[test]
    fn test_deserialize_backend_post() {
        let post: Post = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(post.id, "65f0a1");
        assert_eq!(post.owner_id(), "u1");
        assert_eq!(post.author.display_name(), "Ana Petrovic");
        assert_eq!(post.tags[0].name, "travel");
        assert!(post.created_at.is_some());
    }

    #[test]
    fn test_like_derivations() {
        let post: Post = serde_json::from_str(sample_json()).unwrap();
        assert!(post.is_liked_by("u2"));
        assert!(!post.is_liked_by("u1"));
        assert_eq!(post.like_count(), 2);
    }

    #[test]
    fn test_missing_like_info_means_no_likes() {
        let post: Post = serde_json::from_str(
            r#"{"_id": "p", "user": {"_id": "u1"}, "likeInfo": null}"#,
        )
        .unwrap();
        assert!(post.like_info.is_none());
        assert_eq!(post.like_count(), 0);
        assert!(!post.is_liked_by("u1"));
    }

    #[test]
    fn test_tag_named_serializes_without_id() {
        let json = serde_json::to_value(Tag::named("food")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "food"}));
    }
}

//! Response schema for the AIgram backend
//!
//! Every optional field in a payload is declared here once, with its default.
//! Views consume these types as-is and never re-check for absent fields.
//!
//! Decoding is per field: a value of the wrong type reads as that field's default
//! instead of failing the enclosing object. Only a post or story without a usable
//! `_id` is rejected.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Decode `T`, reading `null` or a mistyped value as `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Non-negative whole number. Whole floats like `5.0` count; anything else is 0.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value).unwrap_or_default())
}

fn count_from_value(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    (n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64).then_some(n as u64)
}

/// Identifiers arrive as strings or numbers.
fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| D::Error::custom(format!("unusable _id: {}", value)))
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(id_from_value(&value))
}

/// Decode a JSON array, dropping elements that don't match `T`.
///
/// Fails only when the value itself is not an array.
pub(crate) fn parse_list<T: DeserializeOwned>(value: Value) -> Option<Vec<T>> {
    let Value::Array(elements) = value else {
        return None;
    };

    let total = elements.len();
    let items: Vec<T> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();

    if items.len() < total {
        debug!("Skipped {} malformed list element(s)", total - items.len());
    }

    Some(items)
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(parse_list))
}

/// A user as embedded in posts, stories and the profile payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, deserialize_with = "optional_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", deserialize_with = "required_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub author: User,
    #[serde(default, deserialize_with = "lenient")]
    pub media_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "count")]
    pub like_count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Story {
    #[serde(rename = "_id", deserialize_with = "required_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub author: User,
    #[serde(default, deserialize_with = "lenient")]
    pub media_url: Option<String>,
}

/// Profile counters. Missing counts read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "count")]
    pub posts: u64,
    #[serde(default, deserialize_with = "count")]
    pub followers: u64,
    #[serde(default, deserialize_with = "count")]
    pub following: u64,
}

/// Payload of `GET /api/me`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Me {
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub posts: Option<Vec<Post>>,
    #[serde(default, deserialize_with = "lenient")]
    pub stats: Option<Stats>,
}

impl Me {
    /// Whether any top-level field came back non-null.
    pub fn is_populated(&self) -> bool {
        self.user.is_some() || self.posts.is_some() || self.stats.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_without_caption_or_avatar() {
        let post: Post = serde_json::from_value(json!({
            "_id": "p1",
            "author": { "username": "ann" },
            "media_url": "a.jpg",
            "like_count": 3
        }))
        .unwrap();

        assert_eq!(post.id, "p1");
        assert_eq!(post.author.username, "ann");
        assert_eq!(post.author.avatar_url, None);
        assert_eq!(post.media_url.as_deref(), Some("a.jpg"));
        assert_eq!(post.caption, None);
        assert_eq!(post.like_count, 3);
    }

    #[test]
    fn post_nulls_fall_back_to_defaults() {
        let post: Post = serde_json::from_value(json!({
            "_id": "p2",
            "author": null,
            "like_count": null,
            "caption": null
        }))
        .unwrap();

        assert_eq!(post.author, User::default());
        assert_eq!(post.like_count, 0);
        assert_eq!(post.caption, None);
    }

    #[test]
    fn post_requires_id() {
        let result: Result<Post, _> = serde_json::from_value(json!({ "media_url": "a.jpg" }));
        assert!(result.is_err());
    }

    #[test]
    fn parse_list_rejects_non_arrays() {
        assert_eq!(parse_list::<Story>(json!({ "error": "boom" })), None);
        assert_eq!(parse_list::<Story>(json!(null)), None);
        assert_eq!(parse_list::<Story>(json!("[]")), None);
    }

    #[test]
    fn parse_list_skips_malformed_elements() {
        let stories = parse_list::<Story>(json!([
            { "_id": "s1", "author": { "username": "ann" } },
            42,
            { "author": { "username": "no-id" } },
            { "_id": "s2" }
        ]))
        .unwrap();

        let ids: Vec<&str> = stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn me_full_payload() {
        let me: Me = serde_json::from_value(json!({
            "user": { "username": "bob" },
            "posts": [],
            "stats": { "posts": 0, "followers": 5, "following": 2 }
        }))
        .unwrap();

        assert!(me.is_populated());
        assert_eq!(me.user.unwrap().username, "bob");
        assert_eq!(me.posts, Some(vec![]));
        assert_eq!(
            me.stats,
            Some(Stats {
                posts: 0,
                followers: 5,
                following: 2
            })
        );
    }

    #[test]
    fn me_partial_stats() {
        let me: Me = serde_json::from_value(json!({ "stats": { "followers": 7 } })).unwrap();
        let stats = me.stats.unwrap();
        assert_eq!(stats.posts, 0);
        assert_eq!(stats.followers, 7);
        assert_eq!(stats.following, 0);
    }

    #[test]
    fn me_empty_object_is_unpopulated() {
        let me: Me = serde_json::from_value(json!({})).unwrap();
        assert!(!me.is_populated());
    }

    #[test]
    fn me_posts_not_a_list_reads_as_absent() {
        let me: Me = serde_json::from_value(json!({
            "user": { "username": "bob" },
            "posts": "nope"
        }))
        .unwrap();
        assert_eq!(me.posts, None);
    }

    #[test]
    fn me_null_body() {
        let me: Option<Me> = serde_json::from_str("null").unwrap();
        assert_eq!(me, None);
    }

    #[test]
    fn whole_float_counts_are_accepted() {
        let me: Me = serde_json::from_value(json!({
            "user": { "username": "bob" },
            "stats": { "posts": 0, "followers": 5.0, "following": 2 }
        }))
        .unwrap();

        assert_eq!(me.stats.unwrap().followers, 5);
    }

    #[test]
    fn unusable_counts_read_as_zero() {
        let stats: Stats = serde_json::from_value(json!({
            "posts": -1,
            "followers": 2.5,
            "following": "many"
        }))
        .unwrap();
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let me: Me =
            serde_json::from_value(json!({ "user": { "_id": 7, "username": "bob" } })).unwrap();
        let user = me.user.unwrap();
        assert_eq!(user.id.as_deref(), Some("7"));
        assert_eq!(user.username, "bob");

        let posts = parse_list::<Post>(json!([{ "_id": 12, "like_count": 3.0 }])).unwrap();
        assert_eq!(posts[0].id, "12");
        assert_eq!(posts[0].like_count, 3);
    }

    #[test]
    fn mistyped_fields_fall_back_per_field() {
        let posts = parse_list::<Post>(json!([{
            "_id": "p1",
            "author": "ann",
            "media_url": 5,
            "caption": ["hi"],
            "like_count": 3.0
        }]))
        .unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, User::default());
        assert_eq!(posts[0].media_url, None);
        assert_eq!(posts[0].caption, None);
        assert_eq!(posts[0].like_count, 3);
    }

    #[test]
    fn mistyped_profile_sections_read_as_absent() {
        let me: Me = serde_json::from_value(json!({
            "user": { "username": 42, "bio": "hi" },
            "stats": "hidden"
        }))
        .unwrap();

        let user = me.user.clone().unwrap();
        assert_eq!(user.username, "");
        assert_eq!(user.bio.as_deref(), Some("hi"));
        assert_eq!(me.stats, None);
        assert!(me.is_populated());
    }

    #[test]
    fn post_with_object_id_is_rejected() {
        let result: Result<Post, _> = serde_json::from_value(json!({ "_id": { "$oid": "x" } }));
        assert!(result.is_err());
    }
}

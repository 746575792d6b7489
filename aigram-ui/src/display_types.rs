//! Display types for UI components
//!
//! Render-ready shapes built from backend payloads. Every field a view needs is
//! already resolved here, so components never deal with missing data.

use aigram_common::Likeable;

/// Author shown in post headers and story bubbles
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthorChip {
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Post as shown in the home feed
#[derive(Clone, Debug, PartialEq)]
pub struct PostCard {
    pub id: String,
    pub author: AuthorChip,
    pub media_url: Option<String>,
    pub caption: Option<String>,
    pub like_count: u64,
    /// Client-local flag; the backend does not report it
    pub liked: bool,
}

impl PostCard {
    pub fn likes_label(&self) -> String {
        format!("{} likes", self.like_count)
    }
}

impl Likeable for PostCard {
    fn like_id(&self) -> &str {
        &self.id
    }

    fn is_liked(&self) -> bool {
        self.liked
    }

    fn mark_liked(&mut self) {
        self.liked = true;
    }
}

/// Story bubble in the stories strip
#[derive(Clone, Debug, PartialEq)]
pub struct StoryBubble {
    pub id: String,
    pub author: AuthorChip,
}

/// Square media tile in explore and profile grids
#[derive(Clone, Debug, PartialEq)]
pub struct GridTile {
    pub id: String,
    pub media_url: Option<String>,
}

/// Profile counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub posts: u64,
    pub followers: u64,
    pub following: u64,
}

impl ProfileStats {
    /// `(count, label)` pairs in display order
    pub fn entries(&self) -> [(u64, &'static str); 3] {
        [
            (self.posts, "posts"),
            (self.followers, "followers"),
            (self.following, "following"),
        ]
    }
}

/// Everything the profile page renders once loaded
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileSummary {
    pub username: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub stats: ProfileStats,
    pub posts: Vec<GridTile>,
}

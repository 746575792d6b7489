//! Mapping from backend payloads to display types

use aigram_core::{Me, Post, Story, User};
use aigram_ui::{AuthorChip, GridTile, PostCard, ProfileStats, ProfileSummary, StoryBubble};

fn author_chip(user: &User) -> AuthorChip {
    AuthorChip {
        username: user.username.clone(),
        avatar_url: user.avatar_url.clone(),
    }
}

pub fn post_card(post: &Post) -> PostCard {
    PostCard {
        id: post.id.clone(),
        author: author_chip(&post.author),
        media_url: post.media_url.clone(),
        caption: post.caption.clone(),
        like_count: post.like_count,
        liked: false,
    }
}

pub fn story_bubble(story: &Story) -> StoryBubble {
    StoryBubble {
        id: story.id.clone(),
        author: author_chip(&story.author),
    }
}

pub fn grid_tile(post: &Post) -> GridTile {
    GridTile {
        id: post.id.clone(),
        media_url: post.media_url.clone(),
    }
}

/// Build the profile page contents. `None` when the payload carried nothing to show.
pub fn profile_summary(me: Option<Me>) -> Option<ProfileSummary> {
    let me = me.filter(Me::is_populated)?;
    let user = me.user.unwrap_or_default();
    let stats = me.stats.unwrap_or_default();

    Some(ProfileSummary {
        username: user.username,
        avatar_url: user.avatar_url,
        bio: user.bio,
        stats: ProfileStats {
            posts: stats.posts,
            followers: stats.followers,
            following: stats.following,
        },
        posts: me.posts.unwrap_or_default().iter().map(grid_tile).collect(),
    })
}

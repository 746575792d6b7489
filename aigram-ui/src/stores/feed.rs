//! Home feed state store

use crate::display_types::{PostCard, StoryBubble};
use aigram_common::{apply_like, EmptyPolicy, LikeOutcome, LoadPhase};
use dioxus::prelude::*;

/// State for the home feed (stories strip + posts)
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FeedState {
    /// Load lifecycle of this mount
    pub phase: LoadPhase,
    pub stories: Vec<StoryBubble>,
    pub posts: Vec<PostCard>,
}

impl FeedState {
    /// State for a freshly mounted feed, already loading.
    pub fn mounted() -> Self {
        let mut phase = LoadPhase::Init;
        phase.begin();
        Self {
            phase,
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Apply the result of the load sequence. Ignored if already settled.
    pub fn settle(&mut self, stories: Vec<StoryBubble>, posts: Vec<PostCard>) -> bool {
        if !self.phase.settle(true, EmptyPolicy::RenderEmptyList) {
            return false;
        }
        self.stories = stories;
        self.posts = posts;
        true
    }

    /// Optimistically mark a post as liked.
    pub fn like(&mut self, post_id: &str) -> LikeOutcome {
        apply_like(&mut self.posts, post_id)
    }
}

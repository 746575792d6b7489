//! Home feed view - pure rendering, no data fetching
//!
//! Accepts `ReadStore<FeedState>` and reads the phase first, so nothing from
//! the collections renders until the load sequence has settled.

use crate::components::helpers::LoadingVisualization;
use crate::components::post_card::PostCardView;
use crate::components::stories::StoriesStripView;
use crate::stores::feed::{FeedState, FeedStateStoreExt};
use dioxus::prelude::*;

#[component]
pub fn FeedView(state: ReadStore<FeedState>, on_like: EventHandler<String>) -> Element {
    let loading = state.phase().read().is_loading();

    if loading {
        return rsx! {
            LoadingVisualization {}
        };
    }

    let stories = state.stories().read().clone();
    let posts = state.posts().read().clone();

    rsx! {
        div {
            StoriesStripView { stories }
            div {
                // Keyed by position: ids are not guaranteed unique
                for (index, post) in posts.into_iter().enumerate() {
                    PostCardView { key: "{index}", post, on_like }
                }
            }
        }
    }
}

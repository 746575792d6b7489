//! Explore view - grid of recent post media

use crate::components::helpers::LoadingSpinner;
use crate::components::media_grid::MediaGridView;
use crate::stores::explore::{ExploreState, ExploreStateStoreExt};
use dioxus::prelude::*;

#[component]
pub fn ExploreView(state: ReadStore<ExploreState>) -> Element {
    if state.phase().read().is_loading() {
        return rsx! {
            LoadingSpinner {}
        };
    }

    let tiles = state.tiles().read().clone();

    rsx! {
        MediaGridView { tiles }
    }
}

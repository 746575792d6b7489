//! Profile view component - pure rendering, no data fetching

use crate::components::helpers::{Avatar, CenteredMessage};
use crate::components::media_grid::MediaGridView;
use crate::display_types::ProfileSummary;
use crate::stores::profile::{ProfileState, ProfileStateStoreExt};
use aigram_common::LoadPhase;
use dioxus::prelude::*;

pub const PROFILE_LOADING_MESSAGE: &str = "Loading profile…";
pub const PROFILE_UNAVAILABLE_MESSAGE: &str = "Profile unavailable";
pub const NO_POSTS_MESSAGE: &str = "No posts yet";

#[component]
pub fn ProfileView(state: ReadStore<ProfileState>) -> Element {
    let phase = *state.phase().read();
    let profile = state.profile().read().clone();

    match (phase, profile) {
        (LoadPhase::Init | LoadPhase::Loading, _) => rsx! {
            CenteredMessage { message: PROFILE_LOADING_MESSAGE.to_string() }
        },
        (LoadPhase::Ready, Some(profile)) => rsx! {
            ProfileDetails { profile }
        },
        _ => rsx! {
            CenteredMessage { message: PROFILE_UNAVAILABLE_MESSAGE.to_string() }
        },
    }
}

#[component]
fn ProfileDetails(profile: ProfileSummary) -> Element {
    rsx! {
        div {
            div { class: "px-4 py-6",
                div { class: "flex items-center gap-6",
                    Avatar {
                        url: profile.avatar_url.clone(),
                        class: "w-20 h-20",
                    }
                    div { class: "flex-1",
                        div { class: "text-lg font-semibold", "{profile.username}" }
                        div { class: "flex gap-6 mt-2 text-sm",
                            for (count, label) in profile.stats.entries() {
                                div { key: "{label}",
                                    span { class: "font-semibold", "{count}" }
                                    " {label}"
                                }
                            }
                        }
                        if let Some(bio) = &profile.bio {
                            div { class: "text-sm text-gray-600 mt-2", "{bio}" }
                        }
                    }
                }
                div { class: "mt-4",
                    button { class: "px-4 py-2 border border-gray-300 rounded-md text-sm",
                        "Edit profile"
                    }
                }
            }
            div { class: "border-t border-gray-200" }
            MediaGridView {
                tiles: profile.posts.clone(),
                empty_message: NO_POSTS_MESSAGE.to_string(),
            }
        }
    }
}

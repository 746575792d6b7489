//! Stories strip

use crate::components::helpers::Avatar;
use crate::display_types::StoryBubble;
use dioxus::prelude::*;

/// Horizontally scrolling row of story bubbles
#[component]
pub fn StoriesStripView(stories: Vec<StoryBubble>) -> Element {
    rsx! {
        div { class: "border-b border-gray-200 py-3",
            div { class: "flex gap-3 overflow-x-auto px-3 no-scrollbar",
                for (index, story) in stories.into_iter().enumerate() {
                    div { key: "{index}", class: "flex flex-col items-center",
                        Avatar {
                            url: story.author.avatar_url.clone(),
                            class: "w-16 h-16 ring-2 ring-pink-500",
                        }
                        span { class: "text-xs mt-1 text-gray-600", "{story.author.username}" }
                    }
                }
            }
        }
    }
}

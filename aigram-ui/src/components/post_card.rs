//! Post card component - pure view with callbacks

use crate::components::helpers::Avatar;
use crate::components::icons::{HeartIcon, ImageIcon};
use crate::display_types::PostCard;
use dioxus::prelude::*;

/// One post in the home feed
///
/// The liked look comes from `post.liked`; the card keeps no local state, so the
/// flag lives with the feed store and survives re-renders.
#[component]
pub fn PostCardView(post: PostCard, on_like: EventHandler<String>) -> Element {
    let likes_label = post.likes_label();
    let like_class = if post.liked { "p-1 text-pink-600" } else { "p-1" };
    let post_id = post.id.clone();

    rsx! {
        div { class: "border-b border-gray-200", "data-testid": "post-card",
            div { class: "flex items-center gap-3 px-3 py-2",
                Avatar { url: post.author.avatar_url.clone() }
                div { class: "text-sm font-medium", "{post.author.username}" }
            }
            div { class: "bg-black",
                if let Some(url) = &post.media_url {
                    img { src: "{url}", class: "w-full object-cover" }
                } else {
                    div { class: "aspect-square flex items-center justify-center text-gray-500",
                        ImageIcon { class: "w-12 h-12" }
                    }
                }
            }
            div { class: "px-3 py-2 flex items-center gap-4",
                button {
                    class: "{like_class}",
                    "aria-pressed": "{post.liked}",
                    onclick: move |_| on_like.call(post_id.clone()),
                    HeartIcon { filled: post.liked }
                }
            }
            div { class: "px-3 pb-3",
                div { class: "text-sm font-semibold", "{likes_label}" }
                if let Some(caption) = &post.caption {
                    div { class: "text-sm mt-1", "data-testid": "post-caption",
                        span { class: "font-semibold mr-1", "{post.author.username}" }
                        "{caption}"
                    }
                }
            }
        }
    }
}

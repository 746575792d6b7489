//! Round avatar image

use crate::components::icons::UserIcon;
use dioxus::prelude::*;

/// Round avatar. Falls back to a user glyph when there is no image.
#[component]
pub fn Avatar(
    url: Option<String>,
    /// Size and ring classes, e.g. "w-8 h-8"
    #[props(default = "w-8 h-8")]
    class: &'static str,
) -> Element {
    rsx! {
        if let Some(url) = url {
            img { src: "{url}", alt: "", class: "{class} rounded-full object-cover" }
        } else {
            div { class: "{class} rounded-full bg-gray-200 text-gray-400 flex items-center justify-center",
                UserIcon { class: "w-1/2 h-1/2" }
            }
        }
    }
}

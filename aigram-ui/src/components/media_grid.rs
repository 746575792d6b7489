//! Three-column square media grid

use crate::components::icons::ImageIcon;
use crate::display_types::GridTile;
use dioxus::prelude::*;

/// Grid of post media. `empty_message` renders across the grid when there are no tiles.
#[component]
pub fn MediaGridView(
    tiles: Vec<GridTile>,
    #[props(default)] empty_message: Option<String>,
) -> Element {
    let is_empty = tiles.is_empty();

    rsx! {
        div { class: "grid grid-cols-3 gap-0.5",
            for (index, tile) in tiles.into_iter().enumerate() {
                MediaTile { key: "{index}", tile }
            }
            if is_empty {
                if let Some(message) = empty_message {
                    div { class: "col-span-3 py-16 text-center text-gray-500", "{message}" }
                }
            }
        }
    }
}

#[component]
fn MediaTile(tile: GridTile) -> Element {
    rsx! {
        if let Some(url) = &tile.media_url {
            img { src: "{url}", class: "w-full aspect-square object-cover" }
        } else {
            div { class: "w-full aspect-square bg-gray-100 flex items-center justify-center text-gray-400",
                ImageIcon {}
            }
        }
    }
}

//! aigram-web - the AIgram client app
//!
//! Wires the core gateway and loaders to the views in aigram-ui.

pub mod controller;
pub mod convert;
pub mod pages;

use aigram_core::{Config, DataGateway, HttpGateway};
use dioxus::prelude::*;
use pages::Shell;
use std::rc::Rc;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Shared handle to the backend, provided as context by [`App`]
#[derive(Clone)]
pub struct Gateway(pub Rc<dyn DataGateway>);

impl Gateway {
    pub fn new(gateway: impl DataGateway + 'static) -> Self {
        Self(Rc::new(gateway))
    }
}

pub fn use_gateway() -> Rc<dyn DataGateway> {
    use_context::<Gateway>().0
}

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();
    use_context_provider(move || Gateway::new(HttpGateway::from_config(&config)));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        Shell {}
    }
}

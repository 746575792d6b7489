use crate::{controller, use_gateway};
use aigram_common::{MountId, TabRouter};
use aigram_core::load_explore;
use aigram_ui::stores::ExploreState;
use aigram_ui::ExploreView;
use dioxus::prelude::*;

#[component]
pub fn ExploreGrid(mount: MountId) -> Element {
    let gateway = use_gateway();
    let router = use_context::<Signal<TabRouter>>();
    let mut state = use_store(ExploreState::mounted);

    use_hook(|| {
        spawn(async move {
            let posts = load_explore(gateway.as_ref()).await;
            controller::settle_if_mounted(&router.peek(), mount, || {
                controller::settle_explore(&mut state.write(), &posts)
            });
        })
    });

    rsx! {
        ExploreView { state }
    }
}

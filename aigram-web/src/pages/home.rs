use crate::{controller, use_gateway};
use aigram_common::{MountId, TabRouter};
use aigram_core::load_home;
use aigram_ui::stores::FeedState;
use aigram_ui::FeedView;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

#[component]
pub fn HomeFeed(mount: MountId) -> Element {
    let gateway = use_gateway();
    let router = use_context::<Signal<TabRouter>>();
    let mut state = use_store(FeedState::mounted);

    // Load once per mount
    use_hook(|| {
        let gateway = gateway.clone();
        spawn(async move {
            let data = load_home(gateway.as_ref()).await;
            controller::settle_if_mounted(&router.peek(), mount, || {
                controller::settle_home(&mut state.write(), &data)
            });
        })
    });

    rsx! {
        FeedView {
            state,
            on_like: move |post_id: String| {
                let request = controller::like(&mut state.write(), gateway.clone(), post_id);
                // Outlives the mount; the result is never applied
                spawn_forever(request);
            },
        }
    }
}

use dioxus::prelude::*;
use futures::StreamExt;
use tracing::Level;

use course_nav::components::layout::Sidebar;
use course_nav::hooks::use_sidebar_state;
use course_nav::host::streamlit::listen_for_render;
use course_nav::host::{Host, RenderArgs, StreamlitBridge};
use course_nav::url_state::host_search;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let host = use_context_provider(|| Host::new(StreamlitBridge));
    let mut sidebar = use_sidebar_state();
    use_context_provider(|| sidebar);

    // Render events arrive on a JS callback; hand them to the Dioxus runtime.
    let renders = use_coroutine(move |mut rx: UnboundedReceiver<RenderArgs>| async move {
        while let Some(args) = rx.next().await {
            sidebar.apply_render(&args, &host_search());
        }
    });

    let ready_host = host.clone();
    use_hook(move || {
        let tx = renders.tx();
        if let Err(e) = listen_for_render(move |args| {
            let _ = tx.unbounded_send(args);
        }) {
            tracing::warn!("Not listening for render events: {}", e);
        }
        ready_host.ready();
    });

    // Runs after the DOM is committed: on mount, after every rebuild and toggle.
    use_effect(move || {
        let generation = (sidebar.generation)();
        let epoch = (sidebar.layout_epoch)();
        tracing::debug!("Reporting frame height (generation {}, layout {})", generation, epoch);
        host.resize();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Sidebar {}
    }
}

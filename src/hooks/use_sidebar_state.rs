use dioxus::prelude::*;

use crate::config::MenuConfig;
use crate::host::RenderArgs;
use crate::menu::Menu;

#[derive(Clone, Copy)]
pub struct SidebarState {
    /// `None` until the first render event arrives.
    pub menu: Signal<Option<Menu>>,
    pub config: Signal<MenuConfig>,
    /// Bumped on every render event; keys the course list so branches remount.
    pub generation: Signal<u64>,
    /// Bumped whenever an accordion changes the rendered height.
    pub layout_epoch: Signal<u64>,
}

pub fn use_sidebar_state() -> SidebarState {
    let menu = use_signal(|| None);
    let config = use_signal(MenuConfig::default);
    let generation = use_signal(|| 0);
    let layout_epoch = use_signal(|| 0);

    SidebarState {
        menu,
        config,
        generation,
        layout_epoch,
    }
}

impl SidebarState {
    /// Rebuild the whole menu from a render event and the host query string.
    pub fn apply_render(&mut self, args: &RenderArgs, search: &str) {
        let (menu, config) = crate::render_menu(args, search);
        tracing::debug!(
            "Rebuilding navigation: {} course nodes, query {:?}",
            menu.node_count(),
            search
        );

        *self.menu.write() = Some(menu);
        *self.config.write() = config;
        *self.generation.write() += 1;
    }

    pub fn layout_changed(&mut self) {
        *self.layout_epoch.write() += 1;
    }
}

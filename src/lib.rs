//! Course navigation sidebar for an embedded Streamlit widget.
//!
//! The host pushes a nested navigation tree (programs → modules → lessons →
//! groups → cards); the widget reads the host page's query string, works out
//! which branch is active and renders a collapsible menu with that branch open.

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod host;
pub mod menu;
pub mod types;
pub mod url_state;

use config::MenuConfig;
use host::RenderArgs;
use menu::Menu;
use url_state::SelectionPath;

/// Full rebuild for one render event: selection from `search`, then the view model.
pub fn render_menu(args: &RenderArgs, search: &str) -> (Menu, MenuConfig) {
    let config = args.config();
    let path = SelectionPath::from_query(search, &config.default_page);
    let menu = menu::build_menu(&args.tree(), &path, &config);
    (menu, config)
}

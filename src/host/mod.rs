//! Capabilities the embedding host provides to the widget

pub mod streamlit;

use std::cell::Cell;
use std::rc::Rc;

use serde::Deserialize;

use crate::config::MenuConfig;
use crate::error::NavResult;
use crate::types::NavigationTree;

pub use streamlit::StreamlitBridge;

/// One-way notifications to the host frame. Nothing is awaited.
pub trait HostBridge {
    fn notify_ready(&self);
    fn notify_size_changed(&self);
}

/// Shared handle to the host bridge, provided through Dioxus context.
#[derive(Clone)]
pub struct Host {
    bridge: Rc<dyn HostBridge>,
    ready_sent: Rc<Cell<bool>>,
}

impl Host {
    pub fn new(bridge: impl HostBridge + 'static) -> Self {
        Self {
            bridge: Rc::new(bridge),
            ready_sent: Rc::new(Cell::new(false)),
        }
    }

    /// Send the ready handshake. Repeated calls after the first are ignored.
    pub fn ready(&self) {
        if !self.ready_sent.replace(true) {
            self.bridge.notify_ready();
        }
    }

    /// Ask the host to re-measure the widget; call after the DOM changed.
    pub fn resize(&self) {
        self.bridge.notify_size_changed();
    }
}

/// Arguments of one host render event.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RenderArgs {
    #[serde(default, alias = "navigationData")]
    pub navigation_data: Option<NavigationTree>,
    #[serde(default)]
    pub config: Option<MenuConfig>,
}

impl RenderArgs {
    pub fn from_json(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn tree(&self) -> NavigationTree {
        self.navigation_data.clone().unwrap_or_default()
    }

    pub fn config(&self) -> MenuConfig {
        self.config.clone().unwrap_or_default()
    }
}

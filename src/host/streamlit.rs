//! Streamlit component protocol over `window.postMessage`

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use super::{HostBridge, RenderArgs};
use crate::error::{NavError, NavResult};

pub const COMPONENT_READY: &str = "streamlit:componentReady";
pub const SET_FRAME_HEIGHT: &str = "streamlit:setFrameHeight";
pub const RENDER_EVENT: &str = "streamlit:render";

const API_VERSION: u32 = 1;

// ========================
// Outbound
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub is_streamlit_message: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl OutboundMessage {
    pub fn component_ready() -> Self {
        Self {
            is_streamlit_message: true,
            kind: COMPONENT_READY,
            api_version: Some(API_VERSION),
            height: None,
        }
    }

    pub fn frame_height(height: f64) -> Self {
        Self {
            is_streamlit_message: true,
            kind: SET_FRAME_HEIGHT,
            api_version: None,
            height: Some(height),
        }
    }
}

/// Bridge that talks to a Streamlit parent frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamlitBridge;

impl StreamlitBridge {
    fn post(&self, message: &OutboundMessage) -> NavResult<()> {
        let window = web_sys::window().ok_or(NavError::NoWindow)?;
        let parent = window
            .parent()
            .map_err(js_error)?
            .ok_or(NavError::NoParentFrame)?;
        let value = serde_wasm_bindgen::to_value(message)?;
        parent.post_message(&value, "*").map_err(js_error)
    }

    fn content_height(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.scroll_height() as f64)
            .unwrap_or(0.0)
    }
}

impl HostBridge for StreamlitBridge {
    fn notify_ready(&self) {
        if let Err(e) = self.post(&OutboundMessage::component_ready()) {
            tracing::warn!("Ready handshake not delivered: {}", e);
        }
    }

    fn notify_size_changed(&self) {
        let height = self.content_height();
        if let Err(e) = self.post(&OutboundMessage::frame_height(height)) {
            tracing::warn!("Frame height {} not delivered: {}", height, e);
        }
    }
}

fn js_error(err: JsValue) -> NavError {
    NavError::PostMessage(format!("{:?}", err))
}

// ========================
// Inbound
// ========================

/// Decode the `args` object of a render event.
pub fn decode_render_args(args: JsValue) -> NavResult<RenderArgs> {
    if args.is_undefined() || args.is_null() {
        return Ok(RenderArgs::default());
    }
    Ok(serde_wasm_bindgen::from_value(args)?)
}

/// Subscribe to host render events for the lifetime of the page.
///
/// Messages of any other type are ignored. A payload that cannot be decoded
/// is delivered as empty arguments so the sidebar falls back to placeholders.
pub fn listen_for_render(mut on_render: impl FnMut(RenderArgs) + 'static) -> NavResult<()> {
    let window = web_sys::window().ok_or(NavError::NoWindow)?;

    let handler = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        let data = event.data();
        let kind = js_sys::Reflect::get(&data, &JsValue::from_str("type"))
            .ok()
            .and_then(|v| v.as_string());
        if kind.as_deref() != Some(RENDER_EVENT) {
            return;
        }

        let args = js_sys::Reflect::get(&data, &JsValue::from_str("args")).unwrap_or(JsValue::UNDEFINED);
        let args = decode_render_args(args).unwrap_or_else(|e| {
            tracing::warn!("Unrecognized render payload, rendering placeholders: {}", e);
            RenderArgs::default()
        });
        on_render(args);
    });

    window
        .add_event_listener_with_callback("message", handler.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // The listener lives as long as the page.
    handler.forget();
    Ok(())
}

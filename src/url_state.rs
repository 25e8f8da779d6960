//! Selection path read from the host page's query string

use std::collections::HashMap;

use crate::menu::NodeLevel;

pub type QueryParams = HashMap<String, String>;

/// Decode a location search string (with or without the leading `?`).
///
/// Standard form-urlencoded rules apply: `+` is a space, percent escapes are
/// decoded, and the last occurrence of a repeated key wins. Malformed pairs
/// never fail, they just decode to whatever is recoverable.
pub fn parse_query(search: &str) -> QueryParams {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Which node is active at each level of the navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionPath {
    pub page: String,
    pub program: Option<String>,
    pub module: Option<String>,
    pub lesson: Option<String>,
    pub group: Option<String>, // `gz` on the wire
    pub card: Option<String>,  // `card_id` on the wire
}

impl SelectionPath {
    pub fn from_params(params: &QueryParams, default_page: &str) -> Self {
        let get = |name: &str| {
            params
                .get(name)
                .filter(|value| !value.is_empty())
                .cloned()
        };

        Self {
            page: get("page").unwrap_or_else(|| default_page.to_string()),
            program: get(NodeLevel::Program.query_param()),
            module: get(NodeLevel::Module.query_param()),
            lesson: get(NodeLevel::Lesson.query_param()),
            group: get(NodeLevel::Group.query_param()),
            card: get(NodeLevel::Card.query_param()),
        }
    }

    pub fn from_query(search: &str, default_page: &str) -> Self {
        Self::from_params(&parse_query(search), default_page)
    }

    /// Selected identifier for one tree level.
    pub fn segment(&self, level: NodeLevel) -> Option<&str> {
        match level {
            NodeLevel::Program => self.program.as_deref(),
            NodeLevel::Module => self.module.as_deref(),
            NodeLevel::Lesson => self.lesson.as_deref(),
            NodeLevel::Group => self.group.as_deref(),
            NodeLevel::Card => self.card.as_deref(),
        }
    }
}

/// Current query string of the host page.
///
/// Reads the parent frame's location; when that is not readable (no parent,
/// or a cross-origin parent) the widget's own location is used instead. Never
/// cached: the host URL can change between render events.
pub fn host_search() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };

    let parent_search = window
        .parent()
        .ok()
        .flatten()
        .and_then(|parent| parent.location().search().ok());

    parent_search
        .or_else(|| window.location().search().ok())
        .unwrap_or_default()
}

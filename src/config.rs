use serde::{Deserialize, Serialize};

/// Presentation settings for the sidebar.
///
/// The host may send a partial `config` object alongside the navigation data;
/// any field it leaves out keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Longest unbroken run of characters in program and module names.
    pub max_name_length: usize,
    /// Page assumed when the host URL carries no `page` parameter.
    pub default_page: String,
    pub sections_title: String,
    pub courses_title: String,
    pub no_sections_text: String,
    pub no_courses_text: String,
    pub loading_text: String,
    pub program_icon: String,
    /// Browsing context every generated link navigates.
    pub link_target: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_name_length: 60,
            default_page: "overview".to_string(),
            sections_title: "Main sections".to_string(),
            courses_title: "Course structure".to_string(),
            no_sections_text: "no section data".to_string(),
            no_courses_text: "no course data".to_string(),
            loading_text: "Loading navigation...".to_string(),
            program_icon: "📚".to_string(),
            link_target: "_parent".to_string(),
        }
    }
}

use dioxus::prelude::*;

use crate::components::navigation::{NavBranch, NavSection, Placeholder, SectionItemRow};
use crate::hooks::SidebarState;
use crate::menu::MenuList;

#[component]
pub fn Sidebar() -> Element {
    let sidebar = use_context::<SidebarState>();

    let config = sidebar.config.read().clone();
    let generation = *sidebar.generation.read();
    let menu = sidebar.menu.read().clone();
    let link_target = config.link_target.clone();

    rsx! {
        aside { class: "sidebar-menu",
            NavSection { title: config.sections_title.clone(), list_id: "main-nav",
                {match menu.as_ref().map(|m| &m.sections) {
                    None => rsx! {
                        div { class: "loading",
                            div { class: "loading-spinner" }
                            span { "{config.loading_text}" }
                        }
                    },
                    Some(MenuList::Placeholder(text)) => rsx! {
                        Placeholder { text: text.clone() }
                    },
                    Some(MenuList::Items(sections)) => rsx! {
                        for section in sections.iter() {
                            SectionItemRow {
                                key: "{section.key}",
                                section: section.clone(),
                                link_target: link_target.clone(),
                            }
                        }
                    },
                }}
            }

            NavSection { title: config.courses_title.clone(), list_id: "courses-nav",
                {match menu.as_ref().map(|m| &m.courses) {
                    None => rsx! {},
                    Some(MenuList::Placeholder(text)) => rsx! {
                        Placeholder { text: text.clone() }
                    },
                    // Keyed by generation: every render event remounts the branches,
                    // which drops any manual expand/collapse.
                    Some(MenuList::Items(programs)) => rsx! {
                        for (idx, program) in programs.iter().enumerate() {
                            NavBranch {
                                key: "{generation}-{idx}-{program.key}",
                                node: program.clone(),
                                link_target: link_target.clone(),
                            }
                        }
                    },
                }}
            }
        }
    }
}

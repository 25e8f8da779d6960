use dioxus::prelude::*;

use crate::menu::SectionItem;

#[component]
pub fn SectionItemRow(section: SectionItem, link_target: String) -> Element {
    let container_class = if section.active { "nav-link-container active" } else { "nav-link-container" };
    let name_class = if section.active { "nav-page-name active" } else { "nav-page-name" };

    rsx! {
        li { class: "nav-item",
            div { class: container_class, id: "{section.key}",
                a { class: "nav-link", href: "{section.url}", target: "{link_target}",
                    span { class: "icon", "{section.icon}" }
                    span { class: name_class, "{section.name}" }
                }
            }
        }
    }
}

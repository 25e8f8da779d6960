use dioxus::prelude::*;

use crate::hooks::SidebarState;
use crate::menu::{ChildItem, Marker, RenderedNode};

/// One course-tree row plus, when it has children, its accordion and child list.
///
/// The child list's expansion is seeded from the view model on mount and then
/// only changes through this row's own accordion control.
#[component]
pub fn NavBranch(node: RenderedNode, link_target: String) -> Element {
    let initial = node.initial_accordion();
    let mut accordion = use_signal(move || initial);
    let mut sidebar = use_context::<SidebarState>();

    let container_class = if node.active { "nav-link-container active" } else { "nav-link-container" };
    let name_class = if node.active { "nav-page-name active" } else { "nav-page-name" };
    let state = accordion();

    rsx! {
        li { class: "nav-item",
            div { class: container_class,
                a { class: "nav-link", href: "{node.url}", target: "{link_target}",
                    MarkerIcon { marker: node.marker.clone() }
                    span { class: name_class, "{node.name}" }
                }
                if node.has_accordion() {
                    div {
                        class: "nav-accordion",
                        onclick: move |evt: MouseEvent| {
                            // The row also hosts a link; keep the click on the control.
                            evt.prevent_default();
                            evt.stop_propagation();
                            if accordion.write().toggle() {
                                tracing::debug!("Accordion toggled, expanded = {}", accordion().is_expanded());
                                sidebar.layout_changed();
                            }
                        },
                        span { class: state.icon_class(), "{state.glyph()}" }
                    }
                }
            }
            if let Some(list) = &node.children {
                ul { class: state.list_class(), id: "{list.id}",
                    {list.items.iter().enumerate().map(|(idx, item)| child_row(idx, item, &link_target))}
                }
            }
        }
    }
}

fn child_row(idx: usize, item: &ChildItem, link_target: &str) -> Element {
    match item {
        ChildItem::Node(child) => rsx! {
            NavBranch {
                key: "{idx}-{child.key}",
                node: child.clone(),
                link_target: link_target.to_string(),
            }
        },
        ChildItem::More { count } => rsx! {
            MoreCardsItem { key: "{idx}-more", count: *count }
        },
    }
}

#[component]
fn MarkerIcon(marker: Marker) -> Element {
    match marker {
        Marker::Icon(icon) => rsx! {
            span { class: "icon", "{icon}" }
        },
        Marker::Circle(color) => rsx! {
            span { class: "nav-circle {color}" }
        },
    }
}

/// Trailing, non-interactive row for cards the host left out.
#[component]
pub fn MoreCardsItem(count: u64) -> Element {
    rsx! {
        li { class: "nav-item",
            div { class: "nav-link-container",
                span { class: "nav-link",
                    span { class: "nav-circle blue" }
                    span { class: "nav-page-name muted", "...+{count} more" }
                }
            }
        }
    }
}

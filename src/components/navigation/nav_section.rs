use dioxus::prelude::*;

/// Titled top-level list. `children` are the `li` rows.
#[component]
pub fn NavSection(title: String, list_id: String, children: Element) -> Element {
    rsx! {
        div { class: "section-title", "{title}" }
        ul { class: "nav-list", id: "{list_id}",
            {children}
        }
        div { class: "nav-separator" }
    }
}

/// Static informational row shown instead of an empty list.
#[component]
pub fn Placeholder(text: String) -> Element {
    rsx! {
        li { class: "nav-item loading", "{text}" }
    }
}

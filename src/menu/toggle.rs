//! Local expand/collapse state of one accordion control

pub const COLLAPSED_GLYPH: &str = "+";
pub const EXPANDED_GLYPH: &str = "✕";

/// Expansion state of a single child list.
///
/// Seeded once from the view model when the branch mounts; afterwards only
/// the branch's own accordion control changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    has_list: bool,
    expanded: bool,
}

impl Accordion {
    pub fn new(has_list: bool, expanded: bool) -> Self {
        Self {
            has_list,
            expanded: has_list && expanded,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip this level only. Returns `false` (and changes nothing) when there
    /// is no child list to act on.
    pub fn toggle(&mut self) -> bool {
        if !self.has_list {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    pub fn glyph(&self) -> &'static str {
        if self.expanded {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        }
    }

    /// Icon state class, matching the glyph.
    pub fn icon_class(&self) -> &'static str {
        if self.expanded {
            "nav-accordion-icon close"
        } else {
            "nav-accordion-icon open"
        }
    }

    pub fn list_class(&self) -> &'static str {
        if self.expanded {
            "nav-list expanded"
        } else {
            "nav-list"
        }
    }
}

pub mod nav_branch;
pub mod nav_section;
pub mod section_item;

pub use nav_branch::{MoreCardsItem, NavBranch};
pub use nav_section::{NavSection, Placeholder};
pub use section_item::SectionItemRow;

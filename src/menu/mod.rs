//! View model for the navigation sidebar.
//!
//! `build_menu` maps a [`NavigationTree`] and the current [`SelectionPath`]
//! onto an immutable tree of [`RenderedNode`]s. It decides which nodes are
//! active and which child lists start expanded; the Dioxus layer only turns
//! the result into elements.

pub mod risk;
pub mod toggle;
pub mod wrap;

use crate::config::MenuConfig;
use crate::types::{Card, Group, Lesson, Module, NavigationTree, Program};
use crate::url_state::SelectionPath;

pub use risk::RiskBand;
pub use toggle::Accordion;
pub use wrap::{soft_wrap, SOFT_BREAK};

/// Depth of a node below the program list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeLevel {
    Program,
    Module,
    Lesson,
    Group,
    Card,
}

impl NodeLevel {
    /// Host URL parameter that selects a node at this level.
    pub fn query_param(self) -> &'static str {
        match self {
            NodeLevel::Program => "program",
            NodeLevel::Module => "module",
            NodeLevel::Lesson => "lesson",
            NodeLevel::Group => "gz",
            NodeLevel::Card => "card_id",
        }
    }

    pub fn key_prefix(self) -> &'static str {
        match self {
            NodeLevel::Program => "program",
            NodeLevel::Module => "module",
            NodeLevel::Lesson => "lesson",
            NodeLevel::Group => "group",
            NodeLevel::Card => "card",
        }
    }

    fn wraps_long_names(self) -> bool {
        matches!(self, NodeLevel::Program | NodeLevel::Module)
    }
}

/// Leading decoration of a row.
#[derive(Clone, Debug, PartialEq)]
pub enum Marker {
    Icon(String),
    Circle(&'static str), // css colour class
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionItem {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub url: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedNode {
    pub key: String,
    pub level: NodeLevel,
    pub name: String,
    pub url: String,
    pub active: bool,
    pub marker: Marker,
    pub children: Option<ChildList>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChildList {
    pub id: String,
    /// Initial state only; toggles after mount live in the rendering layer.
    pub expanded: bool,
    pub items: Vec<ChildItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChildItem {
    Node(RenderedNode),
    /// Non-interactive "more cards" row closing a card list.
    More { count: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuList<T> {
    Items(Vec<T>),
    Placeholder(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    pub sections: MenuList<SectionItem>,
    pub courses: MenuList<RenderedNode>,
}

impl RenderedNode {
    /// Whether the row carries an accordion control.
    pub fn has_accordion(&self) -> bool {
        self.children.is_some()
    }

    pub fn initial_accordion(&self) -> Accordion {
        match &self.children {
            Some(list) => Accordion::new(true, list.expanded),
            None => Accordion::new(false, false),
        }
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &RenderedNode> {
        self.children
            .iter()
            .flat_map(|list| list.items.iter())
            .filter_map(|item| match item {
                ChildItem::Node(node) => Some(node),
                ChildItem::More { .. } => None,
            })
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.child_nodes().map(RenderedNode::node_count).sum::<usize>()
    }
}

impl<T> MenuList<T> {
    pub fn items(&self) -> &[T] {
        match self {
            MenuList::Items(items) => items,
            MenuList::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            MenuList::Items(_) => None,
            MenuList::Placeholder(text) => Some(text),
        }
    }
}

impl Menu {
    pub fn node_count(&self) -> usize {
        self.courses.items().iter().map(RenderedNode::node_count).sum()
    }

    /// Keys of the active course nodes from the program down.
    pub fn active_path(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        let mut level: &[RenderedNode] = self.courses.items();
        while let Some(node) = level.iter().find(|node| node.active) {
            keys.push(node.key.as_str());
            match node.child_nodes().find(|child| child.active) {
                Some(child) => level = std::slice::from_ref(child),
                None => break,
            }
        }
        keys
    }
}

/// Borrowed view of any course-tree node, so one recursive builder serves
/// every level.
#[derive(Clone, Copy)]
enum TreeNode<'a> {
    Program(&'a Program),
    Module(&'a Module),
    Lesson(&'a Lesson),
    Group(&'a Group),
    Card(&'a Card),
}

impl<'a> TreeNode<'a> {
    fn level(self) -> NodeLevel {
        match self {
            TreeNode::Program(_) => NodeLevel::Program,
            TreeNode::Module(_) => NodeLevel::Module,
            TreeNode::Lesson(_) => NodeLevel::Lesson,
            TreeNode::Group(_) => NodeLevel::Group,
            TreeNode::Card(_) => NodeLevel::Card,
        }
    }

    fn id(self) -> &'a str {
        match self {
            TreeNode::Program(p) => &p.id,
            TreeNode::Module(m) => &m.id,
            TreeNode::Lesson(l) => &l.id,
            TreeNode::Group(g) => &g.id,
            TreeNode::Card(c) => &c.id,
        }
    }

    fn name(self) -> &'a str {
        match self {
            TreeNode::Program(p) => &p.name,
            TreeNode::Module(m) => &m.name,
            TreeNode::Lesson(l) => &l.name,
            TreeNode::Group(g) => &g.name,
            TreeNode::Card(c) => &c.name,
        }
    }

    fn url(self) -> &'a str {
        match self {
            TreeNode::Program(p) => &p.url,
            TreeNode::Module(m) => &m.url,
            TreeNode::Lesson(l) => &l.url,
            TreeNode::Group(g) => &g.url,
            TreeNode::Card(c) => &c.url,
        }
    }

    fn children(self) -> Vec<TreeNode<'a>> {
        match self {
            TreeNode::Program(p) => p.modules().iter().map(TreeNode::Module).collect(),
            TreeNode::Module(m) => m.lessons().iter().map(TreeNode::Lesson).collect(),
            TreeNode::Lesson(l) => l.groups().iter().map(TreeNode::Group).collect(),
            TreeNode::Group(g) => g.cards().iter().map(TreeNode::Card).collect(),
            TreeNode::Card(_) => Vec::new(),
        }
    }

    fn more_cards(self) -> Option<u64> {
        match self {
            TreeNode::Group(g) if g.has_more_cards => Some(g.more_cards_count),
            _ => None,
        }
    }

    fn marker(self, config: &MenuConfig) -> Marker {
        match self {
            TreeNode::Program(_) => Marker::Icon(config.program_icon.clone()),
            TreeNode::Card(c) => Marker::Circle(RiskBand::from_risk(c.risk).css_class()),
            _ => Marker::Circle(RiskBand::Low.css_class()),
        }
    }
}

/// Identifier as used inside structural keys: whitespace runs become `-`, lowercased.
pub fn slug(id: &str) -> String {
    id.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
}

/// Build the complete sidebar view model for one render.
pub fn build_menu(tree: &NavigationTree, path: &SelectionPath, config: &MenuConfig) -> Menu {
    let sections = if tree.main_sections().is_empty() {
        MenuList::Placeholder(config.no_sections_text.clone())
    } else {
        MenuList::Items(
            tree.main_sections()
                .iter()
                .map(|section| SectionItem {
                    key: format!("nav-{}", slug(&section.id)),
                    name: section.name.clone(),
                    icon: section.icon.clone(),
                    url: section.url.clone(),
                    active: section.id == path.page,
                })
                .collect(),
        )
    };

    let courses = if tree.programs().is_empty() {
        MenuList::Placeholder(config.no_courses_text.clone())
    } else {
        MenuList::Items(
            tree.programs()
                .iter()
                .map(|program| build_node(TreeNode::Program(program), path, true, "", config))
                .collect(),
        )
    };

    Menu { sections, courses }
}

// `parent_active` is the AND of every ancestor's match; `parent_path` is the
// slug chain of those ancestors, used to keep keys unique across branches.
fn build_node(
    node: TreeNode<'_>,
    path: &SelectionPath,
    parent_active: bool,
    parent_path: &str,
    config: &MenuConfig,
) -> RenderedNode {
    let level = node.level();
    let active = parent_active && path.segment(level) == Some(node.id());

    let node_path = if parent_path.is_empty() {
        slug(node.id())
    } else {
        format!("{}-{}", parent_path, slug(node.id()))
    };

    let mut items: Vec<ChildItem> = node
        .children()
        .into_iter()
        .map(|child| ChildItem::Node(build_node(child, path, active, &node_path, config)))
        .collect();
    if let Some(count) = node.more_cards() {
        items.push(ChildItem::More { count });
    }

    let child_list = if items.is_empty() {
        None
    } else {
        Some(ChildList {
            id: format!("{}-{}-submenu", level.key_prefix(), node_path),
            expanded: active,
            items,
        })
    };

    let name = if level.wraps_long_names() {
        soft_wrap(node.name(), config.max_name_length)
    } else {
        node.name().to_string()
    };

    RenderedNode {
        key: format!("{}-{}", level.key_prefix(), node_path),
        level,
        name,
        url: node.url().to_string(),
        active,
        marker: node.marker(config),
        children: child_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, risk: f64) -> Card {
        Card {
            id: id.to_string(),
            name: format!("ID: {id}"),
            url: format!("?page=cards&card_id={id}"),
            risk: Some(risk),
        }
    }

    fn sample_tree() -> NavigationTree {
        let group = Group {
            id: "G1".into(),
            name: "Group one".into(),
            cards: Some(vec![card("1", 0.9), card("2", 0.6), card("3", 0.1)]),
            ..Default::default()
        };
        let lesson = Lesson {
            id: "L1".into(),
            name: "Lesson one".into(),
            groups: Some(vec![group]),
            ..Default::default()
        };
        let module = Module {
            id: "M1".into(),
            name: "Module one".into(),
            lessons: Some(vec![lesson]),
            ..Default::default()
        };
        // Same module id under a second program.
        let twin = Program {
            id: "P2".into(),
            name: "Program two".into(),
            modules: Some(vec![module.clone()]),
            ..Default::default()
        };
        NavigationTree {
            main_sections: None,
            programs: Some(vec![
                Program {
                    id: "P1".into(),
                    name: "Program one".into(),
                    modules: Some(vec![module]),
                    ..Default::default()
                },
                twin,
            ]),
        }
    }

    fn path(query: &str) -> SelectionPath {
        SelectionPath::from_query(query, "overview")
    }

    #[test]
    fn test_full_active_path() {
        let menu = build_menu(
            &sample_tree(),
            &path("?program=P1&module=M1&lesson=L1&gz=G1&card_id=2"),
            &MenuConfig::default(),
        );
        assert_eq!(
            menu.active_path(),
            vec![
                "program-p1",
                "module-p1-m1",
                "lesson-p1-m1-l1",
                "group-p1-m1-l1-g1",
                "card-p1-m1-l1-g1-2",
            ]
        );
    }

    #[test]
    fn test_same_module_id_under_other_program_stays_inactive() {
        let menu = build_menu(&sample_tree(), &path("?program=P1&module=M1"), &MenuConfig::default());
        let programs = menu.courses.items();

        let p1_module = programs[0].child_nodes().next().unwrap();
        let p2_module = programs[1].child_nodes().next().unwrap();
        assert!(p1_module.active);
        assert!(!programs[1].active);
        assert!(!p2_module.active);
        assert!(!p2_module.children.as_ref().unwrap().expanded);
    }

    #[test]
    fn test_mismatched_ancestor_deactivates_subtree() {
        let menu = build_menu(
            &sample_tree(),
            &path("?program=P1&module=nope&lesson=L1&gz=G1&card_id=1"),
            &MenuConfig::default(),
        );
        assert_eq!(menu.active_path(), vec!["program-p1"]);

        fn assert_inactive(node: &RenderedNode) {
            assert!(!node.active, "{} should be inactive", node.key);
            node.child_nodes().for_each(assert_inactive);
        }
        menu.courses.items()[0].child_nodes().for_each(assert_inactive);
    }

    #[test]
    fn test_expanded_only_on_active_path() {
        let menu = build_menu(&sample_tree(), &path("?program=P1&module=M1"), &MenuConfig::default());

        fn check(node: &RenderedNode) {
            if let Some(list) = &node.children {
                assert_eq!(list.expanded, node.active, "{}", list.id);
            }
            node.child_nodes().for_each(check);
        }
        menu.courses.items().iter().for_each(check);
    }

    #[test]
    fn test_card_colours() {
        let menu = build_menu(&sample_tree(), &path(""), &MenuConfig::default());
        let group = menu.courses.items()[0]
            .child_nodes()
            .next()
            .and_then(|m| m.child_nodes().next())
            .and_then(|l| l.child_nodes().next())
            .unwrap();
        let markers: Vec<_> = group.child_nodes().map(|c| c.marker.clone()).collect();
        assert_eq!(
            markers,
            vec![Marker::Circle("red"), Marker::Circle("orange"), Marker::Circle("blue")]
        );
        assert_eq!(group.marker, Marker::Circle("blue"));
    }

    #[test]
    fn test_structural_ids_include_ancestors() {
        let menu = build_menu(&sample_tree(), &path(""), &MenuConfig::default());
        let ids: Vec<_> = menu
            .courses
            .items()
            .iter()
            .map(|p| p.child_nodes().next().unwrap().children.as_ref().unwrap().id.clone())
            .collect();
        assert_eq!(ids, vec!["module-p1-m1-submenu", "module-p2-m1-submenu"]);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Data  Science 101"), "data-science-101");
        assert_eq!(slug("Модуль 1"), "модуль-1");
    }

    #[test]
    fn test_only_programs_and_modules_wrap() {
        let long = "x".repeat(70);
        let tree = NavigationTree {
            main_sections: None,
            programs: Some(vec![Program {
                id: "P".into(),
                name: long.clone(),
                modules: Some(vec![Module {
                    id: "M".into(),
                    name: long.clone(),
                    lessons: Some(vec![Lesson {
                        id: "L".into(),
                        name: long.clone(),
                        ..Default::default()
                    }]),
                    ..Default::default()
                }]),
                ..Default::default()
            }]),
        };
        let menu = build_menu(&tree, &path(""), &MenuConfig::default());
        let program = &menu.courses.items()[0];
        let module = program.child_nodes().next().unwrap();
        let lesson = module.child_nodes().next().unwrap();

        assert!(program.name.contains(SOFT_BREAK));
        assert!(module.name.contains(SOFT_BREAK));
        assert_eq!(lesson.name, long);
    }

    #[test]
    fn test_deterministic() {
        let tree = sample_tree();
        let selection = path("?program=P2&module=M1&lesson=L1");
        let config = MenuConfig::default();
        assert_eq!(build_menu(&tree, &selection, &config), build_menu(&tree, &selection, &config));
    }

    #[test]
    fn test_node_count() {
        let menu = build_menu(&sample_tree(), &path(""), &MenuConfig::default());
        // per program: program + module + lesson + group + 3 cards
        assert_eq!(menu.node_count(), 14);
    }
}

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Icon used when a name isn't anywhere in the tree
pub const FALLBACK_ICON: &str = "circle.fill";

/// One chip in the filter tree
///
/// Leaves carry the search index and filter expression that get handed to
/// item search once the user settles on them. Interior nodes only exist to
/// be drilled into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterNode {
    pub name: String,
    /// Symbol name, resolved to a glyph by whoever draws the chip
    pub icon: String,
    /// Search aid only, navigation never looks at it
    pub synonyms: String,
    pub search_index_ref: String,
    pub search_filter_expr: String,
    pub children: Vec<FilterNode>,
    /// Unavailable chips are listed but can't be picked
    pub available: bool,
    /// Display position among siblings, lowest first. Not unique, not contiguous.
    pub order: i32,
}

impl FilterNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A leaf that item search can actually be pointed at
    pub fn is_leaf_selectable(&self) -> bool {
        self.is_leaf() && self.available
    }

    /// Children in display order
    pub fn children_sorted(&self) -> Vec<&FilterNode> {
        sorted_by_order(&self.children)
    }
}

/// Sort siblings by `order`, keeping authoring order for ties
pub fn sorted_by_order(nodes: &[FilterNode]) -> Vec<&FilterNode> {
    let mut sorted: Vec<&FilterNode> = nodes.iter().collect();
    // sort_by_key is stable, which is what makes ties deterministic
    sorted.sort_by_key(|n| n.order);
    sorted
}

/// The whole filter tree. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    roots: Vec<FilterNode>,
}

impl Taxonomy {
    pub fn new(roots: Vec<FilterNode>) -> Self {
        Self { roots }
    }

    /// The compiled-in taxonomy, built on first use
    pub fn builtin() -> &'static Taxonomy {
        static BUILTIN: OnceLock<Taxonomy> = OnceLock::new();
        BUILTIN.get_or_init(|| Taxonomy::new(crate::filter_tree::default_roots()))
    }

    /// Top-level chips in display order
    pub fn roots(&self) -> Vec<&FilterNode> {
        sorted_by_order(&self.roots)
    }

    pub fn children_of<'a>(&self, node: &'a FilterNode) -> Vec<&'a FilterNode> {
        node.children_sorted()
    }

    /// Every node, depth first, in authoring order
    pub fn iter(&self) -> impl Iterator<Item = &FilterNode> {
        let mut stack: Vec<&FilterNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Icon of the first node (depth first) whose name matches, ignoring case
    ///
    /// Names aren't unique across the tree ("Celebrities" lives in two
    /// places), so this is only good for decoration.
    pub fn icon_named(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|n| n.name.to_lowercase() == name.to_lowercase())
            .map(|n| n.icon.as_str())
    }

    pub fn icon_or_fallback(&self, name: &str) -> &str {
        self.icon_named(name).unwrap_or(FALLBACK_ICON)
    }

    /// Walk down by display names, root first
    ///
    /// Matching is exact and scoped to the current level, so the two
    /// "Sports" chips (top-level and the one under it) resolve fine.
    pub fn resolve_path<S: AsRef<str>>(&self, names: &[S]) -> crate::Result<Vec<&FilterNode>> {
        let mut resolved: Vec<&FilterNode> = Vec::with_capacity(names.len());
        let mut level: &[FilterNode] = &self.roots;

        for segment in names {
            let segment = segment.as_ref();
            let node = level.iter().find(|n| n.name == segment).ok_or_else(|| {
                crate::Error::UnknownNode {
                    segment: segment.to_string(),
                    parent: resolved
                        .last()
                        .map(|n| format!("'{}'", n.name))
                        .unwrap_or_else(|| "the top level".to_string()),
                }
            })?;
            resolved.push(node);
            level = &node.children;
        }

        Ok(resolved)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn node(name: &str, order: i32, children: Vec<FilterNode>) -> FilterNode {
        FilterNode {
            name: name.to_string(),
            icon: format!("{}.icon", name.to_lowercase()),
            synonyms: String::new(),
            search_index_ref: format!("{}-index", name),
            search_filter_expr: format!("ItemCategory:{}", name),
            children,
            available: true,
            order,
        }
    }

    #[test]
    fn test_children_sorted_by_order_with_stable_ties() {
        let parent = node(
            "Parent",
            0,
            vec![
                node("C", 5, vec![]),
                node("A", 1, vec![]),
                node("B1", 3, vec![]),
                node("B2", 3, vec![]),
            ],
        );
        let names: Vec<&str> = parent.children_sorted().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B1", "B2", "C"]);
    }

    #[test]
    fn test_builtin_children_always_ascending() {
        let taxonomy = Taxonomy::builtin();
        let check = |nodes: Vec<&FilterNode>| {
            for pair in nodes.windows(2) {
                assert!(pair[0].order <= pair[1].order);
            }
        };
        check(taxonomy.roots());
        for n in taxonomy.iter() {
            check(taxonomy.children_of(n));
        }
    }

    #[test]
    fn test_builtin_ties_keep_authoring_order() {
        // Science and People are both order 6
        let roots = Taxonomy::builtin().roots();
        let science = roots.iter().position(|n| n.name == "Science").unwrap();
        let people = roots.iter().position(|n| n.name == "People").unwrap();
        assert_eq!(science + 1, people);

        let tech = Taxonomy::builtin().resolve_path(&["Technology & Math"]).unwrap();
        let names: Vec<&str> = tech[0].children_sorted().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Programming Language", "Letters", "Numbers", "Roman Numerals"]);
    }

    #[test]
    fn test_leaf_selectable() {
        let mut leaf = node("Leaf", 0, vec![]);
        assert!(leaf.is_leaf_selectable());
        leaf.available = false;
        assert!(!leaf.is_leaf_selectable());
        assert!(!node("Branch", 0, vec![node("Kid", 0, vec![])]).is_leaf_selectable());
    }

    #[test]
    fn test_sibling_names_unique_in_builtin() {
        let taxonomy = Taxonomy::builtin();
        let mut levels: Vec<&[FilterNode]> = vec![&taxonomy.roots];
        levels.extend(taxonomy.iter().map(|n| n.children.as_slice()));
        for level in levels {
            let mut names: Vec<&str> = level.iter().map(|n| n.name.as_str()).collect();
            let total = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), total);
        }
    }

    #[test]
    fn test_icon_lookup_is_case_insensitive_and_recursive() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.icon_named("food & drink"), Some("fork.knife"));
        assert_eq!(taxonomy.icon_named("Premixes"), Some("beach.umbrella.fill"));
        assert_eq!(taxonomy.icon_or_fallback("Knitting"), FALLBACK_ICON);
    }

    #[test]
    fn test_resolve_path() {
        let taxonomy = Taxonomy::builtin();
        let path = taxonomy.resolve_path(&["Sports", "Sports"]).unwrap();
        assert_eq!(path[0].icon, "figure.archery");
        assert_eq!(path[1].icon, "soccerball");

        let err = taxonomy.resolve_path(&["Sports", "Curling"]).unwrap_err();
        assert!(err.to_string().contains("'Curling' under 'Sports'"));

        let err = taxonomy.resolve_path(&["Knitting"]).unwrap_err();
        assert!(err.to_string().contains("the top level"));
    }

    #[test]
    fn test_iter_visits_everything_depth_first() {
        let taxonomy = Taxonomy::new(vec![
            node("A", 0, vec![node("A1", 0, vec![]), node("A2", 1, vec![])]),
            node("B", 1, vec![]),
        ]);
        let names: Vec<&str> = taxonomy.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "A1", "A2", "B"]);
    }
}

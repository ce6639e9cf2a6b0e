// Filter picker controller: the breadcrumb stack plus whatever chips are on
// screen below it. Everything here is synchronous and infallible; the only
// way to "fail" is a confirm that does nothing.
use crate::taxonomy::{FilterNode, Taxonomy};
use serde::{Deserialize, Serialize};

/// What gets handed to item search once a leaf is confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Names of the chips above the leaf, root first (the leaf itself is not included)
    pub category_path_names: Vec<String>,
    pub search_index_ref: String,
    pub search_filter_expr: String,
    /// The confirmed chip's own name, handy for logs and titles
    pub leaf: String,
}

/// The item search side of the app
///
/// The picker doesn't know or care what happens with a selection; whoever
/// drives it plugs in a handler. Handlers may fail, the picker just reports
/// that back and stays open.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionHandler {
    fn handle(&mut self, selection: &Selection) -> crate::Result<()>;
}

impl<F> SelectionHandler for F
where
    F: FnMut(&Selection) -> crate::Result<()>,
{
    fn handle(&mut self, selection: &Selection) -> crate::Result<()> {
        self(selection)
    }
}

/// Where the picker is in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState<'p, 't> {
    /// Nothing picked, showing the top-level chips
    Root,
    /// Drilled in, showing the children of the last node
    AtNode(&'p [&'t FilterNode]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Confirmed,
    Cancelled,
}

pub struct FilterPicker<'t> {
    taxonomy: &'t Taxonomy,
    path: Vec<&'t FilterNode>,
    current: Vec<&'t FilterNode>,
    status: SessionStatus,
}

impl<'t> FilterPicker<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            path: Vec::new(),
            current: taxonomy.roots(),
            status: SessionStatus::Active,
        }
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    pub fn state(&self) -> PickerState<'_, 't> {
        if self.path.is_empty() {
            PickerState::Root
        } else {
            PickerState::AtNode(&self.path)
        }
    }

    /// Breadcrumbs, root first
    pub fn path(&self) -> &[&'t FilterNode] {
        &self.path
    }

    /// Chips currently on offer, in display order
    pub fn current(&self) -> &[&'t FilterNode] {
        &self.current
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Push a chip onto the path and show its children (maybe none)
    ///
    /// No check that `node` is actually one of the chips on offer; the UI
    /// only ever hands us those.
    pub fn select(&mut self, node: &'t FilterNode) {
        if !self.is_active() {
            tracing::debug!("Ignoring select of '{}' after session ended", node.name);
            return;
        }

        self.path.push(node);
        self.current = self.taxonomy.children_of(node);
        tracing::debug!(depth = self.path.len(), "Selected '{}'", node.name);
    }

    /// Breadcrumb tap
    ///
    /// Tapping the first crumb goes all the way back to the top, tapping
    /// the last one goes up a single level, anything in between jumps to
    /// that level. Nodes that aren't in the path are ignored.
    pub fn back_to(&mut self, node: &FilterNode) {
        match self.path.iter().position(|n| std::ptr::eq(*n, node)) {
            Some(index) => self.back_to_index(index),
            None => tracing::debug!("'{}' is not in the path, ignoring", node.name),
        }
    }

    /// Same as `back_to`, by breadcrumb position
    pub fn back_to_index(&mut self, index: usize) {
        if !self.is_active() || index >= self.path.len() {
            return;
        }

        if index == 0 {
            self.go_to_root();
        } else if index == self.path.len() - 1 {
            self.path.pop();
            self.current = match self.path.last() {
                Some(parent) => self.taxonomy.children_of(parent),
                None => self.taxonomy.roots(),
            };
        } else {
            self.path.truncate(index + 1);
            self.current = self.taxonomy.children_of(self.path[index]);
        }

        tracing::debug!(depth = self.path.len(), "Went back to crumb {}", index);
    }

    /// Back to the top-level chips. Ignored once the session has ended.
    pub fn reset(&mut self) {
        if !self.is_active() {
            tracing::debug!("Ignoring reset after session ended");
            return;
        }
        self.go_to_root();
    }

    fn go_to_root(&mut self) {
        self.path.clear();
        self.current = self.taxonomy.roots();
    }

    /// Confirm only lights up on an available leaf
    pub fn can_confirm(&self) -> bool {
        self.is_active()
            && self
                .path
                .last()
                .map(|last| last.is_leaf_selectable())
                .unwrap_or(false)
    }

    /// Build the selection for the current leaf without ending the session
    pub fn pending_selection(&self) -> Option<Selection> {
        if !self.can_confirm() {
            return None;
        }

        let (last, parents) = self.path.split_last()?;
        Some(Selection {
            category_path_names: parents.iter().map(|n| n.name.clone()).collect(),
            search_index_ref: last.search_index_ref.clone(),
            search_filter_expr: last.search_filter_expr.clone(),
            leaf: last.name.clone(),
        })
    }

    /// End the session on the current leaf
    ///
    /// Returns `None` (and changes nothing) when confirm is disabled.
    pub fn confirm(&mut self) -> Option<Selection> {
        let selection = self.pending_selection()?;
        self.status = SessionStatus::Confirmed;
        tracing::info!(
            index = %selection.search_index_ref,
            filter = %selection.search_filter_expr,
            "Confirmed '{}'",
            selection.leaf
        );
        Some(selection)
    }

    /// Confirm and hand the selection straight to item search
    ///
    /// If the handler fails the session stays open so the user can retry.
    pub fn confirm_with<H>(&mut self, handler: &mut H) -> crate::Result<Option<Selection>>
    where
        H: SelectionHandler + ?Sized,
    {
        let Some(selection) = self.pending_selection() else {
            return Ok(None);
        };

        handler.handle(&selection)?;
        Ok(self.confirm())
    }

    /// User dismissed the picker
    pub fn cancel(&mut self) {
        if self.is_active() {
            self.status = SessionStatus::Cancelled;
            tracing::info!("Filter picker cancelled at depth {}", self.path.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::tests::node;

    fn small_tree() -> Taxonomy {
        let mut hidden = node("Hidden", 2, vec![]);
        hidden.available = false;
        Taxonomy::new(vec![
            node(
                "B",
                1,
                vec![node("B2", 1, vec![]), node("B1", 0, vec![node("Deep", 0, vec![])])],
            ),
            node("A", 0, vec![hidden, node("A1", 1, vec![])]),
        ])
    }

    fn names(nodes: &[&FilterNode]) -> Vec<String> {
        nodes.iter().map(|n| n.name.clone()).collect()
    }

    fn drill<'t>(picker: &mut FilterPicker<'t>, names: &[&str]) {
        for name in names {
            let next = picker
                .current()
                .iter()
                .copied()
                .find(|n| n.name == *name)
                .unwrap();
            picker.select(next);
        }
    }

    #[test]
    fn test_starts_at_root_with_sorted_roots() {
        let tree = small_tree();
        let picker = FilterPicker::new(&tree);
        assert_eq!(picker.state(), PickerState::Root);
        assert_eq!(names(picker.current()), vec!["A", "B"]);
        assert!(!picker.can_confirm());
    }

    #[test]
    fn test_select_shows_sorted_children() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["B"]);
        assert!(matches!(picker.state(), PickerState::AtNode(p) if p.len() == 1));
        assert_eq!(names(picker.current()), vec!["B1", "B2"]);

        drill(&mut picker, &["B2"]);
        assert!(picker.current().is_empty());
    }

    #[test]
    fn test_back_to_first_crumb_resets() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["B", "B1", "Deep"]);
        let first = picker.path()[0];
        picker.back_to(first);
        assert_eq!(picker.state(), PickerState::Root);
        assert_eq!(names(picker.current()), vec!["A", "B"]);
    }

    #[test]
    fn test_back_to_last_crumb_goes_up_one() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["B", "B1", "Deep"]);
        let last = picker.path()[2];
        picker.back_to(last);
        assert_eq!(names(picker.path()), vec!["B", "B1"]);
        assert_eq!(names(picker.current()), vec!["Deep"]);
    }

    #[test]
    fn test_back_to_single_crumb_is_root() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["A"]);
        picker.back_to_index(0);
        assert_eq!(picker.state(), PickerState::Root);
    }

    #[test]
    fn test_back_to_middle_crumb_truncates() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["B", "B1", "Deep"]);
        picker.select(picker.path()[0]); // path can hold anything, UI permitting
        assert_eq!(picker.path().len(), 4);

        picker.back_to_index(1);
        assert_eq!(names(picker.path()), vec!["B", "B1"]);
        assert_eq!(names(picker.current()), vec!["Deep"]);
    }

    #[test]
    fn test_back_to_unknown_node_is_ignored() {
        let tree = small_tree();
        let other = node("B", 1, vec![]);
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["B", "B1"]);
        // Equal name, different node: identity is what counts
        picker.back_to(&other);
        assert_eq!(picker.path().len(), 2);
        picker.back_to_index(7);
        assert_eq!(picker.path().len(), 2);
    }

    #[test]
    fn test_confirm_needs_available_leaf() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);

        assert!(picker.confirm().is_none());

        drill(&mut picker, &["B"]);
        assert!(picker.confirm().is_none());

        drill(&mut picker, &["B1"]);
        assert!(picker.confirm().is_none(), "B1 still has children");

        picker.back_to_index(0);
        drill(&mut picker, &["A", "Hidden"]);
        assert!(!picker.can_confirm());
        assert!(picker.confirm().is_none());
        assert!(picker.is_active());
    }

    #[test]
    fn test_confirm_emits_parent_names_and_leaf_refs() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["B", "B1", "Deep"]);

        let selection = picker.confirm().unwrap();
        assert_eq!(selection.category_path_names, vec!["B", "B1"]);
        assert_eq!(selection.search_index_ref, "Deep-index");
        assert_eq!(selection.search_filter_expr, "ItemCategory:Deep");
        assert_eq!(selection.leaf, "Deep");
        assert_eq!(picker.status(), SessionStatus::Confirmed);
    }

    #[test]
    fn test_session_is_frozen_after_it_ends() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["A", "A1"]);
        picker.confirm().unwrap();

        picker.back_to_index(0);
        assert_eq!(picker.path().len(), 2);
        assert!(picker.confirm().is_none());

        let mut cancelled = FilterPicker::new(&tree);
        cancelled.cancel();
        assert_eq!(cancelled.status(), SessionStatus::Cancelled);
        let a = cancelled.current()[0];
        cancelled.select(a);
        assert!(cancelled.path().is_empty());
    }

    #[test]
    fn test_reset_ignored_after_session_ends() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["A", "A1"]);
        picker.confirm().unwrap();

        picker.reset();
        assert_eq!(picker.status(), SessionStatus::Confirmed);
        assert_eq!(picker.path().len(), 2);
        assert_ne!(picker.state(), PickerState::Root);

        let mut cancelled = FilterPicker::new(&tree);
        drill(&mut cancelled, &["A"]);
        cancelled.cancel();
        cancelled.reset();
        assert_eq!(cancelled.path().len(), 1);
    }

    #[test]
    fn test_reset_while_active_goes_to_root() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["A", "A1"]);
        picker.reset();
        assert_eq!(picker.state(), PickerState::Root);
        assert!(picker.is_active());
    }

    #[test]
    fn test_confirm_with_hands_selection_to_handler() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["A", "A1"]);

        let mut handler = MockSelectionHandler::new();
        handler
            .expect_handle()
            .withf(|s| s.leaf == "A1" && s.category_path_names == vec!["A".to_string()])
            .times(1)
            .returning(|_| Ok(()));

        let selection = picker.confirm_with(&mut handler).unwrap();
        assert!(selection.is_some());
        assert_eq!(picker.status(), SessionStatus::Confirmed);
    }

    #[test]
    fn test_confirm_with_failure_keeps_session_open() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["A", "A1"]);

        let mut handler = MockSelectionHandler::new();
        handler
            .expect_handle()
            .times(1)
            .returning(|_| Err(crate::Error::Collaborator("index offline".into())));

        assert!(picker.confirm_with(&mut handler).is_err());
        assert!(picker.is_active());
        assert!(picker.can_confirm());
    }

    #[test]
    fn test_confirm_with_skips_handler_when_disabled() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["B"]);

        let mut handler = MockSelectionHandler::new();
        handler.expect_handle().never();
        assert_eq!(picker.confirm_with(&mut handler).unwrap(), None);
    }

    #[test]
    fn test_closures_work_as_handlers() {
        let tree = small_tree();
        let mut picker = FilterPicker::new(&tree);
        drill(&mut picker, &["A", "A1"]);

        let mut seen = Vec::new();
        let mut record = |s: &Selection| -> crate::Result<()> {
            seen.push(s.leaf.clone());
            Ok(())
        };
        picker.confirm_with(&mut record).unwrap();
        assert_eq!(seen, vec!["A1"]);
    }
}

use serde::{Deserialize, Serialize};

/// A way of presenting a Ranko
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub name: String,
    pub description: String,
    pub image_name: String,
    pub category: String,
    /// Not built yet, shows as "Coming Soon"
    pub disabled: bool,
}

/// Category carousel entries, in display order, with their symbols
pub const LAYOUT_CATEGORIES: [(&str, &str); 4] = [
    ("Popular", "flame.fill"),
    ("Sports", "sportscourt"),
    ("Geography", "map.fill"),
    ("Other", "square.grid.2x2"),
];

/// The fixed "Popular Layouts" row
pub const POPULAR_LAYOUTS: [&str; 5] = [
    "Default List",
    "Group List",
    "Tier List",
    "Grid Layout",
    "To Do List",
];

fn template(name: &str, description: &str, image: &str, category: &str, disabled: bool) -> LayoutTemplate {
    LayoutTemplate {
        name: name.to_string(),
        description: description.to_string(),
        image_name: image.to_string(),
        category: category.to_string(),
        disabled,
    }
}

pub fn builtin_layouts() -> Vec<LayoutTemplate> {
    vec![
        template("Podium Layout", "Put Rankings on a Podium", "PodiumLayout", "Other", true),
        template("Bracket Layout", "Display Ranko in 1v1s", "BracketLayout", "Other", true),
        template("Radar Layout", "Statistical Overview", "RadarLayout", "Other", true),
        template("Timeline Layout", "Show Best for Each Year", "TimelineLayout", "Other", true),
        template("Default List", "Standard list layout", "DefaultList", "Popular", false),
        template("Group List", "Grouped items layout", "GroupList", "Popular", false),
        template("Tier List", "Rank items into tiers", "TierList", "Popular", true),
        template("Football Lineup", "Set up a team formation", "FootballLineup", "Sports", true),
        template("World Map", "Rank Countries", "WorldMap", "Geography", true),
        template("Grid Layout", "Display Ranko With No Words", "GridLayout", "Popular", true),
        template("Sports Ladder", "Show Off Ladder Predictions", "SportsLadder", "Sports", true),
        template("To Do List", "Show What You've Accomplished", "ToDoList", "Popular", true),
    ]
}

/// State of the layout picker sheet
#[derive(Debug, Clone)]
pub struct LayoutPicker {
    layouts: Vec<LayoutTemplate>,
    pub search_text: String,
    selected_category: Option<String>,
    selected: Option<usize>,
}

impl LayoutPicker {
    pub fn new(layouts: Vec<LayoutTemplate>) -> Self {
        Self {
            layouts,
            search_text: String::new(),
            selected_category: None,
            selected: None,
        }
    }

    pub fn layouts(&self) -> &[LayoutTemplate] {
        &self.layouts
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Tap on a carousel entry: select it, or clear it if it was already on
    pub fn toggle_category(&mut self, category: &str) {
        if self.selected_category.as_deref() == Some(category) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(category.to_string());
        }
    }

    /// Grid contents: category filter and name search, table order
    pub fn filtered(&self) -> Vec<&LayoutTemplate> {
        let needle = self.search_text.to_lowercase();
        self.layouts
            .iter()
            .filter(|layout| {
                let category_ok = self
                    .selected_category
                    .as_deref()
                    .map_or(true, |c| layout.category == c);
                let search_ok = needle.is_empty() || layout.name.to_lowercase().contains(&needle);
                category_ok && search_ok
            })
            .collect()
    }

    pub fn popular(&self) -> Vec<&LayoutTemplate> {
        self.layouts
            .iter()
            .filter(|layout| POPULAR_LAYOUTS.contains(&layout.name.as_str()))
            .collect()
    }

    /// The popular row only shows on an untouched sheet
    pub fn show_popular_row(&self) -> bool {
        self.search_text.is_empty() && self.selected_category.is_none()
    }

    /// Tap on a layout card
    ///
    /// Disabled layouts ignore taps. Tapping the selected layout unselects it.
    pub fn toggle_select(&mut self, layout: &LayoutTemplate) {
        if layout.disabled {
            tracing::debug!("'{}' is coming soon, ignoring", layout.name);
            return;
        }

        let Some(index) = self.layouts.iter().position(|l| l == layout) else {
            return;
        };

        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn selected(&self) -> Option<&LayoutTemplate> {
        self.selected.and_then(|i| self.layouts.get(i))
    }

    pub fn is_selected(&self, layout: &LayoutTemplate) -> bool {
        self.selected() == Some(layout)
    }

    pub fn confirm(&self) -> Option<LayoutTemplate> {
        let chosen = self.selected()?.clone();
        tracing::info!("Layout confirmed: {}", chosen.name);
        Some(chosen)
    }
}

impl Default for LayoutPicker {
    fn default() -> Self {
        Self::new(builtin_layouts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(layouts: &[&LayoutTemplate]) -> Vec<String> {
        layouts.iter().map(|l| l.name.clone()).collect()
    }

    fn by_name(picker: &LayoutPicker, name: &str) -> LayoutTemplate {
        picker.layouts().iter().find(|l| l.name == name).unwrap().clone()
    }

    #[test]
    fn test_untouched_sheet_shows_everything() {
        let picker = LayoutPicker::default();
        assert_eq!(picker.filtered().len(), 12);
        assert!(picker.show_popular_row());
        assert_eq!(
            names(&picker.popular()),
            vec!["Default List", "Group List", "Tier List", "Grid Layout", "To Do List"]
        );
    }

    #[test]
    fn test_category_toggle() {
        let mut picker = LayoutPicker::default();
        picker.toggle_category("Sports");
        assert_eq!(names(&picker.filtered()), vec!["Football Lineup", "Sports Ladder"]);
        assert!(!picker.show_popular_row());

        picker.toggle_category("Sports");
        assert_eq!(picker.selected_category(), None);
        assert_eq!(picker.filtered().len(), 12);
    }

    #[test]
    fn test_search_combines_with_category() {
        let mut picker = LayoutPicker::default();
        picker.search_text = "LIST".to_string();
        assert_eq!(
            names(&picker.filtered()),
            vec!["Default List", "Group List", "Tier List", "To Do List"]
        );

        picker.toggle_category("Other");
        assert!(picker.filtered().is_empty());
    }

    #[test]
    fn test_disabled_layouts_cannot_be_selected() {
        let mut picker = LayoutPicker::default();
        let tier = by_name(&picker, "Tier List");
        picker.toggle_select(&tier);
        assert!(picker.selected().is_none());
        assert!(picker.confirm().is_none());
    }

    #[test]
    fn test_select_toggles() {
        let mut picker = LayoutPicker::default();
        let default_list = by_name(&picker, "Default List");
        let group_list = by_name(&picker, "Group List");

        picker.toggle_select(&default_list);
        assert!(picker.is_selected(&default_list));

        picker.toggle_select(&group_list);
        assert_eq!(picker.confirm().unwrap().name, "Group List");

        picker.toggle_select(&group_list);
        assert!(picker.selected().is_none());
    }
}

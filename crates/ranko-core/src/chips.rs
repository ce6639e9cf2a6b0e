// Chip rendering: turns a filter node or category chip into what a frontend
// needs to draw it. No state, no caching, the tables are tiny.
use crate::categories::CategoryChip;
use crate::palette::{self, BLACK, DISABLED_GRAY};
use crate::taxonomy::{FilterNode, Taxonomy};
use crate::theme::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChipState {
    Normal,
    /// Shown in the breadcrumb row / currently picked
    Selected,
    /// Listed but inert
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipBadge {
    pub label: String,
    pub icon: String,
    pub color: Color,
    pub state: ChipState,
}

impl ChipBadge {
    pub fn is_interactive(&self) -> bool {
        self.state != ChipState::Disabled
    }
}

/// Anything that can be drawn as a chip
pub trait Chip {
    fn badge(&self, selected: bool) -> ChipBadge;
}

impl Chip for FilterNode {
    fn badge(&self, selected: bool) -> ChipBadge {
        let (color, state) = if !self.available {
            (DISABLED_GRAY, ChipState::Disabled)
        } else if selected {
            (palette::filter_chip_colors().resolve(&self.name), ChipState::Selected)
        } else {
            (palette::filter_chip_colors().resolve(&self.name), ChipState::Normal)
        };

        ChipBadge {
            label: self.name.clone(),
            icon: self.icon.clone(),
            color,
            state,
        }
    }
}

impl Chip for CategoryChip {
    fn badge(&self, selected: bool) -> ChipBadge {
        ChipBadge {
            label: self.name.clone(),
            icon: self.icon.clone(),
            color: palette::category_chip_colors().resolve(&self.name),
            state: if selected {
                ChipState::Selected
            } else {
                ChipState::Normal
            },
        }
    }
}

/// Small decorative badge for a bare category label (list headers, cards)
///
/// The icon comes from the filter tree, the tint from the category table.
/// Labels in neither still get a badge: a plain circle in black.
pub fn category_badge(text: &str) -> ChipBadge {
    ChipBadge {
        label: text.to_string(),
        icon: Taxonomy::builtin().icon_or_fallback(text).to_string(),
        color: palette::category_chip_colors().get(text).unwrap_or(BLACK),
        state: ChipState::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::SYSTEM_BLUE;
    use crate::taxonomy::FALLBACK_ICON;

    #[test]
    fn test_filter_chip_uses_table_color() {
        let music = Taxonomy::builtin().resolve_path(&["Music"]).unwrap()[0];
        let badge = music.badge(false);
        assert_eq!(badge.label, "Music");
        assert_eq!(badge.icon, "music.note");
        assert_eq!(badge.color, Color::rgb(0xA30000));
        assert_eq!(badge.state, ChipState::Normal);
        assert_eq!(music.badge(true).state, ChipState::Selected);
    }

    #[test]
    fn test_unavailable_filter_chip_is_gray_and_inert() {
        let path = Taxonomy::builtin()
            .resolve_path(&["Music", "Instruments"])
            .unwrap();
        let badge = path[1].badge(true);
        assert_eq!(badge.color, DISABLED_GRAY);
        assert_eq!(badge.state, ChipState::Disabled);
        assert!(!badge.is_interactive());
    }

    #[test]
    fn test_filter_chip_missing_from_table_falls_back() {
        let path = Taxonomy::builtin()
            .resolve_path(&["Sports", "Athletes", "Footballers"])
            .unwrap();
        assert_eq!(path[2].badge(false).color, SYSTEM_BLUE);
    }

    #[test]
    fn test_category_chip_badge() {
        let dogs = crate::categories::CategoryCatalog::builtin()
            .find("Nature", "Dogs")
            .unwrap();
        let badge = dogs.badge(true);
        assert_eq!(badge.color, Color::unit(1.0, 0.75, 0.0));
        assert_eq!(badge.state, ChipState::Selected);
    }

    #[test]
    fn test_category_badge_lookup_and_fallbacks() {
        let badge = category_badge("Sports");
        assert_eq!(badge.icon, "figure.archery");
        assert_eq!(badge.color, Color::unit(1.0, 0.27, 0.0));

        let unknown = category_badge("Knitting");
        assert_eq!(unknown.icon, FALLBACK_ICON);
        assert_eq!(unknown.color, BLACK);
    }
}

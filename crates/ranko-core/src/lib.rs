// Picker logic and the static data behind it. No terminal code in here.
pub mod categories;
pub mod chips;
pub mod config;
pub mod error;
mod filter_tree;
pub mod layouts;
pub mod palette;
pub mod picker;
pub mod taxonomy;
pub mod theme;

pub use categories::{CategoryCatalog, CategoryChip, CategoryGroup, CategoryPicker};
pub use chips::{category_badge, Chip, ChipBadge, ChipState};
pub use config::{Config, PickerConfig, StartScreen, UiConfig};
pub use error::Error;
pub use layouts::{LayoutPicker, LayoutTemplate};
pub use picker::{FilterPicker, PickerState, Selection, SelectionHandler, SessionStatus};
pub use taxonomy::{FilterNode, Taxonomy};
pub use theme::{Color, Theme, ThemeColors};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;

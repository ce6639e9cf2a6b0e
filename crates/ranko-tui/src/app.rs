// TUI application state. Key handling lives in the runner, this is just the
// state and the moves it can make.
use ranko_core::{
    CategoryCatalog, CategoryChip, CategoryPicker, Config, FilterNode, FilterPicker, LayoutPicker,
    LayoutTemplate, Selection, SelectionHandler, StartScreen, Taxonomy, Theme,
};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Filters,    // Drill-down filter chips
    Categories, // Flat category chips with search
    Layouts,    // Layout templates
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Filters => "Add Items",
            Screen::Categories => "Select Category",
            Screen::Layouts => "Select Layout",
        }
    }

    pub fn next(&self) -> Screen {
        match self {
            Screen::Filters => Screen::Categories,
            Screen::Categories => Screen::Layouts,
            Screen::Layouts => Screen::Filters,
        }
    }

    pub fn all() -> [Screen; 3] {
        [Screen::Filters, Screen::Categories, Screen::Layouts]
    }
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Filters => Screen::Filters,
            StartScreen::Categories => Screen::Categories,
            StartScreen::Layouts => Screen::Layouts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Moving around, picking chips
    Searching, // Typing in the search box
}

/// How a picker session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Filter(Selection),
    Category(CategoryChip),
    Layout(LayoutTemplate),
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub filter_picker: FilterPicker<'static>,
    pub category_picker: CategoryPicker,
    pub layout_picker: LayoutPicker,
    pub cursor: usize,
    pub list_state: ListState,
    pub show_help: bool,
    pub show_unavailable: bool,
    pub current_theme: Theme,
    pub status_message: Option<String>,
    pub outcome: Option<Outcome>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            screen: config.picker.start_screen.into(),
            input_mode: InputMode::Normal,
            filter_picker: FilterPicker::new(Taxonomy::builtin()),
            category_picker: CategoryPicker::new(),
            layout_picker: LayoutPicker::default(),
            cursor: 0,
            list_state,
            show_help: false,
            show_unavailable: config.picker.show_unavailable,
            current_theme: Theme::by_name_or_default(&config.ui.theme),
            status_message: None,
            outcome: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Esc on a picker: dismiss without picking anything
    pub fn cancel(&mut self) {
        if self.screen == Screen::Filters {
            self.filter_picker.cancel();
        }
        self.quit();
    }

    pub fn next_screen(&mut self) {
        self.switch_to(self.screen.next());
    }

    pub fn switch_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.input_mode = InputMode::Normal;
        self.reset_cursor();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn enter_search_mode(&mut self) {
        // The filter tree has no search box
        if self.screen != Screen::Filters {
            self.input_mode = InputMode::Searching;
        }
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_text(&self) -> &str {
        match self.screen {
            Screen::Filters => "",
            Screen::Categories => &self.category_picker.search_text,
            Screen::Layouts => &self.layout_picker.search_text,
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        match self.screen {
            Screen::Filters => return,
            Screen::Categories => self.category_picker.search_text.push(c),
            Screen::Layouts => self.layout_picker.search_text.push(c),
        }
        self.reset_cursor();
    }

    pub fn pop_search_char(&mut self) {
        match self.screen {
            Screen::Filters => return,
            Screen::Categories => {
                self.category_picker.search_text.pop();
            }
            Screen::Layouts => {
                self.layout_picker.search_text.pop();
            }
        }
        self.reset_cursor();
    }

    // -- filter screen --

    /// Chips under the breadcrumb row, honoring `show_unavailable`
    pub fn visible_filter_chips(&self) -> Vec<&'static FilterNode> {
        self.filter_picker
            .current()
            .iter()
            .copied()
            .filter(|n| self.show_unavailable || n.available)
            .collect()
    }

    /// Enter on a chip. Unavailable chips are inert, same as a disabled button.
    pub fn select_filter_under_cursor(&mut self) {
        let Some(chip) = self.visible_filter_chips().get(self.cursor).copied() else {
            return;
        };

        if !chip.available {
            self.status_message = Some(format!("'{}' is coming soon", chip.name));
            return;
        }

        self.filter_picker.select(chip);
        self.status_message = None;
        self.reset_cursor();
    }

    /// Breadcrumb tap by position (0 = first crumb)
    pub fn back_to_crumb(&mut self, index: usize) {
        if index < self.filter_picker.path().len() {
            self.filter_picker.back_to_index(index);
            self.reset_cursor();
        }
    }

    /// Tap on the last crumb: up one level
    pub fn go_up(&mut self) {
        if let Some(last) = self.filter_picker.path().len().checked_sub(1) {
            self.back_to_crumb(last);
        }
    }

    pub fn confirm_filter<H>(&mut self, handler: &mut H)
    where
        H: SelectionHandler + ?Sized,
    {
        if !self.filter_picker.can_confirm() {
            self.status_message = Some("Pick categories until the ✓ lights up".to_string());
            return;
        }

        match self.filter_picker.confirm_with(handler) {
            Ok(Some(selection)) => {
                self.outcome = Some(Outcome::Filter(selection));
                self.quit();
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Item search rejected selection: {}", e);
                self.status_message = Some(format!("Item search failed: {}", e));
            }
        }
    }

    // -- category screen --

    /// Chips in the order they're drawn, groups flattened
    pub fn category_rows(&self) -> Vec<&'static CategoryChip> {
        self.category_picker
            .visible(CategoryCatalog::builtin())
            .into_iter()
            .flat_map(|group| group.chips)
            .collect()
    }

    pub fn select_category_under_cursor(&mut self) {
        if let Some(chip) = self.category_rows().get(self.cursor).copied() {
            self.category_picker.select(chip);
        }
    }

    pub fn confirm_category(&mut self) {
        match self.category_picker.confirm() {
            Some(chip) => {
                self.outcome = Some(Outcome::Category(chip));
                self.quit();
            }
            None => self.status_message = Some("Pick a category first".to_string()),
        }
    }

    // -- layout screen --

    pub fn layout_rows(&self) -> Vec<LayoutTemplate> {
        self.layout_picker.filtered().into_iter().cloned().collect()
    }

    /// Carousel shortcut: 1-4 toggles that category
    pub fn toggle_layout_category(&mut self, index: usize) {
        if let Some((category, _)) = ranko_core::layouts::LAYOUT_CATEGORIES.get(index) {
            self.layout_picker.toggle_category(category);
            self.reset_cursor();
        }
    }

    pub fn toggle_layout_under_cursor(&mut self) {
        if let Some(layout) = self.layout_rows().get(self.cursor) {
            if layout.disabled {
                self.status_message = Some(format!("{} is coming soon", layout.name));
            }
            self.layout_picker.toggle_select(layout);
        }
    }

    pub fn confirm_layout(&mut self) {
        match self.layout_picker.confirm() {
            Some(layout) => {
                self.outcome = Some(Outcome::Layout(layout));
                self.quit();
            }
            None => self.status_message = Some("Pick a layout first".to_string()),
        }
    }

    // -- cursor --

    fn row_count(&self) -> usize {
        match self.screen {
            Screen::Filters => self.visible_filter_chips().len(),
            Screen::Categories => self.category_rows().len(),
            Screen::Layouts => self.layout_rows().len(),
        }
    }

    pub fn next_row(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.cursor = (self.cursor + 1).min(count - 1);
            self.list_state.select(Some(self.cursor));
        }
    }

    pub fn previous_row(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.list_state.select(Some(0));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

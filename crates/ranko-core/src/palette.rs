// Static name -> color tables for chips.
//
// Keyed by display name only, so every chip called "Football" gets the same
// color no matter where it sits in the tree.
use crate::theme::Color;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Tint for chips whose name isn't in a table
pub const SYSTEM_BLUE: Color = Color::rgb(0x007AFF);
pub const SYSTEM_GREEN: Color = Color::rgb(0x34C759);
/// Unavailable filter chips are always drawn in this
pub const DISABLED_GRAY: Color = Color::rgb(0x8E8E93);
pub const BLACK: Color = Color::rgb(0x000000);

#[derive(Debug, Clone)]
pub struct ColorTable {
    entries: HashMap<&'static str, Color>,
    fallback: Color,
}

impl ColorTable {
    fn new(entries: Vec<(&'static str, Color)>, fallback: Color) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Color {
        self.get(name).unwrap_or(self.fallback)
    }
}

/// Colors for chips in the filter picker
pub fn filter_chip_colors() -> &'static ColorTable {
    static TABLE: OnceLock<ColorTable> = OnceLock::new();
    TABLE.get_or_init(|| ColorTable::new(filter_chip_entries(), SYSTEM_BLUE))
}

/// Colors for chips in the category picker and the category badges
pub fn category_chip_colors() -> &'static ColorTable {
    static TABLE: OnceLock<ColorTable> = OnceLock::new();
    TABLE.get_or_init(|| ColorTable::new(category_chip_entries(), SYSTEM_BLUE))
}

fn filter_chip_entries() -> Vec<(&'static str, Color)> {
    vec![
        ("Music", Color::rgb(0xA30000)),
        ("Sports", Color::rgb(0xE60001)),
        ("Food & Drink", Color::rgb(0xFB6901)),
        ("Nature", Color::rgb(0xFFA600)),
        ("Entertainment", Color::rgb(0xFFC700)),
        ("Humanities", Color::rgb(0x77C300)),
        ("Science", Color::rgb(0x4FA800)),
        ("People", Color::rgb(0x148000)),
        ("Brands", Color::rgb(0x00BA8F)),
        ("Hobbies & Activities", Color::rgb(0x009EF2)),
        ("Technology & Math", Color::rgb(0x0152D6)),
        ("Art & Design", Color::rgb(0x4A00C4)),
        ("Vehicles", Color::rgb(0x7000C4)),
        ("Culture", Color::rgb(0xC400C2)),
        ("Occupation", Color::rgb(0xF200AB)),
        ("Random", Color::rgb(0xFF0070)),

        ("Artists & Bands", Color::unit(1.0, 0.35, 0.0)),
        ("Songs", Color::unit(1.0, 0.72, 0.0)),
        ("Albums", Color::unit(0.62, 0.87, 0.0)),
        ("Instruments", Color::unit(0.29, 0.77, 0.0)),
        ("Festivals", Color::unit(0.0, 0.35, 0.0)),
        ("Band Members", Color::unit(0.0, 0.75, 0.77)),
        ("Record Labels", Color::unit(0.0, 0.62, 0.95)),
        ("Genres", Color::unit(0.44, 0.0, 0.77)),

        ("Sport", Color::unit(1.0, 0.0, 0.0)),
        ("Athletes", Color::unit(0.2, 0.0, 1.0)),
        ("Leagues & Tournaments", Color::unit(1.0, 0.72, 0.0)),
        ("Clubs & Teams", Color::unit(0.62, 0.87, 0.0)),
        ("Football", Color::unit(0.0, 0.0, 0.0)),
        ("Basketball", Color::unit(1.0, 0.2, 0.0)),
        ("Australian Football", Color::unit(1.0, 0.0, 0.0)),
        ("American Football", Color::unit(0.51, 0.0, 0.0)),
        ("Tennis", Color::unit(0.62, 0.87, 0.0)),
        ("Motorsport", Color::unit(1.0, 0.72, 0.0)),
        ("Olympics", Color::unit(0.29, 0.77, 0.0)),
        ("Stadiums & Venues", Color::unit(0.44, 0.0, 0.77)),
        ("F1 Constructors", Color::unit(0.0, 0.62, 0.95)),
        ("Coaches & Managers", Color::unit(0.95, 0.0, 0.67)),
        ("Commentators", Color::unit(0.0, 0.45, 0.0)),
        ("Rivalries", Color::unit(1.0, 0.72, 0.0)),
        ("Mascots", Color::unit(0.0, 0.32, 0.84)),
        ("Gym Machines", Color::unit(0.29, 0.0, 0.77)),
        ("Gym Exercises", Color::unit(1.0, 0.0, 0.44)),

        ("Food", Color::unit(0.29, 0.77, 0.0)),
        ("Drinks", Color::unit(0.0, 0.73, 1.0)),
        ("Fruit", Color::unit(0.0, 0.62, 0.95)),
        ("Vegetables", Color::unit(0.0, 0.62, 0.95)),
        ("Pizza", Color::unit(0.0, 0.62, 0.95)),
        ("Fast Food Chains", Color::unit(0.0, 0.62, 0.95)),
        ("Eggs", Color::unit(0.0, 0.62, 0.95)),
        ("Chocolate", Color::unit(0.0, 0.62, 0.95)),
        ("Cheese", Color::unit(0.0, 0.62, 0.95)),
        ("Dairy", Color::unit(0.0, 0.62, 0.95)),
        ("Pasta", Color::unit(0.0, 0.62, 0.95)),
        ("Soft Drinks", Color::unit(0.0, 0.62, 0.95)),
        ("Alcohol", Color::unit(0.0, 0.62, 0.95)),
        ("Breakfast Cereals", Color::unit(0.0, 0.62, 0.95)),
        ("Ice Cream", Color::unit(0.0, 0.62, 0.95)),
        ("Cocktails", Color::unit(0.0, 0.62, 0.95)),
        ("Sandwiches", Color::unit(0.0, 0.62, 0.95)),
        ("Desserts", Color::unit(0.0, 0.62, 0.95)),
        ("Spices", Color::unit(0.0, 0.62, 0.95)),
        ("Coffees", Color::unit(0.0, 0.62, 0.95)),
        ("Cuisines", Color::unit(0.0, 0.62, 0.95)),

        ("Animals", Color::unit(0.0, 0.62, 0.95)),
        ("Plants", Color::unit(0.0, 0.62, 0.95)),
        ("Mammals", Color::unit(0.0, 0.62, 0.95)),
        ("Birds", Color::unit(0.0, 0.62, 0.95)),
        ("Dogs", Color::unit(0.0, 0.62, 0.95)),
        ("Flowers", Color::unit(0.0, 0.62, 0.95)),
        ("Trees", Color::unit(0.0, 0.62, 0.95)),
        ("Fish", Color::unit(0.0, 0.62, 0.95)),
        ("Reptiles", Color::unit(0.0, 0.62, 0.95)),
        ("Cats", Color::unit(0.0, 0.62, 0.95)),
        ("Bugs", Color::unit(0.0, 0.62, 0.95)),
        ("Famous Animals", Color::unit(0.0, 0.62, 0.95)),

        ("Celebrities", Color::unit(0.0, 0.62, 0.95)),
        ("Movies", Color::unit(0.0, 0.62, 0.95)),
        ("Social Media", Color::unit(0.0, 0.62, 0.95)),
        ("Books", Color::unit(0.0, 0.62, 0.95)),
        ("Authors", Color::unit(0.0, 0.62, 0.95)),
        ("Quotes", Color::unit(0.0, 0.62, 0.95)),
        ("Streaming Services", Color::unit(0.0, 0.62, 0.95)),
        ("TV Shows", Color::unit(0.0, 0.62, 0.95)),
        ("Gaming", Color::unit(0.0, 0.62, 0.95)),
        ("Board Games", Color::unit(0.0, 0.62, 0.95)),
        ("Card Games", Color::unit(0.0, 0.62, 0.95)),
        ("Comedians", Color::unit(0.0, 0.62, 0.95)),
        ("Memes", Color::unit(0.0, 0.62, 0.95)),

        ("Countries", Color::unit(0.0, 0.62, 0.95)),
        ("Politicians", Color::unit(0.0, 0.62, 0.95)),
        ("Landmarks", Color::unit(0.0, 0.62, 0.95)),
        ("Cities", Color::unit(0.0, 0.62, 0.95)),

        ("Models", Color::unit(0.0, 0.62, 0.95)),
        ("Numbers", Color::unit(0.0, 0.62, 0.95)),
        ("Letters", Color::unit(0.0, 0.62, 0.95)),
        ("Shapes", Color::unit(0.0, 0.62, 0.95)),
        ("Statues", Color::unit(0.0, 0.62, 0.95)),
        ("Planets", Color::unit(0.0, 0.62, 0.95)),
        ("Relationships", Color::unit(0.0, 0.62, 0.95)),
        ("Emotions", Color::unit(0.0, 0.62, 0.95)),
        ("Red Flags", Color::unit(0.0, 0.0, 0.0)),
    ]
}

fn category_chip_entries() -> Vec<(&'static str, Color)> {
    vec![
        ("Music", Color::unit(1.0, 0.0, 0.0)),
        ("Artists & Bands", Color::unit(1.0, 0.0, 0.0)),
        ("Songs", Color::unit(1.0, 0.0, 0.0)),
        ("Albums", Color::unit(1.0, 0.0, 0.0)),
        ("Instruments", Color::unit(1.0, 0.0, 0.0)),
        ("Festivals", Color::unit(1.0, 0.0, 0.0)),
        ("Band Members", Color::unit(1.0, 0.0, 0.0)),
        ("Record Labels", Color::unit(1.0, 0.0, 0.0)),
        ("Genres", Color::unit(1.0, 0.0, 0.0)),

        ("Sport", Color::unit(1.0, 0.27, 0.0)),
        ("Sports", Color::unit(1.0, 0.27, 0.0)),
        ("Athletes", Color::unit(1.0, 0.27, 0.0)),
        ("Leagues & Tournaments", Color::unit(1.0, 0.27, 0.0)),
        ("Clubs & Teams", Color::unit(1.0, 0.27, 0.0)),
        ("Football", Color::unit(1.0, 0.27, 0.0)),
        ("Basketball", Color::unit(1.0, 0.27, 0.0)),
        ("Australian Football", Color::unit(1.0, 0.27, 0.0)),
        ("American Football", Color::unit(1.0, 0.27, 0.0)),
        ("Motorsport", Color::unit(1.0, 0.27, 0.0)),
        ("Olympics", Color::unit(1.0, 0.27, 0.0)),
        ("Stadiums & Venues", Color::unit(1.0, 0.27, 0.0)),
        ("F1 Constructors", Color::unit(1.0, 0.27, 0.0)),
        ("Coaches & Managers", Color::unit(1.0, 0.27, 0.0)),
        ("Commentators", Color::unit(1.0, 0.27, 0.0)),
        ("Rivalries", Color::unit(1.0, 0.27, 0.0)),
        ("Mascots", Color::unit(1.0, 0.27, 0.0)),
        ("Gym Machines", Color::unit(1.0, 0.27, 0.0)),
        ("Gym Exercises", Color::unit(1.0, 0.27, 0.0)),

        ("Food", Color::unit(1.0, 0.65, 0.0)),
        ("Drinks", Color::unit(1.0, 0.65, 0.0)),
        ("Fruit", Color::unit(1.0, 0.65, 0.0)),
        ("Vegetables", Color::unit(1.0, 0.65, 0.0)),
        ("Pizza", Color::unit(1.0, 0.65, 0.0)),
        ("Fast Food Chains", Color::unit(1.0, 0.65, 0.0)),
        ("Eggs", Color::unit(1.0, 0.65, 0.0)),
        ("Chocolate", Color::unit(1.0, 0.65, 0.0)),
        ("Cheese", Color::unit(1.0, 0.65, 0.0)),
        ("Dairy", Color::unit(1.0, 0.65, 0.0)),
        ("Pasta", Color::unit(1.0, 0.65, 0.0)),
        ("Soft Drinks", Color::unit(1.0, 0.65, 0.0)),
        ("Alcohol", Color::unit(1.0, 0.65, 0.0)),
        ("Breakfast Cereals", Color::unit(1.0, 0.65, 0.0)),
        ("Ice Cream", Color::unit(1.0, 0.65, 0.0)),
        ("Cocktails", Color::unit(1.0, 0.65, 0.0)),
        ("Sandwiches", Color::unit(1.0, 0.65, 0.0)),
        ("Desserts", Color::unit(1.0, 0.65, 0.0)),
        ("Spices", Color::unit(1.0, 0.65, 0.0)),
        ("Coffees", Color::unit(1.0, 0.65, 0.0)),
        ("Cuisines", Color::unit(1.0, 0.65, 0.0)),

        ("Animals", Color::unit(1.0, 0.75, 0.0)),
        ("Plants", Color::unit(1.0, 0.75, 0.0)),
        ("Mammals", Color::unit(1.0, 0.75, 0.0)),
        ("Birds", Color::unit(1.0, 0.75, 0.0)),
        ("Dogs", Color::unit(1.0, 0.75, 0.0)),
        ("Flowers", Color::unit(1.0, 0.75, 0.0)),
        ("Trees", Color::unit(1.0, 0.75, 0.0)),
        ("Fish", Color::unit(1.0, 0.75, 0.0)),
        ("Reptiles", Color::unit(1.0, 0.75, 0.0)),
        ("Cats", Color::unit(1.0, 0.75, 0.0)),
        ("Bugs", Color::unit(1.0, 0.75, 0.0)),
        ("Famous Animals", Color::unit(1.0, 0.75, 0.0)),

        ("Celebrities", Color::unit(0.86, 0.44, 0.84)),
        ("Movies", Color::unit(0.86, 0.44, 0.84)),
        ("Social Media", Color::unit(0.86, 0.44, 0.84)),
        ("Books", Color::unit(0.86, 0.44, 0.84)),
        ("Authors", Color::unit(0.86, 0.44, 0.84)),
        ("Quotes", Color::unit(0.86, 0.44, 0.84)),
        ("Streaming Services", Color::unit(0.86, 0.44, 0.84)),
        ("TV Shows", Color::unit(0.86, 0.44, 0.84)),
        ("Gaming", Color::unit(0.86, 0.44, 0.84)),
        ("Board Games", Color::unit(0.86, 0.44, 0.84)),
        ("Card Games", Color::unit(0.86, 0.44, 0.84)),
        ("Comedians", Color::unit(0.86, 0.44, 0.84)),
        ("Memes", Color::unit(0.86, 0.44, 0.84)),

        ("Countries", Color::unit(0.60, 0.80, 0.20)),
        ("Politicians", Color::unit(0.60, 0.80, 0.20)),
        ("Landmarks", Color::unit(0.60, 0.80, 0.20)),
        ("Cities", Color::unit(0.60, 0.80, 0.20)),

        ("Models", SYSTEM_GREEN),
        ("Numbers", Color::unit(0.25, 0.88, 0.82)),
        ("Letters", SYSTEM_BLUE),
        ("Shapes", Color::unit(0.0, 0.0, 1.0)),
        ("Statues", Color::unit(0.54, 0.17, 0.89)),
        ("Planets", Color::unit(0.50, 0.0, 0.50)),
        ("Relationships", Color::unit(0.86, 0.44, 0.84)),
        ("Science", SYSTEM_BLUE),
        ("Emotions", Color::unit(1.0, 0.75, 0.80)),
        ("Red Flags", Color::unit(1.0, 0.08, 0.58)),
    ]
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Flat chip used by the category picker. No children, no navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryChip {
    pub name: String,
    pub icon: String,
    /// Label of the group this chip is listed under
    pub category: String,
    /// Space separated words that should also find this chip
    pub synonym: String,
}

impl CategoryChip {
    /// Case-insensitive substring match against name, category and synonyms.
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.synonym.to_lowercase().contains(needle)
    }
}

/// One visible group in the category picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub chips: Vec<&'a CategoryChip>,
}

/// Category label -> chips
///
/// Chip names repeat across groups ("Celebrities", "Science", ...), so
/// there's deliberately no global name -> chip map. Ask with the category
/// when you know it, or get every match back when you don't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    groups: BTreeMap<String, Vec<CategoryChip>>,
}

impl CategoryCatalog {
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<CategoryChip>)>,
    {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    pub fn builtin() -> &'static CategoryCatalog {
        static BUILTIN: OnceLock<CategoryCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            CategoryCatalog::new(
                default_groups()
                    .into_iter()
                    .map(|(category, chips)| (category.to_string(), chips)),
            )
        })
    }

    /// Every group, sorted by category name
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        self.groups
            .iter()
            .map(|(category, chips)| CategoryGroup {
                category: category.as_str(),
                chips: chips.iter().collect(),
            })
            .collect()
    }

    pub fn chips(&self) -> impl Iterator<Item = &CategoryChip> {
        self.groups.values().flatten()
    }

    /// What the picker shows for a search box value
    ///
    /// Empty query gives back everything. Otherwise chips are kept if the
    /// query appears (ignoring case) in their name, category or synonyms,
    /// and groups left with nothing are dropped. Groups stay sorted by name.
    pub fn search(&self, query: &str) -> Vec<CategoryGroup<'_>> {
        if query.is_empty() {
            return self.groups();
        }

        let needle = query.to_lowercase();
        self.groups
            .iter()
            .filter_map(|(category, chips)| {
                let kept: Vec<&CategoryChip> =
                    chips.iter().filter(|c| c.matches_lowercase(&needle)).collect();
                if kept.is_empty() {
                    None
                } else {
                    Some(CategoryGroup {
                        category: category.as_str(),
                        chips: kept,
                    })
                }
            })
            .collect()
    }

    /// Lookup scoped to a single group
    pub fn find(&self, category: &str, name: &str) -> Option<&CategoryChip> {
        self.groups.get(category)?.iter().find(|c| c.name == name)
    }

    /// Every chip with this name, across all groups, in group order
    pub fn lookup(&self, name: &str) -> Vec<&CategoryChip> {
        self.chips().filter(|c| c.name == name).collect()
    }
}

/// Selection state for the category picker sheet
#[derive(Debug, Clone, Default)]
pub struct CategoryPicker {
    pub search_text: String,
    selection: Option<CategoryChip>,
}

impl CategoryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible<'a>(&self, catalog: &'a CategoryCatalog) -> Vec<CategoryGroup<'a>> {
        catalog.search(&self.search_text)
    }

    pub fn select(&mut self, chip: &CategoryChip) {
        tracing::debug!("Category chip picked: {} ({})", chip.name, chip.category);
        self.selection = Some(chip.clone());
    }

    pub fn is_selected(&self, chip: &CategoryChip) -> bool {
        self.selection.as_ref() == Some(chip)
    }

    pub fn selection(&self) -> Option<&CategoryChip> {
        self.selection.as_ref()
    }

    /// "Done" is only live once something is picked
    pub fn can_confirm(&self) -> bool {
        self.selection.is_some()
    }

    pub fn confirm(&self) -> Option<CategoryChip> {
        let chosen = self.selection.clone()?;
        tracing::info!("Category confirmed: {}", chosen.name);
        Some(chosen)
    }
}

fn chip(name: &str, icon: &str, category: &str, synonym: &str) -> CategoryChip {
    CategoryChip {
        name: name.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        synonym: synonym.to_string(),
    }
}

fn default_groups() -> Vec<(&'static str, Vec<CategoryChip>)> {
    vec![
        (
            "Music",
            vec![
                chip("Music", "music.note", "Music", "songs tunes melodies compositions rhythms"),
                chip("Artists & Bands", "music.microphone", "Music", "singers celebrities musicians groups ensembles"),
                chip("Songs", "music.quarternote.3", "Music", "tracks tunes melodies pieces anthems"),
                chip("Albums", "record.circle", "Music", "LPs mixtapes records compilations"),
                chip("Instruments", "guitars.fill", "Music", "guitars pianos drums violins synthesizers"),
                chip("Festivals", "hifispeaker.2.fill", "Music", "concerts fairs events celebrations"),
                chip("Band Members", "person.3.fill", "Music", "vocalists musicians performers crew"),
                chip("Record Labels", "tag.fill", "Music", "labels companies imprints publishers"),
                chip("Genres", "music.quarternote.3", "Music", "styles categories types subgenres"),
            ],
        ),
        (
            "Sports",
            vec![
                chip("Sport", "figure.walk", "Sports", "athletics games recreation exercise"),
                chip("Sports", "figure.archery", "Sports", "games athletics competitions events"),
                chip("Athletes", "figure.run", "Sports", "players competitors sportsmen sportswomen"),
                chip("Leagues & Tournaments", "trophy.fill", "Sports", "competitions cups championships contests"),
                chip("Clubs & Teams", "shield.lefthalf.filled", "Sports", "squads groups organizations units"),
                chip("Football", "soccerball", "Sports", "soccer gridiron rugby futsal"),
                chip("Basketball", "basketball.fill", "Sports", "hoops bball court net"),
                chip("Australian Football", "australian.football.fill", "Sports", "footy AFL Aussie football"),
                chip("American Football", "american.football.fill", "Sports", "gridiron NFL pigskin touchdown"),
                chip("Motorsport", "steeringwheel", "Sports", "racing circuits speed rally"),
                chip("Olympics", "flag.fill", "Sports", "games olympiad international sports events"),
                chip("Stadiums & Venues", "sportscourt.fill", "Sports", "arenas fields complexes grounds"),
                chip("F1 Constructors", "wrench.and.screwdriver.fill", "Sports", "teams formula-one constructors racing"),
                chip("Coaches & Managers", "megaphone.fill", "Sports", "trainers mentors leaders directors"),
                chip("Commentators", "headset", "Sports", "announcers reporters broadcasters analysts"),
                chip("Rivalries", "oar.2.crossed", "Sports", "feuds competitions matchups conflicts"),
                chip("Mascots", "figure.dance", "Sports", "characters symbols icons representatives"),
                chip("Gym Machines", "figure.indoor.cycle", "Sports", "equipment apparatus devices machines"),
                chip("Gym Exercises", "figure.hand.cycling", "Sports", "workouts training routines drills"),
            ],
        ),
        (
            "Food & Drink",
            vec![
                chip("Food", "fork.knife", "Food & Drink", "cuisine meals edibles dishes"),
                chip("Drinks", "waterbottle.fill", "Food & Drink", "beverages cocktails juices sodas"),
                chip("Fruit", "applelogo", "Food & Drink", "apples oranges bananas berries"),
                chip("Vegetables", "carrot.fill", "Food & Drink", "greens veggies produce legumes"),
                chip("Pizza", "triangle.lefthalf.filled", "Food & Drink", "pie slices Italian flatbread calzones"),
                chip("Fast Food Chains", "takeoutbag.and.cup.and.straw.fill", "Food & Drink", "burgers fries shakes subs"),
                chip("Eggs", "frying.pan.fill", "Food & Drink", "ovum omelets scramble quiche"),
                chip("Chocolate", "square.grid.3x3.square", "Food & Drink", "cocoa sweets treats bars"),
                chip("Cheese", "drop.triangle.fill", "Food & Drink", "dairy curds cheddar gouda"),
                chip("Dairy", "waterbottle.fill", "Food & Drink", "milk products cream butter"),
                chip("Pasta", "water.waves", "Food & Drink", "noodles spaghetti linguine fettuccine"),
                chip("Soft Drinks", "bubbles.and.sparkles.fill", "Food & Drink", "sodas pop beverages colas"),
                chip("Alcohol", "flame.fill", "Food & Drink", "spirits liquor brews cocktails"),
                chip("Breakfast Cereals", "rectangle.portrait.righthalf.inset.filled", "Food & Drink", "granola oats muesli flakes"),
                chip("Ice Cream", "snowflake", "Food & Drink", "gelato frozen yogurt sherbet custard"),
                chip("Cocktails", "beach.umbrella.fill", "Food & Drink", "mixed drinks libations martinis mojitos"),
                chip("Sandwiches", "square.3.layers.3d.top.filled", "Food & Drink", "subs burgers wraps paninis"),
                chip("Desserts", "birthday.cake.fill", "Food & Drink", "sweets treats pastries confections"),
                chip("Spices", "thermometer.sun.fill", "Food & Drink", "herbs seasonings flavorings condiments"),
                chip("Coffees", "cup.and.saucer.fill", "Food & Drink", "espresso latte cappuccino mocha brew"),
                chip("Cuisines", "globe", "Food & Drink", "dishes cooking fare gastronomies meals"),
            ],
        ),
        (
            "Nature",
            vec![
                chip("Animals", "pawprint.fill", "Nature", "creatures fauna wildlife species"),
                chip("Plants", "leaf.fill", "Nature", "flora vegetation herbs shrubs"),
                chip("Mammals", "hare.fill", "Nature", "placentals marsupials primates carnivores"),
                chip("Birds", "bird.fill", "Nature", "avians fowls songbirds raptors"),
                chip("Dogs", "dog.fill", "Nature", "canines pooches mutts hounds"),
                chip("Flowers", "microbe.fill", "Nature", "blooms petals blossoms flora"),
                chip("Trees", "tree.fill", "Nature", "oaks maples pines birches"),
                chip("Fish", "fish.fill", "Nature", "aquatic swimmers marine finned"),
                chip("Reptiles", "lizard.fill", "Nature", "snakes lizards turtles crocodiles"),
                chip("Cats", "cat.fill", "Nature", "felines kitties pussycats panthers"),
                chip("Bugs", "ladybug.fill", "Nature", "insects arthropods critters pests"),
                chip("Famous Animals", "star.fill", "Nature", "legendary iconic wildlife stars"),
            ],
        ),
        (
            "Entertainment",
            vec![
                chip("Celebrities", "star.fill", "Entertainment", "stars icons luminaries VIPs"),
                chip("Movies", "movieclapper", "Entertainment", "films flicks features shorts"),
                chip("Social Media", "message.fill", "Entertainment", "networks platforms online communities"),
                chip("Books", "books.vertical.fill", "Entertainment", "novels literature tomes texts"),
                chip("Authors", "book.fill", "Entertainment", "writers novelists wordsmiths scribes"),
                chip("Quotes", "quote.opening", "Entertainment", "sayings aphorisms maxims proverbs"),
                chip("Streaming Services", "play.rectangle.fill", "Entertainment", "platforms services portals channels"),
                chip("TV Shows", "tv.fill", "Entertainment", "series broadcasts programs episodes"),
                chip("Gaming", "gamecontroller.fill", "Entertainment", "videogames esports interactive recreation"),
                chip("Board Games", "dice.fill", "Entertainment", "tabletop classics strategy party"),
                chip("Card Games", "suit.club.fill", "Entertainment", "poker bridge rummy blackjack"),
                chip("Comedians", "music.microphone", "Entertainment", "humorists comics stand-ups jesters"),
                chip("Memes", "camera.fill", "Entertainment", "viral jokes internet gags"),
            ],
        ),
        (
            "Humanities",
            vec![
                chip("Countries", "globe.europe.africa.fill", "Humanities", "nations states lands territories"),
                chip("Politicians", "megaphone.fill", "Humanities", "leaders statesmen officials lawmakers"),
                chip("Landmarks", "building.columns.fill", "Humanities", "monuments icons sites attractions"),
                chip("Cities", "building.2.fill", "Humanities", "metropolises urban centers towns municipalities"),
            ],
        ),
        (
            "Other",
            vec![
                chip("Models", "camera.fill", "Other", "figures prototypes replicas designs"),
                chip("Numbers", "1.square.fill", "Other", "digits figures numerals statistics"),
                chip("Letters", "a.square.fill", "Other", "characters alphabets glyphs script"),
                chip("Shapes", "triangle.fill", "Other", "forms figures outlines geometries"),
                chip("Statues", "figure.stand", "Other", "sculptures monuments effigies carvings"),
                chip("Planets", "circles.hexagonpath.fill", "Other", "worlds celestial bodies orbs spheres"),
                chip("Relationships", "heart.fill", "Other", "bonds connections associations links"),
                chip("Science", "atom", "Other", "planets, chemistry, biology, physics, astronomy"),
                chip("Emotions", "face.smiling", "Other", "feelings sentiments moods passions"),
                chip("Red Flags", "flag.fill", "Other", "warningSigns alerts cautionSignals indicators"),
            ],
        ),
    ]
}

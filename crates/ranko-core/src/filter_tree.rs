// The built-in filter taxonomy. Hand-authored, so sibling `order` values are
// what decides display order, not their position in these vectors.
use crate::taxonomy::FilterNode;

pub(crate) fn default_roots() -> Vec<FilterNode> {
    vec![
        group(
            "Music",
            "music.note",
            "songs, tracks, singles, compositions, tunes",
            0,
            vec![
                leaf("Artists & Bands", "music.microphone", "artists, bands, musicians, performers, acts", "Music-Artists-Albums", "ItemCategory:Artist", 0),
                leaf("Songs", "music.quarternote.3", "songs, tracks, singles, hits, tunes", "Music-Tracks", "ItemCategory:Track", 1),
                leaf("Albums", "record.circle", "albums, records, LPs, collections, discs", "Music-Artists-Albums", "ItemCategory:Album", 2),
                unavailable("Instruments", "guitars.fill", "instruments, gear, equipment, devices, tools", "", "", 3),
                unavailable("Festivals", "hifispeaker.2.fill", "festivals, concerts, events, carnivals, gatherings", "", "", 4),
                unavailable("Band Members", "person.3.fill", "members, musicians, artists, collaborators, contributors", "", "", 5),
                unavailable("Record Labels", "tag.fill", "labels, studios, companies, distributors, imprints", "", "", 6),
                unavailable("Genres", "music.quarternote.3", "genres, styles, categories, types, classifications", "", "", 7),
            ],
        ),
        group(
            "Sports",
            "figure.archery",
            "sports, games, athletics, competition, contests",
            1,
            vec![
                leaf("Sports", "soccerball", "sports, games, athletics, competition, events", "Sport", "", 0),
                group(
                    "Athletes",
                    "figure.run",
                    "athletes, players, competitors, sportspeople, stars",
                    1,
                    vec![
                        leaf("All Athletes", "figure.run", "all athletes, full roster, everyone, complete list, competitors", "Sports-Athletes", "", 0),
                        leaf("Footballers", "figure.indoor.soccer", "football, soccer, footy, association football, fútbol", "Sports-Athletes", "ItemCategory:Soccer", 1),
                        unavailable("Basketballers", "figure.basketball", "basketball, hoops, NBA, court ball, b-ball", "Sports-Athletes", "", 2),
                        unavailable("Tennis Players", "figure.tennis", "tennis, racquet sport, Wimbledon, Grand Slam, deuce", "Sports-Athletes", "", 3),
                        unavailable("American Footballers", "figure.american.football", "American football, gridiron, NFL, pigskin, football", "Sports-Athletes", "", 4),
                        leaf("Australian Footballers", "figure.australian.football", "Australian rules football, AFL, footy, Aussie rules, league", "Sports-Athletes", "ItemCategory:'Australian Rules Football'", 5),
                        leaf("Motorsport Drivers", "steeringwheel", "motorsport, racing, F1, auto racing, motorsports", "Sports-Athletes", "ItemCategory:Formula1", 6),
                    ],
                ),
                group(
                    "Leagues & Tournaments",
                    "trophy.fill",
                    "leagues, tournaments, competitions, championships, cups",
                    2,
                    vec![
                        leaf("All Leagues & Tournaments", "trophy.fill", "all leagues, all tournaments, seasons, championships, events", "Sport", "ItemCategory:League", 0),
                        unavailable("Football", "soccerball", "football, soccer, footy, association football, fútbol", "", "", 1),
                        unavailable("Basketball", "basketball.fill", "basketball, hoops, NBA, court ball, b-ball", "", "", 2),
                        unavailable("Tennis", "tennisball.fill", "tennis, racquet sport, Wimbledon, Grand Slam, deuce", "", "", 3),
                        unavailable("American Football", "american.football.fill", "American football, gridiron, NFL, pigskin, football", "", "", 4),
                        unavailable("Australian Football", "australian.football.fill", "Australian rules football, AFL, footy, Aussie rules, league", "", "", 5),
                        unavailable("Motorsport", "steeringwheel", "motorsport, racing, F1, NASCAR, auto racing", "", "", 6),
                    ],
                ),
                group(
                    "Clubs & Teams",
                    "shield.lefthalf.filled",
                    "clubs, teams, organizations, franchises, squads",
                    3,
                    vec![
                        leaf("All Clubs & Teams", "shield.lefthalf.filled", "all clubs, all teams, organizations, franchises, squads", "Sport", "ItemCategory:Club", 0),
                        leaf("Football", "soccerball", "football, soccer, footy, association football, fútbol", "Sport", "ItemCategory:Club AND ItemCategories.Sport:Football", 1),
                        leaf("Basketball", "basketball.fill", "basketball, hoops, NBA, court ball, b-ball", "Sport", "ItemCategory:Club AND ItemCategories.Sport:Basketball", 2),
                        leaf("American Football", "american.football.fill", "American football, gridiron, NFL, pigskin, football", "Sport", "ItemCategory:Club AND ItemCategories.Sport:'American Football'", 3),
                        leaf("Australian Football", "australian.football.fill", "Australian rules football, AFL, footy, Aussie rules, league", "Sport", "ItemCategory:Club AND ItemCategories.Sport:'Australian Rules Football'", 4),
                        leaf("F1 Constructors", "steeringwheel", "F1 constructors, racing teams, Formula 1, motorsport, teams", "Sport", "ItemCategory:Club AND ItemCategories.Sport:'Formula 1'", 5),
                    ],
                ),
                unavailable("Stadiums & Venues", "sportscourt.fill", "stadiums, venues, arenas, fields, locations", "", "", 4),
                unavailable("Coaches & Managers", "megaphone.fill", "coaches, managers, trainers, mentors, instructors", "", "", 5),
                unavailable("Commentators", "headset", "commentators, announcers, broadcasters, analysts, hosts", "", "", 6),
                unavailable("Rivalries", "oar.2.crossed", "rivalries, feuds, matchups, competitions, duels", "", "", 7),
                unavailable("Mascots", "figure.dance", "mascots, symbols, emblems, characters, icons", "", "", 8),
                unavailable("Gym Machines", "figure.indoor.cycle", "machines, equipment, apparatus, gear, devices", "", "", 9),
                unavailable("Gym Exercises", "figure.hand.cycling", "exercises, workouts, routines, movements, drills", "", "", 10),
            ],
        ),
        group(
            "Food & Drink",
            "fork.knife",
            "cuisine, beverages, meals, snacks, dining",
            2,
            vec![
                group(
                    "Food",
                    "fork.knife",
                    "food, cuisine, fare, dishes, meals",
                    0,
                    vec![
                        leaf("Fruit", "applelogo", "fruit, produce, berries, citrus, fruits", "Food", "ItemCategory:Fruit", 0),
                        leaf("Vegetables", "carrot.fill", "vegetables, veggies, greens, produce, plant foods", "Food", "ItemCategory:Vegetable", 1),
                        leaf("Pizza", "triangle.lefthalf.filled", "pizza, pies, slices, Italian food, pizzeria", "Food", "ItemCategory:Pizza", 2),
                        leaf("Fast Food Chains", "takeoutbag.and.cup.and.straw.fill", "fast food, chains, franchises, quick service, drive-thru", "Logos", "ItemCategory:'Fast Food Chain'", 3),
                        leaf("Eggs", "frying.pan.fill", "eggs, ova, breakfast, egg dishes, proteins", "Food", "ItemCategory:Egg", 4),
                        leaf("Chocolate", "square.grid.3x3.square", "chocolate, cocoa, candy, sweets, confections", "Food", "ItemCategory:Chocolate", 5),
                        leaf("Cheese", "drop.triangle.fill", "cheese, dairy, fromage, curd, cheese varieties", "Food", "ItemCategory:Cheese", 6),
                        leaf("Dairy", "waterbottle.fill", "dairy, milk products, cheese, butter, yogurt", "Food", "ItemCategory:Dairy", 7),
                        leaf("Pasta", "water.waves", "pasta, noodles, spaghetti, linguine, fettuccine", "Food", "ItemCategory:Pasta", 8),
                        leaf("Breakfast Cereals", "rectangle.portrait.righthalf.inset.filled", "cereal, breakfast cereals, grains, oats, granola", "Food", "ItemCategory:'Breakfast Cereal'", 9),
                        leaf("Ice Cream", "snowflake", "ice cream, gelato, sorbet, frozen dessert, treats", "Food", "ItemCategory:'Ice Cream Flavour'", 10),
                        unavailable("Sandwiches", "square.3.layers.3d.top.filled", "sandwiches, subs, hoagies, toasties, rolls", "", "", 11),
                        unavailable("Desserts", "birthday.cake.fill", "desserts, sweets, pastries, cakes, treats", "", "", 12),
                        unavailable("Spices", "thermometer.sun.fill", "spices, seasonings, herbs, flavorings, condiments", "", "", 13),
                        unavailable("Cuisines", "globe", "cuisines, cooking styles, gastronomy, fare, regional food", "", "", 14),
                    ],
                ),
                group(
                    "Drinks",
                    "waterbottle.fill",
                    "drinks, beverages, refreshments, quenchers, libations",
                    1,
                    vec![
                        leaf("Soft Drinks", "bubbles.and.sparkles.fill", "soft drinks, sodas, pop, fizzy drinks, carbonated beverages", "Food", "", 0),
                        group(
                            "Alcohol",
                            "flame.fill",
                            "alcohol, spirits, booze, liquors, alcoholic beverages",
                            1,
                            vec![
                                leaf("All Alcohols", "beach.umbrella.fill", "spirits, liquors, alcohols, alcoholic drinks, beverages", "Food", "ItemCategory:Cocktail OR ItemCategory:Alcohol", 0),
                                leaf("Liquors & Liqueurs", "beach.umbrella.fill", "liquors, liqueurs, spirits, cordials, aperitifs", "Food", "ItemDescription:Liqueur OR ItemDescription:Liquor", 1),
                                leaf("Cocktails", "beach.umbrella.fill", "cocktails, mixed drinks, libations, concoctions, beverages", "Food", "ItemCategory:Cocktail", 2),
                                leaf("Premixes", "beach.umbrella.fill", "premixes, ready-made, pre-batched, mixed drinks, beverages", "Food", "ItemDescription:Premix", 3),
                            ],
                        ),
                        unavailable("Coffees", "cup.and.saucer.fill", "coffee, espresso, lattes, cappuccinos, brews", "", "", 2),
                    ],
                ),
            ],
        ),
        group(
            "Nature",
            "leaf.fill",
            "wildlife, environment, outdoors, ecology, earth",
            3,
            vec![
                group(
                    "Animals",
                    "pawprint.fill",
                    "animals, wildlife, creatures, fauna, beasts",
                    0,
                    vec![
                        leaf("Mammals", "hare.fill", "mammals, beasts, animals, vertebrates, warm-blooded", "Animals", "ItemCategory:Mammal", 0),
                        leaf("Birds", "bird.fill", "birds, avians, fowl, feathered, winged", "Animals", "ItemCategory:Bird", 1),
                        leaf("Dogs", "dog.fill", "dogs, canines, pups, hounds, pooches", "Animals", "ItemDescription:'Canis Lupus'", 2),
                        unavailable("Fish", "fish.fill", "fish, aquatic, marine life, sea creatures, species", "Animals", "ItemCategory:Fish", 3),
                        unavailable("Reptiles", "lizard.fill", "reptiles, scaly, cold-blooded, lizards, snakes", "Animals", "ItemCategory:Reptile", 4),
                        leaf("Cats", "cat.fill", "cats, felines, kitties, pussycats, whiskered", "Animals", "ItemDescription:'Felis Catus'", 5),
                        unavailable("Bugs", "ladybug.fill", "bugs, insects, arthropods, critters, pests", "Animals", "ItemCategory:Bug", 6),
                        leaf("Famous Animals", "star.fill", "famous animals, star creatures, celebrities, icons, notable beasts", "People", "ItemCategories.Subcategory:Animal", 7),
                    ],
                ),
                group(
                    "Plants",
                    "leaf.fill",
                    "plants, flora, greenery, vegetation, botany",
                    1,
                    vec![
                        unavailable("Flowers", "microbe.fill", "flowers, blooms, blossoms, petals, flora", "", "", 0),
                        unavailable("Trees", "tree.fill", "trees, timber, woods, forestry, saplings", "", "", 1),
                    ],
                ),
            ],
        ),
        group(
            "Entertainment",
            "star.fill",
            "fun, leisure, media, amusement, recreation",
            4,
            vec![
                leaf("Celebrities", "star.fill", "celebrities, stars, icons, public figures, VIPs", "People", "", 0),
                unavailable("Movies", "movieclapper", "movies, films, cinema, flicks, motion pictures", "", "", 1),
                unavailable("Social Media", "message.fill", "social media, networks, platforms, online communities, feeds", "", "", 2),
                unavailable("Books", "books.vertical.fill", "books, novels, literature, texts, publications", "", "", 3),
                unavailable("Authors", "book.fill", "authors, writers, novelists, scribes, wordsmiths", "", "", 4),
                unavailable("Quotes", "quote.opening", "quotes, sayings, aphorisms, proverbs, citations", "", "", 5),
                unavailable("Streaming Services", "play.rectangle.fill", "streaming, OTT, platforms, providers, video services", "", "", 6),
                unavailable("TV Shows", "tv.fill", "TV shows, series, programs, broadcasts, sitcoms", "", "", 7),
                unavailable("Gaming", "gamecontroller.fill", "gaming, video games, esports, gameplay, consoles", "", "", 8),
                unavailable("Board Games", "dice.fill", "board games, tabletop, strategy, dice games, classics", "", "", 9),
                unavailable("Card Games", "suit.club.fill", "card games, playing cards, poker, blackjack, bridge", "", "", 10),
                unavailable("Comedians", "music.microphone", "comedians, comics, humorists, stand-ups, jokesters", "", "", 11),
                unavailable("Memes", "camera.fill", "memes, internet humor, viral images, jokes, online memes", "", "", 12),
            ],
        ),
        group(
            "Humanities",
            "building.columns.fill",
            "culture, history, society, philosophy, arts",
            5,
            vec![
                group(
                    "Geography",
                    "globe.europe.africa.fill",
                    "geography, maps, regions, locations, places",
                    0,
                    vec![
                        leaf("Countries", "globe.europe.africa.fill", "countries, nations, states, republics, territories", "Geography", "ItemCategory:Country", 0),
                        leaf("Continents", "globe", "continents, landmasses, regions, hemispheres, areas", "Geography", "ItemCategory:Continent", 1),
                        unavailable("Landmarks", "building.columns.fill", "landmarks, monuments, sites, attractions, icons", "Geography", "ItemCategory:Landmark", 2),
                        leaf("Cities", "building.2.fill", "cities, metropolises, towns, municipalities, urban areas", "Geography", "ItemCategory:City", 3),
                    ],
                ),
                unavailable("Politicians", "megaphone.fill", "politicians, lawmakers, officials, legislators, statespeople", "", "", 1),
                unavailable("History", "building.columns.fill", "history, past, heritage, chronology, record", "", "", 2),
            ],
        ),
        group(
            "Science",
            "atom",
            "research, discovery, technology, experiments, knowledge",
            6,
            vec![
                leaf("Planets", "circles.hexagonpath.fill", "planets, worlds, celestial bodies, orbs, spheres", "Science", "ItemCategory:Planet OR ItemCategory:'Dwarf Planet'", 0),
                leaf("Elements", "bubbles.and.sparkles.fill", "elements, chemicals, atoms, compounds, substances", "Science", "ItemCategory:Element", 1),
            ],
        ),
        group(
            "People",
            "figure.arms.open",
            "individuals, persons, humans, figures, populace",
            6,
            vec![
                leaf("All People", "figure.stand.dress.line.vertical.figure", "people, persons, individuals, humans, populace", "People", "", 0),
                leaf("Celebrities", "star.fill", "celebrities, stars, icons, public figures, VIPs", "People", "", 1),
                leaf("Content Creators", "play.square.fill", "creators, influencers, producers, streamers, bloggers", "People", "ItemCategories.Subcategory:'Content Creator'", 2),
                leaf("Actors", "movieclapper.fill", "actors, performers, thespians, cast, artistes", "People", "ItemCategories.Subcategory:Media", 3),
                leaf("Musicians", "music.microphone", "musicians, artists, instrumentalists, singers, bands", "People", "ItemCategories.Subcategory:Music", 4),
                leaf("World Leaders", "person.bust.fill", "leaders, presidents, prime ministers, officials, heads of state", "People", "ItemCategories.Subcategory:'World Leader'", 5),
                leaf("Models", "camera.fill", "models, mannequins, supermodels, figures, replicas", "People", "ItemCategories.Subcategory:Model", 6),
                leaf("Comedians", "theatermasks.fill", "comedians, comics, humorists, jokesters, stand-ups", "People", "ItemCategories.Subcategory:Comedian", 7),
                leaf("Entrepreneurs", "banknote.fill", "entrepreneurs, founders, business owners, innovators, startups", "People", "ItemCategories.Subcategory:Entrepreneur", 8),
                leaf("Chefs", "frying.pan.fill", "chefs, cooks, culinarians, sous-chefs, gastronome", "People", "ItemCategories.Subcategory:Chef", 9),
                leaf("Activists", "megaphone.fill", "activists, advocates, campaigners, protesters, reformers", "People", "ItemCategories.Subcategory:Activist", 10),
            ],
        ),
        leaf("Brands", "shield.righthalf.filled", "labels, companies, trademarks, logos, manufacturers", "Logos", "", 7),
        leaf("Hobbies & Activities", "figure.fishing", "pastimes, interests, pursuits, leisure, crafts", "", "", 8),
        group(
            "Technology & Math",
            "laptopcomputer.and.iphone",
            "technology, mathematics, computing, engineering, science",
            9,
            vec![
                leaf("Programming Language", "apple.terminal.fill", "programming languages, code, syntax, compilers, languages", "Other", "ItemCategory: 'Programming Language'", 10),
                leaf("Letters", "a.circle.fill", "letters, alphabets, characters, glyphs, symbols", "Other", "ItemCategory:Letter", 10),
                leaf("Numbers", "8.circle.fill", "numbers, digits, numerals, figures, counts", "Other", "ItemCategory:Number", 10),
                leaf("Roman Numerals", "circle.fill.ar", "Roman numerals, Latin numerals, ancient numbers, numerics, glyphs", "Other", "ItemCategory:'Roman Numeral'", 10),
            ],
        ),
        leaf("Art & Design", "paintbrush.pointed.fill", "art, design, creativity, graphics, illustration", "", "", 10),
        leaf("Vehicles", "car.side.fill", "cars, transport, automobiles, vehicles, machines", "", "", 11),
        leaf("Culture", "theatermask.and.paintbrush.fill", "traditions, customs, lifestyle, heritage, society", "", "", 12),
        leaf("Occupation", "briefcase.fill", "jobs, careers, professions, vocations, work", "", "", 13),
        leaf("Random", "dice.fill", "miscellaneous, varied, assorted, odds & ends, hodgepodge", "", "", 14),
    ]
}

/// Interior node: not searchable on its own, you have to drill into it
fn group(name: &str, icon: &str, synonyms: &str, order: i32, children: Vec<FilterNode>) -> FilterNode {
    FilterNode {
        name: name.to_string(),
        icon: icon.to_string(),
        synonyms: synonyms.to_string(),
        search_index_ref: String::new(),
        search_filter_expr: String::new(),
        children,
        available: true,
        order,
    }
}

fn leaf(name: &str, icon: &str, synonyms: &str, index: &str, filter: &str, order: i32) -> FilterNode {
    FilterNode {
        name: name.to_string(),
        icon: icon.to_string(),
        synonyms: synonyms.to_string(),
        search_index_ref: index.to_string(),
        search_filter_expr: filter.to_string(),
        children: Vec::new(),
        available: true,
        order,
    }
}

// Shown greyed out until the search side has data for it
fn unavailable(name: &str, icon: &str, synonyms: &str, index: &str, filter: &str, order: i32) -> FilterNode {
    FilterNode {
        available: false,
        ..leaf(name, icon, synonyms, index, filter, order)
    }
}

use anyhow::Context;
use clap::Parser;
use ranko_core::{
    layouts::LayoutPicker, CategoryCatalog, CategoryChip, Config, FilterNode, FilterPicker, LayoutTemplate,
    Selection, StartScreen, Taxonomy,
};
use ranko_tui::{App, Outcome};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ranko")]
#[command(version, about = "Pick what your Ranko is about", long_about = None)]
struct Cli {
    /// Theme to use, overrides the config file
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the pickers (the default)
    Pick {
        /// Picker to open on: filters, categories or layouts
        #[arg(long)]
        screen: Option<StartScreen>,
    },
    /// Print the filter tree
    Tree {
        /// Only the subtree under this path, e.g. "Sports/Athletes"
        #[arg(long)]
        path: Option<String>,
    },
    /// Walk a path through the filter picker and confirm its leaf
    Confirm {
        /// Slash separated chip names, e.g. "Sports/Athletes/Footballers"
        path: String,
    },
    /// List category chips
    Categories {
        /// Same filter as the search box
        #[arg(long)]
        query: Option<String>,
    },
    /// List layout templates
    Layouts {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the effective config
    Config {
        /// Write the default config file (works even if the current one is broken)
        #[arg(long)]
        init: bool,
        /// Let --init replace an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// What `pick` prints when something was chosen
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Picked<'a> {
    Filter(&'a Selection),
    Category(&'a CategoryChip),
    Layout(&'a LayoutTemplate),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so only errors get through while it's up
    let default_filter = match cli.command {
        None | Some(Commands::Pick { .. }) => "ranko=error",
        _ => "ranko=info",
    };

    // Initialize logging - stderr, so stdout stays clean JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Only the commands that actually use the config file read it, so a
    // broken file can't take down `tree` or `config --init`
    match cli.command {
        None => pick(load_config(cli.theme, None)?),
        Some(Commands::Pick { screen }) => pick(load_config(cli.theme, screen)?),
        Some(Commands::Tree { path }) => {
            print!("{}", render_tree(path.as_deref())?);
            Ok(())
        }
        Some(Commands::Confirm { path }) => {
            println!("{}", confirm_json(&path)?);
            Ok(())
        }
        Some(Commands::Categories { query }) => {
            println!("{}", categories_json(query.as_deref().unwrap_or(""))?);
            Ok(())
        }
        Some(Commands::Layouts { category, search }) => layouts(category, search),
        Some(Commands::Config { init: true, force }) => {
            let path = Config::config_path()?;
            init_config(&path, force)?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
        Some(Commands::Config { init: false, .. }) => show_config(&load_config(cli.theme, None)?),
    }
}

/// Config file with CLI flags layered on top
fn load_config(theme: Option<String>, screen: Option<StartScreen>) -> anyhow::Result<Config> {
    let mut config = Config::load().context("Failed to load config (`ranko config --init --force` writes a fresh one)")?;
    if let Some(theme) = theme {
        config.ui.theme = theme;
    }
    if let Some(screen) = screen {
        config.picker.start_screen = screen;
    }
    Ok(config)
}

fn pick(config: Config) -> anyhow::Result<()> {
    let app = App::new(&config);

    // No item search to hand off to from a terminal; the JSON on stdout is it
    let mut hand_off = |selection: &Selection| -> ranko_core::Result<()> {
        tracing::info!("Handing '{}' to item search", selection.leaf);
        Ok(())
    };

    let outcome = ranko_tui::run_tui(app, &mut hand_off, config.ui.mouse_enabled)?;

    let picked = match &outcome {
        Some(Outcome::Filter(selection)) => Picked::Filter(selection),
        Some(Outcome::Category(chip)) => Picked::Category(chip),
        Some(Outcome::Layout(layout)) => Picked::Layout(layout),
        None => {
            tracing::info!("Picker dismissed");
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&picked)?);
    Ok(())
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// The whole tree, or the node at `path` with everything under it
fn render_tree(path: Option<&str>) -> ranko_core::Result<String> {
    let taxonomy = Taxonomy::builtin();
    let mut out = String::new();

    let resolved = match path {
        Some(path) => taxonomy.resolve_path(&split_path(path))?,
        None => Vec::new(),
    };

    match resolved.last() {
        Some(last) => write_subtree(taxonomy, last, 0, &mut out),
        None => {
            for node in taxonomy.roots() {
                write_subtree(taxonomy, node, 0, &mut out);
            }
        }
    }

    Ok(out)
}

fn write_subtree(taxonomy: &Taxonomy, node: &FilterNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&describe(node));
    out.push('\n');

    for child in taxonomy.children_of(node) {
        write_subtree(taxonomy, child, depth + 1, out);
    }
}

/// "Footballers [2] -> Sports-Athletes ItemCategory:Soccer"
fn describe(node: &FilterNode) -> String {
    let mut line = format!("{} [{}]", node.name, node.order);
    if !node.available {
        line.push_str(" (coming soon)");
    } else if node.is_leaf() {
        line.push_str(&format!(" -> {} {}", node.search_index_ref, node.search_filter_expr));
    }
    line
}

/// Tap through `path` like a user would, then hit confirm
fn confirm_path(path: &str) -> ranko_core::Result<Selection> {
    let taxonomy = Taxonomy::builtin();
    let nodes = taxonomy.resolve_path(&split_path(path))?;

    let mut picker = FilterPicker::new(taxonomy);
    for node in nodes {
        picker.select(node);
    }

    picker
        .confirm()
        .ok_or_else(|| ranko_core::Error::NotSelectable(path.to_string()))
}

fn confirm_json(path: &str) -> ranko_core::Result<String> {
    let selection = confirm_path(path)?;
    Ok(serde_json::to_string_pretty(&selection)?)
}

fn categories_json(query: &str) -> ranko_core::Result<String> {
    let groups = CategoryCatalog::builtin().search(query);
    if groups.is_empty() {
        tracing::info!("No categories match '{}'", query);
    }
    Ok(serde_json::to_string_pretty(&groups)?)
}

fn layouts(category: Option<String>, search: Option<String>) -> anyhow::Result<()> {
    let mut picker = LayoutPicker::default();
    if let Some(category) = category {
        picker.toggle_category(&category);
    }
    picker.search_text = search.unwrap_or_default();

    for layout in picker.filtered() {
        let status = if layout.disabled { "coming soon" } else { "ready" };
        println!(
            "{:<16} {:<10} {:<12} {}",
            layout.name, layout.category, status, layout.description
        );
    }
    Ok(())
}

/// Write the defaults to `path`. Never reads the old file, so a broken one
/// can be replaced, but won't clobber anything without `force`.
fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() {
        if !force {
            anyhow::bail!("{} already exists, pass --force to overwrite it", path.display());
        }
        tracing::warn!("Overwriting existing config at {}", path.display());
    }

    Config::default().save_to(path)?;
    Ok(())
}

fn show_config(config: &Config) -> anyhow::Result<()> {
    println!("# {}", Config::config_path()?.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_ignores_stray_slashes() {
        assert_eq!(split_path("Sports/Athletes/Footballers"), vec!["Sports", "Athletes", "Footballers"]);
        assert_eq!(split_path("/Food & Drink//Drinks/ "), vec!["Food & Drink", "Drinks"]);
        assert!(split_path("").is_empty());
    }

    #[test]
    fn test_describe_marks_leaves_and_unavailable() {
        let taxonomy = Taxonomy::builtin();
        let path = taxonomy
            .resolve_path(&["Sports", "Athletes", "Footballers"])
            .unwrap();
        assert!(describe(path[2]).ends_with("-> Sports-Athletes ItemCategory:Soccer"));
        assert_eq!(describe(path[0]), format!("Sports [{}]", path[0].order));

        let instruments = taxonomy.resolve_path(&["Music", "Instruments"]).unwrap();
        assert_eq!(describe(instruments[1]), "Instruments [3] (coming soon)");
    }

    #[test]
    fn test_picked_json_is_tagged() {
        let selection = Selection {
            category_path_names: vec!["Sports".into(), "Athletes".into()],
            search_index_ref: "Sports-Athletes".into(),
            search_filter_expr: "ItemCategory:Soccer".into(),
            leaf: "Footballers".into(),
        };
        let json = serde_json::to_value(Picked::Filter(&selection)).unwrap();
        assert_eq!(json["kind"], "filter");
        assert_eq!(json["search_filter_expr"], "ItemCategory:Soccer");
    }

    #[test]
    fn test_confirm_footballers_gives_search_triple() {
        let selection = confirm_path("Sports/Athletes/Footballers").unwrap();
        assert_eq!(selection.category_path_names, vec!["Sports", "Athletes"]);
        assert_eq!(selection.search_index_ref, "Sports-Athletes");
        assert_eq!(selection.search_filter_expr, "ItemCategory:Soccer");

        let json: serde_json::Value = serde_json::from_str(&confirm_json("Sports/Athletes/Footballers").unwrap()).unwrap();
        assert_eq!(json["search_index_ref"], "Sports-Athletes");
    }

    #[test]
    fn test_confirm_unavailable_leaf_is_not_selectable() {
        let err = confirm_path("Food & Drink/Food/Cuisines").unwrap_err();
        assert!(matches!(err, ranko_core::Error::NotSelectable(ref p) if p == "Food & Drink/Food/Cuisines"));
        assert!(err.to_string().contains("not a selectable leaf"));
    }

    #[test]
    fn test_confirm_branch_is_not_selectable() {
        let err = confirm_path("Sports/Athletes").unwrap_err();
        assert!(matches!(err, ranko_core::Error::NotSelectable(_)));
    }

    #[test]
    fn test_confirm_unknown_segment() {
        let err = confirm_path("Sports/Curling").unwrap_err();
        assert!(matches!(err, ranko_core::Error::UnknownNode { ref segment, .. } if segment == "Curling"));
    }

    #[test]
    fn test_tree_with_path_prints_subtree() {
        let out = render_tree(Some("Food & Drink/Drinks")).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Drinks ["));
        assert!(lines[1].starts_with("  Soft Drinks ["));
        assert!(lines[1..].iter().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn test_tree_without_path_lists_every_root() {
        let out = render_tree(None).unwrap();
        let top: Vec<&str> = out.lines().filter(|l| !l.starts_with(' ')).collect();
        assert_eq!(top.len(), Taxonomy::builtin().roots().len());
        assert!(matches!(
            render_tree(Some("Knitting")),
            Err(ranko_core::Error::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_categories_json_empty_for_no_match() {
        let json: serde_json::Value = serde_json::from_str(&categories_json("zzzzzz").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }

    #[test]
    fn test_init_writes_defaults_to_fresh_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranko").join("config.toml");
        init_config(&path, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut nord = Config::default();
        nord.ui.theme = "Nord".to_string();
        nord.save_to(&path).unwrap();

        assert!(init_config(&path, false).is_err());
        assert_eq!(Config::load_from(&path).unwrap().ui.theme, "Nord");

        init_config(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_force_repairs_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ui = [broken").unwrap();
        assert!(Config::load_from(&path).is_err());

        init_config(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_subtree_indents_children() {
        let taxonomy = Taxonomy::builtin();
        let drinks = taxonomy.resolve_path(&["Food & Drink", "Drinks"]).unwrap()[1];
        let mut out = String::new();
        write_subtree(taxonomy, drinks, 0, &mut out);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Drinks ["));
        assert!(lines[1].starts_with("  Soft Drinks ["));
    }
}

//! Terminal front-end for the kanban board core.
//!
//! Renders the board as text and maps line commands onto store operations
//! and drag gestures. All input collected here is trimmed and bounded
//! before it reaches the store, the same contract a dialog form would
//! honor.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanban_board::config::Config;
use kanban_board::domain::{Board, CardId, CardUpdate, ColumnId};
use kanban_board::drag::{DragItem, DragResolver, DropTarget};
use kanban_board::persistence::{load_or_seed, FileBlobStore, PersistToBlob};
use kanban_board::store::BoardStore;

const MAX_TITLE_LEN: usize = 40;
const MAX_DESCRIPTION_LEN: usize = 100;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,kanban_board=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Kanban Board v{}...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env, using defaults: {}", e);
        Config::default()
    });

    let blobs = FileBlobStore::new(&config.data_dir);
    let mut store = BoardStore::new(load_or_seed(&blobs));
    store.subscribe(Box::new(PersistToBlob::new(blobs)));
    let mut resolver = DragResolver::new();

    render(&store.board());
    print_prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !dispatch(line.trim(), &mut store, &mut resolver) {
            break;
        }
        print_prompt()?;
    }

    tracing::info!("Kanban Board exiting");
    Ok(())
}

fn dispatch(line: &str, store: &mut BoardStore, resolver: &mut DragResolver) -> bool {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "" => {}
        "board" => render(&store.board()),
        "help" => print_help(),
        "quit" | "exit" => return false,
        "reset" => {
            store.reset();
            render(&store.board());
        }
        "add-column" => {
            let title = clip(rest, MAX_TITLE_LEN);
            if title.is_empty() {
                println!("usage: add-column <title>");
            } else {
                store.add_column(title);
                render(&store.board());
            }
        }
        "rename-column" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let (Some(index), Some(title)) = (args.next(), args.next()) else {
                println!("usage: rename-column <column#> <title>");
                return true;
            };
            let title = clip(title, MAX_TITLE_LEN);
            match column_at(&store.board(), index) {
                Some(column_id) if !title.is_empty() => {
                    store.rename_column(column_id, title);
                    render(&store.board());
                }
                Some(_) => println!("title must not be empty"),
                None => println!("no such column"),
            }
        }
        "delete-column" => match column_at(&store.board(), rest) {
            Some(column_id) => {
                store.delete_column(column_id);
                render(&store.board());
            }
            None => println!("no such column"),
        },
        "add-card" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let (Some(index), Some(text)) = (args.next(), args.next()) else {
                println!("usage: add-card <column#> <title> [| description]");
                return true;
            };
            let (title, description) = split_title_description(text);
            match column_at(&store.board(), index) {
                Some(column_id) if !title.is_empty() => {
                    if store.add_card(column_id, title, description).is_some() {
                        render(&store.board());
                    }
                }
                Some(_) => println!("title must not be empty"),
                None => println!("no such column"),
            }
        }
        "edit-card" => {
            let mut args = rest.splitn(3, char::is_whitespace);
            let (Some(col), Some(card), Some(text)) = (args.next(), args.next(), args.next())
            else {
                println!("usage: edit-card <column#> <card#> <title> [| description]");
                return true;
            };
            let (title, description) = split_title_description(text);
            match card_at(&store.board(), col, card) {
                Some((_, card_id)) => {
                    let updates = CardUpdate {
                        title: (!title.is_empty()).then_some(title),
                        description: Some(description),
                    };
                    store.update_card(card_id, updates);
                    render(&store.board());
                }
                None => println!("no such card"),
            }
        }
        "delete-card" => {
            let mut args = rest.split_whitespace();
            let (Some(col), Some(card)) = (args.next(), args.next()) else {
                println!("usage: delete-card <column#> <card#>");
                return true;
            };
            match card_at(&store.board(), col, card) {
                Some((column_id, card_id)) => {
                    store.delete_card(column_id, card_id);
                    render(&store.board());
                }
                None => println!("no such card"),
            }
        }
        "grab" => {
            let board = store.board();
            let item = parse_item(&board, rest);
            match item {
                Some(item) => {
                    resolver.drag_start(item);
                    println!("dragging (use `over`, `drop`, or `cancel`)");
                }
                None => println!("usage: grab column <column#> | grab card <column#> <card#>"),
            }
        }
        "over" => {
            let board = store.board();
            match parse_target(&board, rest) {
                Some(target) => {
                    resolver.drag_over(store, target);
                    render(&store.board());
                }
                None => println!("usage: over column <column#> | over card <column#> <card#>"),
            }
        }
        "drop" => {
            let board = store.board();
            // A drop with no recognizable target discards the gesture.
            let target = parse_target(&board, rest);
            resolver.drag_end(store, target);
            render(&store.board());
        }
        "cancel" => {
            resolver.cancel();
            println!("gesture cancelled");
        }
        _ => println!("unknown command `{command}` (try `help`)"),
    }
    true
}

fn render(board: &Board) {
    println!();
    for (i, column) in board.columns.iter().enumerate() {
        let title = if column.title.trim().is_empty() {
            "Untitled"
        } else {
            column.title.as_str()
        };
        println!("{}. {} ({})", i + 1, title, column.card_ids.len());
        for (j, card_id) in column.card_ids.iter().enumerate() {
            if let Some(card) = board.card(*card_id) {
                match &card.description {
                    Some(description) => println!("   {}. {} - {}", j + 1, card.title, description),
                    None => println!("   {}. {}", j + 1, card.title),
                }
            }
        }
    }
    println!();
}

fn print_help() {
    println!("commands:");
    println!("  board");
    println!("  add-column <title>");
    println!("  rename-column <column#> <title>");
    println!("  delete-column <column#>");
    println!("  add-card <column#> <title> [| description]");
    println!("  edit-card <column#> <card#> <title> [| description]");
    println!("  delete-card <column#> <card#>");
    println!("  grab column <column#> | grab card <column#> <card#>");
    println!("  over column <column#> | over card <column#> <card#>");
    println!("  drop [column <column#> | card <column#> <card#>]");
    println!("  cancel | reset | help | quit");
}

fn print_prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Trims and bounds dialog input.
fn clip(input: &str, max: usize) -> String {
    input.trim().chars().take(max).collect()
}

fn split_title_description(text: &str) -> (String, Option<String>) {
    match text.split_once('|') {
        Some((title, description)) => {
            let description = clip(description, MAX_DESCRIPTION_LEN);
            (
                clip(title, MAX_TITLE_LEN),
                (!description.is_empty()).then_some(description),
            )
        }
        None => (clip(text, MAX_TITLE_LEN), None),
    }
}

/// Resolves a 1-based column position to its id.
fn column_at(board: &Board, index: &str) -> Option<ColumnId> {
    let position: usize = index.parse().ok()?;
    board
        .columns
        .get(position.checked_sub(1)?)
        .map(|column| column.id)
}

/// Resolves 1-based column and card positions to their ids.
fn card_at(board: &Board, column_index: &str, card_index: &str) -> Option<(ColumnId, CardId)> {
    let column_position: usize = column_index.parse().ok()?;
    let column = board.columns.get(column_position.checked_sub(1)?)?;
    let card_position: usize = card_index.parse().ok()?;
    let card_id = *column.card_ids.get(card_position.checked_sub(1)?)?;
    Some((column.id, card_id))
}

fn parse_item(board: &Board, rest: &str) -> Option<DragItem> {
    let mut args = rest.split_whitespace();
    match args.next()? {
        "column" => {
            let column_id = column_at(board, args.next()?)?;
            Some(DragItem::Column { column_id })
        }
        "card" => {
            let (from_column_id, card_id) = card_at(board, args.next()?, args.next()?)?;
            Some(DragItem::Card {
                card_id,
                from_column_id,
            })
        }
        _ => None,
    }
}

fn parse_target(board: &Board, rest: &str) -> Option<DropTarget> {
    let mut args = rest.split_whitespace();
    match args.next()? {
        "column" => column_at(board, args.next()?).map(DropTarget::Column),
        "card" => {
            let (_, card_id) = card_at(board, args.next()?, args.next()?)?;
            Some(DropTarget::Card(card_id))
        }
        _ => None,
    }
}

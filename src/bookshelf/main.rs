use bookshelf::api::{CmdMessage, ConfigAction, MessageLevel, ShelfApi, StatusFilter};
use bookshelf::config::ShelfConfig;
use bookshelf::error::{Result, ShelfError};
use bookshelf::model::{Book, BookDraft, BookId};
use bookshelf::store::fs::FileStore;
use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShelfApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            complete,
        }) => handle_add(&mut ctx, title, author, year, complete),
        Some(Commands::List { unread, complete }) => handle_list(&ctx, unread, complete),
        Some(Commands::Search { keyword }) => handle_search(&ctx, keyword),
        Some(Commands::Edit {
            id,
            title,
            author,
            year,
            complete,
            unread,
        }) => handle_edit(&mut ctx, id, title, author, year, complete, unread),
        Some(Commands::Toggle { id }) => handle_toggle(&mut ctx, id),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("BOOKSHELF_DATA") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let proj_dirs = ProjectDirs::from("com", "bookshelf", "bookshelf")
                    .ok_or_else(|| ShelfError::Store("Could not determine data dir".to_string()))?;
                proj_dirs.data_dir().to_path_buf()
            }
        },
    };

    let config = ShelfConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone()).with_data_file(config.get_data_file());
    let api = ShelfApi::new(store, data_dir);

    Ok(AppContext { api })
}

fn parse_id(s: &str) -> Result<BookId> {
    BookId::from_str(s).map_err(ShelfError::Api)
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: String,
    complete: bool,
) -> Result<()> {
    let result = ctx
        .api
        .add_book(BookDraft::new(title, author, year, complete))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, unread: bool, complete: bool) -> Result<()> {
    let filter = if unread {
        StatusFilter::Unread
    } else if complete {
        StatusFilter::Complete
    } else {
        StatusFilter::All
    };
    let result = ctx.api.list_books(filter)?;
    print_shelf(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, keyword: String) -> Result<()> {
    let result = ctx.api.search_books(&keyword)?;
    print_shelf(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    title: Option<String>,
    author: Option<String>,
    year: Option<String>,
    complete: bool,
    unread: bool,
) -> Result<()> {
    let id = parse_id(&id)?;

    let populated = ctx.api.begin_edit(id)?;
    let Some(current) = populated.affected_books.first() else {
        // Missing id: mutation requests on vanished books are no-ops.
        return Ok(());
    };

    let draft = BookDraft::new(
        title.unwrap_or_else(|| current.title.clone()),
        author.unwrap_or_else(|| current.author.clone()),
        year.unwrap_or_else(|| current.year.to_string()),
        if complete {
            true
        } else if unread {
            false
        } else {
            current.is_complete
        },
    );

    let result = ctx.api.submit(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.toggle_completion(parse_id(&id)?)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.delete_book(parse_id(&id)?)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.get_data_file());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

/// Renders the two categorized lists from an already-sorted collection. Zero
/// books — empty shelf or a search that matched nothing — prints the same
/// single empty-state line.
fn print_shelf(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    let unread: Vec<&Book> = books.iter().filter(|b| !b.is_complete).collect();
    let finished: Vec<&Book> = books.iter().filter(|b| b.is_complete).collect();

    if !unread.is_empty() {
        println!("{}", "Unread".bold());
        for book in &unread {
            print_book_line(book);
        }
    }

    if !finished.is_empty() {
        if !unread.is_empty() {
            println!();
        }
        println!("{}", "Finished".bold());
        for book in &finished {
            print_book_line(book);
        }
    }
}

fn print_book_line(book: &Book) {
    let id_str = format!("  {}  ", book.id);
    let text = format!("{} ({}, {})", book.title, book.author, book.year);

    let fixed_width = id_str.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let text_display = truncate_to_width(&text, available);
    let padding = available.saturating_sub(text_display.width());

    let time_ago = book
        .id
        .created_at()
        .map(format_time_ago)
        .unwrap_or_default();

    println!(
        "{}{}{}{}",
        id_str.yellow(),
        text_display,
        " ".repeat(padding),
        time_ago.dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

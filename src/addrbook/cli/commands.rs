//! # CLI Layer
//!
//! The CLI is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, reads config, starts logging, loads the book
//! - `handle_*()`: Per-command handlers that call the API and format output
//!
//! Handlers that change the book end with `save()`. A failed command never
//! writes, so the file on disk keeps its previous content.

use super::render::{
    print_birthday, print_config, print_messages, print_notes, print_records, print_upcoming,
    Message,
};
use super::setup::{Cli, Commands};
use addrbook::api::{BookApi, ConfigAction};
use addrbook::commands::config as config_cmd;
use addrbook::commands::notes::split_tags;
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::logging::init_logging;
use addrbook::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use log::info;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const HOME_ENV: &str = "ADDRBOOK_HOME";

struct AppContext {
    api: BookApi<FileStore>,
    config: BookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir()?;

    // Config is handled before the book is opened, so a broken book file
    // can still be pointed elsewhere.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&data_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, data_dir)?;

    match cli.command {
        Some(Commands::Add { name, no_notes }) => handle_add(&mut ctx, &name, no_notes),
        Some(Commands::Show { name }) => handle_show(&ctx, &name),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, &name),
        Some(Commands::AddPhone { name, phone }) => handle_add_phone(&mut ctx, &name, &phone),
        Some(Commands::EditPhone { name, old, new }) => {
            handle_edit_phone(&mut ctx, &name, &old, &new)
        }
        Some(Commands::RemovePhone { name, phone }) => {
            handle_remove_phone(&mut ctx, &name, &phone)
        }
        Some(Commands::AddBirthday { name, date }) => handle_add_birthday(&mut ctx, &name, &date),
        Some(Commands::AddEmail { name, email }) => handle_add_email(&mut ctx, &name, &email),
        Some(Commands::AddAddress { name, address }) => {
            // Join all address words with spaces
            handle_add_address(&mut ctx, &name, &address.join(" "))
        }
        Some(Commands::List {
            page,
            page_size,
            all,
        }) => handle_list(&ctx, page, page_size, all),
        Some(Commands::Find { term }) => handle_find(&ctx, &term),
        Some(Commands::Birthday { name }) => handle_birthday(&ctx, &name),
        Some(Commands::When { days }) => handle_when(&ctx, days),
        Some(Commands::AddNote { name, text, tags }) => {
            handle_add_note(&mut ctx, &name, &text, tags.as_deref())
        }
        Some(Commands::EditNote {
            name,
            old,
            new,
            tags,
        }) => handle_edit_note(&mut ctx, &name, &old, &new, tags.as_deref()),
        Some(Commands::RemoveNote { name, text }) => handle_remove_note(&mut ctx, &name, &text),
        Some(Commands::Notes { name }) => handle_notes(&ctx, name.as_deref()),
        Some(Commands::Tag { tag }) => handle_tag(&ctx, &tag),
        Some(Commands::ClearNotes { name }) => handle_clear_notes(&mut ctx, &name),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None, None, false),
    }
}

fn resolve_data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => ProjectDirs::from("com", "addrbook", "addrbook")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                BookError::Io(std::io::Error::other(
                    "could not determine a home directory; set ADDRBOOK_HOME",
                ))
            })?,
    };
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(std::env::current_dir()?.join(dir))
    }
}

fn init_context(cli: &Cli, data_dir: PathBuf) -> Result<AppContext> {
    let config = BookConfig::load(&data_dir)?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(err) = init_logging(level, &data_dir.join("logs")) {
        print_messages(&[Message::warning(format!("logging disabled: {err}"))]);
    }

    let mut api = BookApi::open(config.book_path(&data_dir));
    let loaded = api.load()?;
    info!("event=book_open module=cli status=ok records={loaded}");

    Ok(AppContext { api, config })
}

fn handle_add(ctx: &mut AppContext, name: &str, no_notes: bool) -> Result<()> {
    let created = if no_notes {
        ctx.api.add_plain_record(name)?
    } else {
        ctx.api.add_record(name)?
    };
    let message = Message::success(format!("Contact {} added.", created.name()));
    ctx.api.save()?;
    print_messages(&[message]);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let record = ctx.api.show_record(name)?;
    print_records(&[record]);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let removed = ctx.api.delete_record(name)?;
    ctx.api.save()?;
    print_messages(&[Message::success(format!(
        "Contact {} deleted.",
        removed.name()
    ))]);
    Ok(())
}

fn handle_add_phone(ctx: &mut AppContext, name: &str, phone: &str) -> Result<()> {
    ctx.api.add_phone(name, phone)?;
    ctx.api.save()?;
    print_messages(&[Message::success(format!("Phone {phone} added."))]);
    Ok(())
}

fn handle_edit_phone(ctx: &mut AppContext, name: &str, old: &str, new: &str) -> Result<()> {
    ctx.api.edit_phone(name, old, new)?;
    ctx.api.save()?;
    print_messages(&[Message::success(format!("Phone {old} changed to {new}."))]);
    Ok(())
}

fn handle_remove_phone(ctx: &mut AppContext, name: &str, phone: &str) -> Result<()> {
    let removed = ctx.api.remove_phone(name, phone)?;
    if removed == 0 {
        print_messages(&[Message::info(format!("Phone {phone} was not on record."))]);
        return Ok(());
    }
    ctx.api.save()?;
    print_messages(&[Message::success(format!("Phone {phone} removed."))]);
    Ok(())
}

fn handle_add_birthday(ctx: &mut AppContext, name: &str, date: &str) -> Result<()> {
    ctx.api.add_birthday(name, date)?;
    ctx.api.save()?;
    print_messages(&[Message::success(format!("Birthday set to {date}."))]);
    Ok(())
}

fn handle_add_email(ctx: &mut AppContext, name: &str, email: &str) -> Result<()> {
    ctx.api.add_email(name, email)?;
    ctx.api.save()?;
    print_messages(&[Message::success("Email saved.")]);
    Ok(())
}

fn handle_add_address(ctx: &mut AppContext, name: &str, address: &str) -> Result<()> {
    ctx.api.add_address(name, address)?;
    ctx.api.save()?;
    print_messages(&[Message::success("Address saved.")]);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    page: Option<usize>,
    page_size: Option<usize>,
    all: bool,
) -> Result<()> {
    if all {
        print_records(&ctx.api.list_records());
        return Ok(());
    }

    let size = page_size.unwrap_or(ctx.config.page_size);
    let size = NonZeroUsize::new(size).ok_or_else(|| {
        BookError::InvalidFieldValue("page-size must be a positive number".to_string())
    })?;
    let page = page.unwrap_or(1);
    let total = ctx.api.page_count(size);

    match ctx.api.page(size, page) {
        Some(records) => {
            print_records(&records);
            if total > 1 {
                print_messages(&[Message::info(format!("Page {page} of {total}"))]);
            }
        }
        None if total == 0 => print_records(&[]),
        None => {
            return Err(BookError::InvalidFieldValue(format!(
                "page {page} is out of range (1..={total})"
            )))
        }
    }
    Ok(())
}

fn handle_find(ctx: &AppContext, term: &str) -> Result<()> {
    let found = ctx.api.find_by_term(term)?;
    print_records(&found);
    Ok(())
}

fn handle_birthday(ctx: &AppContext, name: &str) -> Result<()> {
    let record = ctx.api.show_record(name)?;
    let days = ctx.api.days_to_birthday(name)?;
    print_birthday(record.name(), days);
    Ok(())
}

fn handle_when(ctx: &AppContext, days: Option<i64>) -> Result<()> {
    let days = days.unwrap_or(ctx.config.upcoming_days);
    if days < 0 {
        return Err(BookError::InvalidFieldValue(format!(
            "day count must not be negative, got {days}"
        )));
    }
    print_upcoming(&ctx.api.birthdays_within(days), days);
    Ok(())
}

fn handle_add_note(ctx: &mut AppContext, name: &str, text: &str, tags: Option<&str>) -> Result<()> {
    let tags = tags.map(split_tags).unwrap_or_default();
    ctx.api.add_note(name, text, &tags)?;
    ctx.api.save()?;
    print_messages(&[Message::success("Note added.")]);
    Ok(())
}

fn handle_edit_note(
    ctx: &mut AppContext,
    name: &str,
    old: &str,
    new: &str,
    tags: Option<&str>,
) -> Result<()> {
    let tags = tags.map(split_tags);
    let changed = ctx.api.edit_note(name, old, new, tags.as_deref())?;
    if !changed {
        print_messages(&[Message::warning(format!("No note with text \"{old}\"."))]);
        return Ok(());
    }
    ctx.api.save()?;
    print_messages(&[Message::success("Note updated.")]);
    Ok(())
}

fn handle_remove_note(ctx: &mut AppContext, name: &str, text: &str) -> Result<()> {
    let removed = ctx.api.remove_note(name, text)?;
    if removed == 0 {
        print_messages(&[Message::warning(format!("No note with text \"{text}\"."))]);
        return Ok(());
    }
    ctx.api.save()?;
    print_messages(&[Message::success(format!("Removed {removed} note(s)."))]);
    Ok(())
}

fn handle_notes(ctx: &AppContext, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let record = ctx.api.show_record(name)?;
            let notes = ctx.api.find_notes(name)?;
            let rows: Vec<_> = notes.into_iter().map(|n| (record.name(), n)).collect();
            print_notes(&rows);
        }
        None => print_notes(&ctx.api.list_notes()),
    }
    Ok(())
}

fn handle_tag(ctx: &AppContext, tag: &str) -> Result<()> {
    print_notes(&ctx.api.notes_by_tag(tag)?);
    Ok(())
}

fn handle_clear_notes(ctx: &mut AppContext, name: &str) -> Result<()> {
    let removed = ctx.api.delete_all_notes(name)?;
    if removed > 0 {
        ctx.api.save()?;
    }
    print_messages(&[Message::success(format!("Removed {removed} note(s)."))]);
    Ok(())
}

fn handle_config(data_dir: &std::path::Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let is_set = matches!(action, ConfigAction::Set(..));
    let pairs = config_cmd::run(data_dir, action)?;
    if is_set {
        let lines: Vec<_> = pairs
            .iter()
            .map(|(k, v)| Message::success(format!("{k} set to {v}")))
            .collect();
        print_messages(&lines);
    } else {
        print_config(&pairs);
    }
    Ok(())
}

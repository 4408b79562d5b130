//! Terminal output for the CLI.
//!
//! Tables are padded by display width (`unicode-width`), so names in
//! non-Latin scripts line up. Colors come from `colored`, which honors
//! `NO_COLOR` and skips escapes when stdout is not a terminal.

use addrbook::model::{Note, Record};
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COL_MAX: usize = 32;
const COL_GAP: &str = "  ";
const EMPTY_CELL: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

pub(super) fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_records(records: &[&Record]) {
    if records.is_empty() {
        println!("No contacts found.");
        return;
    }

    let header = ["Name", "Phones", "Address", "Email", "Birthday"];
    let rows: Vec<[String; 5]> = records.iter().map(|r| record_row(r)).collect();
    print_table(&header, &rows);
}

pub(super) fn print_notes(notes: &[(&str, &Note)]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    let header = ["Contact", "Note", "Tags", "Added"];
    let rows: Vec<[String; 4]> = notes
        .iter()
        .map(|(owner, note)| {
            [
                owner.to_string(),
                note.text().to_string(),
                join_or_empty(note.tags().iter().map(String::as_str)),
                format_time_ago(note.created_at()),
            ]
        })
        .collect();
    print_table(&header, &rows);
}

pub(super) fn print_birthday(name: &str, days: i64) {
    println!("{}", birthday_line(name, days));
}

pub(super) fn print_upcoming(upcoming: &[(&Record, i64)], window: i64) {
    if upcoming.is_empty() {
        println!("No birthdays in the next {window} day(s).");
        return;
    }
    for (record, days) in upcoming {
        println!("{}", birthday_line(record.name(), *days));
    }
}

pub(super) fn print_config(pairs: &[(String, String)]) {
    let width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    for (key, value) in pairs {
        println!("{}{}{}", pad(key, width).bold(), COL_GAP, value);
    }
}

fn birthday_line(name: &str, days: i64) -> String {
    match days {
        d if d < 0 => format!("{name} has no birthday recorded."),
        0 => format!("{} {name} has a birthday today!", "🎂".yellow()),
        1 => format!("{name}'s birthday is tomorrow."),
        d => format!("{name}'s birthday is in {d} days."),
    }
}

fn record_row(record: &Record) -> [String; 5] {
    [
        record.name().to_string(),
        join_or_empty(record.phones().iter().map(|p| p.get())),
        record.address().unwrap_or(EMPTY_CELL).to_string(),
        record.email().unwrap_or(EMPTY_CELL).to_string(),
        record.birthday().unwrap_or(EMPTY_CELL).to_string(),
    ]
}

fn join_or_empty<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        joined
    }
}

fn print_table<const N: usize>(header: &[&str; N], rows: &[[String; N]]) {
    let cells: Vec<[String; N]> = rows
        .iter()
        .map(|row| row.clone().map(|cell| truncate_to_width(&cell, COL_MAX)))
        .collect();

    let mut widths: [usize; N] = std::array::from_fn(|i| header[i].width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let head: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).bold().to_string())
        .collect();
    println!("{}", head.join(COL_GAP).trim_end());

    for row in &cells {
        let line: Vec<String> = row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
        println!("{}", line.join(COL_GAP).trim_end());
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("Anna", 10), "Anna");
    }

    #[test]
    fn truncate_respects_display_width() {
        let cut = truncate_to_width("Привіт світе, як справи", 8);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 8);

        let wide = truncate_to_width("日本語のテキスト", 5);
        assert!(wide.width() <= 5);
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcd", 2), "abcd");
    }

    #[test]
    fn birthday_lines() {
        assert!(birthday_line("Anna", 0).contains("today"));
        assert!(birthday_line("Anna", 1).contains("tomorrow"));
        assert!(birthday_line("Anna", 12).contains("in 12 days"));
        assert!(birthday_line("Anna", -1).contains("no birthday"));
    }

    #[test]
    fn record_row_marks_missing_values() {
        let mut record = Record::new("Anna");
        record.add_phone("0501234567").unwrap();
        let row = record_row(&record);
        assert_eq!(row[0], "Anna");
        assert_eq!(row[1], "0501234567");
        assert_eq!(row[2], EMPTY_CELL);
        assert_eq!(row[4], EMPTY_CELL);
    }
}

//! Field formatters.
//!
//! Every function here is pure: styling goes through the [`Painter`] passed in,
//! and dates are rendered in an explicit [`Zone`]. Closed status mappings fall
//! back to the raw value, unstyled, for anything they do not know.

use crate::styles::{BLUE, CYAN, GRAY, GREEN, ID, MAGENTA, RED, YELLOW};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use std::fmt::Display;
use tabula::{Painter, NONE};

/// Time zone used when rendering timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }
}

const DATE_FORMAT: &str = "%m/%d/%Y, %-I:%M %p";

fn styled(p: &Painter, value: &str, style: Option<&str>) -> String {
    match style {
        Some(style) => p.paint(style, value),
        None => value.to_string(),
    }
}

pub fn account_status(p: &Painter, status: &str) -> String {
    let style = match status {
        "active" => Some(GREEN),
        "warning" => Some(YELLOW),
        "locked" => Some(RED),
        _ => None,
    };
    styled(p, status, style)
}

pub fn action_status(p: &Painter, status: &str) -> String {
    let style = match status {
        "completed" => Some(GREEN),
        "in-progress" => Some(YELLOW),
        "errored" => Some(RED),
        _ => None,
    };
    styled(p, status, style)
}

pub fn droplet_status(p: &Painter, status: &str) -> String {
    let style = match status {
        "new" | "off" => Some(RED),
        "active" => Some(GREEN),
        "archived" => Some(BLUE),
        _ => None,
    };
    styled(p, status, style)
}

pub fn domain_type(p: &Painter, record_type: &str) -> String {
    let style = match record_type {
        "A" => Some(YELLOW),
        "AAAA" => Some(BLUE),
        "CNAME" => Some(GREEN),
        "MX" => Some(CYAN),
        "TXT" => Some(MAGENTA),
        "SRV" => Some(RED),
        "NS" => Some(GRAY),
        _ => None,
    };
    styled(p, record_type, style)
}

pub fn load_balancer_status(p: &Painter, status: &str) -> String {
    let style = match status {
        "new" => Some(BLUE),
        "active" => Some(GREEN),
        "errored" => Some(RED),
        _ => None,
    };
    styled(p, status, style)
}

fn is_none_token(value: &str) -> bool {
    matches!(value, "" | "null" | "undefined" | "none")
}

/// Bold cyan identifier, or the plain `none` token for empty-ish values.
pub fn format_id(p: &Painter, id: impl Display) -> String {
    let id = id.to_string();
    if is_none_token(&id) {
        NONE.to_string()
    } else {
        p.paint(ID, &id)
    }
}

pub fn format_opt_id<T: Display>(p: &Painter, id: Option<T>) -> String {
    match id {
        Some(id) => format_id(p, id),
        None => NONE.to_string(),
    }
}

pub fn format_id_list<I>(p: &Painter, ids: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format_id(p, default_join(ids))
}

pub fn format_ip(p: &Painter, ip: impl Display) -> String {
    let ip = ip.to_string();
    if is_none_token(&ip) {
        NONE.to_string()
    } else {
        p.paint(YELLOW, &ip)
    }
}

pub fn format_ip_list<I>(p: &Painter, ips: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format_ip(p, default_join(ips))
}

pub fn format_name(p: &Painter, name: &str) -> String {
    p.paint(BLUE, name)
}

/// `MM/DD/YYYY, H:MM AM` in the given zone; `n/a` when absent.
pub fn format_date(date: Option<&str>, zone: Zone) -> String {
    let Some(date) = date.filter(|d| !d.trim().is_empty()) else {
        return "n/a".to_string();
    };
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => match zone {
            Zone::Local => parsed.with_timezone(&Local).format(DATE_FORMAT).to_string(),
            Zone::Fixed(offset) => parsed.with_timezone(&offset).format(DATE_FORMAT).to_string(),
        },
        Err(err) => {
            log::debug!("leaving unparseable date {:?} as is: {}", date, err);
            date.to_string()
        }
    }
}

pub fn format_status(p: &Painter, status: bool) -> String {
    if status {
        p.paint(GREEN, "yes")
    } else {
        p.paint(RED, "no")
    }
}

/// Newline join, trimmed; `none` when nothing is left.
pub fn default_join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        NONE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Greedy wrap on single spaces. A word moves to a new line once the running
/// length plus the word reaches `max_line_length`. Each word keeps one trailing
/// space.
pub fn format_text_wrap(text: &str, max_line_length: usize) -> String {
    let mut output = String::with_capacity(text.len() + 8);
    let mut line_length = 0;
    for word in text.split(' ') {
        let word_length = word.chars().count();
        if line_length + word_length >= max_line_length {
            output.push('\n');
            line_length = word_length + 1;
        } else {
            line_length += word_length + 1;
        }
        output.push_str(word);
        output.push(' ');
    }
    output
}

/// Cuts `name` to `cutoff - 3` characters, adding `...` when something was
/// dropped. Public images are green, private ones blue.
pub fn format_image_name(p: &Painter, name: &str, public: bool, cutoff: usize) -> String {
    let keep = cutoff.saturating_sub(3);
    let cut: String = name.chars().take(keep).collect();
    let ellipsis = if cut.chars().count() != name.chars().count() {
        "..."
    } else {
        ""
    };
    let style = if public { GREEN } else { BLUE };
    format!("{}{}", p.paint(style, &cut), ellipsis)
}

pub fn format_size(gigabytes: impl Display) -> String {
    format!("{} GB", gigabytes)
}

pub fn format_memory(megabytes: impl Display) -> String {
    format!("{} MB", megabytes)
}

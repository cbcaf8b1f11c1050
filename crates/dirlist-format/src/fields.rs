//! Per-field formatting helpers.

use std::borrow::Cow;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use dirlist_core::Metadata;
use humansize::{BINARY, FormatSizeOptions, format_size as human_size};
use regex::Regex;
use unicode_width::UnicodeWidthStr;

// Timestamps older than this show the year instead of the time of day
const RECENT_WINDOW: Duration = Duration::from_secs(182 * 24 * 60 * 60);

static SGR_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid SGR pattern"));

/// Type column character: `d` for directories, `-` for everything else.
pub fn type_char(metadata: &Metadata) -> char {
    if metadata.is_dir() { 'd' } else { '-' }
}

/// Nine-character `rwxrwxrwx` string for the permission bits of `mode`.
pub fn format_permissions(mode: u32) -> String {
    let mut chars = ['-'; 9];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = i * 3;
        if (mode >> (shift + 2)) & 1 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Byte count as a plain number, or in binary units when `human_readable`.
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if human_readable {
        human_size(bytes, FormatSizeOptions::from(BINARY).space_after_value(false))
    } else {
        bytes.to_string()
    }
}

/// Modification time in `ls` style, relative to the current time.
pub fn format_timestamp(time: SystemTime) -> String {
    format_timestamp_at(time, SystemTime::now())
}

/// Modification time in `ls` style: `Jan  5 14:03` when recent, `Jan  5  2020`
/// when older than about six months or in the future.
pub fn format_timestamp_at(time: SystemTime, now: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(time);
    let recent = match now.duration_since(time) {
        Ok(age) => age < RECENT_WINDOW,
        Err(_) => false,
    };

    if recent {
        dt.format("%b %e %H:%M").to_string()
    } else {
        dt.format("%b %e  %Y").to_string()
    }
}

/// Remove ANSI SGR sequences.
pub fn strip_styling(text: &str) -> Cow<'_, str> {
    SGR_SEQUENCE.replace_all(text, "")
}

/// Terminal columns taken by `text` once styling is removed.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_styling(text).as_ref())
}

/// Right-align `text` in `width` columns.
pub fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(pad))
}

/// Left-align `text` in `width` columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

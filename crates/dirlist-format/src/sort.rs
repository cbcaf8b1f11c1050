//! Entry ordering and the hidden-file policy.

use std::cmp::Ordering;
use std::path::Path;

use dirlist_core::{ListOptions, RawEntry};

/// Order entries in place according to the active sort mode.
///
/// Size and time sort descending; the default sorts ascending by
/// [`name_key`]. All sorts are stable, so ties keep enumeration order. With
/// `no_sort` the enumeration order is kept as is. `reverse` is applied last,
/// to whichever order resulted.
pub fn sort_entries(entries: &mut [RawEntry], options: &ListOptions) {
    if !options.no_sort {
        if options.sort_by_size {
            entries.sort_by(|a, b| compare_size(b, a, options));
        } else if options.sort_by_time {
            entries.sort_by(|a, b| b.metadata.modified.cmp(&a.metadata.modified));
        } else {
            entries.sort_by_key(|e| name_key(base_name(&e.name)));
        }
    }

    if options.reverse {
        entries.reverse();
    }
}

/// Comparison key for the default name sort: lowercase, alphanumerics only.
pub fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether an entry is shown under the hidden-file policy.
///
/// With `directory` only the implied `.` survives. Otherwise undotted names
/// are always shown, `all` shows every dotted name, and `almost_all` shows
/// dotted names other than `.` and `..`.
pub fn is_included(entry: &RawEntry, options: &ListOptions) -> bool {
    let is_current = entry.name == ".";

    if options.directory {
        return is_current;
    }
    if !entry.is_dotted() || options.all {
        return true;
    }
    options.almost_all && !entry.is_implied()
}

fn compare_size(a: &RawEntry, b: &RawEntry, options: &ListOptions) -> Ordering {
    sort_size(a, options).cmp(&sort_size(b, options))
}

fn sort_size(entry: &RawEntry, options: &ListOptions) -> u64 {
    match options.empty_dir_size {
        Some(size) if entry.metadata.is_dir() && entry.metadata.size == 0 => size,
        _ => entry.metadata.size,
    }
}

fn base_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}

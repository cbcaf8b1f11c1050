//! Rendering a single entry.

use std::path::Path;

use dirlist_core::{ListOptions, RawEntry, RenderedEntry};

use crate::fields::{format_permissions, format_size, format_timestamp, type_char};
use crate::style::Palette;

/// Renders raw entries for one listing.
pub struct Renderer<'a> {
    options: &'a ListOptions,
    palette: &'a Palette,
    target: &'a Path,
}

impl<'a> Renderer<'a> {
    /// Create a renderer for entries of `target`.
    pub fn new(options: &'a ListOptions, palette: &'a Palette, target: &'a Path) -> Self {
        Self {
            options,
            palette,
            target,
        }
    }

    /// Render an entry as a detail row or a single name, depending on the
    /// options.
    pub fn render(&self, entry: &RawEntry) -> RenderedEntry {
        let name = self.render_name(entry);
        if !self.options.detail_mode() {
            return RenderedEntry::Tiled(name);
        }

        let meta = &entry.metadata;
        let mut fields = Vec::with_capacity(8);
        if self.options.inode {
            fields.push(meta.inode.to_string());
        }
        fields.push(format!("{}{}", type_char(meta), format_permissions(meta.mode)));
        fields.push(meta.link_count.to_string());
        fields.push(meta.owner_id.to_string());
        fields.push(meta.group_id.to_string());
        fields.push(format_size(meta.size, self.options.human_readable));
        fields.push(format_timestamp(meta.modified));
        fields.push(name);

        RenderedEntry::Detail(fields)
    }

    /// The styled, decorated name of an entry.
    ///
    /// Steps run in a fixed order: classify indicator, `.` replaced by the
    /// target path under `directory`, extension color for regular files,
    /// type-based fallback color, quoting, and directory color last.
    pub fn render_name(&self, entry: &RawEntry) -> String {
        let meta = &entry.metadata;
        let mut name = entry.name.clone();

        if self.options.classify {
            if let Some(indicator) = classify_indicator(entry) {
                name.push(indicator);
            }
        }

        if self.options.directory && entry.name == "." {
            name = self.target.display().to_string();
        }

        let style = self
            .palette
            .file_type_style(&entry.name, meta)
            .or_else(|| self.palette.fallback_style(meta));
        if let Some(style) = style {
            // A painted string always ends in a reset, so nothing leaks into the next name
            name = style.paint(name).to_string();
        }

        if self.options.quote_name {
            name = format!("\"{name}\"");
        }

        if meta.is_dir() {
            name = self.palette.directory.paint(name).to_string();
        }

        name
    }
}

fn classify_indicator(entry: &RawEntry) -> Option<char> {
    let meta = &entry.metadata;
    if meta.is_dir() {
        Some('/')
    } else if meta.is_executable() {
        Some('*')
    } else if meta.is_symlink() {
        Some('@')
    } else if meta.is_socket() {
        Some('=')
    } else if meta.is_fifo() {
        Some('|')
    } else {
        None
    }
}

//! The per-directory pipeline.

use std::path::Path;

use dirlist_core::{DirectoryResult, ListOptions, RawEntry, RenderedEntry};

use crate::layout::format_listing;
use crate::render::Renderer;
use crate::sort::{is_included, sort_entries};
use crate::style::Palette;

/// Sort, filter, render and lay out the raw entries of `target`.
///
/// The total covers every raw entry passed in, including the ones the
/// hidden-file policy leaves out.
pub fn list_entries(
    target: &Path,
    mut entries: Vec<RawEntry>,
    options: &ListOptions,
    palette: &Palette,
) -> DirectoryResult {
    let total_size: u64 = entries.iter().map(|e| e.metadata.size).sum();

    sort_entries(&mut entries, options);

    let renderer = Renderer::new(options, palette, target);
    let rendered: Vec<RenderedEntry> = entries
        .iter()
        .filter(|e| is_included(e, options))
        .map(|e| renderer.render(e))
        .collect();

    tracing::debug!(
        path = %target.display(),
        considered = entries.len(),
        shown = rendered.len(),
        "formatted listing"
    );

    DirectoryResult::new(target, total_size, format_listing(&rendered, options))
}

//! Laying rendered entries out as text.

use dirlist_core::{ListOptions, RenderedEntry};

use crate::fields::{display_width, pad_left, pad_right};

// Blank columns between tiled names
const COLUMN_GAP: usize = 2;

/// Order in which tiled names fill the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileOrder {
    /// Down each column, then across.
    #[default]
    Columns,
    /// Across each row, then down.
    Lines,
}

/// Lay out a homogeneous list of rendered entries.
///
/// Detail rows are aligned per column: every field but the name is
/// right-aligned to the widest value in its column, and the name is left as
/// is. Names are otherwise joined one per line under `one_column`, or tiled
/// into the configured width.
pub fn format_listing(entries: &[RenderedEntry], options: &ListOptions) -> String {
    match entries.first() {
        Some(RenderedEntry::Detail(_)) => {
            let rows: Vec<&[String]> = entries
                .iter()
                .filter_map(|e| match e {
                    RenderedEntry::Detail(fields) => Some(fields.as_slice()),
                    RenderedEntry::Tiled(_) => None,
                })
                .collect();
            align_rows(&rows)
        }
        _ => {
            let names: Vec<String> = entries
                .iter()
                .map(|e| match e {
                    RenderedEntry::Tiled(name) => name.clone(),
                    RenderedEntry::Detail(fields) => fields.last().cloned().unwrap_or_default(),
                })
                .collect();

            if options.one_column {
                names.join("\n")
            } else {
                let order = if options.by_lines {
                    TileOrder::Lines
                } else {
                    TileOrder::Columns
                };
                tile_columns(&names, options.tile_width(), order)
            }
        }
    }
}

fn align_rows(rows: &[&[String]]) -> String {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (j, field) in row.iter().enumerate() {
            let len = display_width(field);
            match widths.get_mut(j) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    rows.iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            row.iter()
                .enumerate()
                .map(|(j, field)| {
                    if j == last {
                        field.clone()
                    } else {
                        pad_left(field, widths[j])
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pack names into a grid no wider than `width` columns.
///
/// Every cell is as wide as the longest name plus a two-column gap; the last
/// cell of each line is not padded. At least one name goes on each line.
pub fn tile_columns(items: &[String], width: usize, order: TileOrder) -> String {
    if items.is_empty() {
        return String::new();
    }

    let longest = items.iter().map(|s| display_width(s)).max().unwrap_or(0);
    let cell = longest + COLUMN_GAP;
    let max_columns = (width.saturating_add(COLUMN_GAP) / cell).clamp(1, items.len());

    let (rows, columns) = match order {
        TileOrder::Lines => (items.len().div_ceil(max_columns), max_columns),
        TileOrder::Columns => {
            let rows = items.len().div_ceil(max_columns);
            (rows, items.len().div_ceil(rows))
        }
    };

    let mut lines = Vec::with_capacity(rows);
    for r in 0..rows {
        let cells: Vec<&String> = (0..columns)
            .filter_map(|c| {
                let index = match order {
                    TileOrder::Lines => r * columns + c,
                    TileOrder::Columns => c * rows + r,
                };
                items.get(index)
            })
            .collect();

        let mut line = String::new();
        for (i, item) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                line.push_str(item);
            } else {
                line.push_str(&pad_right(item, cell));
            }
        }
        lines.push(line);
    }

    lines.join("\n")
}

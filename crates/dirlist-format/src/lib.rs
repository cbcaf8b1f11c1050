//! Sorting, filtering, rendering and layout of directory entries.
//!
//! Turns the raw entries of one directory (or the set of file operands)
//! into display text:
//!
//! 1. [`sort_entries`] orders entries by name, size or time, or keeps
//!    enumeration order.
//! 2. [`is_included`] applies the hidden-file policy.
//! 3. [`Renderer`] produces a styled name or a detail row per entry.
//! 4. [`format_listing`] aligns detail rows or tiles names into columns.
//!
//! [`list_entries`] runs the whole pipeline and produces a
//! [`DirectoryResult`](dirlist_core::DirectoryResult).

mod fields;
mod layout;
mod listing;
mod render;
mod sort;
mod style;

pub use fields::{
    display_width, format_permissions, format_size, format_timestamp, format_timestamp_at,
    pad_left, pad_right, strip_styling, type_char,
};
pub use layout::{TileOrder, format_listing, tile_columns};
pub use listing::list_entries;
pub use render::Renderer;
pub use sort::{is_included, name_key, sort_entries};
pub use style::Palette;

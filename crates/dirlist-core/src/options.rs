//! Listing options.

use derive_builder::Builder;

/// Terminal width assumed when none is configured.
///
/// Large enough that tiling effectively places every name on one row.
pub const DEFAULT_TILE_WIDTH: usize = 10_000;

/// Options for a single listing invocation.
///
/// Constructed once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ListOptions {
    /// Do not ignore entries starting with `.`.
    #[builder(default)]
    pub all: bool,

    /// Like `all`, but without the implied `.` and `..`.
    #[builder(default)]
    pub almost_all: bool,

    /// List directory entries themselves instead of their contents.
    #[builder(default)]
    pub directory: bool,

    /// Append a type indicator to names.
    #[builder(default)]
    pub classify: bool,

    /// Print sizes in human readable units.
    #[builder(default)]
    pub human_readable: bool,

    /// Prepend the inode number to detail rows.
    #[builder(default)]
    pub inode: bool,

    /// Use the long (detail) listing format.
    #[builder(default)]
    pub long: bool,

    /// Wrap names in double quotes.
    #[builder(default)]
    pub quote_name: bool,

    /// Reverse the final order.
    #[builder(default)]
    pub reverse: bool,

    /// List subdirectories recursively.
    #[builder(default)]
    pub recursive: bool,

    /// Sort by size, largest first.
    #[builder(default)]
    pub sort_by_size: bool,

    /// Sort by modification time, newest first.
    #[builder(default)]
    pub sort_by_time: bool,

    /// Keep directory enumeration order.
    #[builder(default)]
    pub no_sort: bool,

    /// Screen width used for tiling.
    #[builder(default)]
    pub width: Option<usize>,

    /// One entry per line.
    #[builder(default)]
    pub one_column: bool,

    /// Tile entries by lines instead of by columns.
    #[builder(default)]
    pub by_lines: bool,

    /// Size substituted for a directory reporting 0 bytes when sorting by size.
    ///
    /// Some platforms report 0 for directories where others report a block
    /// size; setting this keeps size ordering identical across them.
    #[builder(default = "default_empty_dir_size()")]
    pub empty_dir_size: Option<u64>,
}

#[cfg(windows)]
fn default_empty_dir_size() -> Option<u64> {
    Some(4096)
}

#[cfg(not(windows))]
fn default_empty_dir_size() -> Option<u64> {
    None
}

impl ListOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.width {
            return Err("Width must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl ListOptions {
    /// Create a new options builder.
    pub fn builder() -> ListOptionsBuilder {
        ListOptionsBuilder::default()
    }

    /// Whether entries render as multi-field detail rows.
    pub fn detail_mode(&self) -> bool {
        self.long && !self.by_lines
    }

    /// Whether recursive traversal descends into hidden directories.
    pub fn shows_hidden_dirs(&self) -> bool {
        self.all || self.almost_all
    }

    /// Width used when tiling names into columns.
    pub fn tile_width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_TILE_WIDTH)
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            all: false,
            almost_all: false,
            directory: false,
            classify: false,
            human_readable: false,
            inode: false,
            long: false,
            quote_name: false,
            reverse: false,
            recursive: false,
            sort_by_size: false,
            sort_by_time: false,
            no_sort: false,
            width: None,
            one_column: false,
            by_lines: false,
            empty_dir_size: default_empty_dir_size(),
        }
    }
}

//! dls - list directory contents.
//!
//! Usage:
//!   dls [OPTIONS] [PATH]...
//!
//! Exit status is 0 when everything was listed, 1 for minor problems such as
//! a missing operand, and 2 for serious trouble such as an unreadable
//! directory.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result};

use dirlist_core::ListOptions;
use dirlist_engine::{Lister, StdioSink};
use dirlist_format::Palette;
use dirlist_scan::LocalFs;

#[derive(Parser)]
#[command(
    name = "dls",
    version,
    about = "List information about the FILEs (the current directory by default)",
    long_about = "List information about the FILEs (the current directory by default).\n\
                  Entries are sorted alphabetically unless -S, -t or -U is given.",
    after_help = "Exit status:\n \
                  0  if OK,\n \
                  1  if minor problems (e.g., cannot access subdirectory),\n \
                  2  if serious trouble (e.g., cannot access command-line argument).",
    disable_help_flag = true
)]
struct Cli {
    /// Files and directories to list
    paths: Vec<PathBuf>,

    /// Do not ignore entries starting with .
    #[arg(short, long)]
    all: bool,

    /// Do not list implied . and ..
    #[arg(short = 'A', long)]
    almost_all: bool,

    /// List directory entries instead of contents
    #[arg(short, long)]
    directory: bool,

    /// Append indicator (one of */=@|) to entries
    #[arg(short = 'F', long)]
    classify: bool,

    /// With -l, print sizes in human readable format (e.g., 1K 234M 2G)
    #[arg(short, long)]
    human_readable: bool,

    /// Print the index number of each file
    #[arg(short, long)]
    inode: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// Enclose entry names in double quotes
    #[arg(short = 'Q', long)]
    quote_name: bool,

    /// Reverse order while sorting
    #[arg(short, long)]
    reverse: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Sort by file size
    #[arg(short = 'S')]
    sort_by_size: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    sort_by_time: bool,

    /// Do not sort; list entries in directory order
    #[arg(short = 'U')]
    no_sort: bool,

    /// Assume screen width instead of the default
    #[arg(short, long, value_name = "COLS")]
    width: Option<usize>,

    /// List entries by lines instead of by columns
    #[arg(short = 'x')]
    by_lines: bool,

    /// List one file per line
    #[arg(short = '1')]
    one_column: bool,

    /// Display this help and exit
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn options(&self) -> Result<ListOptions> {
        ListOptions::builder()
            .all(self.all)
            .almost_all(self.almost_all)
            .directory(self.directory)
            .classify(self.classify)
            .human_readable(self.human_readable)
            .inode(self.inode)
            .long(self.long)
            .quote_name(self.quote_name)
            .reverse(self.reverse)
            .recursive(self.recursive)
            .sort_by_size(self.sort_by_size)
            .sort_by_time(self.sort_by_time)
            .no_sort(self.no_sort)
            .width(self.width)
            .by_lines(self.by_lines)
            .one_column(self.one_column)
            .build()
            .wrap_err("Invalid options")
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let options = cli.options()?;

    let fs = LocalFs::new();
    let lister = Lister::new(&fs, options).with_palette(Palette::from_env());
    let status = lister
        .run(&cli.paths, &mut StdioSink::new())
        .wrap_err("Failed to write listing")?;

    std::process::exit(i32::from(status.code()));
}

//! Name coloring rules.
//!
//! A [`Palette`] holds one style per file type plus a table of extension
//! styles for regular files. The defaults follow the usual `dircolors`
//! scheme; `LS_COLORS` can override any of them.

use std::collections::HashMap;
use std::path::Path;

use ansi_term::{Colour, Style};
use dirlist_core::Metadata;

/// Styles used to color entry names.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Directories (always applied last, so it wins over everything).
    pub directory: Style,
    /// Executable regular files.
    pub executable: Style,
    /// Symbolic links.
    pub symlink: Style,
    /// Block and character devices.
    pub device: Style,
    /// Sockets.
    pub socket: Style,
    /// Named pipes.
    pub fifo: Style,
    /// Regular files by lowercase extension.
    pub extensions: HashMap<String, Style>,
}

struct FallbackRule {
    applies: fn(&Metadata) -> bool,
    style: Style,
}

const ARCHIVES: &[&str] = &[
    "7z", "bz2", "deb", "gz", "jar", "rar", "rpm", "tar", "tbz2", "tgz", "xz", "zip", "zst",
];
const IMAGES: &[&str] = &[
    "bmp", "gif", "ico", "jpeg", "jpg", "png", "svg", "tif", "tiff", "webp",
];
const MEDIA: &[&str] = &[
    "avi", "flac", "m4a", "mkv", "mov", "mp3", "mp4", "ogg", "wav", "webm",
];

impl Default for Palette {
    fn default() -> Self {
        let mut extensions = HashMap::new();
        for (group, style) in [
            (ARCHIVES, Colour::Red.bold()),
            (IMAGES, Colour::Purple.bold()),
            (MEDIA, Colour::Cyan.normal()),
        ] {
            for ext in group {
                extensions.insert((*ext).to_string(), style);
            }
        }

        Self {
            directory: Colour::Blue.bold(),
            executable: Colour::Green.bold(),
            symlink: Colour::Cyan.bold(),
            device: Colour::Yellow.bold(),
            socket: Colour::Fixed(208).bold(),
            fifo: Colour::Yellow.normal(),
            extensions,
        }
    }
}

impl Palette {
    /// Default palette with `LS_COLORS` overrides from the environment.
    pub fn from_env() -> Self {
        match std::env::var("LS_COLORS") {
            Ok(spec) => Self::default().with_ls_colors(&spec),
            Err(_) => Self::default(),
        }
    }

    /// Apply an `LS_COLORS`-style specification, e.g. `di=01;34:*.log=33`.
    ///
    /// Unknown keys and malformed values are skipped.
    pub fn with_ls_colors(mut self, spec: &str) -> Self {
        for item in spec.split(':').filter(|s| !s.is_empty()) {
            let Some((key, value)) = item.split_once('=') else {
                continue;
            };
            let Some(style) = parse_sgr(value) else {
                tracing::debug!(item, "ignoring malformed LS_COLORS entry");
                continue;
            };

            match key {
                "di" => self.directory = style,
                "ex" => self.executable = style,
                "ln" => self.symlink = style,
                "bd" | "cd" => self.device = style,
                "so" => self.socket = style,
                "pi" => self.fifo = style,
                _ => {
                    if let Some(ext) = key.strip_prefix("*.") {
                        self.extensions.insert(ext.to_lowercase(), style);
                    }
                }
            }
        }
        self
    }

    /// Style for a regular file based on its extension, if any rule matches.
    ///
    /// A rule that resolves to a plain style (e.g. `*.sh=0`) colors nothing
    /// and counts as no match.
    pub fn file_type_style(&self, name: &str, metadata: &Metadata) -> Option<Style> {
        if !metadata.is_file() {
            return None;
        }
        let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
        self.extensions
            .get(&ext)
            .copied()
            .filter(|style| !style.is_plain())
    }

    /// Style from the type-based rules, first match wins.
    pub fn fallback_style(&self, metadata: &Metadata) -> Option<Style> {
        self.fallback_rules()
            .into_iter()
            .find(|rule| (rule.applies)(metadata))
            .map(|rule| rule.style)
    }

    fn fallback_rules(&self) -> [FallbackRule; 5] {
        [
            FallbackRule {
                applies: Metadata::is_executable,
                style: self.executable,
            },
            FallbackRule {
                applies: Metadata::is_symlink,
                style: self.symlink,
            },
            FallbackRule {
                applies: Metadata::is_device,
                style: self.device,
            },
            FallbackRule {
                applies: Metadata::is_socket,
                style: self.socket,
            },
            FallbackRule {
                applies: Metadata::is_fifo,
                style: self.fifo,
            },
        ]
    }
}

/// Parse a `;`-separated SGR parameter list into a style.
fn parse_sgr(codes: &str) -> Option<Style> {
    let mut style = Style::new();
    let mut params = codes.split(';').map(|p| p.parse::<u8>());

    while let Some(param) = params.next() {
        let code = param.ok()?;
        style = match code {
            0 => Style::new(),
            1 => style.bold(),
            2 => style.dimmed(),
            3 => style.italic(),
            4 => style.underline(),
            5 => style.blink(),
            7 => style.reverse(),
            8 => style.hidden(),
            9 => style.strikethrough(),
            n @ 30..=37 => style.fg(basic_colour(n - 30)),
            n @ 40..=47 => style.on(basic_colour(n - 40)),
            n @ 90..=97 => style.fg(Colour::Fixed(n - 90 + 8)),
            n @ 100..=107 => style.on(Colour::Fixed(n - 100 + 8)),
            38 | 48 => {
                let extended = params.next()?.ok()?;
                let index = params.next()?.ok()?;
                if extended != 5 {
                    return None;
                }
                if code == 38 {
                    style.fg(Colour::Fixed(index))
                } else {
                    style.on(Colour::Fixed(index))
                }
            }
            _ => return None,
        };
    }

    Some(style)
}

fn basic_colour(index: u8) -> Colour {
    match index {
        0 => Colour::Black,
        1 => Colour::Red,
        2 => Colour::Green,
        3 => Colour::Yellow,
        4 => Colour::Blue,
        5 => Colour::Purple,
        6 => Colour::Cyan,
        _ => Colour::White,
    }
}

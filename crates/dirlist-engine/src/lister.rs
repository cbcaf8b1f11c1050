//! Top-level orchestration of one listing invocation.

use std::io;
use std::path::{Path, PathBuf};

use dirlist_core::{ListError, ListOptions, Severity};
use dirlist_format::{Palette, list_entries, strip_styling};
use dirlist_scan::{FileSystem, assemble_entries, classify_paths, directory_sequence};

use crate::aggregate::aggregate;
use crate::sink::OutputSink;

/// Runs listings against a file system with fixed options.
pub struct Lister<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    options: ListOptions,
    palette: Palette,
}

impl<'a, F: FileSystem + ?Sized> Lister<'a, F> {
    /// Create a lister using the default palette.
    pub fn new(fs: &'a F, options: ListOptions) -> Self {
        Self {
            fs,
            options,
            palette: Palette::default(),
        }
    }

    /// Use a different palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// List `paths` and write the result to `sink`.
    ///
    /// Failures for one path are reported to the sink and never stop the
    /// others. Returns the highest severity reported; only a failure to
    /// write to the sink is returned as an error.
    pub fn run(&self, paths: &[PathBuf], sink: &mut dyn OutputSink) -> io::Result<Severity> {
        let mut severity = Severity::Ok;

        let classified = classify_paths(self.fs, paths);
        for err in &classified.errors {
            severity = severity.max(report(sink, err)?);
        }

        let mut results = Vec::new();
        for dir in &classified.dirs {
            for next in directory_sequence(self.fs, dir, &self.options) {
                let assembled =
                    next.and_then(|path| assemble_entries(self.fs, &path).map(|a| (path, a)));
                match assembled {
                    Ok((path, assembled)) => {
                        for err in &assembled.errors {
                            severity = severity.max(report(sink, err)?);
                        }
                        results.push(list_entries(
                            &path,
                            assembled.entries,
                            &self.options,
                            &self.palette,
                        ));
                    }
                    Err(err) => severity = severity.max(report(sink, &err)?),
                }
            }
        }

        let file_count = classified.files.len();
        let files_text = if file_count > 0 {
            list_entries(Path::new("."), classified.files, &self.options, &self.palette).text
        } else {
            String::new()
        };

        let show_names = results.len() + file_count > 1;
        let text = normalize_separators(aggregate(&files_text, &results, &self.options, show_names));

        if !strip_styling(&text).trim().is_empty() {
            sink.output(&text)?;
        }

        tracing::debug!(
            directories = results.len(),
            files = file_count,
            ?severity,
            "listing complete"
        );

        Ok(severity)
    }
}

fn report(sink: &mut dyn OutputSink, err: &ListError) -> io::Result<Severity> {
    tracing::debug!(path = %err.path().display(), error = %err, "reporting listing error");
    sink.error(&err.report())?;
    Ok(err.severity())
}

#[cfg(windows)]
fn normalize_separators(text: String) -> String {
    text.replace('\\', "/")
}

#[cfg(not(windows))]
fn normalize_separators(text: String) -> String {
    text
}

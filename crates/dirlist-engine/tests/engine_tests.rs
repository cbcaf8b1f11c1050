use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use dirlist_core::{EntryKind, ListError, ListOptions, Metadata, RawEntry, Severity};
use dirlist_engine::{BufferSink, Lister};
use dirlist_format::strip_styling;
use dirlist_scan::{Children, DirWalk, FileSystem, LocalFs};
use tempfile::TempDir;

/// In-memory file system that keeps children in insertion order.
#[derive(Default)]
struct MemFs {
    nodes: HashMap<PathBuf, Metadata>,
    children: HashMap<PathBuf, Vec<String>>,
    unreadable: Vec<PathBuf>,
    vanished: Vec<PathBuf>,
}

impl MemFs {
    fn new() -> Self {
        let mut fs = Self::default();
        fs.nodes
            .insert(PathBuf::from("/"), Metadata::new(EntryKind::Directory, 0));
        fs
    }

    fn dir(mut self, path: &str) -> Self {
        self.insert(path, Metadata::new(EntryKind::Directory, 0).with_mode(0o755));
        self
    }

    fn file(mut self, path: &str, size: u64) -> Self {
        self.insert(path, Metadata::new(EntryKind::File, size).with_mode(0o644));
        self
    }

    fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.push(PathBuf::from(path));
        self
    }

    fn vanished(mut self, path: &str) -> Self {
        self.vanished.push(PathBuf::from(path));
        self
    }

    fn insert(&mut self, path: &str, metadata: Metadata) {
        let path = PathBuf::from(path);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.children
                .entry(parent.to_path_buf())
                .or_default()
                .push(name.to_string_lossy().into_owned());
        }
        self.nodes.insert(path, metadata);
    }

    fn collect_dirs(&self, dir: &Path, include_hidden: bool, out: &mut Vec<PathBuf>) {
        out.push(dir.to_path_buf());
        let mut names = self.children.get(dir).cloned().unwrap_or_default();
        names.sort();
        for name in names {
            if !include_hidden && name.starts_with('.') {
                continue;
            }
            let child = dir.join(&name);
            if self.nodes.get(&child).is_some_and(Metadata::is_dir) {
                self.collect_dirs(&child, include_hidden, out);
            }
        }
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other),
        }
    }
    out
}

impl FileSystem for MemFs {
    fn stat(&self, path: &Path) -> Result<Metadata, ListError> {
        self.nodes
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| ListError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn list_children(&self, dir: &Path) -> Result<Children, ListError> {
        if self.unreadable.iter().any(|p| p == dir) {
            return Err(ListError::PermissionDenied {
                path: dir.to_path_buf(),
            });
        }
        let mut children = Children::default();
        for name in self.children.get(dir).into_iter().flatten() {
            let path = dir.join(name);
            if self.vanished.contains(&path) {
                let gone = io::Error::from(io::ErrorKind::NotFound);
                children.warnings.push(ListError::entry(path, gone));
                continue;
            }
            children
                .entries
                .push(RawEntry::new(name.clone(), self.nodes[&path].clone()));
        }
        Ok(children)
    }

    fn walk_dirs(&self, root: &Path, include_hidden: bool) -> DirWalk<'_> {
        let mut dirs = Vec::new();
        self.collect_dirs(root, include_hidden, &mut dirs);
        Box::new(dirs.into_iter().map(Ok))
    }
}

fn run<F: FileSystem + ?Sized>(
    fs: &F,
    options: ListOptions,
    paths: &[&str],
) -> (String, Vec<String>, Severity) {
    let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let mut sink = BufferSink::new();
    let severity = Lister::new(fs, options).run(&paths, &mut sink).unwrap();
    (strip_styling(&sink.output).into_owned(), sink.errors, severity)
}

fn default_run(fs: &MemFs, paths: &[&str]) -> String {
    run(fs, ListOptions::default(), paths).0
}

#[test]
fn test_names_sorted_case_insensitively() {
    let fs = MemFs::new().dir("/d").file("/d/C", 1).file("/d/b", 1).file("/d/A", 1);

    let (output, errors, severity) = run(&fs, ListOptions::default(), &["/d"]);

    assert_eq!(output, "A  b  C\n");
    assert!(errors.is_empty());
    assert_eq!(severity, Severity::Ok);
}

#[test]
fn test_name_key_ignores_punctuation() {
    let fs = MemFs::new()
        .dir("/d")
        .file("/d/b_2", 1)
        .file("/d/a-9", 1)
        .file("/d/B1", 1);

    assert_eq!(default_run(&fs, &["/d"]), "a-9  B1  b_2\n");
}

#[test]
fn test_no_sort_keeps_enumeration_order() {
    let fs = MemFs::new().dir("/d").file("/d/z", 1).file("/d/a", 1).file("/d/m", 1);
    let options = ListOptions::builder().no_sort(true).build().unwrap();

    assert_eq!(run(&fs, options, &["/d"]).0, "z  a  m\n");
}

#[test]
fn test_sort_by_size_then_reverse() {
    let fs = MemFs::new()
        .dir("/d")
        .file("/d/small", 1)
        .file("/d/big", 300)
        .file("/d/mid", 20);

    let options = ListOptions::builder().sort_by_size(true).build().unwrap();
    assert_eq!(run(&fs, options, &["/d"]).0, "big  mid  small\n");

    let options = ListOptions::builder()
        .sort_by_size(true)
        .reverse(true)
        .build()
        .unwrap();
    assert_eq!(run(&fs, options, &["/d"]).0, "small  mid  big\n");
}

#[test]
fn test_hidden_entry_policy() {
    let fs = MemFs::new().dir("/d").file("/d/.h", 1).file("/d/v", 1);

    assert_eq!(default_run(&fs, &["/d"]), "v\n");

    let almost = ListOptions::builder().almost_all(true).build().unwrap();
    assert_eq!(run(&fs, almost, &["/d"]).0, ".h  v\n");

    let all = ListOptions::builder().all(true).build().unwrap();
    assert_eq!(run(&fs, all, &["/d"]).0, ".  ..  .h  v\n");
}

#[test]
fn test_directory_flag_shows_operand_path() {
    let fs = MemFs::new().dir("/d").file("/d/x", 1);
    let options = ListOptions::builder().directory(true).build().unwrap();

    assert_eq!(run(&fs, options, &["/d"]).0, "/d\n");
}

#[test]
fn test_multiple_directories_get_headers() {
    let fs = MemFs::new()
        .dir("/b")
        .file("/b/y", 1)
        .dir("/a")
        .file("/a/x", 1);

    assert_eq!(default_run(&fs, &["/b", "/a"]), "/a:\nx\n\n/b:\ny\n");
}

#[test]
fn test_file_operands_come_first() {
    let fs = MemFs::new().dir("/d").file("/d/x", 1).file("/file.txt", 3);

    assert_eq!(
        default_run(&fs, &["/d", "/file.txt"]),
        "/file.txt\n\n/d:\nx\n"
    );
}

#[test]
fn test_missing_operand_is_minor() {
    let fs = MemFs::new().dir("/a").file("/a/x", 1);

    let (output, errors, severity) = run(&fs, ListOptions::default(), &["/missing", "/a"]);

    assert_eq!(output, "x\n");
    assert_eq!(
        errors,
        vec!["dls: cannot access /missing: No such file or directory".to_string()]
    );
    assert_eq!(severity, Severity::Minor);
    assert_eq!(severity.code(), 1);
}

#[test]
fn test_unreadable_directory_is_serious() {
    let fs = MemFs::new()
        .dir("/locked")
        .dir("/open")
        .file("/open/x", 1)
        .unreadable("/locked");

    let (output, errors, severity) = run(&fs, ListOptions::default(), &["/locked", "/open"]);

    assert_eq!(output, "/locked:\n\n\n/open:\nx\n");
    assert_eq!(errors, vec!["dls: cannot open /locked: Permission denied".to_string()]);
    assert_eq!(severity, Severity::Serious);
    assert_eq!(severity.code(), 2);
}

#[test]
fn test_vanished_child_is_serious() {
    let fs = MemFs::new()
        .dir("/d")
        .file("/d/kept", 1)
        .file("/d/gone", 1)
        .vanished("/d/gone");

    let (output, errors, severity) = run(&fs, ListOptions::default(), &["/d"]);

    assert_eq!(output, "kept\n");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("dls: cannot read /d/gone"));
    assert_eq!(severity, Severity::Serious);
}

#[test]
fn test_empty_output_is_suppressed() {
    let fs = MemFs::new().dir("/empty");

    let (output, errors, severity) = run(&fs, ListOptions::default(), &["/empty"]);

    assert!(output.is_empty());
    assert!(errors.is_empty());
    assert_eq!(severity, Severity::Ok);
}

#[test]
fn test_detail_listing_total_and_alignment() {
    let fs = MemFs::new().dir("/d").file("/d/a", 5).file("/d/bb", 100);
    let options = ListOptions::builder().long(true).build().unwrap();

    let output = run(&fs, options, &["/d"]).0;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "total 105");
    assert!(lines[1].starts_with("-rw-r--r-- 1 0 0   5 "));
    assert!(lines[2].starts_with("-rw-r--r-- 1 0 0 100 "));
    assert_eq!(
        lines[1].len() - "a".len(),
        lines[2].len() - "bb".len()
    );
}

#[test]
fn test_human_readable_total() {
    let fs = MemFs::new().dir("/d").file("/d/big", 2048);
    let options = ListOptions::builder()
        .long(true)
        .human_readable(true)
        .build()
        .unwrap();

    let output = run(&fs, options, &["/d"]).0;

    assert!(output.starts_with("total 2KiB\n"));
}

#[test]
fn test_by_lines_overrides_long() {
    let fs = MemFs::new().dir("/d").file("/d/a", 1).file("/d/b", 1);
    let options = ListOptions::builder()
        .long(true)
        .by_lines(true)
        .build()
        .unwrap();

    assert_eq!(run(&fs, options, &["/d"]).0, "a  b\n");
}

#[test]
fn test_width_and_one_column() {
    let mut fs = MemFs::new().dir("/d");
    for name in ["a", "b", "c", "d", "e"] {
        fs = fs.file(&format!("/d/{name}"), 1);
    }

    let narrow = ListOptions::builder().width(7usize).build().unwrap();
    assert_eq!(run(&fs, narrow, &["/d"]).0, "a  c  e\nb  d\n");

    let rows = ListOptions::builder()
        .width(7usize)
        .by_lines(true)
        .build()
        .unwrap();
    assert_eq!(run(&fs, rows, &["/d"]).0, "a  b  c\nd  e\n");

    let single = ListOptions::builder().one_column(true).build().unwrap();
    assert_eq!(run(&fs, single, &["/d"]).0, "a\nb\nc\nd\ne\n");
}

#[test]
fn test_recursive_lists_subdirectories_depth_first() {
    let fs = MemFs::new()
        .dir("/r")
        .dir("/r/s")
        .file("/r/s/f", 1)
        .dir("/r/s/t")
        .dir("/r/u")
        .dir("/r/.h")
        .file("/r/.h/secret", 1);
    let options = ListOptions::builder().recursive(true).build().unwrap();

    let output = run(&fs, options, &["/r"]).0;

    assert_eq!(output, "/r:\ns  u\n\n/r/s:\nf  t\n\n/r/s/t:\n\n\n/r/u:\n\n");
}

#[test]
fn test_recursive_with_all_enters_hidden_directories() {
    let fs = MemFs::new().dir("/r").dir("/r/.h").file("/r/.h/secret", 1);
    let options = ListOptions::builder()
        .recursive(true)
        .almost_all(true)
        .build()
        .unwrap();

    let output = run(&fs, options, &["/r"]).0;

    assert_eq!(output, "/r:\n.h\n\n/r/.h:\nsecret\n");
}

#[test]
fn test_local_listing_of_temp_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Beta.txt"), "b").unwrap();
    fs::write(temp.path().join("alpha.txt"), "a").unwrap();
    fs::create_dir(temp.path().join("gamma")).unwrap();
    fs::write(temp.path().join(".dot"), "").unwrap();

    let root = temp.path().to_string_lossy().into_owned();
    let (output, errors, severity) =
        run(&LocalFs::new(), ListOptions::default(), &[root.as_str()]);

    assert_eq!(output, "alpha.txt  Beta.txt  gamma\n");
    assert!(errors.is_empty());
    assert_eq!(severity, Severity::Ok);
}

#[test]
fn test_local_missing_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope").to_string_lossy().into_owned();

    let (output, errors, severity) =
        run(&LocalFs::new(), ListOptions::default(), &[missing.as_str()]);

    assert!(output.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with("No such file or directory"));
    assert_eq!(severity, Severity::Minor);
}

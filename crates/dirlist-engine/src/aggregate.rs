//! Combining per-directory results into the final text.

use dirlist_core::{DirectoryResult, ListOptions};
use dirlist_format::format_size;

/// Combine the file-operand text and the directory results.
///
/// With `show_names`, each directory gets a `path:` header; sections are
/// separated by one blank line with none after the last. In detail mode
/// every section starts with a `total` line. File-operand text comes first,
/// separated from the directories by a blank line when both are present.
pub fn aggregate(
    files_text: &str,
    results: &[DirectoryResult],
    options: &ListOptions,
    show_names: bool,
) -> String {
    let sections: Vec<String> = if show_names {
        results
            .iter()
            .map(|result| format!("{}:\n{}", result.path.display(), section_body(result, options)))
            .collect()
    } else {
        results
            .first()
            .filter(|_| results.len() == 1)
            .map(|result| vec![section_body(result, options)])
            .unwrap_or_default()
    };
    let dir_output = sections.join("\n\n");

    match (files_text.is_empty(), dir_output.is_empty()) {
        (false, false) => format!("{files_text}\n\n{dir_output}"),
        (false, true) => files_text.to_string(),
        _ => dir_output,
    }
}

fn section_body(result: &DirectoryResult, options: &ListOptions) -> String {
    if options.detail_mode() {
        format!(
            "total {}\n{}",
            format_size(result.total_size, options.human_readable),
            result.text
        )
    } else {
        result.text.clone()
    }
}

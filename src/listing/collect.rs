//! Single-directory reads: visibility filtering, `.`/`..` injection, and
//! ordering.

use std::fs;
use std::path::Path;

use crate::cli::Options;
use crate::entry::{BoxedEntry, RealEntry, SyntheticEntry};
use crate::error::{LsError, Result};

use super::sort::order_entries;

/// Hidden means the name starts with a dot. Empty names (which some
/// filesystems can surface) are never hidden.
pub(crate) fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// The lexical parent used to stat `..`: the parent component if there is
/// one, `.` for a bare name, the path itself at a filesystem root.
fn parent_of(dir: &Path) -> &Path {
    match dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => dir,
    }
}

/// Read the immediate children of `dir`, drop hidden names unless `-a` is
/// set, inject the synthetic `.`/`..` pair under `-a`, and order the
/// result. Returns a fresh sequence on every call.
pub fn collect_dir(dir: &Path, options: &Options) -> Result<Vec<BoxedEntry>> {
    let reader = fs::read_dir(dir).map_err(|e| LsError::access(dir, e))?;

    let mut entries: Vec<BoxedEntry> = Vec::new();

    if options.all {
        let here = fs::metadata(dir).map_err(|e| LsError::access(dir, e))?;
        let parent_path = parent_of(dir);
        let parent = fs::metadata(parent_path).map_err(|e| LsError::access(parent_path, e))?;
        entries.push(Box::new(SyntheticEntry::new(".", here)));
        entries.push(Box::new(SyntheticEntry::new("..", parent)));
    }

    for item in reader {
        let item = item.map_err(|e| LsError::access(dir, e))?;
        let name = item.file_name().to_string_lossy().into_owned();
        if !options.all && is_hidden(&name) {
            continue;
        }
        let entry = RealEntry::from_dir_entry(&item)
            .map_err(|e| LsError::access(item.path(), e))?;
        entries.push(Box::new(entry));
    }

    order_entries(&mut entries, options);
    Ok(entries)
}

/// A listing entry for a bare (non-directory) path argument: the path's
/// final component bound to its own stat record.
pub fn entry_for_path(path: &Path) -> Result<BoxedEntry> {
    let metadata = fs::symlink_metadata(path).map_err(|e| LsError::access(path, e))?;
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };
    Ok(Box::new(SyntheticEntry::new(name, metadata)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).expect("create file");
    }

    fn names(entries: &[BoxedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn hidden_entries_are_dropped_by_default() {
        let dir = TempDir::new().expect("temp dir");
        touch(&dir, "visible.txt");
        touch(&dir, ".hidden");

        let entries = collect_dir(dir.path(), &Options::default()).expect("collect");
        assert_eq!(names(&entries), vec!["visible.txt"]);
    }

    #[test]
    fn all_includes_hidden_and_pins_dot_pair() {
        let dir = TempDir::new().expect("temp dir");
        touch(&dir, "b.txt");
        touch(&dir, ".hidden");
        touch(&dir, "a.txt");

        let options = Options {
            all: true,
            ..Options::default()
        };
        let entries = collect_dir(dir.path(), &options).expect("collect");
        assert_eq!(
            names(&entries),
            vec![".", "..", "a.txt", "b.txt", ".hidden"]
        );
    }

    #[test]
    fn dot_pair_stays_pinned_under_reverse() {
        let dir = TempDir::new().expect("temp dir");
        touch(&dir, "a.txt");
        touch(&dir, "b.txt");

        let options = Options {
            all: true,
            reverse: true,
            ..Options::default()
        };
        let entries = collect_dir(dir.path(), &options).expect("collect");
        assert_eq!(names(&entries), vec![".", "..", "b.txt", "a.txt"]);
    }

    #[test]
    fn names_sort_case_insensitively_with_dot_stripped() {
        let dir = TempDir::new().expect("temp dir");
        touch(&dir, "B");
        touch(&dir, ".a");
        touch(&dir, "c");

        let options = Options {
            all: true,
            ..Options::default()
        };
        let entries = collect_dir(dir.path(), &options).expect("collect");
        assert_eq!(names(&entries), vec![".", "..", ".a", "B", "c"]);
    }

    #[test]
    fn missing_directory_is_an_access_error() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("nope");
        let err = collect_dir(&missing, &Options::default()).expect_err("should fail");
        assert!(matches!(err, LsError::Access { .. }));
        assert!(err.to_string().starts_with("cannot access '"));
    }

    #[test]
    fn empty_name_is_not_hidden() {
        assert!(!is_hidden(""));
        assert!(is_hidden(".x"));
        assert!(!is_hidden("x."));
    }

    #[test]
    fn parent_of_handles_roots_and_bare_names() {
        assert_eq!(parent_of(Path::new("a/b")), Path::new("a"));
        assert_eq!(parent_of(Path::new("solo")), Path::new("."));
        assert_eq!(parent_of(Path::new("/")), Path::new("/"));
    }

    #[test]
    fn entry_for_path_uses_final_component() {
        let dir = TempDir::new().expect("temp dir");
        touch(&dir, "report.txt");

        let entry = entry_for_path(&dir.path().join("report.txt")).expect("entry");
        assert_eq!(entry.name(), "report.txt");
        assert!(!entry.is_dir());
    }
}

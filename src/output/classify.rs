//! File-kind classification driving short-format styling.
//!
//! Classification is a pure function of the entry; it never consults the
//! terminal. The renderer maps each kind to a `ColorSpec`, so tests can
//! assert on kinds without parsing escape sequences.

use std::os::unix::fs::PermissionsExt;

use termcolor::{Color, ColorSpec};

use crate::entry::ListEntry;

/// Archive suffixes that style red, checked in this order against the
/// full name.
const ARCHIVE_SUFFIXES: &[&str] = &[
    ".zip", ".tar", ".gz", ".tar.gz", ".tgz", ".bz2", ".tar.bz2", ".tbz",
];

/// Semantic display class for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Archive,
    Executable,
    Plain,
}

impl FileKind {
    /// Styling for short-format names; `None` renders unstyled.
    pub fn color_spec(self) -> Option<ColorSpec> {
        let color = match self {
            FileKind::Directory => Color::Blue,
            FileKind::Archive => Color::Red,
            FileKind::Executable => Color::Green,
            FileKind::Plain => return None,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        Some(spec)
    }
}

/// Classify an entry: directories first, then archive suffixes, then any
/// executable bit, then plain.
pub fn classify(entry: &dyn ListEntry) -> FileKind {
    if entry.is_dir() {
        return FileKind::Directory;
    }
    if is_archive(entry.name()) {
        return FileKind::Archive;
    }
    if is_executable(entry) {
        return FileKind::Executable;
    }
    FileKind::Plain
}

fn is_archive(name: &str) -> bool {
    ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn is_executable(entry: &dyn ListEntry) -> bool {
    entry.metadata().permissions().mode() & 0o111 != 0
}

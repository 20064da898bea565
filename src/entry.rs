//! The directory-entry abstraction shared by real and synthetic entries.
//!
//! Real entries come out of a directory read; synthetic entries (`.`, `..`,
//! and bare file arguments) are a name bound to a directly-stated metadata
//! record. Collectors and renderers only ever see the trait, so the two are
//! interchangeable everywhere downstream.

use std::fs::{self, Metadata};
use std::io;
use std::time::SystemTime;

/// A single named node in a listing.
pub trait ListEntry: std::fmt::Debug {
    /// Display name (`.` and `..` for the synthetic pair).
    fn name(&self) -> &str;

    /// Whether the entry is a directory. Symlinks are never followed, so a
    /// link to a directory reports `false`.
    fn is_dir(&self) -> bool;

    /// Resolved file status backing this entry.
    fn metadata(&self) -> &Metadata;

    /// Modification time; entries with an unreadable mtime sort as the
    /// epoch rather than failing the listing.
    fn modified(&self) -> SystemTime {
        self.metadata()
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH)
    }

    /// Size in bytes.
    fn size(&self) -> u64 {
        self.metadata().len()
    }
}

pub type BoxedEntry = Box<dyn ListEntry>;

/// Entry backed by a directory read.
#[derive(Debug)]
pub struct RealEntry {
    name: String,
    file_type: fs::FileType,
    metadata: Metadata,
}

impl RealEntry {
    /// Capture a read entry's name, type, and status. The status call does
    /// not traverse symlinks.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> io::Result<Self> {
        Ok(Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            file_type: entry.file_type()?,
            metadata: entry.metadata()?,
        })
    }
}

impl ListEntry for RealEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Entry whose metadata is stated directly rather than read from a scan.
#[derive(Debug)]
pub struct SyntheticEntry {
    name: String,
    metadata: Metadata,
}

impl SyntheticEntry {
    pub fn new(name: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }
}

impl ListEntry for SyntheticEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn real_entry_captures_name_and_kind() {
        let dir = TempDir::new().expect("temp dir");
        File::create(dir.path().join("plain.txt")).expect("create file");
        fs::create_dir(dir.path().join("sub")).expect("create dir");

        let mut seen = Vec::new();
        for entry in fs::read_dir(dir.path()).expect("read dir") {
            let entry = entry.expect("dir entry");
            let real = RealEntry::from_dir_entry(&entry).expect("capture");
            seen.push((real.name().to_string(), real.is_dir()));
        }
        seen.sort();

        assert_eq!(
            seen,
            vec![
                ("plain.txt".to_string(), false),
                ("sub".to_string(), true)
            ]
        );
    }

    #[test]
    fn synthetic_entry_reports_borrowed_metadata() {
        let dir = TempDir::new().expect("temp dir");
        let metadata = fs::metadata(dir.path()).expect("stat");
        let entry = SyntheticEntry::new(".", metadata);

        assert_eq!(entry.name(), ".");
        assert!(entry.is_dir());
    }
}

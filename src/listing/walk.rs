//! Recursive traversal producing a path-keyed report.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::cli::Options;
use crate::entry::BoxedEntry;
use crate::error::Result;

use super::collect::collect_dir;

/// Key under which the walk root is reported.
pub const ROOT_KEY: &str = ".";

/// One directory's ordered entries plus the directory's own mtime, which
/// the presenter needs for time-ordered block layout.
pub struct DirectoryListing {
    pub entries: Vec<BoxedEntry>,
    pub modified: SystemTime,
}

/// Per-directory listings keyed by normalized relative path.
///
/// The root is keyed `.`; every other directory is keyed `./` plus its
/// root-relative path with forward-slash separators on every platform.
/// Iteration is lexicographic by key; the presenter pulls the root block
/// to the front itself.
pub struct DirectoryReport {
    listings: BTreeMap<String, DirectoryListing>,
}

impl DirectoryReport {
    pub fn root(&self) -> Option<&DirectoryListing> {
        self.listings.get(ROOT_KEY)
    }

    /// Blocks in lexicographic key order, the root included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectoryListing)> {
        self.listings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Walk the tree rooted at `root` in pre-order, listing every reachable
/// directory with the collector's filter/order logic.
///
/// Hidden directories are pruned as whole subtrees unless `-a` is set;
/// the root itself is never pruned, whatever its name. The first read
/// error aborts the walk and the partial report is discarded.
pub fn walk_tree(root: &Path, options: &Options) -> Result<DirectoryReport> {
    let mut listings = BTreeMap::new();
    walk_into(root, None, options, &mut listings)?;
    Ok(DirectoryReport { listings })
}

fn walk_into(
    dir: &Path,
    rel: Option<&str>,
    options: &Options,
    out: &mut BTreeMap<String, DirectoryListing>,
) -> Result<()> {
    let key = match rel {
        None => ROOT_KEY.to_string(),
        Some(rel) => format!("./{rel}"),
    };

    // The directory's own mtime, captured now so block ordering does not
    // depend on the process working directory later.
    let modified = fs::symlink_metadata(dir)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let entries = collect_dir(dir, options)?;

    // Hidden subdirectories are already filtered out of `entries` when
    // `-a` is unset, so descending over the listing prunes their whole
    // subtrees. The synthetic pair must not be followed.
    let subdirs: Vec<String> = entries
        .iter()
        .filter(|e| e.is_dir() && e.name() != "." && e.name() != "..")
        .map(|e| e.name().to_string())
        .collect();

    out.insert(key, DirectoryListing { entries, modified });

    for name in subdirs {
        let child_rel = match rel {
            None => name.clone(),
            Some(rel) => format!("{rel}/{name}"),
        };
        walk_into(&dir.join(&name), Some(&child_rel), options, out)?;
    }

    Ok(())
}

//! Directory reading, ordering, and recursive walking.
//!
//! `collect` handles one directory: read, hidden-name filter, synthetic
//! `.`/`..` injection, ordering. `walk` recurses with the same per-directory
//! logic and aggregates a path-keyed report. `sort` holds the comparators
//! both share.

mod collect;
mod sort;
mod walk;

pub use collect::{collect_dir, entry_for_path};
pub use sort::order_entries;
pub use walk::{DirectoryListing, DirectoryReport, ROOT_KEY, walk_tree};

//! lsr - POSIX-style `ls`: flag-driven directory listing, ordering, and
//! rendering.

pub mod cli;
pub mod entry;
pub mod error;
pub mod listing;
pub mod output;

pub use cli::{Options, parse};
pub use entry::{BoxedEntry, ListEntry, RealEntry, SyntheticEntry};
pub use error::LsError;
pub use listing::{DirectoryReport, collect_dir, entry_for_path, walk_tree};
pub use output::{FileKind, classify, render_flat, render_tree};

//! Entry ordering: the pinned `.`/`..` prefix, the name key, and the
//! post-sort reversal pass.

use std::cmp::Ordering;

use crate::cli::Options;
use crate::entry::BoxedEntry;

/// Key used for name ordering: ASCII case folded, with a single leading
/// dot ignored so `.gitignore` sorts among the g's rather than first.
pub(crate) fn name_key(name: &str) -> String {
    name.strip_prefix('.').unwrap_or(name).to_ascii_lowercase()
}

/// `.` ranks ahead of `..`, and both ahead of everything else, regardless
/// of the active comparator.
fn pin_rank(name: &str) -> u8 {
    match name {
        "." => 0,
        ".." => 1,
        _ => 2,
    }
}

fn compare(a: &BoxedEntry, b: &BoxedEntry, by_time: bool) -> Ordering {
    let rank = pin_rank(a.name()).cmp(&pin_rank(b.name()));
    if rank != Ordering::Equal {
        return rank;
    }
    if by_time {
        // Most recent first. Equal timestamps fall back to the name key so
        // the order is deterministic.
        b.modified()
            .cmp(&a.modified())
            .then_with(|| name_key(a.name()).cmp(&name_key(b.name())))
    } else {
        name_key(a.name()).cmp(&name_key(b.name()))
    }
}

/// Order a collected entry list in place.
///
/// Reversal runs as a second pass over the already-sorted sequence and
/// never moves a pinned `.`/`..` prefix away from the front: only the
/// suffix after the pinned entries is inverted.
pub fn order_entries(entries: &mut [BoxedEntry], options: &Options) {
    entries.sort_by(|a, b| compare(a, b, options.sort_time));
    if options.reverse {
        let pinned = entries
            .iter()
            .take_while(|e| pin_rank(e.name()) < 2)
            .count();
        entries[pinned..].reverse();
    }
}

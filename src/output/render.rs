//! Flat and recursive report rendering.
//!
//! Both renderers assemble their full output in an in-memory ANSI buffer
//! and hand back text; the entry point owns actually printing it.

use std::io::{self, Write};

use termcolor::{Buffer, WriteColor};

use crate::cli::Options;
use crate::entry::{BoxedEntry, ListEntry};
use crate::listing::{DirectoryListing, DirectoryReport, ROOT_KEY};

use super::classify::classify;
use super::long::long_line;

fn write_styled_name(buf: &mut Buffer, entry: &dyn ListEntry) -> io::Result<()> {
    match classify(entry).color_spec() {
        Some(spec) => {
            buf.set_color(&spec)?;
            write!(buf, "{}", entry.name())?;
            buf.reset()
        }
        None => write!(buf, "{}", entry.name()),
    }
}

/// Entries on one line, two spaces apart, styled per kind, newline
/// terminated. An empty list renders as a bare newline.
fn write_short_line(buf: &mut Buffer, entries: &[BoxedEntry]) -> io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            write!(buf, "  ")?;
        }
        write_styled_name(buf, entry.as_ref())?;
    }
    writeln!(buf)
}

fn buffer_text(buf: Buffer) -> String {
    String::from_utf8_lossy(&buf.into_inner()).into_owned()
}

/// Render a non-recursive listing (or a single-file report).
pub fn render_flat(entries: &[BoxedEntry], options: &Options) -> io::Result<String> {
    let mut buf = Buffer::ansi();
    if options.long {
        for entry in entries {
            writeln!(buf, "{}", long_line(entry.as_ref()))?;
        }
    } else {
        write_short_line(&mut buf, entries)?;
    }
    Ok(buffer_text(buf))
}

/// Render a recursive report: the root block first, then every other
/// directory block in key order.
///
/// Key order is lexicographic, or by each directory's own mtime (most
/// recent first, path order breaking ties) under `-t`, then inverted
/// under `-r`. Each non-root block is preceded by a blank line and a
/// `<path>:` header. The assembled output is trimmed of trailing
/// whitespace and terminated with exactly one newline.
pub fn render_tree(report: &DirectoryReport, options: &Options) -> io::Result<String> {
    let mut buf = Buffer::ansi();

    if let Some(root) = report.root() {
        write!(buf, "{ROOT_KEY}:")?;
        writeln!(buf)?;
        write_short_line(&mut buf, &root.entries)?;
    }

    for (key, listing) in ordered_blocks(report, options) {
        writeln!(buf)?;
        write!(buf, "{key}:")?;
        writeln!(buf)?;
        write_short_line(&mut buf, &listing.entries)?;
    }

    let text = buffer_text(buf);
    Ok(format!("{}\n", text.trim_end()))
}

/// Non-root blocks in presentation order. The iteration base is already
/// lexicographic, so a stable mtime sort falls back to path order on
/// ties.
fn ordered_blocks<'a>(
    report: &'a DirectoryReport,
    options: &Options,
) -> Vec<(&'a str, &'a DirectoryListing)> {
    let mut blocks: Vec<_> = report.iter().filter(|(key, _)| *key != ROOT_KEY).collect();
    if options.sort_time {
        blocks.sort_by(|a, b| b.1.modified.cmp(&a.1.modified));
    }
    if options.reverse {
        blocks.reverse();
    }
    blocks
}

//! Long-format field composition: permission string, link count, owner,
//! group, size, and mtime.

use std::fs::Metadata;
use std::os::unix::fs::{MetadataExt, PermissionsExt};

use chrono::{DateTime, Local};
use uzers::{get_group_by_gid, get_user_by_uid};

use crate::entry::ListEntry;

/// `drwxr-xr-x`-style mode string: type character plus nine permission
/// bits.
pub fn permission_string(entry: &dyn ListEntry) -> String {
    let metadata = entry.metadata();
    let mode = metadata.permissions().mode();
    let mut out = String::with_capacity(10);

    out.push(if entry.is_dir() {
        'd'
    } else if metadata.file_type().is_symlink() {
        'l'
    } else if metadata.is_file() {
        '-'
    } else {
        '?'
    });

    out.push(if mode & 0o400 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o200 != 0 { 'w' } else { '-' });
    out.push(if mode & 0o100 != 0 { 'x' } else { '-' });
    out.push(if mode & 0o040 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o020 != 0 { 'w' } else { '-' });
    out.push(if mode & 0o010 != 0 { 'x' } else { '-' });
    out.push(if mode & 0o004 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o002 != 0 { 'w' } else { '-' });
    out.push(if mode & 0o001 != 0 { 'x' } else { '-' });

    out
}

/// Owner name for the entry's uid, degrading to `?` when the id has no
/// passwd entry.
fn owner_name(metadata: &Metadata) -> String {
    get_user_by_uid(metadata.uid())
        .map(|user| user.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| "?".to_string())
}

/// Group name for the entry's gid, degrading to `?` like [`owner_name`].
fn group_name(metadata: &Metadata) -> String {
    get_group_by_gid(metadata.gid())
        .map(|group| group.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| "?".to_string())
}

/// One long-format line, without the trailing newline:
/// `<mode> <links> <owner> <group> <size> <mtime> <name>`.
pub fn long_line(entry: &dyn ListEntry) -> String {
    let metadata = entry.metadata();
    let mtime: DateTime<Local> = DateTime::from(entry.modified());
    format!(
        "{} {} {} {} {:>6} {} {}",
        permission_string(entry),
        metadata.nlink(),
        owner_name(metadata),
        group_name(metadata),
        entry.size(),
        mtime.format("%b %e %H:%M"),
        entry.name()
    )
}

//! CLI entry point: parse flags, list each requested path, report
//! per-path failures, and pick the exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use lsr::error::Result;
use lsr::{Options, cli, collect_dir, entry_for_path, render_flat, render_tree, walk_tree};

fn main() {
    let options = match cli::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("ls: {err}");
            process::exit(1);
        }
    };

    let paths = if options.paths.is_empty() {
        vec![".".to_string()]
    } else {
        options.paths.clone()
    };

    let print_headers = paths.len() > 1;
    let mut had_error = false;

    for (i, raw) in paths.iter().enumerate() {
        let path = clean_path(raw);

        if print_headers {
            if i > 0 {
                println!();
            }
            println!("{}:", path.display());
        }

        if let Err(err) = list_path(&path, &options) {
            eprintln!("ls: {err}");
            had_error = true;
        }
    }

    if had_error {
        process::exit(1);
    }
}

/// List one path: a single-entry report for non-directories, a recursive
/// report under `-R`, a flat listing otherwise. Output is flushed before
/// the next path is attempted.
fn list_path(path: &Path, options: &Options) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| lsr::LsError::access(path, e))?;

    let text = if !metadata.is_dir() {
        let entry = entry_for_path(path)?;
        render_flat(&[entry], options)?
    } else if options.recursive {
        let report = walk_tree(path, options)?;
        render_tree(&report, options)?
    } else {
        let entries = collect_dir(path, options)?;
        render_flat(&entries, options)?
    };

    print!("{text}");
    Ok(())
}

/// Lexically normalize a user-supplied path: collapses repeated slashes
/// and interior `.` components without touching the filesystem.
fn clean_path(raw: &str) -> PathBuf {
    let cleaned: PathBuf = Path::new(raw).components().collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

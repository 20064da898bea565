//! Flag parsing: a single pass over argv mapping short options to booleans
//! and collecting positional paths.

use crate::error::{LsError, Result};

/// Invocation configuration, resolved once from argv and immutable after.
///
/// `sort_time` takes precedence over the default name ordering; `reverse`
/// is applied as a post-order inversion, never as a different comparator.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// `-l`: long listing, one field-composed line per entry.
    pub long: bool,
    /// `-R`: recurse into subdirectories, one block per directory.
    pub recursive: bool,
    /// `-a`: include dotfiles and the synthetic `.`/`..` pair.
    pub all: bool,
    /// `-r`: invert the output order.
    pub reverse: bool,
    /// `-t`: order by modification time, most recent first.
    pub sort_time: bool,
    /// Positional path arguments, in the order given.
    pub paths: Vec<String>,
}

/// Parse command-line tokens into [`Options`].
///
/// A bare `-` is a path, not a flag. Any `--`-prefixed token is rejected,
/// as is the first unrecognized character inside a short-flag token; both
/// abort the invocation before any filesystem I/O.
pub fn parse<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();

    for arg in args {
        if arg == "-" {
            options.paths.push(arg);
            continue;
        }

        if let Some(rest) = arg.strip_prefix("--") {
            return Err(LsError::InvalidOption(rest.to_string()));
        }

        if let Some(flags) = arg.strip_prefix('-') {
            for flag in flags.chars() {
                match flag {
                    'l' => options.long = true,
                    'R' => options.recursive = true,
                    'a' => options.all = true,
                    'r' => options.reverse = true,
                    't' => options.sort_time = true,
                    other => return Err(LsError::InvalidOption(other.to_string())),
                }
            }
            continue;
        }

        options.paths.push(arg);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(args: &[&str]) -> Options {
        parse(args.iter().map(|s| s.to_string())).expect("parse should succeed")
    }

    fn parse_err(args: &[&str]) -> LsError {
        parse(args.iter().map(|s| s.to_string())).expect_err("parse should fail")
    }

    #[test]
    fn no_args_is_empty_defaults() {
        let options = parse_ok(&[]);
        assert!(!options.long);
        assert!(!options.recursive);
        assert!(!options.all);
        assert!(!options.reverse);
        assert!(!options.sort_time);
        assert!(options.paths.is_empty());
    }

    #[test]
    fn combined_short_flags() {
        let options = parse_ok(&["-laR"]);
        assert!(options.long);
        assert!(options.all);
        assert!(options.recursive);
        assert!(!options.reverse);
    }

    #[test]
    fn separate_flags_and_paths() {
        let options = parse_ok(&["-t", "src", "-r", "docs"]);
        assert!(options.sort_time);
        assert!(options.reverse);
        assert_eq!(options.paths, vec!["src", "docs"]);
    }

    #[test]
    fn dash_alone_is_a_path() {
        let options = parse_ok(&["-"]);
        assert_eq!(options.paths, vec!["-"]);
    }

    #[test]
    fn double_dash_token_is_fatal() {
        let err = parse_err(&["--color"]);
        assert_eq!(err.to_string(), "invalid option -- 'color'");
    }

    #[test]
    fn bare_double_dash_is_fatal() {
        let err = parse_err(&["--"]);
        assert_eq!(err.to_string(), "invalid option -- ''");
    }

    #[test]
    fn unknown_short_flag_is_fatal() {
        let err = parse_err(&["-lx"]);
        assert_eq!(err.to_string(), "invalid option -- 'x'");
    }

    #[test]
    fn first_bad_character_wins() {
        let err = parse_err(&["-xz"]);
        assert_eq!(err.to_string(), "invalid option -- 'x'");
    }
}

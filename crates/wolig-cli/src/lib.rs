// wolig-cli: argument handling and input opening for the wolig tool.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

use wolig_he::options::OPTION_CATALOG;

/// Lexicon read when no path is given.
pub const DEFAULT_LEXICON: &str = "wolig.dat";

/// Path that selects standard input.
const STDIN_PATH: &str = "-";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// `-d`: append grammatical tags.
    pub detailed: bool,
    /// `-l`: print the flag catalog instead of reading a lexicon.
    pub list_flags: bool,
    /// Lexicon path, or `-` for standard input.
    pub lexicon: String,
}

/// Parse `[-d] [-l] [LEXICON]`.
pub fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut detailed = false;
    let mut list_flags = false;
    let mut lexicon = None;

    for arg in args {
        match arg.as_str() {
            "-d" | "--detailed" => detailed = true,
            "-l" | "--list-flags" => list_flags = true,
            STDIN_PATH => set_lexicon(&mut lexicon, arg)?,
            a if a.starts_with('-') => return Err(format!("unknown option: {a}")),
            _ => set_lexicon(&mut lexicon, arg)?,
        }
    }

    Ok(Args {
        detailed,
        list_flags,
        lexicon: lexicon.unwrap_or_else(|| DEFAULT_LEXICON.to_string()),
    })
}

fn set_lexicon(slot: &mut Option<String>, path: &str) -> Result<(), String> {
    match slot {
        Some(first) => Err(format!("more than one lexicon given: {first}, {path}")),
        None => {
            *slot = Some(path.to_string());
            Ok(())
        }
    }
}

/// Open the lexicon for buffered reading.
pub fn open_lexicon(path: &str) -> Result<Box<dyn BufRead>, String> {
    if path == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|e| format!("failed to open {path}: {e}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// The lexicon flag catalog, one flag per line under its group heading.
pub fn flag_listing() -> String {
    let mut out = String::new();
    let mut current = None;
    for entry in OPTION_CATALOG {
        if current != Some(entry.group) {
            let _ = writeln!(out, "{}:", entry.group.label());
            current = Some(entry.group);
        }
        let value = if entry.takes_value { "=VALUE" } else { "" };
        let _ = writeln!(out, "  {}{value}", entry.name);
    }
    out
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let parsed = parse_args(&[]).unwrap();
        assert!(!parsed.detailed);
        assert_eq!(parsed.lexicon, DEFAULT_LEXICON);
    }

    #[test]
    fn detailed_and_path() {
        let parsed = parse_args(&args(&["-d", "nouns.dat"])).unwrap();
        assert!(parsed.detailed);
        assert_eq!(parsed.lexicon, "nouns.dat");

        let parsed = parse_args(&args(&["nouns.dat", "--detailed"])).unwrap();
        assert!(parsed.detailed);
    }

    #[test]
    fn stdin_path() {
        assert_eq!(parse_args(&args(&["-"])).unwrap().lexicon, "-");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(&args(&["-x"])).is_err());
        assert!(parse_args(&args(&["a.dat", "b.dat"])).is_err());
    }

    #[test]
    fn help() {
        assert!(wants_help(&args(&["-d", "--help"])));
        assert!(!wants_help(&args(&["-d"])));
    }

    #[test]
    fn list_flags_option() {
        assert!(parse_args(&args(&["-l"])).unwrap().list_flags);
        assert!(!parse_args(&args(&["-d"])).unwrap().list_flags);
    }

    #[test]
    fn flag_listing_groups_catalog() {
        let listing = flag_listing();
        assert!(listing.starts_with("part of speech:\n  noun\n  adjective\n"));
        assert!(listing.contains("  plural=VALUE\n"));
        assert!(listing.contains("  bizarre=VALUE\n"));
        assert!(listing.contains("orthography:\n  acronym\n"));
    }

    #[test]
    fn missing_file() {
        let err = open_lexicon("/nonexistent/wolig.dat").err().unwrap();
        assert!(err.starts_with("failed to open /nonexistent/wolig.dat"));
    }
}

// wolig: Expand a Hebrew noun/adjective lexicon into every inflected form.
//
// Reads lexicon records (`<word> <flags>`, one per line) and prints each
// record's forms, one per line, followed by a `-------` separator line.
//
// Usage:
//   wolig [-d] [-l] [LEXICON]
//
// Options:
//   -d, --detailed     Append the gender/number/state tag to every form
//   -l, --list-flags   Print the recognized lexicon flags and exit
//   -h, --help         Print help
//
// LEXICON defaults to wolig.dat; `-` reads standard input. Set RUST_LOG=debug
// to see which rules fired.

use std::io::{self, Write};
use std::process;

use env_logger::Builder;
use log::{LevelFilter, debug};
use wolig_he::{RunConfig, run};

fn main() {
    // Warnings by default; RUST_LOG overrides.
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if wolig_cli::wants_help(&args) {
        println!("wolig: Expand a Hebrew noun/adjective lexicon into inflected forms.");
        println!();
        println!("Usage: wolig [-d] [-l] [LEXICON]");
        println!();
        println!("Reads records of the form `<word> <flags>` from LEXICON");
        println!("(default: {}; `-` reads stdin).", wolig_cli::DEFAULT_LEXICON);
        println!("Each record's forms are followed by a `-------` line.");
        println!();
        println!("Options:");
        println!("  -d, --detailed     Append the gender/number/state tag to every form");
        println!("  -l, --list-flags   Print the recognized lexicon flags and exit");
        println!("  -h, --help         Print this help");
        return;
    }

    let parsed = wolig_cli::parse_args(&args).unwrap_or_else(|e| wolig_cli::fatal(&e));
    if parsed.list_flags {
        print!("{}", wolig_cli::flag_listing());
        return;
    }
    let reader =
        wolig_cli::open_lexicon(&parsed.lexicon).unwrap_or_else(|e| wolig_cli::fatal(&e));

    let config = RunConfig {
        detailed: parsed.detailed,
    };
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match run(reader, &mut out, &config) {
        Ok(stats) => debug!("{}: {} records", parsed.lexicon, stats.records),
        Err(e) => {
            let _ = out.flush();
            eprintln!("error: {}: {e}", parsed.lexicon);
            process::exit(1);
        }
    }
}

// Lexicon driver: runs every record of a lexicon through the inflection
// pipeline and writes the forms.
//
// Records are processed one at a time in input order. A record that cannot
// be parsed stops the run; nothing of it is written, but everything before it
// has already been flushed to the writer.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use wolig_core::SurfaceForm;

use crate::finalize::finalize;
use crate::inflection::{ParadigmGenerator, generator_for};
use crate::lexicon::{Line, parse_line};
use crate::prepare::prepare;
use crate::{LexiconError, LexiconEntry, RECORD_SEPARATOR};

/// Run-wide settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Append the grammatical tag to every form.
    pub detailed: bool,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub records: usize,
    pub forms: usize,
    pub pass_through: usize,
}

/// Error that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record was rejected. `line` is 1-based.
    #[error("line {line}: {source}")]
    Entry {
        line: usize,
        #[source]
        source: LexiconError,
    },
}

/// All surface forms of one entry, in paradigm order.
pub fn generate_forms(entry: &LexiconEntry) -> Vec<SurfaceForm> {
    let word = prepare(&entry.head_word);
    generator_for(entry.pos)
        .generate(entry, &word)
        .into_iter()
        .filter_map(|form| finalize(form, entry.options.acronym))
        .collect()
}

/// Inflect a whole lexicon.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &RunConfig,
) -> Result<RunStats, RunError> {
    let mut stats = RunStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        match parse_line(line) {
            Line::Blank => {}
            Line::PassThrough(text) => {
                writeln!(writer, "{text}")?;
                stats.pass_through += 1;
            }
            Line::Record { word, flags } => {
                let entry = LexiconEntry::parse(word, flags).map_err(|source| {
                    RunError::Entry {
                        line: index + 1,
                        source,
                    }
                })?;
                let forms = generate_forms(&entry);
                debug!("{word}: {} forms", forms.len());
                for form in &forms {
                    writeln!(writer, "{}", form.render(config.detailed))?;
                }
                writeln!(writer, "{RECORD_SEPARATOR}")?;
                stats.records += 1;
                stats.forms += forms.len();
            }
        }
    }

    writer.flush()?;
    info!(
        "{} records, {} forms, {} pass-through lines",
        stats.records, stats.forms, stats.pass_through
    );
    Ok(stats)
}

// Lexicon line classification.
//
// `#` starts a comment that runs to the end of the line. A line that starts
// with `#>` is not a comment: the text after the marker is copied to the
// output unchanged. Everything else that is not blank is a record: a head
// word, whitespace, and the flag string.

/// Comment character.
const COMMENT: char = '#';

/// Prefix of a pass-through line.
const PASS_THROUGH: &str = "#>";

/// One classified lexicon line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A head word and its (trimmed, possibly empty) flag string.
    Record { word: &'a str, flags: &'a str },
    /// Text to copy to the output as is.
    PassThrough(&'a str),
    /// Nothing left after removing the comment.
    Blank,
}

/// Classify one line (without its line terminator).
pub fn parse_line(line: &str) -> Line<'_> {
    if let Some(text) = line.strip_prefix(PASS_THROUGH) {
        return Line::PassThrough(text);
    }
    let content = match line.find(COMMENT) {
        Some(i) => &line[..i],
        None => line,
    };
    let content = content.trim();
    if content.is_empty() {
        return Line::Blank;
    }
    match content.split_once(char::is_whitespace) {
        Some((word, flags)) => Line::Record {
            word,
            flags: flags.trim(),
        },
        None => Line::Record {
            word: content,
            flags: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record() {
        assert_eq!(
            parse_line("ספר noun,-im"),
            Line::Record {
                word: "ספר",
                flags: "noun,-im"
            }
        );
    }

    #[test]
    fn record_with_extra_whitespace_and_comment() {
        assert_eq!(
            parse_line("  ילדה \t noun , -ot   # girl"),
            Line::Record {
                word: "ילדה",
                flags: "noun , -ot"
            }
        );
    }

    #[test]
    fn word_without_flags() {
        assert_eq!(
            parse_line("ספר"),
            Line::Record {
                word: "ספר",
                flags: ""
            }
        );
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(parse_line(""), Line::Blank);
        assert_eq!(parse_line("   "), Line::Blank);
        assert_eq!(parse_line("# nouns"), Line::Blank);
        assert_eq!(parse_line("   # indented"), Line::Blank);
    }

    #[test]
    fn pass_through() {
        assert_eq!(parse_line("#> section: nouns"), Line::PassThrough(" section: nouns"));
        assert_eq!(parse_line("#>"), Line::PassThrough(""));
        // only at the start of the line
        assert_eq!(parse_line(" #> x"), Line::Blank);
    }
}

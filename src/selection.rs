use std::io::{self, BufRead, Write};

use crate::error::{AnalysisError, Result};

pub const PROMPT: &str = "Enter the sample indices to average (comma-separated): ";

// ---------------------------------------------------------------------------
// Selection sources
// ---------------------------------------------------------------------------

/// Supplies the raw, comma-separated list of sample indices.
pub trait SelectionSource {
    fn read_selection(&mut self) -> Result<String>;
}

/// Asks on `output` and reads one line from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }
}

/// Where the interactive question is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTarget {
    Stdout,
    /// Keeps stdout clean for machine-readable output.
    Stderr,
}

impl Prompt<io::StdinLock<'static>, Box<dyn Write>> {
    /// Interactive prompt on the terminal, answered on stdin.
    pub fn terminal(target: PromptTarget) -> Self {
        let output: Box<dyn Write> = match target {
            PromptTarget::Stdout => Box::new(io::stdout()),
            PromptTarget::Stderr => Box::new(io::stderr()),
        };
        Prompt::new(io::stdin().lock(), output)
    }
}

impl<R: BufRead, W: Write> SelectionSource for Prompt<R, W> {
    fn read_selection(&mut self) -> Result<String> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no sample indices entered").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// A selection known up front (command-line flag, tests).
#[derive(Debug, Clone)]
pub struct FixedSelection(pub String);

impl SelectionSource for FixedSelection {
    fn read_selection(&mut self) -> Result<String> {
        Ok(self.0.clone())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse `"0, 2,5"` into indices. Every comma-separated field must be an
/// integer, so an empty answer is an error.
pub fn parse_indices(text: &str) -> Result<Vec<i64>> {
    text.split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<i64>().map_err(|_| AnalysisError::Parse {
                origin: "sample selection".to_string(),
                token: tok.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn prompt_writes_question_and_reads_a_line() {
        let mut out = Vec::new();
        let mut prompt = Prompt::new("0, 2\nignored\n".as_bytes(), &mut out);
        assert_eq!(prompt.read_selection().unwrap(), "0, 2");
        drop(prompt);
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn prompt_at_eof_is_unexpected() {
        let mut prompt = Prompt::new("".as_bytes(), io::sink());
        let err = prompt.read_selection().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn fixed_selection_returns_its_text() {
        let mut src = FixedSelection("1,3".into());
        assert_eq!(src.read_selection().unwrap(), "1,3");
    }

    #[test]
    fn parses_with_whitespace_and_negatives() {
        assert_eq!(parse_indices(" 0, 2 ,-1").unwrap(), vec![0, 2, -1]);
    }

    #[test]
    fn rejects_blank_and_non_integer_fields() {
        for bad in ["", "1,,2", "1.5", "a"] {
            let err = parse_indices(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Data, "{bad:?}");
        }
    }
}

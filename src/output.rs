//! Printing the ranked reference matches.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::data::model::Match;
use crate::selection::PromptTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Heading plus one name per line.
    #[default]
    Text,
    /// Pretty-printed JSON array with ranks and distances.
    Json,
}

impl OutputFormat {
    /// JSON owns stdout, so the selection prompt moves to stderr.
    pub fn prompt_target(self) -> PromptTarget {
        match self {
            OutputFormat::Text => PromptTarget::Stdout,
            OutputFormat::Json => PromptTarget::Stderr,
        }
    }
}

/// Write matches in the chosen format. `top` is the requested count and
/// appears in the text heading.
pub fn write_matches<W: Write>(
    out: &mut W,
    matches: &[Match],
    top: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Closest {top} spectra in dataset:")?;
            for m in matches {
                writeln!(out, "{}", m.name)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, matches)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Match> {
        vec![
            Match { rank: 1, index: 3, name: "Quartz".into(), distance: 0.0 },
            Match { rank: 2, index: 0, name: "Calcite".into(), distance: 1.5 },
        ]
    }

    #[test]
    fn text_lists_names_under_heading() {
        let mut out = Vec::new();
        write_matches(&mut out, &sample(), 5, OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Closest 5 spectra in dataset:\nQuartz\nCalcite\n"
        );
    }

    #[test]
    fn json_output_sends_the_prompt_to_stderr() {
        assert_eq!(OutputFormat::Json.prompt_target(), PromptTarget::Stderr);
        assert_eq!(OutputFormat::Text.prompt_target(), PromptTarget::Stdout);
    }

    #[test]
    fn json_carries_rank_and_distance() {
        let mut out = Vec::new();
        write_matches(&mut out, &sample(), 5, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "Quartz");
        assert_eq!(value[1]["rank"], 2);
        assert_eq!(value[1]["distance"], 1.5);
    }
}

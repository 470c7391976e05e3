use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use raman_match::analysis::MATCH_COUNT;
use raman_match::app;
use raman_match::data::loader::HeaderRow;
use raman_match::output::{write_matches, OutputFormat};
use raman_match::pipeline::{
    run_average, run_match, AverageOptions, MatchOptions, AVERAGE_SPECTRA_HEADER,
    MATCH_SPECTRA_HEADER,
};
use raman_match::selection::{FixedSelection, Prompt};
use raman_match::state::AppState;
use raman_match::AnalysisError;

#[derive(Parser)]
#[command(name = "raman-match")]
#[command(about = "Average Raman spectra and find the closest reference spectra", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Raman shift values, one per line
    #[arg(long, default_value = "raman_shift.csv")]
    raman_shift: PathBuf,

    /// Sample intensities, one comma-separated spectrum per line
    #[arg(long, default_value = "spectra.csv")]
    spectra: PathBuf,

    /// Skip the plot window
    #[arg(long, default_value_t = false)]
    no_plot: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Average selected samples and list the closest reference spectra
    Match {
        #[command(flatten)]
        input: InputArgs,

        /// Whether the spectra file starts with a header row
        #[arg(long, value_enum, default_value_t = MATCH_SPECTRA_HEADER)]
        spectra_header: HeaderRow,

        /// Reference dataset: header row, then name followed by intensities
        #[arg(long, default_value = "data_set.csv")]
        reference: PathBuf,

        /// Comma-separated sample indices (prompted for when omitted)
        #[arg(short, long)]
        samples: Option<String>,

        /// Number of closest references to report
        #[arg(long, default_value_t = MATCH_COUNT)]
        top: usize,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Average every sample and plot it next to the first few samples
    Average {
        #[command(flatten)]
        input: InputArgs,

        /// Whether the spectra file starts with a header row
        #[arg(long, value_enum, default_value_t = AVERAGE_SPECTRA_HEADER)]
        spectra_header: HeaderRow,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            input,
            spectra_header,
            reference,
            samples,
            top,
            format,
        } => {
            let opts = MatchOptions {
                raman_shift: input.raman_shift,
                spectra: input.spectra,
                reference,
                spectra_header,
                top,
            };
            let result = match samples {
                Some(text) => run_match(&opts, &mut FixedSelection(text)),
                None => run_match(&opts, &mut Prompt::terminal(format.prompt_target())),
            };
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => return Ok(report_failure(&e)),
            };

            write_matches(&mut io::stdout().lock(), &outcome.matches, top, format)?;
            if !input.no_plot {
                render(AppState::new(outcome.plot, outcome.matches))?;
            }
        }
        Commands::Average {
            input,
            spectra_header,
        } => {
            let opts = AverageOptions {
                raman_shift: input.raman_shift,
                spectra: input.spectra,
                spectra_header,
            };
            let plot = match run_average(&opts) {
                Ok(plot) => plot,
                Err(e) => return Ok(report_failure(&e)),
            };

            log::info!("Averaged {} samples", plot.average.sample_count);
            if !input.no_plot {
                render(AppState::new(plot, Vec::new()))?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Analysis failed: say why and stop before anything is plotted.
fn report_failure(err: &AnalysisError) -> ExitCode {
    log::error!("Analysis failed: {err}");
    println!("{}", err.report());
    ExitCode::FAILURE
}

fn render(state: AppState) -> Result<()> {
    app::show(state).map_err(|e| anyhow!("plot window failed: {e}"))
}

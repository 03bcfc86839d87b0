//! chordshift CLI - transpose chord info from the command line

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chordshift::{
    fix_exercise_chords, transpose_all_keys, transpose_chord_info_detailed, transpose_request,
    Exercise, Riff, TransposeRequest,
};

/// Transpose chord info for improvisation exercises
#[derive(Parser)]
#[command(name = "chordshift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpose a chord-info string to a pitch
    Transpose {
        /// Western chord symbol (Cm7) or positional chord info ("d2:m7 g:7 c1:maj7")
        chord_info: String,

        /// Target pitch (c, cis, d, dis, ees, e, f, fis, g, gis, aes, a, ais, bes, b)
        #[arg(short, long)]
        pitch: String,

        /// Number of bars a Western chord is held for
        #[arg(short, long)]
        bars: Option<u32>,
    },

    /// Transpose a chord-info string to every pitch
    Keys {
        chord_info: String,

        #[arg(short, long)]
        bars: Option<u32>,
    },

    /// Regenerate the chord info of every item in a YAML exercise file
    FixExercises {
        /// Exercise YAML file
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Answer a JSON transpose request
    Request {
        /// Transpose request JSON file
        input: PathBuf,

        /// Riff YAML file the request refers to
        #[arg(long)]
        riff: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Transpose {
            chord_info,
            pitch,
            bars,
        } => {
            let result = transpose_chord_info_detailed(&chord_info, &pitch, bars)?;
            for warning in &result.warnings {
                tracing::warn!("Replaced {}", warning);
            }
            println!("{}", result.chord_info);
        }
        Commands::Keys { chord_info, bars } => {
            for (pitch, transposed) in transpose_all_keys(&chord_info, bars)? {
                println!("{}\t{}", pitch, transposed);
            }
        }
        Commands::FixExercises { input, output } => {
            let source = read(&input)?;
            let mut exercise: Exercise = serde_yaml::from_str(&source)
                .with_context(|| format!("Invalid exercise file '{}'", input.display()))?;

            let report = fix_exercise_chords(&mut exercise)
                .with_context(|| format!("Cannot fix exercise '{}'", exercise.name))?;
            tracing::info!(
                exercise = exercise.name.as_str(),
                bars_corrected = report.bars_corrected,
                chords_regenerated = report.chords_regenerated,
                missing_chords = report.missing_chords.len(),
                "Fixed exercise chords"
            );

            let yaml = serde_yaml::to_string(&exercise)?;
            match output {
                Some(path) => {
                    fs::write(&path, yaml)
                        .with_context(|| format!("Error writing to '{}'", path.display()))?;
                    tracing::info!("Wrote exercise to {}", path.display());
                }
                None => print!("{}", yaml),
            }
        }
        Commands::Request { input, riff } => {
            let request: TransposeRequest = serde_json::from_str(&read(&input)?)
                .with_context(|| format!("Invalid transpose request '{}'", input.display()))?;
            let riff: Option<Riff> = match riff {
                Some(path) => Some(
                    serde_yaml::from_str(&read(&path)?)
                        .with_context(|| format!("Invalid riff file '{}'", path.display()))?,
                ),
                None => None,
            };

            let response = transpose_request(&request, riff.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Error reading file '{}'", path.display()))
}

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use axidoc::analysis::assembler::DocumentAssembler;
use axidoc::analysis::rank::rank_by_name;
use axidoc::config::Config;
use axidoc::nlp::provider::StaticEmbeddingProvider;
use axidoc::nlp::vectors::StaticVectors;
use axidoc::output::report::{AnalysisReport, ReportLimits};
use axidoc::reference::{self, Reference};
use axidoc::repr::kind::ReprKind;
use axidoc::segment::{WindowProp, WindowType};

/// axidoc: find the passages of a document most relevant to a reference text.
///
/// Compares a document against a reference statement using bag-of-words
/// counts and two word-vector spaces, window by window.
#[derive(Parser)]
#[command(name = "axidoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the windows of a document by similarity to a reference
    Analyze {
        /// Plain-text document to analyze
        file: PathBuf,

        #[command(flatten)]
        input: InputArgs,

        /// Number of windows to show per representation (default: 5)
        #[arg(long, default_value = "5")]
        top: usize,

        /// Number of terms to list per window (default: 5)
        #[arg(long, default_value = "5")]
        terms: usize,

        /// Print the analysis as JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Write a Markdown relevance report for a document
    Report {
        /// Plain-text document to analyze
        file: PathBuf,

        /// Where to write the report
        #[arg(long, short)]
        output: PathBuf,

        #[command(flatten)]
        input: InputArgs,

        /// Number of windows to include per representation (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Show configured vector tables and reference corpora
    Status,
}

#[derive(Args)]
struct InputArgs {
    /// Built-in reference corpus: values or objectivity
    #[arg(long, default_value = "values")]
    reference: String,

    /// Compare against this text file instead of a built-in corpus
    #[arg(long)]
    reference_file: Option<PathBuf>,

    /// Window type: sentence, paragraph or fixed (any other name means fixed)
    #[arg(long)]
    window_type: Option<String>,

    /// Window size in tokens (fixed windows)
    #[arg(long)]
    window_size: Option<usize>,

    /// Tokens to advance between windows (fixed windows)
    #[arg(long)]
    window_shift: Option<usize>,

    /// Tokens shared by consecutive windows; used when no shift is given
    #[arg(long, conflicts_with = "window_shift")]
    window_overlap: Option<usize>,

    /// Analyze the whole document as a single window
    #[arg(long, conflicts_with_all = ["window_type", "window_size", "window_shift", "window_overlap"])]
    whole: bool,

    /// Rank by one representation only: bow, glove or word2vec
    #[arg(long)]
    kind: Option<String>,
}

impl InputArgs {
    /// Resolve the window flags against the configured defaults.
    fn window_prop(&self, config: &Config) -> Result<WindowProp> {
        if self.whole {
            return Ok(WindowProp::unset());
        }

        let window_type = self
            .window_type
            .as_deref()
            .map(str::parse::<WindowType>)
            .transpose()?;

        Ok(match window_type {
            Some(WindowType::Sentence) => WindowProp::sentences(),
            Some(WindowType::Paragraph) => WindowProp::paragraphs(),
            Some(WindowType::Fixed) | None => {
                match (self.window_size, self.window_shift, self.window_overlap) {
                    (None, None, None) => config.window_prop(),
                    (size, None, Some(overlap)) => WindowProp {
                        window_size: Some(size.unwrap_or(config.window_size)),
                        window_overlap: Some(overlap),
                        window_shift: None,
                        window_type: Some(WindowType::Fixed),
                    },
                    (size, shift, _) => WindowProp::fixed(
                        size.unwrap_or(config.window_size),
                        shift.unwrap_or(config.window_shift),
                    ),
                }
            }
        })
    }

    /// Load the comparison text and a label for it.
    fn reference_text(&self, config: &Config) -> Result<(String, String)> {
        if let Some(path) = &self.reference_file {
            let text = reference::load_reference_file(path)
                .with_context(|| format!("Failed to read reference file {}", path.display()))?;
            return Ok((text, display_name(path)));
        }

        let reference: Reference = self.reference.parse()?;
        config.require_data_dir()?;
        let text = reference::load_reference(&config.data_dir, reference)
            .with_context(|| format!("Failed to load the {reference} reference"))?;
        Ok((text, reference.to_string()))
    }

    /// Kinds to report, in display order.
    fn kinds(&self) -> Result<Vec<ReprKind>> {
        match self.kind.as_deref() {
            Some(name) => Ok(vec![name.parse()?]),
            None => Ok(ReprKind::ALL.to_vec()),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("axidoc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            input,
            top,
            terms,
            json,
        } => {
            let config = Config::load()?;
            let report = analyze(&config, &file, &input, ReportLimits { top, terms })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                axidoc::output::terminal::display_report(&report);
            }
        }

        Commands::Report {
            file,
            output,
            input,
            top,
        } => {
            let config = Config::load()?;
            let limits = ReportLimits {
                top,
                ..ReportLimits::default()
            };
            let report = analyze(&config, &file, &input, limits)?;

            axidoc::output::terminal::display_report(&report);
            let report_path = axidoc::output::markdown::write_report(&report, &output)?;
            println!(
                "\n{}",
                format!("Markdown report saved to: {report_path}").bold()
            );
        }

        Commands::Status => {
            let config = Config::load()?;
            axidoc::status::show(&config);
        }
    }

    Ok(())
}

/// Load everything, build and rank the wrapper, and summarize it.
fn analyze(
    config: &Config,
    file: &Path,
    input: &InputArgs,
    limits: ReportLimits,
) -> Result<AnalysisReport> {
    // Validate cheap arguments before loading the vector tables
    let window_prop = input.window_prop(config)?;
    let kinds = input.kinds()?;
    config.require_vectors()?;

    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read document {}", file.display()))?;
    let (comparison, reference_label) = input.reference_text(config)?;

    let glove = load_provider("glove", &config.glove_vectors, config)?;
    let word2vec = load_provider("word2vec", &config.word2vec_vectors, config)?;

    info!(
        file = %file.display(),
        reference = %reference_label,
        "Analyzing document"
    );

    let assembler = DocumentAssembler::new(&glove, &word2vec);
    let wrapper = assembler.build(Some(text.as_str()), Some(comparison.as_str()), &window_prop)?;
    let ranked = rank_by_name(&wrapper, input.kind.as_deref())?;

    Ok(AnalysisReport::from_wrapper(
        &ranked,
        display_name(file),
        reference_label,
        &kinds,
        limits,
    ))
}

/// Load a vector table behind a spinner and wrap it in a provider.
fn load_provider(name: &str, path: &Path, config: &Config) -> Result<StaticEmbeddingProvider> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Loading {name} vectors from {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let vectors = StaticVectors::load(path, config.max_vectors);
    spinner.finish_and_clear();

    let vectors = vectors.with_context(|| format!("Failed to load {name} vectors"))?;
    info!(
        provider = name,
        words = vectors.len(),
        dim = vectors.dim(),
        "Vectors loaded"
    );
    Ok(StaticEmbeddingProvider::new(name, vectors).with_filter(config.token_filter()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

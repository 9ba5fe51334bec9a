use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use vigenere_breaker::report;
use vigenere_breaker::{Analysis, AnalysisConfig, Analyzer, KasiskiEstimate, Language};

#[derive(Parser)]
#[command(name = "vigenere-breaker")]
#[command(version)]
#[command(about = "Recover Vigenère keys with Kasiski examination and frequency analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest key lengths with the Kasiski examination
    Suggest {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Enumerate candidate keys and decode the ciphertext with each
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Key length (defaults to the smallest Kasiski suggestion)
        #[arg(long)]
        key_length: Option<usize>,

        /// Fail instead of producing more candidate keys than this
        #[arg(long)]
        max_candidates: Option<usize>,

        /// Report file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: Format,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Ciphertext file
    #[arg(long, short)]
    input: PathBuf,

    /// Language preset: english or lithuanian
    #[arg(long, default_value = "english")]
    language: Language,

    /// Custom alphabet letters (overrides the preset)
    #[arg(long, requires = "most_common")]
    alphabet: Option<String>,

    /// Most common plaintext letter of the custom alphabet
    #[arg(long)]
    most_common: Option<char>,

    /// Kasiski group size
    #[arg(long, default_value_t = vigenere_breaker::kasiski::DEFAULT_GROUP_SIZE)]
    group_size: usize,
}

impl SourceArgs {
    fn config(&self) -> AnalysisConfig {
        let config = match (&self.alphabet, self.most_common) {
            (Some(letters), Some(most_common)) => AnalysisConfig::custom(letters, most_common),
            (None, Some(most_common)) => {
                AnalysisConfig::custom(self.language.letters(), most_common)
            }
            _ => AnalysisConfig::new(self.language),
        };
        config.with_group_size(self.group_size)
    }

    fn read_ciphertext(&self) -> Result<String> {
        std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read ciphertext from {}", self.input.display()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{}', expected text or json", other)),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    suggestions: &'a KasiskiEstimate,
    analysis: &'a Analysis,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vigenere_breaker=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest { source } => {
            let analyzer = Analyzer::new(source.config())?;
            let ciphertext = source.read_ciphertext()?;
            let estimate = analyzer.suggest_key_lengths(&ciphertext)?;
            let mut stdout = io::stdout().lock();
            report::write_suggestions(&mut stdout, &estimate)?;
            Ok(())
        }
        Commands::Analyze {
            source,
            key_length,
            max_candidates,
            output,
            format,
        } => {
            let mut config = source.config();
            if let Some(max) = max_candidates {
                config = config.with_max_candidates(max);
            }
            let analyzer = Analyzer::new(config)?;
            let ciphertext = source.read_ciphertext()?;

            let estimate = analyzer.suggest_key_lengths(&ciphertext)?;
            let key_length = match key_length {
                Some(length) => length,
                None => {
                    let length = estimate.best();
                    info!(
                        key_length = length,
                        suggestions = ?estimate.suggestions,
                        "using Kasiski suggestion as key length"
                    );
                    length
                }
            };

            let analysis = analyzer.analyze(&ciphertext, key_length)?;

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path).with_context(
                    || format!("failed to create report file {}", path.display()),
                )?)),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            match format {
                Format::Text => report::write_report(&mut out, &analysis, Some(&estimate))?,
                Format::Json => {
                    let json = JsonReport {
                        suggestions: &estimate,
                        analysis: &analysis,
                    };
                    serde_json::to_writer_pretty(&mut out, &json)?;
                    writeln!(out)?;
                }
            }
            out.flush()?;

            if let Some(path) = output {
                info!(path = %path.display(), "report written");
            }
            Ok(())
        }
    }
}

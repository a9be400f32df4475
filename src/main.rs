//!
//! `toker` - print the tokens of a source file.
//!

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use toker::{Goal, Lexeme, ScannerConfig, SourceFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "toker", version, about = "Tokenize ECMAScript-like source text")]
struct Cli {
    /// File to tokenize.
    file: PathBuf,

    /// Print comments as tokens instead of skipping them.
    #[arg(long)]
    emit_comments: bool,

    /// Label for the `source` of every token (defaults to the file path).
    #[arg(long)]
    label: Option<String>,

    /// Read every `/` as division rather than the start of a regular expression.
    #[arg(long)]
    div: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file = SourceFile::read_from_file(&cli.file)
        .with_context(|| format!("Could not read {}", cli.file.display()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    tokenize(&cli, &file, &mut out)?;

    out.flush()?;
    Ok(())
}

///
/// Write one line per token of `file`: `loc  tag  lexeme`.
///
fn tokenize(cli: &Cli, file: &SourceFile, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config = ScannerConfig::default().emit_comments(cli.emit_comments);
    if let Some(label) = &cli.label {
        config = config.with_source(label.as_str());
    }

    let goal = if cli.div { Goal::Div } else { Goal::RegExp };
    let mut scanner = file.scanner(config);

    loop {
        let token = scanner
            .next_token_with(goal)
            .with_context(|| format!("Could not tokenize {}", file.path()))?;

        if token.is_eof() {
            break;
        }

        let lexeme = match &token.lexeme {
            Lexeme::Text(text) => format!("{text:?}"),
            Lexeme::Number(n) => n.to_string(),
        };

        writeln!(out, "{}\t{}\t{}", token.loc, token.tag, lexeme)?;
    }

    Ok(())
}

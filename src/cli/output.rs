//! Output formatting for CLI commands.

use std::fmt::Display;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::morph::Parse;
use crate::cli::args::{OutputFormat, StemlineArgs};
use crate::error::Result;
use crate::pipeline::{ErrorResponse, StemmingResponse, TokenTrace};

/// Lemma candidates for one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaResult {
    pub word: String,
    pub candidates: Vec<Parse>,
}

/// Trace of one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphTrace {
    pub paragraph: String,
    pub tokens: Vec<TokenTrace>,
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for StemmingResponse {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for (index, stems) in self.stems.iter().enumerate() {
            match self.errors.iter().find(|e| e.paragraph == index) {
                Some(failure) => writeln!(out, "! {}", failure.error)?,
                None => writeln!(out, "{}", stems.join(" "))?,
            }
        }
        Ok(())
    }
}

impl HumanOutput for Vec<ParagraphTrace> {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, trace) in self.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "Paragraph {}: {}", i, trace.paragraph)?;
            writeln!(out, "═══════════════")?;

            for token in &trace.tokens {
                let verdict = match (&token.class, token.stopped) {
                    (_, true) => "stop word".to_string(),
                    (Some(class), false) => class.to_string(),
                    (None, false) => "-".to_string(),
                };
                writeln!(
                    out,
                    "  [{}] {} ({}) -> {}",
                    token.position,
                    token.token,
                    verdict,
                    format_list(&token.stems)
                )?;
                for fragment in &token.fragments {
                    writeln!(
                        out,
                        "      {} [{}] -> {}",
                        fragment.fragment, fragment.script, fragment.stem
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl HumanOutput for Vec<LemmaResult> {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for result in self {
            writeln!(out, "{}:", result.word)?;
            for (rank, parse) in result.candidates.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {} (score: {:.3})",
                    rank + 1,
                    parse.normal_form,
                    parse.score
                )?;
            }
        }
        Ok(())
    }
}

fn format_list<T: Display>(items: &[T]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &StemlineArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, args)?;
    out.flush()?;
    Ok(())
}

/// Write a result to any writer in the specified format.
pub fn write_result<T>(out: &mut dyn Write, result: &T, args: &StemlineArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => write_json(out, result, args.pretty)?,
    }
    Ok(())
}

/// Output in JSON format.
fn write_json<T: Serialize>(out: &mut dyn Write, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Report a fatal error: a JSON error document on stdout in JSON mode,
/// `Error: ...` on stderr otherwise.
pub fn output_error(error: &anyhow::Error, args: &StemlineArgs) {
    match args.output_format {
        OutputFormat::Json => {
            let response = ErrorResponse::new(format!("{error:#}"));
            let stdout = io::stdout();
            if write_json(&mut stdout.lock(), &response, args.pretty).is_err() {
                eprintln!("Error: {error:#}");
            }
        }
        OutputFormat::Human => eprintln!("Error: {error:#}"),
    }
}

//! Command implementations for Stemline CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::analysis::char_filter::{CharFilter, UnicodeNormalizationCharFilter};
use crate::analysis::morph::MorphAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::pipeline::{
    FailurePolicy, PipelineConfig, Resources, StemmingPipeline, StemmingRequest, Tracer,
};

/// Execute a CLI command.
pub fn execute_command(args: &StemlineArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    match &args.command {
        Command::Stem(stem_args) => stem(stem_args, config, args),
        Command::Trace(trace_args) => trace(trace_args, &config, args),
        Command::Lemma(lemma_args) => lemma(lemma_args, &config, args),
    }
}

/// Load the pipeline configuration, falling back to defaults.
fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let config = PipelineConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Input paragraphs, kept as bytes until the pipeline validates them.
enum Input {
    Request(StemmingRequest),
    Lines(Vec<Vec<u8>>),
}

/// Stem paragraphs from the arguments, a file or stdin.
fn stem(args: &StemArgs, mut config: PipelineConfig, cli_args: &StemlineArgs) -> Result<()> {
    if let Some(policy) = args.failure_policy {
        config.failure_policy = match policy {
            FailurePolicyArg::Abort => FailurePolicy::AbortBatch,
            FailurePolicyArg::Isolate => FailurePolicy::IsolateParagraph,
        };
    }
    if args.sequential {
        config.parallel = false;
    }

    let input = match (&args.input, args.paragraphs.is_empty()) {
        (Some(path), _) => read_input(path)?,
        (None, false) => Input::Request(StemmingRequest::new(args.paragraphs.iter().cloned())),
        (None, true) => Input::Lines(split_lines(&read_stdin()?)),
    };

    let pipeline = StemmingPipeline::from_config(&config).context("Failed to build pipeline")?;

    let start_time = Instant::now();
    let response = match &input {
        Input::Request(request) => pipeline.process(request)?,
        Input::Lines(lines) => pipeline.process_bytes(lines)?,
    };
    info!(
        "Stemmed {} paragraphs in {} ms",
        response.stems.len(),
        start_time.elapsed().as_millis()
    );

    output_result(&response, cli_args)?;
    Ok(())
}

/// Trace paragraphs token by token.
fn trace(args: &TraceArgs, config: &PipelineConfig, cli_args: &StemlineArgs) -> Result<()> {
    let resources = Resources::load(config).context("Failed to load resources")?;
    let tracer = Tracer::new(&resources, config)?;

    let traces = args
        .paragraphs
        .iter()
        .map(|paragraph| -> Result<ParagraphTrace> {
            Ok(ParagraphTrace {
                paragraph: paragraph.clone(),
                tokens: tracer.trace(paragraph)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(&traces, cli_args)?;
    Ok(())
}

/// Show ranked lemma candidates.
fn lemma(args: &LemmaArgs, config: &PipelineConfig, cli_args: &StemlineArgs) -> Result<()> {
    let resources = Resources::load(config).context("Failed to load resources")?;
    let normalizer = UnicodeNormalizationCharFilter::new(config.normalization);

    let mut results = Vec::with_capacity(args.words.len());
    for word in &args.words {
        let normalized = normalizer.filter(word).to_lowercase();
        let mut candidates = resources
            .lemmatizer()
            .analyze(&normalized)
            .with_context(|| format!("Failed to analyze '{word}'"))?;
        if args.first {
            candidates.truncate(1);
        }
        results.push(LemmaResult {
            word: normalized,
            candidates,
        });
    }

    output_result(&results, cli_args)?;
    Ok(())
}

fn read_input(path: &Path) -> Result<Input> {
    let bytes = if path == Path::new("-") {
        read_stdin()?
    } else {
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };
    debug!("Read {} bytes of input", bytes.len());

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let request: StemmingRequest = serde_json::from_slice(&bytes)
            .with_context(|| format!("Invalid request in {}", path.display()))?;
        Ok(Input::Request(request))
    } else {
        Ok(Input::Lines(split_lines(&bytes)))
    }
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(bytes)
}

/// Split input into one paragraph per line.
///
/// A trailing newline does not start another paragraph and `\r\n` endings
/// are accepted.
fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    if bytes.is_empty() {
        return Vec::new();
    }
    bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}

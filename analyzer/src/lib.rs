use anyhow::{bail, Context, Result};
use booklex_core::{index_file, Normalizer, Statistics, WordIndex};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
pub struct Report {
    pub generated_at: String,
    pub sources: Vec<String>,
    pub lines: usize,
    pub statistics: Statistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

/// Resolve `input` to the documents to analyze: the file itself, or every
/// `.txt` file under a directory in sorted path order. Symlinks are
/// followed; any walk error aborts collection.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk {}", input.display()))?;
            let p = entry.path();
            if entry.file_type().is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        bail!("input {} does not exist", input.display());
    }
    Ok(files)
}

/// Index every file in order, aborting on the first read failure.
pub fn analyze(files: &[PathBuf], normalizer: &Normalizer) -> Result<(WordIndex, usize)> {
    let mut index = WordIndex::new();
    let mut lines = 0;
    for file in files {
        let summary = index_file(file, normalizer, &mut index)?;
        lines += summary.lines;
    }
    tracing::info!(files = files.len(), lines, unique = index.unique_word_count(), total = index.total_word_count(), "analysis complete");
    Ok((index, lines))
}

pub fn build_report(files: &[PathBuf], index: &WordIndex, lines: usize, prefixes: &[String], with_words: bool) -> Result<Report> {
    let generated_at = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .context("failed to format report timestamp")?;
    Ok(Report {
        generated_at,
        sources: files.iter().map(|p| p.display().to_string()).collect(),
        lines,
        statistics: index.statistics(prefixes),
        words: with_words.then(|| index.ordered_words().map(str::to_string).collect()),
    })
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = format!("{}\n", report.statistics);
            if let Some(words) = &report.words {
                out.push_str("\nWords in Inorder Traversal:\n");
                for word in words {
                    writeln!(out, "{word}")?;
                }
            }
            Ok(out)
        }
    }
}

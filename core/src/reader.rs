use crate::index::WordIndex;
use crate::normalizer::Normalizer;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lines and tokens consumed by a successful read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    pub lines: usize,
    pub tokens: usize,
}

/// Feed every line of `reader` through `normalizer` into `index`.
///
/// Stops at the first read error. Lines read before the failure stay indexed.
pub fn index_reader<R: BufRead>(reader: R, normalizer: &Normalizer, index: &mut WordIndex) -> Result<ReadSummary> {
    let mut summary = ReadSummary::default();
    for line in reader.lines() {
        let line = line.with_context(|| format!("failed reading line {}", summary.lines + 1))?;
        summary.lines += 1;
        for word in normalizer.tokenize(&line) {
            index.insert(word);
            summary.tokens += 1;
        }
    }
    Ok(summary)
}

pub fn index_file<P: AsRef<Path>>(path: P, normalizer: &Normalizer, index: &mut WordIndex) -> Result<ReadSummary> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let summary = index_reader(BufReader::new(f), normalizer, index)
        .inspect_err(|e| tracing::warn!(path = %path.display(), error = %e, "read aborted"))
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), lines = summary.lines, tokens = summary.tokens, "indexed file");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn counts_lines_and_tokens() {
        let mut index = WordIndex::new();
        let text = "The owl and the eel\n\nan owl!\n";
        let summary = index_reader(Cursor::new(text), &Normalizer::new(), &mut index).unwrap();
        assert_eq!(summary, ReadSummary { lines: 3, tokens: 3 });
        assert_eq!(index.count("owl"), 2);
        assert_eq!(index.count("eel"), 1);
    }
}

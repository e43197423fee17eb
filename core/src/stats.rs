use crate::index::WordIndex;
use serde::Serialize;
use std::fmt;

/// Prefixes summed by the reference "o/e words" statistic.
pub const REFERENCE_PREFIXES: [&str; 2] = ["o", "e"];

/// Snapshot of the scalar statistics of a [`WordIndex`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub unique_words: usize,
    pub total_words: usize,
    pub max_word_count: usize,
    pub hapax_ratio: f64,
    pub type_token_ratio: f64,
    pub prefixes: Vec<String>,
    pub prefix_sum: usize,
    pub mean_word_length: f64,
}

impl WordIndex {
    pub fn statistics<I, S>(&self, prefixes: I) -> Statistics
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(|p| p.as_ref().to_string()).collect();
        Statistics {
            unique_words: self.unique_word_count(),
            total_words: self.total_word_count(),
            max_word_count: self.max_word_count(),
            hapax_ratio: self.hapax_ratio(),
            type_token_ratio: self.type_token_ratio(),
            prefix_sum: self.sum_prefixes(&prefixes),
            prefixes,
            mean_word_length: self.mean_word_length(),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.prefixes.iter().map(|p| format!("'{p}'")).collect();
        writeln!(f, "Unique Word Count: {}", self.unique_words)?;
        writeln!(f, "Total Word Count: {}", self.total_words)?;
        writeln!(f, "Max Word Count: {}", self.max_word_count)?;
        // `{:?}` keeps the fractional part of whole numbers ("2.0", not "2")
        writeln!(f, "Hapax Value: {:?}", self.hapax_ratio)?;
        writeln!(f, "TTR Value: {:?}", self.type_token_ratio)?;
        writeln!(f, "Sum of Words with Prefix {}: {}", quoted.join(" and "), self.prefix_sum)?;
        write!(f, "Mean Word Length: {:?}", self.mean_word_length)
    }
}

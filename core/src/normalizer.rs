use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Function words that are never indexed.
pub const DEFAULT_STOPWORDS: [&str; 26] = [
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in",
    "is", "it", "its", "of", "on", "that", "the", "to", "she", "was", "where", "will", "with",
];

lazy_static! {
    // ASCII whitespace only, vertical tab included
    static ref WS: Regex = Regex::new(r"(?-u:\s)+").expect("valid regex");
    static ref STRIP: Regex = Regex::new(r"[^a-zA-Z']+").expect("valid regex");
    static ref DEFAULT: Normalizer = Normalizer::new();
}

/// Turns raw lines into normalized word tokens.
///
/// The stop-word set is fixed at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self { Self::new() }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::with_stopwords(DEFAULT_STOPWORDS)
    }

    /// Normalizer over a caller-supplied stop-word set. Entries are matched
    /// against already-lowercased tokens, so they should be lowercase too.
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { stopwords: words.into_iter().map(Into::into).collect() }
    }

    pub fn is_stopword(&self, word: &str) -> bool { self.stopwords.contains(word) }

    /// Lazily yields the normalized, non-stop-word tokens of `line` in order.
    pub fn tokenize<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        WS.split(line).filter(|p| !p.is_empty()).filter_map(move |piece| {
            let word = STRIP.replace_all(piece, "").to_ascii_lowercase();
            if word.is_empty() || self.is_stopword(&word) { None } else { Some(word) }
        })
    }
}

/// Tokenize with the default stop-word set.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    DEFAULT.tokenize(line)
}

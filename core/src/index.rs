use std::collections::BTreeMap;
use std::ops::Bound;

/// Ordered word-frequency index.
///
/// Keys are normalized words compared by byte order; every stored count is at
/// least 1. Entries are only ever added or incremented.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordIndex {
    counts: BTreeMap<String, usize>,
}

impl WordIndex {
    pub fn new() -> Self { Self::default() }

    /// Increment the count for `word`, creating it with count 1 if absent.
    /// The word is stored as given; callers normalize beforehand.
    pub fn insert(&mut self, word: impl Into<String>) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
    }

    /// Fold another index into this one, summing counts for equal words.
    pub fn merge(&mut self, other: WordIndex) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// `(word, count)` pairs in ascending word order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Every stored word exactly once, ascending.
    pub fn ordered_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    pub fn unique_word_count(&self) -> usize { self.counts.len() }

    /// Sum of all counts; equals the number of `insert` calls.
    pub fn total_word_count(&self) -> usize { self.counts.values().sum() }

    /// Largest count, or 0 when empty.
    pub fn max_word_count(&self) -> usize { self.counts.values().copied().max().unwrap_or(0) }

    /// Number of words seen exactly once.
    pub fn hapax_count(&self) -> usize { self.counts.values().filter(|&&c| c == 1).count() }

    pub fn hapax_ratio(&self) -> f64 {
        ratio(self.hapax_count(), self.total_word_count())
    }

    pub fn type_token_ratio(&self) -> f64 {
        ratio(self.unique_word_count(), self.total_word_count())
    }

    /// Sum of counts of words starting with `prefix`.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        // Words sharing a prefix are contiguous in byte order.
        self.counts
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(w, _)| w.starts_with(prefix))
            .map(|(_, c)| *c)
            .sum()
    }

    /// Sum of `prefix_count` over each prefix. Overlapping prefixes count a
    /// word once per matching prefix.
    pub fn sum_prefixes<I, S>(&self, prefixes: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        prefixes.into_iter().map(|p| self.prefix_count(p.as_ref())).sum()
    }

    /// Sum over entries of `len(word) * count`, in bytes.
    pub fn total_word_length(&self) -> usize {
        self.counts.iter().map(|(w, c)| w.len() * c).sum()
    }

    pub fn mean_word_length(&self) -> f64 {
        ratio(self.total_word_length(), self.total_word_count())
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

impl<S: Into<String>> Extend<S> for WordIndex {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut index = WordIndex::new();
        index.extend(iter);
        index
    }
}

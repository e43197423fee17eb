//! Word-frequency indexing and lexical statistics for plain-text documents.

pub mod index;
pub mod normalizer;
pub mod reader;
pub mod stats;

pub use index::WordIndex;
pub use normalizer::{tokenize, Normalizer, DEFAULT_STOPWORDS};
pub use reader::{index_file, index_reader, ReadSummary};
pub use stats::{Statistics, REFERENCE_PREFIXES};

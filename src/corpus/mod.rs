// Token source — corpus loading, cleaning, and stopword filtering.

pub mod preprocess;
pub mod stopwords;

pub use preprocess::{load_corpus, strip_gutenberg, tokenize};
pub use stopwords::stopword_set;

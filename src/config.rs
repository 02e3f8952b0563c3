use std::path::PathBuf;

use anyhow::Result;

/// Run configuration for one analysis pass.
///
/// Everything comes from the command line — there is no persistent state or
/// environment to reinitialize between corpora, so two runs with different
/// languages or stopword files are fully independent.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the raw corpus text file.
    pub corpus_path: PathBuf,
    /// Top-N cutoff: capacity of the space-saving tracker and the length of
    /// every reported ranking.
    pub top_n: usize,
    /// Seed for the decaying-probability counter's RNG. When unset, each run
    /// draws fresh entropy; set it for deterministic replay.
    pub seed: Option<u64>,
    /// Stopword language code (passed to the stop-words crate).
    pub language: String,
    /// Optional file of extra stopwords, one per line, merged into the
    /// language list.
    pub extra_stopwords: Option<PathBuf>,
}

impl RunConfig {
    /// Check that the top-N cutoff is usable before any counting starts.
    ///
    /// The bounded tracker and the estimator both need N >= 1; catching this
    /// here means no counter is ever constructed with a zero capacity.
    pub fn require_valid_cutoff(&self) -> Result<()> {
        if self.top_n < 1 {
            anyhow::bail!(
                "top-N cutoff must be at least 1 (got {}). \
                 Pass a positive value to --top.",
                self.top_n
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_top(top_n: usize) -> RunConfig {
        RunConfig {
            corpus_path: PathBuf::from("corpus.txt"),
            top_n,
            seed: None,
            language: "english".to_string(),
            extra_stopwords: None,
        }
    }

    #[test]
    fn zero_cutoff_rejected() {
        assert!(config_with_top(0).require_valid_cutoff().is_err());
    }

    #[test]
    fn positive_cutoff_accepted() {
        assert!(config_with_top(1).require_valid_cutoff().is_ok());
        assert!(config_with_top(10).require_valid_cutoff().is_ok());
    }
}

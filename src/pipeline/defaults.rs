use crate::alignment::expansion::expand_transcript_words;
use crate::alignment::greedy::{align_greedy, DEFAULT_LOOKAHEAD};
use crate::error::AlignmentError;
use crate::pipeline::traits::{SequenceAligner, WordExpander};
use crate::types::{AlignmentVector, WordResult};

pub struct NormalizingWordExpander;

impl WordExpander for NormalizingWordExpander {
    fn expand(&self, transcript: &str) -> Vec<String> {
        expand_transcript_words(transcript)
    }
}

pub struct GreedySequenceAligner {
    hypothesis: Vec<String>,
    lookahead: usize,
}

impl GreedySequenceAligner {
    pub fn new(hypothesis: Vec<String>) -> Self {
        Self {
            hypothesis,
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }

    pub fn from_results(results: &[WordResult]) -> Self {
        Self::new(results.iter().map(|r| r.spelling.clone()).collect())
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead.max(1);
        self
    }
}

impl SequenceAligner for GreedySequenceAligner {
    fn align(&self, reference: &[String]) -> Result<AlignmentVector, AlignmentError> {
        let alignment = align_greedy(&self.hypothesis, reference, self.lookahead);
        tracing::debug!(
            reference_len = reference.len(),
            hypothesis_len = self.hypothesis.len(),
            matched = alignment.matched_count(),
            "aligned transcript to recognition"
        );
        Ok(alignment)
    }
}

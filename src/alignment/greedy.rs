use crate::types::AlignmentVector;

/// Default number of unconsumed recognized words searched per reference token.
pub const DEFAULT_LOOKAHEAD: usize = 8;

/// Matches each reference token against the next `lookahead` unconsumed
/// hypothesis spellings, consuming up to and including the first equal one.
///
/// The result is monotone by construction: the search cursor only moves forward.
pub fn align_greedy(hypothesis: &[String], reference: &[String], lookahead: usize) -> AlignmentVector {
    let mut cursor = 0usize;
    let mut indices = Vec::with_capacity(reference.len());

    for token in reference {
        let window_end = cursor.saturating_add(lookahead).min(hypothesis.len());
        let hit = hypothesis[cursor..window_end]
            .iter()
            .position(|spelling| spelling == token)
            .map(|offset| cursor + offset);
        match hit {
            Some(idx) => {
                indices.push(Some(idx));
                cursor = idx + 1;
            }
            None => indices.push(None),
        }
    }

    AlignmentVector::new(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn identical_sequences_align_diagonally() {
        let seq = words("one zero zero nine");
        let alignment = align_greedy(&seq, &seq, DEFAULT_LOOKAHEAD);
        assert_eq!(alignment.as_slice(), &[Some(0), Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn substitution_becomes_deletion() {
        let alignment = align_greedy(&words("a x c"), &words("a b c"), DEFAULT_LOOKAHEAD);
        assert_eq!(alignment.as_slice(), &[Some(0), None, Some(2)]);
    }

    #[test]
    fn skips_leading_insertions_within_window() {
        let alignment = align_greedy(&words("uh a b"), &words("a b"), DEFAULT_LOOKAHEAD);
        assert_eq!(alignment.as_slice(), &[Some(1), Some(2)]);
    }

    #[test]
    fn lookahead_bounds_the_search() {
        let hypothesis = words("x x x a");
        let alignment = align_greedy(&hypothesis, &words("a"), 2);
        assert_eq!(alignment.as_slice(), &[None]);
        let alignment = align_greedy(&hypothesis, &words("a"), 4);
        assert_eq!(alignment.as_slice(), &[Some(3)]);
    }

    #[test]
    fn empty_hypothesis_yields_all_deletions() {
        let alignment = align_greedy(&[], &words("alpha beta"), DEFAULT_LOOKAHEAD);
        assert_eq!(alignment.as_slice(), &[None, None]);
    }

    #[test]
    fn output_always_validates() {
        let hypothesis = words("a b a b c a");
        let reference = words("b b a c c a x");
        let alignment = align_greedy(&hypothesis, &reference, 3);
        assert!(alignment.validate(reference.len(), hypothesis.len()).is_ok());
    }
}

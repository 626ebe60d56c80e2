/// Splits a transcript into lowercase reference tokens.
///
/// Inside each whitespace-separated word only alphanumerics and apostrophes
/// are kept; words left empty are dropped.
pub fn expand_transcript_words(transcript: &str) -> Vec<String> {
    let cleaned = transcript.to_lowercase();
    let mut words = Vec::new();

    for word in cleaned.split_whitespace() {
        let normalized: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'')
            .collect();
        let normalized = normalized.trim_matches('\'');
        if normalized.is_empty() {
            continue;
        }
        words.push(normalized.to_string());
    }

    debug_assert!(
        words.iter().all(|w| !w.chars().any(char::is_whitespace)),
        "expanded token contains whitespace"
    );
    words
}

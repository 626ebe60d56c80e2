use crate::audio::AudioSource;
use crate::error::AlignmentError;
use crate::types::{AlignmentVector, WordResult};

/// Turns a transcript into the ordered reference tokens the report walks.
pub trait WordExpander: Send + Sync {
    fn expand(&self, transcript: &str) -> Vec<String>;
}

/// Maps reference tokens onto a recognized-word sequence fixed at construction.
pub trait SequenceAligner: Send + Sync {
    fn align(&self, reference: &[String]) -> Result<AlignmentVector, AlignmentError>;
}

/// Produces time-stamped recognized words for an audio/transcript pair.
pub trait SpeechAligner: Send + Sync {
    fn align(&self, audio: AudioSource, transcript: &str) -> Result<Vec<WordResult>, AlignmentError>;

    fn word_expander(&self) -> &dyn WordExpander;
}

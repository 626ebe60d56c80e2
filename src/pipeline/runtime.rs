use std::path::{Path, PathBuf};

use crate::audio::AudioSource;
use crate::error::AlignmentError;
use crate::pipeline::traits::{SpeechAligner, WordExpander};
use crate::types::WordResult;

/// Extension of the recognition sidecar stored next to each recording.
pub const HYPOTHESIS_EXTENSION: &str = "words.json";

/// Speech aligner that replays a recorded recognizer hypothesis.
///
/// The hypothesis for `clip.wav` lives in `clip.words.json`: a JSON array of
/// [`WordResult`] in time order.
pub struct RecordedSpeechAligner {
    model_name: String,
    expected_sample_rate_hz: u32,
    word_expander: Box<dyn WordExpander>,
}

pub(crate) struct RecordedSpeechAlignerParts {
    pub model_name: String,
    pub expected_sample_rate_hz: u32,
    pub word_expander: Box<dyn WordExpander>,
}

impl RecordedSpeechAligner {
    pub(crate) fn from_parts(parts: RecordedSpeechAlignerParts) -> Self {
        Self {
            model_name: parts.model_name,
            expected_sample_rate_hz: parts.expected_sample_rate_hz,
            word_expander: parts.word_expander,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn expected_sample_rate_hz(&self) -> u32 {
        self.expected_sample_rate_hz
    }
}

impl SpeechAligner for RecordedSpeechAligner {
    fn align(&self, audio: AudioSource, transcript: &str) -> Result<Vec<WordResult>, AlignmentError> {
        let audio_path = audio.path().to_path_buf();
        let format = audio.probe_format()?;
        format.check(self.expected_sample_rate_hz, &audio_path)?;

        if self.word_expander.expand(transcript).is_empty() {
            tracing::warn!("transcript has no speakable words; nothing to align");
            return Ok(Vec::new());
        }

        let words = load_hypothesis(&hypothesis_path(&audio_path))?;
        tracing::info!(
            model = %self.model_name,
            audio = %audio_path.display(),
            word_count = words.len(),
            "loaded recognition hypothesis"
        );
        Ok(words)
    }

    fn word_expander(&self) -> &dyn WordExpander {
        self.word_expander.as_ref()
    }
}

pub fn hypothesis_path(audio_path: &Path) -> PathBuf {
    audio_path.with_extension(HYPOTHESIS_EXTENSION)
}

fn load_hypothesis(path: &Path) -> Result<Vec<WordResult>, AlignmentError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| AlignmentError::io("reading recognition hypothesis", e))?;
    let words: Vec<WordResult> = serde_json::from_str(&data)
        .map_err(|e| AlignmentError::json("parsing recognition hypothesis", e))?;

    let mut prev_start = 0u64;
    for (idx, word) in words.iter().enumerate() {
        let frame = word.time_frame;
        if frame.end_ms < frame.start_ms {
            return Err(AlignmentError::invalid_input(format!(
                "hypothesis word {idx} '{}' ends before it starts ({frame})",
                word.spelling
            )));
        }
        if frame.start_ms < prev_start {
            return Err(AlignmentError::invalid_input(format!(
                "hypothesis word {idx} '{}' starts at {} ms, before the previous word",
                word.spelling, frame.start_ms
            )));
        }
        prev_start = frame.start_ms;
    }
    Ok(words)
}

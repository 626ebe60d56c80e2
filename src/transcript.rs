use std::path::{Path, PathBuf};

use crate::error::AlignmentError;

/// Reference text for the bundled sample recording.
pub const DEFAULT_TRANSCRIPT: &str =
    "one zero zero zero one nine oh two one oh zero one eight zero three";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptSource {
    Inline(String),
    File(PathBuf),
}

impl Default for TranscriptSource {
    fn default() -> Self {
        Self::Inline(DEFAULT_TRANSCRIPT.to_string())
    }
}

impl TranscriptSource {
    pub fn load(&self) -> Result<String, AlignmentError> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => read_utf8(path),
        }
    }
}

fn read_utf8(path: &Path) -> Result<String, AlignmentError> {
    let bytes = std::fs::read(path).map_err(|e| AlignmentError::io("reading transcript", e))?;
    let text = String::from_utf8(bytes).map_err(|source| AlignmentError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        tracing::warn!(path = %path.display(), "transcript file is empty");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_inline_sample_text() {
        let text = TranscriptSource::default().load().unwrap();
        assert_eq!(text, DEFAULT_TRANSCRIPT);
        assert_eq!(text.split_whitespace().count(), 15);
    }

    #[test]
    fn file_source_reads_utf8() {
        let path = std::env::temp_dir().join("speech_align_rs_transcript_ok.txt");
        std::fs::write(&path, "café au lait\n").unwrap();
        let text = TranscriptSource::File(path.clone()).load().unwrap();
        assert_eq!(text, "café au lait\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn file_source_rejects_invalid_utf8() {
        let path = std::env::temp_dir().join("speech_align_rs_transcript_bad.txt");
        std::fs::write(&path, [0x6f, 0x6e, 0x65, 0xff, 0xfe]).unwrap();
        let err = TranscriptSource::File(path.clone()).load().unwrap_err();
        assert!(matches!(err, AlignmentError::Utf8 { .. }));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TranscriptSource::File(PathBuf::from("/nonexistent/transcript.txt"))
            .load()
            .unwrap_err();
        assert!(matches!(err, AlignmentError::Io { .. }));
    }
}

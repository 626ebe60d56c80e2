use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("transcript '{}' is not valid UTF-8: {source}", path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("failed to load model from '{location}': {message}")]
    ModelLoad { location: String, message: String },
    #[error("unsupported audio '{}': {message}", path.display())]
    AudioFormat { path: PathBuf, message: String },
    #[error("invalid alignment: {message}")]
    InvalidAlignment { message: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl AlignmentError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn model_load(location: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::ModelLoad {
            location: location.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn audio_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::AudioFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_alignment(message: impl Into<String>) -> Self {
        Self::InvalidAlignment {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

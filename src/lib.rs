pub mod alignment;
pub mod audio;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transcript;
pub mod types;

pub use alignment::report::{
    reconcile, write_report, write_report_json, ReportFormatter, ReportLine, ReportSummary,
    DEFAULT_FIELD_WIDTH,
};
pub use audio::AudioSource;
pub use config::AlignerConfig;
pub use error::AlignmentError;
pub use pipeline::builder::SpeechAlignerBuilder;
pub use pipeline::defaults::{GreedySequenceAligner, NormalizingWordExpander};
pub use pipeline::runtime::RecordedSpeechAligner;
pub use pipeline::traits::{SequenceAligner, SpeechAligner, WordExpander};
pub use transcript::{TranscriptSource, DEFAULT_TRANSCRIPT};
pub use types::{AlignmentVector, TimeFrame, WordResult};

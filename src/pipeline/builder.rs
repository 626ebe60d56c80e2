use std::path::Path;

use crate::audio::resolve_location;
use crate::config::{AcousticModelConfig, AlignerConfig};
use crate::error::AlignmentError;
use crate::pipeline::defaults::NormalizingWordExpander;
use crate::pipeline::runtime::{RecordedSpeechAligner, RecordedSpeechAlignerParts};
use crate::pipeline::traits::WordExpander;

const MODEL_CONFIG_FILE: &str = "config.json";

pub struct SpeechAlignerBuilder {
    config: AlignerConfig,
    word_expander: Option<Box<dyn WordExpander>>,
}

impl SpeechAlignerBuilder {
    pub fn new(config: AlignerConfig) -> Self {
        Self {
            config,
            word_expander: None,
        }
    }

    pub fn with_word_expander(mut self, word_expander: Box<dyn WordExpander>) -> Self {
        self.word_expander = Some(word_expander);
        self
    }

    pub fn build(self) -> Result<RecordedSpeechAligner, AlignmentError> {
        let root = &self.config.resource_root;

        let model_dir = resolve_location(&self.config.acoustic_model, root);
        if !model_dir.is_dir() {
            return Err(AlignmentError::model_load(
                &self.config.acoustic_model,
                format!("acoustic model directory not found at {}", model_dir.display()),
            ));
        }
        let model_cfg = AcousticModelConfig::load(&model_dir.join(MODEL_CONFIG_FILE))?;

        let fallback_rate_hz = if self.config.expected_sample_rate_hz == 0 {
            AlignerConfig::DEFAULT_SAMPLE_RATE_HZ
        } else {
            self.config.expected_sample_rate_hz
        };
        let expected_sample_rate_hz = model_cfg.sample_rate_hz.unwrap_or(fallback_rate_hz);

        let dictionary_path = resolve_location(&self.config.dictionary, root);
        let dictionary_entries = count_dictionary_entries(&self.config.dictionary, &dictionary_path)?;

        if let Some(g2p) = self.config.g2p_model.as_deref() {
            let g2p_path = resolve_location(g2p, root);
            if !g2p_path.exists() {
                return Err(AlignmentError::model_load(
                    g2p,
                    format!("g2p model not found at {}", g2p_path.display()),
                ));
            }
        }

        let model_name = if model_cfg.name.is_empty() {
            model_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            model_cfg.name
        };
        tracing::info!(
            model = %model_name,
            sample_rate_hz = expected_sample_rate_hz,
            dictionary_entries,
            g2p = self.config.g2p_model.is_some(),
            "speech aligner ready"
        );

        Ok(RecordedSpeechAligner::from_parts(RecordedSpeechAlignerParts {
            model_name,
            expected_sample_rate_hz,
            word_expander: self
                .word_expander
                .unwrap_or_else(|| Box::new(NormalizingWordExpander)),
        }))
    }
}

/// Counts pronunciation lines, skipping blanks and `;;;` comments.
fn count_dictionary_entries(location: &str, path: &Path) -> Result<usize, AlignmentError> {
    let data = std::fs::read_to_string(path).map_err(|e| AlignmentError::model_load(location, e))?;
    let entries = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(";;;"))
        .count();
    if entries == 0 {
        return Err(AlignmentError::model_load(location, "dictionary has no entries"));
    }
    Ok(entries)
}

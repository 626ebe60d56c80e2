use std::path::{Path, PathBuf};

use crate::error::AlignmentError;

#[derive(Debug, Clone)]
pub struct AlignerConfig {
    pub acoustic_model: String,
    pub dictionary: String,
    pub g2p_model: Option<String>,
    /// Directory that `resource:` locations resolve under.
    pub resource_root: PathBuf,
    pub expected_sample_rate_hz: u32,
}

impl AlignerConfig {
    pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 16_000;
    pub const DEFAULT_ACOUSTIC_MODEL: &'static str = "resource:models/acoustic/wsj";
    pub const DEFAULT_DICTIONARY: &'static str =
        "resource:models/acoustic/wsj/dict/cmudict.0.6d";

    pub fn bundled_resource_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
    }
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            acoustic_model: Self::DEFAULT_ACOUSTIC_MODEL.to_string(),
            dictionary: Self::DEFAULT_DICTIONARY.to_string(),
            g2p_model: None,
            resource_root: Self::bundled_resource_root(),
            expected_sample_rate_hz: Self::DEFAULT_SAMPLE_RATE_HZ,
        }
    }
}

/// Contents of `config.json` inside an acoustic model directory.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct AcousticModelConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sample_rate_hz: Option<u32>,
}

impl AcousticModelConfig {
    pub(crate) fn load(path: &Path) -> Result<Self, AlignmentError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| AlignmentError::model_load(path.display().to_string(), e))?;
        serde_json::from_str(&data)
            .map_err(|e| AlignmentError::model_load(path.display().to_string(), e))
    }
}

//! Resolution of audio locations to readable handles.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::AlignmentError;

pub const RESOURCE_PREFIX: &str = "resource:";

/// Joins a `resource:` identifier under `resource_root`; plain paths pass through.
pub fn resolve_location(location: &str, resource_root: &Path) -> PathBuf {
    match location.strip_prefix(RESOURCE_PREFIX) {
        Some(rel) => resource_root.join(rel.trim_start_matches('/')),
        None => PathBuf::from(location),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioContainer {
    Wav,
    Flac,
}

impl AudioContainer {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "wav" | "wave" => Some(Self::Wav),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }
}

/// An opened audio file. The underlying handle closes on drop.
#[derive(Debug)]
pub struct AudioSource {
    path: PathBuf,
    container: Option<AudioContainer>,
    reader: BufReader<File>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample_rate_hz: u32,
    pub bits_per_sample: u32,
    pub channels: u32,
}

impl AudioSource {
    pub fn open(location: &str, resource_root: &Path) -> Result<Self, AlignmentError> {
        let path = resolve_location(location, resource_root);
        tracing::debug!(location, path = %path.display(), "opening audio");
        let file = File::open(&path).map_err(|e| AlignmentError::io("opening audio file", e))?;
        Ok(Self {
            container: AudioContainer::from_path(&path),
            path,
            reader: BufReader::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn container(&self) -> Option<AudioContainer> {
        self.container
    }

    /// Reads the container header. Samples are not decoded.
    pub fn probe_format(self) -> Result<AudioFormat, AlignmentError> {
        match self.container {
            Some(AudioContainer::Wav) => {
                let reader = hound::WavReader::new(self.reader)
                    .map_err(|e| AlignmentError::audio_format(&self.path, e.to_string()))?;
                let spec = reader.spec();
                if spec.sample_format != hound::SampleFormat::Int {
                    return Err(AlignmentError::audio_format(
                        &self.path,
                        "expected linear PCM, found floating-point samples",
                    ));
                }
                Ok(AudioFormat {
                    sample_rate_hz: spec.sample_rate,
                    bits_per_sample: u32::from(spec.bits_per_sample),
                    channels: u32::from(spec.channels),
                })
            }
            Some(AudioContainer::Flac) => {
                let reader = claxon::FlacReader::new(self.reader)
                    .map_err(|e| AlignmentError::audio_format(&self.path, e.to_string()))?;
                let info = reader.streaminfo();
                Ok(AudioFormat {
                    sample_rate_hz: info.sample_rate,
                    bits_per_sample: info.bits_per_sample,
                    channels: info.channels,
                })
            }
            None => Err(AlignmentError::audio_format(
                &self.path,
                "unrecognized container; expected .wav or .flac",
            )),
        }
    }
}

impl AudioFormat {
    pub const REQUIRED_BITS_PER_SAMPLE: u32 = 16;

    pub fn check(&self, expected_sample_rate_hz: u32, path: &Path) -> Result<(), AlignmentError> {
        if self.sample_rate_hz != expected_sample_rate_hz
            || self.bits_per_sample != Self::REQUIRED_BITS_PER_SAMPLE
            || self.channels != 1
        {
            return Err(AlignmentError::audio_format(
                path,
                format!(
                    "expected {expected_sample_rate_hz} Hz, 16-bit, mono; found {} Hz, {}-bit, {} channel(s)",
                    self.sample_rate_hz, self.bits_per_sample, self.channels
                ),
            ));
        }
        Ok(())
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AlignmentError;

/// Millisecond interval `[start_ms, end_ms)`, start inclusive/end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFrame {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl TimeFrame {
    pub fn new(start_ms: u64, end_ms: u64) -> Result<Self, AlignmentError> {
        if end_ms < start_ms {
            return Err(AlignmentError::invalid_input(format!(
                "time frame ends before it starts: {start_ms}:{end_ms}"
            )));
        }
        Ok(Self { start_ms, end_ms })
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_ms, self.end_ms)
    }
}

/// A word hypothesis emitted by the speech aligner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordResult {
    pub spelling: String,
    pub time_frame: TimeFrame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl WordResult {
    pub fn new(spelling: impl Into<String>, time_frame: TimeFrame) -> Self {
        Self {
            spelling: spelling.into(),
            time_frame,
            confidence: None,
        }
    }
}

/// Monotone mapping from reference positions to recognized-word indices.
///
/// `None` marks a reference token with no recognized counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignmentVector(Vec<Option<usize>>);

impl AlignmentVector {
    pub fn new(indices: Vec<Option<usize>>) -> Self {
        Self(indices)
    }

    /// Builds a vector from signed indices where `-1` means "no match".
    pub fn from_raw(raw: &[i64]) -> Result<Self, AlignmentError> {
        raw.iter()
            .enumerate()
            .map(|(pos, &idx)| match idx {
                -1 => Ok(None),
                idx if idx >= 0 => Ok(Some(idx as usize)),
                idx => Err(AlignmentError::invalid_alignment(format!(
                    "position {pos} holds {idx}; only -1 may be negative"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.0
    }

    pub fn matched_count(&self) -> usize {
        self.0.iter().filter(|idx| idx.is_some()).count()
    }

    /// Checks length, range and strict monotonicity against `n` reference
    /// tokens and `m` recognized words.
    pub fn validate(
        &self,
        reference_len: usize,
        recognized_len: usize,
    ) -> Result<(), AlignmentError> {
        if self.0.len() != reference_len {
            return Err(AlignmentError::invalid_alignment(format!(
                "alignment has {} entries for {reference_len} reference tokens",
                self.0.len()
            )));
        }

        let mut last: Option<usize> = None;
        for (pos, idx) in self.0.iter().enumerate() {
            let Some(idx) = *idx else {
                continue;
            };
            if idx >= recognized_len {
                return Err(AlignmentError::invalid_alignment(format!(
                    "position {pos} points at recognized word {idx} but only {recognized_len} exist"
                )));
            }
            if let Some(prev) = last {
                if idx <= prev {
                    return Err(AlignmentError::invalid_alignment(format!(
                        "position {pos} maps to {idx} after {prev}; matches must strictly increase"
                    )));
                }
            }
            last = Some(idx);
        }
        Ok(())
    }
}

impl From<Vec<Option<usize>>> for AlignmentVector {
    fn from(indices: Vec<Option<usize>>) -> Self {
        Self(indices)
    }
}

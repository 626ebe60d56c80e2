use std::io::Write;

use serde::Serialize;

use crate::error::AlignmentError;
use crate::types::{AlignmentVector, TimeFrame, WordResult};

/// Column width of the spelling field on match and insertion lines.
pub const DEFAULT_FIELD_WIDTH: usize = 25;

/// One line of the reconciliation report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportLine<'a> {
    /// Reference token with no recognized counterpart.
    Deletion(&'a str),
    /// Recognized word not matched to any reference token.
    Insertion(&'a WordResult),
    /// Reference token paired with a recognized word.
    Match(&'a WordResult),
}

impl ReportLine<'_> {
    pub fn marker(&self) -> char {
        match self {
            Self::Deletion(_) => '-',
            Self::Insertion(_) => '+',
            Self::Match(_) => ' ',
        }
    }

    pub fn spelling(&self) -> &str {
        match self {
            Self::Deletion(word) => word,
            Self::Insertion(result) | Self::Match(result) => &result.spelling,
        }
    }

    pub fn time_frame(&self) -> Option<TimeFrame> {
        match self {
            Self::Deletion(_) => None,
            Self::Insertion(result) | Self::Match(result) => Some(result.time_frame),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub matched: usize,
    pub inserted: usize,
    pub deleted: usize,
}

impl ReportSummary {
    pub fn from_lines(lines: &[ReportLine<'_>]) -> Self {
        let mut summary = Self::default();
        for line in lines {
            match line {
                ReportLine::Deletion(_) => summary.deleted += 1,
                ReportLine::Insertion(_) => summary.inserted += 1,
                ReportLine::Match(_) => summary.matched += 1,
            }
        }
        summary
    }
}

/// Walks the reference tokens in order, interleaving insertions at the next
/// match site.
///
/// Recognized words are only reported once at least one match anchors them:
/// with no match at all the report holds deletions only. Trailing words after
/// the last match are appended as insertions.
pub fn reconcile<'a>(
    reference: &'a [String],
    recognized: &'a [WordResult],
    alignment: &AlignmentVector,
) -> Result<Vec<ReportLine<'a>>, AlignmentError> {
    alignment.validate(reference.len(), recognized.len())?;

    let mut lines = Vec::with_capacity(reference.len() + recognized.len());
    // Index one past the last emitted recognized word.
    let mut next: usize = 0;
    let mut anchored = false;

    for (word, idx) in reference.iter().zip(alignment.as_slice()) {
        match *idx {
            None => lines.push(ReportLine::Deletion(word)),
            Some(j) => {
                lines.extend(recognized[next..j].iter().map(ReportLine::Insertion));
                lines.push(ReportLine::Match(&recognized[j]));
                next = j + 1;
                anchored = true;
            }
        }
    }

    if anchored {
        lines.extend(recognized[next..].iter().map(ReportLine::Insertion));
    }

    Ok(lines)
}

#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    pub field_width: usize,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
        }
    }
}

impl ReportFormatter {
    pub fn format_line(&self, line: &ReportLine<'_>) -> String {
        let marker = line.marker();
        match line.time_frame() {
            None => format!("{marker} {}", line.spelling()),
            Some(frame) => format!(
                "{marker} {:<width$} [{frame}]",
                line.spelling(),
                width = self.field_width
            ),
        }
    }

    pub fn write_lines<W: Write>(
        &self,
        sink: &mut W,
        lines: &[ReportLine<'_>],
    ) -> Result<(), AlignmentError> {
        for line in lines {
            writeln!(sink, "{}", self.format_line(line))
                .map_err(|e| AlignmentError::io("writing report line", e))?;
        }
        sink.flush()
            .map_err(|e| AlignmentError::io("flushing report", e))
    }
}

/// Validates the alignment and writes the text report with the default width.
///
/// Nothing is written when the alignment is invalid.
pub fn write_report<W: Write>(
    sink: &mut W,
    reference: &[String],
    recognized: &[WordResult],
    alignment: &AlignmentVector,
) -> Result<ReportSummary, AlignmentError> {
    let lines = reconcile(reference, recognized, alignment)?;
    ReportFormatter::default().write_lines(sink, &lines)?;
    Ok(ReportSummary::from_lines(&lines))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum JsonLineKind {
    Deletion,
    Insertion,
    Match,
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    kind: JsonLineKind,
    spelling: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: ReportSummary,
    lines: Vec<JsonLine<'a>>,
}

/// Same ordering as [`write_report`], rendered as one JSON document.
pub fn write_report_json<W: Write>(
    sink: &mut W,
    reference: &[String],
    recognized: &[WordResult],
    alignment: &AlignmentVector,
) -> Result<ReportSummary, AlignmentError> {
    let lines = reconcile(reference, recognized, alignment)?;
    let summary = ReportSummary::from_lines(&lines);
    let report = JsonReport {
        summary,
        lines: lines
            .iter()
            .map(|line| JsonLine {
                kind: match line {
                    ReportLine::Deletion(_) => JsonLineKind::Deletion,
                    ReportLine::Insertion(_) => JsonLineKind::Insertion,
                    ReportLine::Match(_) => JsonLineKind::Match,
                },
                spelling: line.spelling(),
                start_ms: line.time_frame().map(|f| f.start_ms),
                end_ms: line.time_frame().map(|f| f.end_ms),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *sink, &report)
        .map_err(|e| AlignmentError::json("serializing report", e))?;
    sink.write_all(b"\n")
        .and_then(|()| sink.flush())
        .map_err(|e| AlignmentError::io("finalizing report", e))?;
    Ok(summary)
}

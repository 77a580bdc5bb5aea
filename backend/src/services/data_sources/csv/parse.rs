//! Reads an uploaded sheet into `RawRow`s.
//!
//! The header row names the columns. The delimiter is guessed from the header
//! line: whichever of `,` `;` tab `|` occurs most often, comma when none does.
//! Short records are allowed; their missing cells are simply absent from the row.

use crate::error::{PipelineError, Result};
use csv::{ReaderBuilder, Trim};
use outreach_common::model::raw_row::RawRow;

const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) fn detect_delimiter(header_line: &str) -> u8 {
    CANDIDATE_DELIMITERS
        .iter()
        .copied()
        .map(|d| (d, header_line.bytes().filter(|&b| b == d).count()))
        .filter(|&(_, count)| count > 0)
        // first candidate wins a tie
        .fold(None, |best: Option<(u8, usize)>, (d, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((d, count)),
        })
        .map(|(d, _)| d)
        .unwrap_or(b',')
}

/// Parses the whole upload. Fails with `NoData` when there is no data row.
pub(crate) fn parse_rows(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let text = std::str::from_utf8(bytes)
        .map_err(|e| PipelineError::Unparseable(format!("upload is not valid UTF-8: {}", e)))?;
    if text.trim().is_empty() {
        return Err(PipelineError::NoData);
    }

    let header_line = text.lines().next().unwrap_or_default();
    let mut reader = ReaderBuilder::new()
        .delimiter(detect_delimiter(header_line))
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::Unparseable(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| PipelineError::Unparseable(e.to_string()))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(headers.iter().zip(record.iter()).collect::<RawRow>());
    }

    if rows.is_empty() {
        return Err(PipelineError::NoData);
    }
    Ok(rows)
}

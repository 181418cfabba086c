use std::io::Write;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::markup::MarkupParser;
use crate::model::{InfoboxRow, LanguageRecord};
use crate::parser::Extractor;

pub const CHUNK_SIZE: usize = 500;

/// Rows read from JSON lines, plus the lines that did not parse.
#[derive(Debug, Default)]
pub struct ParsedRows {
    pub rows: Vec<InfoboxRow>,
    pub errors: Vec<Error>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStats {
    pub rows: usize,
    pub records: usize,
    pub skipped: usize,
    pub predecessors: usize,
}

/// Parse JSON-lines input. Blank lines are ignored; bad lines are collected.
pub fn parse_rows(input: &str, limit: Option<usize>) -> ParsedRows {
    let mut parsed = ParsedRows::default();
    for (idx, line) in input.lines().enumerate() {
        if limit.is_some_and(|n| parsed.rows.len() >= n) {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<InfoboxRow>(line) {
            Ok(row) => parsed.rows.push(row),
            Err(source) => {
                let err = Error::InvalidRow {
                    line: idx + 1,
                    source,
                };
                warn!("Skipping input: {}", err);
                parsed.errors.push(err);
            }
        }
    }
    parsed
}

/// Extract every row in parallel. Output order matches input order.
pub fn process_rows<P: MarkupParser>(
    extractor: &Extractor<P>,
    rows: &[InfoboxRow],
) -> Vec<LanguageRecord> {
    rows.par_iter().map(|row| extractor.process_row(row)).collect()
}

/// Process rows chunk by chunk, writing one JSON record per line.
/// `on_chunk` is called with the size of each finished chunk.
pub fn run<P, W, F>(
    extractor: &Extractor<P>,
    parsed: &ParsedRows,
    out: &mut W,
    mut on_chunk: F,
) -> Result<BatchStats>
where
    P: MarkupParser,
    W: Write,
    F: FnMut(usize),
{
    let mut stats = BatchStats {
        rows: parsed.rows.len(),
        skipped: parsed.errors.len(),
        ..Default::default()
    };

    for chunk in parsed.rows.chunks(CHUNK_SIZE) {
        let records = process_rows(extractor, chunk);
        for record in &records {
            serde_json::to_writer(&mut *out, record).map_err(std::io::Error::from)?;
            out.write_all(b"\n")?;
            stats.predecessors += record.predecessors.len();
        }
        stats.records += records.len();
        on_chunk(chunk.len());
    }
    out.flush()?;

    info!(
        "Extracted {} records ({} predecessors, {} lines skipped)",
        stats.records, stats.predecessors, stats.skipped
    );
    Ok(stats)
}

use crate::core::dedupe::Deduplicator;
use crate::domain::model::DedupeReport;
use crate::domain::ports::SimilarityMatcher;
use crate::utils::error::{MatchError, Result};
use std::io::{Read, Write};

/// Copies the header and every non-duplicate row of a CSV from `reader` to
/// `writer`, comparing rows by the `column` field.
pub fn dedupe_csv<R, W, M>(reader: R, writer: W, column: &str, matcher: M) -> Result<DedupeReport>
where
    R: Read,
    W: Write,
    M: SimilarityMatcher,
{
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| MatchError::MissingColumnError {
            column: column.to_string(),
        })?;

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&headers)?;

    let mut deduplicator = Deduplicator::new(matcher);
    for record in reader.records() {
        let record = record?;
        let title = record.get(index).unwrap_or_default();
        if deduplicator.insert(title) {
            writer.write_record(&record)?;
        }
    }
    writer.flush()?;

    let report = deduplicator.into_report();
    tracing::info!(
        "Deduplicated {} rows: kept {}, dropped {}",
        report.total(),
        report.kept.len(),
        report.dropped.len()
    );
    Ok(report)
}

pub fn write_report_json<W: Write>(report: &DedupeReport, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

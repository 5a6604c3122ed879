use crate::classifier::FeatureSet;
use csv::StringRecord;
use std::io::Read;

/// Columns that name a candidate rather than measure it.
const IDENTIFIER_COLUMNS: [&str; 5] = ["kepoi_name", "kepler_name", "toi", "name", "id"];

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    /// 1-based line in the source file, for reporting.
    pub line: u64,
    pub label: Option<String>,
    pub features: FeatureSet,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CandidateRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let label_column = identifier_column(&headers);
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let label = label_column
            .and_then(|index| record.get(index))
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        rows.push(CandidateRow {
            line,
            label,
            features: features_from_record(&headers, &record),
        });
    }

    Ok(rows)
}

fn identifier_column(headers: &StringRecord) -> Option<usize> {
    IDENTIFIER_COLUMNS.iter().find_map(|candidate| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(candidate))
    })
}

fn features_from_record(headers: &StringRecord, record: &StringRecord) -> FeatureSet {
    headers
        .iter()
        .zip(record.iter())
        .filter_map(|(name, cell)| cell.parse::<f64>().ok().map(|value| (name, value)))
        .collect()
}

use csv::ReaderBuilder;
use std::collections::HashMap;

/// One data line, keyed by header name. Values are trimmed strings;
/// typing happens later, in one place, when records are built.
pub type Row = HashMap<String, String>;

/// Parse raw delimited text into header-keyed rows.
///
/// The first line is the header. Fields may be double-quote escaped, with
/// `""` for a literal quote; commas and newlines inside quotes are data.
/// This fails soft: empty input yields no rows, a short data line yields
/// empty strings for its missing trailing fields, and no column-count
/// consistency is enforced.
#[must_use]
pub fn parse_table(text: &str) -> Vec<Row> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(h) => h.iter().map(|s| s.trim().to_string()).collect(),
        Err(_) => return Vec::new(),
    };

    let mut rows = Vec::new();
    for record in reader.records().flatten() {
        let mut row = Row::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("").trim().to_string();
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }
    rows
}

//! Minimal CSV reader for the seed files.
//!
//! Handles the subset of RFC 4180 that spreadsheet exports produce: a header
//! row, comma separators, double-quoted fields with `""` escapes, and quoted
//! fields spanning several lines. CRLF line endings and a leading UTF-8 BOM
//! are accepted. Empty lines are skipped.

use std::collections::HashMap;

use crate::error::SeedError;

/// One data row, keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    line: usize,
    fields: HashMap<String, String>,
}

impl CsvRecord {
    /// 1-based line on which the row starts.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Raw cell text for `column`, or `None` when the header lacks the
    /// column or the row is too short to reach it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Parse CSV text into records keyed by the (trimmed) header row.
///
/// Cells beyond the header width are dropped; missing trailing cells stay
/// missing rather than becoming empty strings.
pub fn parse_records(text: &str) -> Result<Vec<CsvRecord>, SeedError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = split_rows(text)?.into_iter();

    let (_, headers) = rows.next().ok_or_else(|| SeedError::Csv {
        line: 1,
        message: "missing header row".to_string(),
    })?;
    let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();

    Ok(rows
        .map(|(line, values)| CsvRecord {
            line,
            fields: headers.iter().cloned().zip(values).collect(),
        })
        .collect())
}

/// Split text into rows of raw cells, each tagged with its starting line.
///
/// A `"` opens a quoted section only as the first character of a field;
/// anywhere else it is kept literally (`24" screen`).
fn split_rows(text: &str) -> Result<Vec<(usize, Vec<String>)>, SeedError> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_started = false;
    let mut row_quoted = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    // Escaped quote.
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if !field_started => {
                in_quotes = true;
                field_started = true;
                row_quoted = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                push_row(&mut rows, row_start, std::mem::take(&mut row), row_quoted);
                field_started = false;
                row_quoted = false;
                line += 1;
                row_start = line;
            }
            _ => {
                field.push(ch);
                field_started = true;
            }
        }
    }

    if in_quotes {
        return Err(SeedError::Csv {
            line: row_start,
            message: "unterminated quoted field".to_string(),
        });
    }
    if field_started || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row_start, row, row_quoted);
    }

    Ok(rows)
}

/// Only a truly empty line is skipped; whitespace or a quoted empty cell
/// still makes a row.
fn push_row(rows: &mut Vec<(usize, Vec<String>)>, line: usize, row: Vec<String>, quoted: bool) {
    let empty = !quoted && row.len() == 1 && row[0].is_empty();
    if !empty {
        rows.push((line, row));
    }
}

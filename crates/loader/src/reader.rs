//! CSV to table loading.

use crate::descriptor::TableSchema;
use crate::error::{LoadError, Result};
use csv::{ReaderBuilder, StringRecord};
use sift_core::schema::{Column, Table};
use sift_core::{DataType, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Loads the CSV file at `path` into a table shaped by `schema`.
pub fn load_csv(path: impl AsRef<Path>, schema: &TableSchema) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    let table = read_csv(file, schema)?;
    debug!(
        table = %table.name(),
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table from csv"
    );
    Ok(table)
}

/// Reads delimited records from `reader` into a table shaped by `schema`.
///
/// The first record is the header. Declared fields are looked up in it by exact
/// name and loaded in declaration order. Number cells must parse as `f64`.
///
/// Quoted fields are honoured in both quote modes. Unless `lazy_quotes` is set, a
/// quote inside an unquoted field or a stray quote inside a quoted field is an
/// error; with it set such quotes are read leniently.
pub fn read_csv<R: Read>(mut reader: R, schema: &TableSchema) -> Result<Table> {
    let sep = schema.sep as u8;
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    if !schema.lazy_quotes {
        check_quotes(&data, sep)?;
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(sep)
        .quoting(true)
        .double_quote(true)
        .from_reader(data.as_slice());

    let mut records = rdr.records();
    let header = match records.next() {
        Some(header) => header?,
        None => return Err(LoadError::EmptyFile),
    };
    let rows = records.collect::<std::result::Result<Vec<StringRecord>, _>>()?;

    let positions: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let mut columns = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let position = *positions
            .get(field.name())
            .ok_or_else(|| LoadError::MissingColumn {
                column: field.name().to_string(),
            })?;

        let mut values = Vec::with_capacity(rows.len());
        for (row_index, record) in rows.iter().enumerate() {
            let cell = record.get(position).unwrap_or_default();
            values.push(parse_cell(cell, field.data_type()).ok_or_else(|| {
                LoadError::InvalidCell {
                    column: field.name().to_string(),
                    // 1-based, counting the header line
                    line: row_index as u64 + 2,
                    value: cell.to_string(),
                }
            })?);
        }
        columns.push(Column::new(field.clone(), values));
    }

    Ok(Table::new(schema.name.as_str(), columns)?)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    // A quote seen inside a quoted field: either its end or the first half of `""`.
    QuoteInQuoted,
}

/// Validates quote placement the way RFC 4180 readers do in strict mode.
fn check_quotes(data: &[u8], sep: u8) -> Result<()> {
    let mut line = 1u64;
    let mut state = QuoteState::FieldStart;

    for &byte in data {
        state = match (state, byte) {
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, b'\n') => {
                line += 1;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'\r') => QuoteState::QuoteInQuoted,
            (QuoteState::QuoteInQuoted, b) if b != sep && b != b'\n' => {
                return Err(LoadError::ExtraneousQuote { line });
            }
            (QuoteState::FieldStart, b'"') => QuoteState::Quoted,
            (QuoteState::Unquoted, b'"') => return Err(LoadError::BareQuote { line }),
            (_, b'\n') => {
                line += 1;
                QuoteState::FieldStart
            }
            (_, b) if b == sep => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };
    }

    if state == QuoteState::Quoted {
        return Err(LoadError::ExtraneousQuote { line });
    }
    Ok(())
}

fn parse_cell(cell: &str, data_type: DataType) -> Option<Value> {
    match data_type {
        DataType::Number => cell.parse::<f64>().ok().map(Value::Number),
        DataType::String => Some(Value::String(cell.to_string())),
    }
}

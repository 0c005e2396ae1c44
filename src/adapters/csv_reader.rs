use crate::domain::model::Record;
use crate::utils::error::{EtlError, Result};
use csv::ReaderBuilder;

const BARE_QUOTE: &str = "bare \" in non-quoted field";
const EXTRANEOUS_QUOTE: &str = "extraneous or missing \" in quoted field";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw a `"` inside a quoted field: either an escape or the close.
    QuoteInQuoted,
}

/// Rejects quoting that the `csv` decoder would otherwise accept as data:
/// a `"` inside an unquoted field, text after a closing quote, and a quoted
/// field left open at end of input.
fn check_quoting(raw: &[u8]) -> Result<()> {
    let mut state = QuoteState::FieldStart;
    let (mut line, mut column) = (1u64, 0u64);
    let mut open_quote = (1u64, 1u64);

    let decode_error = |line, column, message: &str| EtlError::DecodeError {
        line,
        column,
        message: message.to_string(),
    };

    for &byte in raw {
        column += 1;
        state = match (state, byte) {
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, b'\n') => {
                line += 1;
                column = 0;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::FieldStart, b'"') => {
                open_quote = (line, column);
                QuoteState::Quoted
            }
            (QuoteState::Unquoted, b'"') => return Err(decode_error(line, column, BARE_QUOTE)),
            (_, b',') | (_, b'\r') => QuoteState::FieldStart,
            (_, b'\n') => {
                line += 1;
                column = 0;
                QuoteState::FieldStart
            }
            (QuoteState::QuoteInQuoted, _) => {
                return Err(decode_error(line, column, EXTRANEOUS_QUOTE))
            }
            (QuoteState::FieldStart, _) | (QuoteState::Unquoted, _) => QuoteState::Unquoted,
        };
    }

    if state == QuoteState::Quoted {
        return Err(decode_error(open_quote.0, open_quote.1, EXTRANEOUS_QUOTE));
    }

    Ok(())
}

/// Decodes comma-separated rows in file order. There is no header row, and
/// rows may carry any number of fields; the field-count rule belongs to the
/// aggregator. Quoting follows the usual CSV convention, so quoted fields may
/// contain commas and newlines. Malformed quoting fails with a decode error
/// and fields that are not valid UTF-8 fail with a CSV error.
pub fn read_records<T: AsRef<[u8]> + ?Sized>(raw: &T) -> Result<Vec<Record>> {
    check_quoting(raw.as_ref())?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_ref());

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let record = Record::new(row.iter());
        records.push(match row.position() {
            Some(position) => record.with_line(position.line()),
            None => record,
        });
    }

    tracing::debug!("Decoded {} CSV records", records.len());
    Ok(records)
}

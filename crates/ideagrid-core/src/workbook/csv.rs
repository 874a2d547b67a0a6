//! CSV decoding

use crate::error::{IdeagridError, Result};
use ideagrid_engine::sheet::{CellValue, RawGrid};

/// Delimiters tried when sniffing, in tie-break order.
const DELIMITERS: [char; 3] = [',', ';', '\t'];

/// A raw field and whether it was written inside quotes.
#[derive(Debug, PartialEq)]
pub(crate) struct Field {
    pub text: String,
    pub quoted: bool,
}

/// Parse CSV text into rows of cells.
pub fn parse_csv(content: &str) -> Result<RawGrid> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let delimiter = sniff_delimiter(content);

    let rows = parse_csv_records(content, delimiter)?
        .into_iter()
        .map(|record| record.iter().map(parse_csv_field).collect())
        .collect();
    Ok(rows)
}

/// Records looked at when sniffing the delimiter.
const SNIFF_RECORDS: usize = 10;

/// Pick the delimiter that appears most often over the first
/// [`SNIFF_RECORDS`] records, so a title line above the table does not
/// decide it. Falls back to a comma when none appear.
pub(crate) fn sniff_delimiter(content: &str) -> char {
    let mut counts = [0usize; DELIMITERS.len()];
    let mut in_quotes = false;
    let mut records = 0;

    for c in content.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                records += 1;
                if records == SNIFF_RECORDS {
                    break;
                }
            }
            _ if !in_quotes => {
                if let Some(idx) = DELIMITERS.iter().position(|d| *d == c) {
                    counts[idx] += 1;
                }
            }
            _ => {}
        }
    }

    let mut best = 0;
    for idx in 1..DELIMITERS.len() {
        if counts[idx] > counts[best] {
            best = idx;
        }
    }
    DELIMITERS[best]
}

/// Split CSV text into records of fields.
///
/// Quoted fields may hold delimiters, doubled quotes and line breaks.
/// Unquoted fields are trimmed. A trailing line break does not start a
/// new record.
pub(crate) fn parse_csv_records(content: &str, delimiter: char) -> Result<Vec<Vec<Field>>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut line = 1;
    let mut quote_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                if c == '\n' {
                    line += 1;
                }
                current.push(c);
            }
            continue;
        }

        match c {
            '"' if !field_was_quoted && current.trim().is_empty() => {
                in_quotes = true;
                field_was_quoted = true;
                quote_line = line;
                current.clear();
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                record.push(finish_field(&mut current, &mut field_was_quoted));
                records.push(std::mem::take(&mut record));
            }
            c if c == delimiter => {
                record.push(finish_field(&mut current, &mut field_was_quoted));
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(IdeagridError::Csv {
            line: quote_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !current.is_empty() || field_was_quoted || !record.is_empty() {
        record.push(finish_field(&mut current, &mut field_was_quoted));
        records.push(record);
    }

    Ok(records)
}

fn finish_field(current: &mut String, quoted: &mut bool) -> Field {
    let text = std::mem::take(current);
    let field = if *quoted {
        Field { text, quoted: true }
    } else {
        Field {
            text: text.trim().to_string(),
            quoted: false,
        }
    };
    *quoted = false;
    field
}

/// Parse a CSV field into a cell value
/// - Quoted -> Text, exactly as written
/// - Valid number -> Number (unless it has leading zeros like "007")
/// - TRUE / FALSE -> Bool
/// - Otherwise -> Text
pub(crate) fn parse_csv_field(field: &Field) -> CellValue {
    if field.quoted {
        return CellValue::new_text(&field.text);
    }

    let trimmed = field.text.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }

    // Preserve strings that look like numbers but have leading zeros (e.g., "007", "00123")
    // unless they're just "0" or start with "0."
    if trimmed.starts_with('0')
        && trimmed.len() > 1
        && !trimmed.starts_with("0.")
        && trimmed.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
    {
        return CellValue::new_text(trimmed);
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    // "inf" and "NaN" parse as f64 but read as words in a sheet
    if let Ok(n) = trimmed.parse::<f64>()
        && n.is_finite()
    {
        return CellValue::new_number(n);
    }

    CellValue::new_text(trimmed)
}

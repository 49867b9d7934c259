//! Explicit serialization of the backing file's fixed five-column schema.
//! Every record is one delimited line; fields containing a comma, quote, or
//! line break are wrapped in double quotes with embedded quotes doubled, so
//! arbitrary text round-trips. Malformed content fails with a typed
//! [`RecordError`] instead of an undefined parse outcome.

use std::mem;

use thiserror::Error;

use crate::models::Book;

/// Number of columns in the schema.
const COLUMN_COUNT: usize = 5;
/// Column names in file order. The header row must match these exactly.
const COLUMNS: [&str; COLUMN_COUNT] = ["Title", "Author", "Year", "Genre", "Read Status"];
/// The literal header row written at the top of every saved file.
pub const LIBRARY_HEADER: &str = "Title,Author,Year,Genre,Read Status";

/// Ways the backing file can fail to parse. Record numbers are 1-based and
/// count data records, excluding the header row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing header row")]
    MissingHeader,
    #[error("unexpected header row: {found:?}")]
    HeaderMismatch { found: String },
    #[error("record {record}: expected {expected} fields, found {found}")]
    ColumnCount {
        record: usize,
        expected: usize,
        found: usize,
    },
    #[error("record {record}: year is not an integer: {value:?}")]
    Year { record: usize, value: String },
    #[error("record {record}: read status is not a boolean: {value:?}")]
    ReadStatus { record: usize, value: String },
    #[error("unterminated quoted field")]
    UnterminatedQuote,
    #[error("unexpected characters after a closing quote")]
    StrayQuote,
}

/// Serialize the whole library, header row first, one record per line.
pub(crate) fn encode_library(books: &[Book]) -> String {
    let mut out = String::from(LIBRARY_HEADER);
    out.push('\n');
    for book in books {
        out.push_str(&encode_record(book));
        out.push('\n');
    }
    out
}

/// Parse the whole backing file content into the ordered book sequence.
pub(crate) fn decode_library(content: &str) -> Result<Vec<Book>, RecordError> {
    let mut records = split_records(content)?.into_iter();

    let header = records.next().ok_or(RecordError::MissingHeader)?;
    if header.len() != COLUMN_COUNT || header.iter().zip(COLUMNS).any(|(got, want)| got != want) {
        return Err(RecordError::HeaderMismatch {
            found: header.join(","),
        });
    }

    records
        .enumerate()
        .map(|(index, fields)| decode_record(index + 1, &fields))
        .collect()
}

/// Render one book as a delimited line in fixed column order.
fn encode_record(book: &Book) -> String {
    [
        encode_field(&book.title),
        encode_field(&book.author),
        book.year.to_string(),
        encode_field(&book.genre),
        book.read.to_string(),
    ]
    .join(",")
}

/// Quote a field only when its content would otherwise break the format.
fn encode_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Turn a split field list into a typed record, validating column count and
/// the two non-text columns.
fn decode_record(record: usize, fields: &[String]) -> Result<Book, RecordError> {
    if fields.len() != COLUMN_COUNT {
        return Err(RecordError::ColumnCount {
            record,
            expected: COLUMN_COUNT,
            found: fields.len(),
        });
    }

    let year = fields[2]
        .trim()
        .parse::<i64>()
        .map_err(|_| RecordError::Year {
            record,
            value: fields[2].clone(),
        })?;

    let read = parse_read_status(&fields[4]).ok_or_else(|| RecordError::ReadStatus {
        record,
        value: fields[4].clone(),
    })?;

    Ok(Book {
        title: fields[0].clone(),
        author: fields[1].clone(),
        year,
        genre: fields[3].clone(),
        read,
    })
}

/// Accept `true`/`false` in any ASCII case. Files written by earlier tooling
/// capitalize the values, so `True`/`False` must keep loading.
fn parse_read_status(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Split the entire file content into records of fields, honoring quoting.
/// Record separators are `\n` or `\r\n` outside quotes; quoted fields may
/// span lines. Blank lines are skipped, matching what the previous tooling
/// tolerated.
fn split_records(content: &str) -> Result<Vec<Vec<String>>, RecordError> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    // Set once the current field was produced by a closed quoted run; only a
    // delimiter or end of record may follow.
    let mut was_quoted = false;
    let mut chars = content.chars().peekable();

    let mut end_record = |fields: &mut Vec<String>, current: &mut String, was_quoted: bool| {
        fields.push(mem::take(current));
        let blank = fields.len() == 1 && fields[0].is_empty() && !was_quoted;
        if blank {
            fields.clear();
        } else {
            records.push(mem::take(fields));
        }
    };

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                    was_quoted = true;
                }
            } else {
                current.push(ch);
            }
            continue;
        }

        match ch {
            '"' if current.is_empty() && !was_quoted => in_quotes = true,
            '"' => return Err(RecordError::StrayQuote),
            ',' => {
                fields.push(mem::take(&mut current));
                was_quoted = false;
            }
            '\n' => {
                end_record(&mut fields, &mut current, was_quoted);
                was_quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                end_record(&mut fields, &mut current, was_quoted);
                was_quoted = false;
            }
            _ if was_quoted => return Err(RecordError::StrayQuote),
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(RecordError::UnterminatedQuote);
    }
    if !current.is_empty() || !fields.is_empty() || was_quoted {
        end_record(&mut fields, &mut current, was_quoted);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            genre: "Sci-Fi".to_string(),
            read: true,
        }
    }

    #[test]
    fn round_trips_plain_records() {
        let books = vec![
            sample_book(),
            Book {
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                year: 1949,
                genre: "Dystopian".to_string(),
                read: false,
            },
        ];
        let encoded = encode_library(&books);
        assert!(encoded.starts_with("Title,Author,Year,Genre,Read Status\n"));
        let decoded = decode_library(&encoded).expect("decode encoded library");
        assert_eq!(decoded, books);
    }

    #[test]
    fn round_trips_embedded_delimiters_and_quotes() {
        let books = vec![Book {
            title: "Hello, \"World\"".to_string(),
            author: "Anony, Mouse".to_string(),
            year: 2001,
            genre: "Multi\nLine".to_string(),
            read: false,
        }];
        let decoded = decode_library(&encode_library(&books)).expect("decode quoted fields");
        assert_eq!(decoded, books);
    }

    #[test]
    fn empty_content_is_missing_header() {
        assert_eq!(decode_library(""), Err(RecordError::MissingHeader));
    }

    #[test]
    fn rejects_unexpected_header() {
        let content = "Name,Author,Year,Genre,Read Status\n";
        assert!(matches!(
            decode_library(content),
            Err(RecordError::HeaderMismatch { .. })
        ));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let content = format!("{LIBRARY_HEADER}\nDune,Frank Herbert,1965,Sci-Fi\n");
        assert_eq!(
            decode_library(&content),
            Err(RecordError::ColumnCount {
                record: 1,
                expected: 5,
                found: 4,
            })
        );
    }

    #[test]
    fn rejects_non_numeric_year() {
        let content = format!("{LIBRARY_HEADER}\nDune,Frank Herbert,sixty-five,Sci-Fi,true\n");
        assert!(matches!(
            decode_library(&content),
            Err(RecordError::Year { record: 1, .. })
        ));
    }

    #[test]
    fn rejects_unparseable_read_status() {
        let content = format!("{LIBRARY_HEADER}\nDune,Frank Herbert,1965,Sci-Fi,maybe\n");
        assert!(matches!(
            decode_library(&content),
            Err(RecordError::ReadStatus { record: 1, .. })
        ));
    }

    #[test]
    fn accepts_capitalized_booleans() {
        let content = format!(
            "{LIBRARY_HEADER}\nDune,Frank Herbert,1965,Sci-Fi,True\n1984,George Orwell,1949,Dystopian,False\n"
        );
        let books = decode_library(&content).expect("decode capitalized booleans");
        assert!(books[0].read);
        assert!(!books[1].read);
    }

    #[test]
    fn skips_blank_lines() {
        let content = format!("{LIBRARY_HEADER}\n\nDune,Frank Herbert,1965,Sci-Fi,true\n\n");
        let books = decode_library(&content).expect("decode with blank lines");
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[test]
    fn rejects_unterminated_quote() {
        let content = format!("{LIBRARY_HEADER}\n\"Dune,Frank Herbert,1965,Sci-Fi,true\n");
        assert_eq!(
            decode_library(&content),
            Err(RecordError::UnterminatedQuote)
        );
    }

    #[test]
    fn rejects_data_after_closing_quote() {
        let content = format!("{LIBRARY_HEADER}\n\"Dune\"x,Frank Herbert,1965,Sci-Fi,true\n");
        assert_eq!(decode_library(&content), Err(RecordError::StrayQuote));
    }

    #[test]
    fn quoted_empty_field_is_not_a_blank_line() {
        let content = format!("{LIBRARY_HEADER}\n\"\"\n");
        assert!(matches!(
            decode_library(&content),
            Err(RecordError::ColumnCount {
                record: 1,
                found: 1,
                ..
            })
        ));
    }
}

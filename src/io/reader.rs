use crate::apriori::{Item, TransactionStore};
use crate::error::{CooccurError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Parse one transaction per line, items separated by whitespace.
///
/// Blank lines become empty transactions so transaction ids keep matching
/// line numbers. The first token that does not parse, or is not UTF-8,
/// aborts the read.
pub fn parse_transactions<I, R>(reader: R) -> Result<TransactionStore<I>>
where
    I: Item + FromStr,
    R: BufRead,
{
    let mut records: Vec<Vec<I>> = Vec::new();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = String::from_utf8(raw).map_err(|err| CooccurError::Parse {
            line: idx + 1,
            token: undecodable_token(err.as_bytes()),
        })?;

        let record = line
            .split_whitespace()
            .map(|token| {
                token.parse::<I>().map_err(|_| CooccurError::Parse {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<I>>>()?;
        records.push(record);
    }

    TransactionStore::from_transactions(records)
}

/// Lossy text of the first token that is not valid UTF-8.
fn undecodable_token(line: &[u8]) -> String {
    line.split(u8::is_ascii_whitespace)
        .find(|token| std::str::from_utf8(token).is_err())
        .map_or_else(
            || String::from_utf8_lossy(line).into_owned(),
            |token| String::from_utf8_lossy(token).into_owned(),
        )
}

pub fn read_transactions<I, P>(path: P) -> Result<TransactionStore<I>>
where
    I: Item + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    let store = parse_transactions(BufReader::new(file))?;
    log::info!(
        "read {} transactions from {}",
        store.len(),
        path.as_ref().display()
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn test_parse_collapses_duplicates_and_blank_tokens() {
        let input = "3 1  2 1\n\n7\n";
        let store: TransactionStore<u64> = parse_transactions(Cursor::new(input)).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.resolve(store.transaction(0)), vec![1, 2, 3]);
        assert!(store.transaction(1).is_empty());
        assert_eq!(store.resolve(store.transaction(2)), vec![7]);
    }

    #[test]
    fn test_parse_error_reports_line_and_token() {
        let input = "1 2\n3 x4\n";
        let err = parse_transactions::<u64, _>(Cursor::new(input)).unwrap_err();

        match err {
            CooccurError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x4");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let input: &[u8] = b"1 2\n3 \xff\xfe 4\n";
        let err = parse_transactions::<u64, _>(Cursor::new(input)).unwrap_err();

        match err {
            CooccurError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "\u{fffd}\u{fffd}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        let store: TransactionStore<u64> = parse_transactions(Cursor::new("1 2\r\n3\r\n")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.resolve(store.transaction(1)), vec![3]);
    }

    #[test]
    fn test_textual_items() {
        let store: TransactionStore<String> =
            parse_transactions(Cursor::new("milk bread\nbread\n")).unwrap();
        assert_eq!(store.num_items(), 2);
        assert_eq!(store.occurrences(&"bread".to_string()), vec![0, 1]);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10 20 30").unwrap();
        writeln!(file, "20 30").unwrap();

        let store: TransactionStore<u64> = read_transactions(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.occurrences(&30), vec![0, 1]);
        assert_eq!(store.occurrences(&10), vec![0]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transactions::<u64, _>(dir.path().join("absent.dat")).unwrap_err();
        assert!(matches!(err, CooccurError::Io(_)));
    }
}

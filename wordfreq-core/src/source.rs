//! Token sources: a corpus file and a query line from the terminal.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, Read};
use std::path::Path;

use log::{debug, warn};
use wordfreq_types::SourceError;

use crate::analyzer::tokenizer::split_words;

/// Reads a whole file and splits it on whitespace.
///
/// # Errors
///
/// Returns `SourceError::Open` if the file cannot be opened and
/// `SourceError::Read` if reading fails part way.
pub fn read_words_from_file(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let words = read_words(file)?;

    debug!("read {} tokens from {}", words.len(), path.display());
    Ok(words)
}

/// Reads everything from `reader` and splits it on whitespace.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD, which the normalizer
/// drops like any other non-letter.
///
/// # Errors
///
/// Returns `SourceError::Read` on I/O failure.
pub fn read_words<R: Read>(mut reader: R) -> Result<Vec<String>, SourceError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        debug!("input contains invalid UTF-8, replaced lossily");
    }

    Ok(split_words(&text))
}

/// Reads one line and lowercases it.
///
/// The trailing line break is dropped. On EOF or a read error the result is
/// the empty string, which no table contains.
pub fn read_query_line<R: BufRead>(mut reader: R) -> String {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => {
            warn!("no query entered (end of input)");
            String::new()
        }
        Ok(_) => {
            let trimmed = line.trim_end_matches(['\n', '\r']);
            trimmed.to_lowercase()
        }
        Err(err) => {
            warn!("error on reading input: {}", err);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::normalize;
    use crate::count::count_linear;
    use std::io::{self, BufReader, Cursor};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    fn temp_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordfreq-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).expect("should write temp file");
        path
    }

    #[test]
    fn reads_words_from_memory() {
        let words = read_words(Cursor::new("The cheese\n\tis  old.")).unwrap();
        assert_eq!(words, ["The", "cheese", "is", "old."]);
    }

    #[test]
    fn reads_words_from_file() {
        let path = temp_file("corpus.txt", b"a big CHEESE\r\nthe end");
        let words = read_words_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(words, ["a", "big", "CHEESE", "the", "end"]);
    }

    #[test]
    fn missing_file_is_open_error() {
        let path = std::env::temp_dir().join("wordfreq-definitely-missing-file.txt");
        let err = read_words_from_file(&path).unwrap_err();
        match err {
            SourceError::Open { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_dropped_not_fatal() {
        let words = read_words(&b"the caf\xe9 the"[..]).unwrap();
        let table = count_linear(normalize(&words));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("the"), Some(2));
        assert_eq!(table.get("caf"), Some(1));
    }

    #[test]
    fn latin1_file_still_counts() {
        let path = temp_file("latin1.txt", b"Caf\xe9 au lait\ncaf\xe9");
        let words = read_words_from_file(&path);
        std::fs::remove_file(&path).ok();
        let table = count_linear(normalize(words.unwrap()));
        assert_eq!(table.get("caf"), Some(2));
        assert_eq!(table.get("au"), Some(1));
        assert_eq!(table.get("lait"), Some(1));
    }

    #[test]
    fn read_failure_is_read_error() {
        let err = read_words(FailingReader).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[test]
    fn query_line_lowercased_and_trimmed() {
        assert_eq!(read_query_line(Cursor::new("The\r\nrest")), "the");
        assert_eq!(read_query_line(Cursor::new("MILK")), "milk");
    }

    #[test]
    fn query_line_keeps_inner_spaces() {
        assert_eq!(read_query_line(Cursor::new("Big Cheese\n")), "big cheese");
    }

    #[test]
    fn query_eof_is_empty() {
        assert_eq!(read_query_line(Cursor::new("")), "");
    }

    #[test]
    fn query_read_error_is_empty() {
        assert_eq!(read_query_line(BufReader::new(FailingReader)), "");
    }
}

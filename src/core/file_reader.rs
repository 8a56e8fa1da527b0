//! File reading for the report
//!
//! A file is either valid UTF-8 text or it is not; anything else that goes
//! wrong while reading is an I/O error. Both failures map to a fixed
//! placeholder line in the report.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Placeholder written instead of content for non-UTF-8 files
pub const NON_TEXT_PLACEHOLDER: &str = "[Binary or non-text file]";

/// Why a file's content could not be included
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file is not valid UTF-8 text")]
    NotText,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// The line written to the report in place of the content
    pub fn placeholder(&self) -> String {
        match self {
            ReadError::NotText => NON_TEXT_PLACEHOLDER.to_string(),
            ReadError::Io(e) => format!("[Error reading file: {}]", e),
        }
    }
}

/// Read a file as UTF-8 text with line endings normalized to `\n`
pub fn read_text_file(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| ReadError::NotText)?;
    Ok(normalize_newlines(content))
}

/// Convert `\r\n` and lone `\r` to `\n`
fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_file_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.txt");
        fs::write(&file_path, "Hello, World!").unwrap();

        assert_eq!(read_text_file(&file_path).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_read_text_file_empty() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert_eq!(read_text_file(&file_path).unwrap(), "");
    }

    #[test]
    fn test_read_invalid_utf8_is_not_text() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("invalid_utf8.bin");

        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0xFF, 0xFE, 0x48, 0x65, 0x6C, 0x6C, 0x6F])
            .unwrap();

        let err = read_text_file(&file_path).unwrap_err();
        assert!(matches!(err, ReadError::NotText));
        assert_eq!(err.placeholder(), NON_TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_null_bytes_are_still_text() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("nul.dat");
        fs::write(&file_path, b"a\x00b").unwrap();

        assert_eq!(read_text_file(&file_path).unwrap(), "a\u{0}b");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = read_text_file(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
        assert!(err.placeholder().starts_with("[Error reading file: "));
        assert!(err.placeholder().ends_with(']'));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_text_file(dir.path()).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }

    #[test]
    fn test_newlines_normalized() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("crlf.txt");
        fs::write(&file_path, "one\r\ntwo\rthree\n").unwrap();

        assert_eq!(read_text_file(&file_path).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_bom_is_kept() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("bom.txt");
        fs::write(&file_path, "\u{feff}hi").unwrap();

        assert_eq!(read_text_file(&file_path).unwrap(), "\u{feff}hi");
    }
}

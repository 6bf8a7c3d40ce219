//! Defensive file reading
//!
//! Hook inputs are whatever the developer staged: source files, binary
//! blobs, broken encodings. Loading content must tolerate all of them.

use crate::error::Result;
use std::path::Path;

/// Read a file into a `String`, replacing invalid UTF-8 sequences.
///
/// Binary files come back as best-effort text instead of an error; only an
/// actual read failure (missing file, permissions, IO) returns `Err`.
pub fn read_to_string_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_read_plain_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello world").unwrap();

        let content = read_to_string_lossy(file.path()).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_read_invalid_utf8_does_not_fail() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0x6f, 0xff, 0xfe, 0x62, 0x61, 0x72]).unwrap();

        let content = read_to_string_lossy(file.path()).unwrap();
        assert!(content.starts_with("foo"));
        assert!(content.ends_with("bar"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_to_string_lossy(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }
}

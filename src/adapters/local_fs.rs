use crate::core::SourceStore;
use crate::utils::error::{CodemodError, Result};
use std::fs;
use std::path::Path;

/// Files on local disk, relative paths resolved against the working directory.
///
/// Reads translate `\r\n` and lone `\r` to `\n`; writes keep `\n`. A CRLF file
/// no rule touches therefore compares equal and is not rewritten, while a
/// rewritten one is saved with LF endings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl SourceStore for LocalFs {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(|source| CodemodError::io(path, source))?;
        Ok(normalize_newlines(content))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|source| CodemodError::io(path, source))
    }
}

fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ts");
        let store = LocalFs::new();

        store.write(&path, "const a = 1;\n").unwrap();
        assert_eq!(store.read_to_string(&path).unwrap(), "const a = 1;\n");
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crlf.ts");
        fs::write(&path, "a\r\nb\rc\n").unwrap();

        assert_eq!(LocalFs::new().read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.ts");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = LocalFs::new().read_to_string(&path).unwrap_err();
        match err {
            CodemodError::IoError { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

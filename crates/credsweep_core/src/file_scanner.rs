//! Per-file reading and line dispatch.

use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::finding::Finding;
use crate::scanner::LineScanner;

/// Reads one file and scans it line by line.
///
/// Unreadable files never abort the scan. A path that turns out to be a
/// directory (a listing race) is skipped silently; any other read or
/// decode failure emits a single warning and the file is omitted from the
/// results.
#[must_use]
pub fn scan_file(path: &Path, scanner: &LineScanner) -> Vec<Finding> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::IsADirectory => return Vec::new(),
        Err(err) => {
            warn!(path = %path.display(), %err, "skipping unreadable file");
            return Vec::new();
        }
    };

    match String::from_utf8(bytes) {
        Ok(content) => scan_content(&content, path, scanner),
        Err(_) => {
            warn!(path = %path.display(), "skipping file with non-UTF-8 content");
            Vec::new()
        }
    }
}

/// Scans already-loaded text content, line numbers starting at 1.
#[expect(
    clippy::cast_possible_truncation,
    reason = "line counts in source files fit in u32"
)]
#[must_use]
pub fn scan_content(content: &str, path: &Path, scanner: &LineScanner) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (index, line) in content.lines().enumerate() {
        scanner.scan_line_into(line, index as u32 + 1, path, &mut findings);
    }
    findings
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::severity::Severity;
    use crate::test_utils::make_scanner;

    #[test]
    fn scan_file_finds_leaks_with_one_based_line_numbers() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.js");
        fs::write(&file, "let port = 8080;\nconst password = \"hunter2XY\";\n").unwrap();

        let scanner = make_scanner();
        let findings = scan_file(&file, &scanner);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[0].severity, Severity::High);
    }

    #[test]
    fn scan_file_returns_empty_for_clean_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("clean.rs");
        fs::write(&file, "fn main() {}\n").unwrap();

        assert!(scan_file(&file, &make_scanner()).is_empty());
    }

    #[test]
    fn scan_file_absorbs_directory_path_silently() {
        let dir = TempDir::new().unwrap();

        assert!(scan_file(dir.path(), &make_scanner()).is_empty());
    }

    #[test]
    fn scan_file_skips_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.txt");

        assert!(scan_file(&missing, &make_scanner()).is_empty());
    }

    #[test]
    fn scan_file_skips_non_utf8_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("blob.bin");
        fs::write(&file, [0xff, 0xfe, b'p', b'w']).unwrap();

        assert!(scan_file(&file, &make_scanner()).is_empty());
    }

    #[test]
    fn scan_content_handles_crlf_line_endings() {
        let content = "first\r\nconst password = \"hunter2XY\";\r\nlast\r\n";
        let findings = scan_content(content, Path::new("win.js"), &make_scanner());

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[0].line_content.as_ref(), "const password = \"hunter2XY\";");
    }

    #[test]
    fn scan_content_reports_each_offending_line() {
        let content = "password = \"one23\"\nclean line\npassword = \"two45\"\n";
        let findings = scan_content(content, Path::new("multi.txt"), &make_scanner());

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line, 1);
        assert_eq!(findings[1].line, 3);
    }

    #[test]
    fn scan_content_of_empty_string_is_empty() {
        assert!(scan_content("", Path::new("empty"), &make_scanner()).is_empty());
    }
}

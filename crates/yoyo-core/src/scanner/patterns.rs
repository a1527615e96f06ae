/// Sensitive-keyword detection in a file's leading bytes.
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Literal markers treated as a hint of embedded credentials.
pub const SENSITIVE_PATTERNS: [&str; 4] = ["password=", "secret=", "key=", "token="];

/// Number of leading bytes inspected per file.
pub const HEAD_BYTES: usize = 2048;

/// Read at most `limit` bytes from the start of `path`.
pub fn read_head(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// First pattern (ASCII case-insensitive) found in `haystack`, if any.
pub fn first_match<'p>(haystack: &[u8], patterns: &'p [String]) -> Option<&'p str> {
    let lowered = haystack.to_ascii_lowercase();
    patterns
        .iter()
        .find(|p| contains(&lowered, p.to_ascii_lowercase().as_bytes()))
        .map(String::as_str)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        SENSITIVE_PATTERNS.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let p = defaults();
        assert_eq!(first_match(b"db_PASSWORD=hunter2", &p), Some("password="));
        assert_eq!(first_match(b"Token=abc123", &p), Some("token="));
    }

    #[test]
    fn test_first_pattern_wins() {
        let p = defaults();
        assert_eq!(first_match(b"token=1\npassword=2", &p), Some("password="));
    }

    #[test]
    fn test_no_match() {
        let p = defaults();
        assert_eq!(first_match(b"password: hunter2", &p), None);
        assert_eq!(first_match(b"", &p), None);
    }

    #[test]
    fn test_read_head_is_bounded() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("f");
        std::fs::write(&path, vec![b'a'; HEAD_BYTES * 3]).unwrap();
        assert_eq!(read_head(&path, HEAD_BYTES).unwrap().len(), HEAD_BYTES);

        std::fs::write(&path, b"short").unwrap();
        assert_eq!(read_head(&path, HEAD_BYTES).unwrap(), b"short");
    }
}

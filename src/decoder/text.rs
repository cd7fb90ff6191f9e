//! Best-effort printable text recovery
//!
//! Chunks often carry a topic name or status string mixed into binary
//! data. Extraction is permissive: invalid UTF-8 never fails it.

/// Characters worth keeping: letters, digits, punctuation, space.
fn is_printable(c: char) -> bool {
    c.is_alphanumeric() || c.is_ascii_punctuation() || c == ' '
}

/// Recover printable text from a raw chunk.
///
/// Invalid UTF-8 sequences are dropped (the lossy replacement character is
/// filtered back out), surrounding whitespace is trimmed, and control
/// characters are removed. Always returns a string, possibly empty.
pub fn extract_text(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim()
        .chars()
        .filter(|&c| is_printable(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_passes_through() {
        assert_eq!(extract_text(b"hello world"), "hello world");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(extract_text(b"  /robot/joint_state \n"), "/robot/joint_state");
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(extract_text(b"a\x00b\x1Fc\x7Fd"), "abcd");
    }

    #[test]
    fn test_invalid_utf8_dropped() {
        // Lone continuation and truncated multi-byte sequences vanish
        // rather than failing the extraction.
        assert_eq!(extract_text(b"ok\xFF\xFE\x80ok"), "okok");
        assert_eq!(extract_text(&[0xC3]), "");
    }

    #[test]
    fn test_total_for_arbitrary_bytes() {
        // Every byte value at once: no panic, output is printable only.
        let all: Vec<u8> = (0u8..=255).collect();
        let text = extract_text(&all);
        assert!(text.chars().all(is_printable));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_text(b""), "");
    }
}

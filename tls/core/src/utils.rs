/**
    Const-compatible ASCII whitespace trimming (both ends).
*/
pub const fn trim_ascii(s: &[u8]) -> &[u8] {
    let mut start = 0;
    while start < s.len() && s[start].is_ascii_whitespace() {
        start += 1;
    }
    let mut end = s.len();
    while end > start && s[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    let (_, rest) = s.split_at(start);
    let (trimmed, _) = rest.split_at(end - start);
    trimmed
}

/**
    Const-compatible case-insensitive ASCII byte comparison.
    Slices of different lengths never compare equal.
*/
pub const fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_both_ends() {
        assert_eq!(trim_ascii(b"  ecdsa\t\n"), b"ecdsa");
        assert_eq!(trim_ascii(b"sha256"), b"sha256");
    }

    #[test]
    fn trim_all_whitespace() {
        assert_eq!(trim_ascii(b" \t "), b"");
        assert_eq!(trim_ascii(b""), b"");
    }

    #[test]
    fn case_insensitive_compare() {
        assert!(eq_ignore_ascii_case(b"ECDSA", b"ecdsa"));
        assert!(eq_ignore_ascii_case(b"Sha384", b"sHA384"));
        assert!(!eq_ignore_ascii_case(b"sha1", b"sha2"));
        assert!(!eq_ignore_ascii_case(b"sha1", b"sha12"));
    }
}

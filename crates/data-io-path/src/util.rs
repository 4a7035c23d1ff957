use crate::types::IndexPolicy;

/// Path separator.
pub const SEPARATOR: char = '.';

/// Split dotted text into its non-empty segments.
///
/// Leading, trailing and repeated separators produce no segments.
pub fn split_path(text: &str) -> impl Iterator<Item = &str> {
    text.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Cut `text` so that it fits a buffer of `max_len` bytes including the
/// terminator. Returns the kept text and whether anything was dropped.
pub fn truncate_path_str(text: &str, max_len: usize) -> (&str, bool) {
    let limit = max_len.saturating_sub(1);
    if text.len() <= limit {
        return (text, false);
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    (&text[..end], true)
}

/// Convert a segment into an array position under `policy`.
pub fn parse_index(segment: &str, policy: IndexPolicy) -> Option<usize> {
    match policy {
        IndexPolicy::Permissive => Some(parse_index_permissive(segment)),
        IndexPolicy::Strict => {
            if !is_integer(segment) {
                return None;
            }
            segment.parse().ok()
        }
    }
}

/// `strtoul`-style conversion.
///
/// Leading whitespace and one sign are accepted, then as many decimal digits
/// as are present. No digits gives `0`. Negative non-zero values and
/// overflow give `usize::MAX`, which is never a valid position.
///
/// ```
/// use data_io_path::parse_index_permissive;
///
/// assert_eq!(parse_index_permissive("12"), 12);
/// assert_eq!(parse_index_permissive(" 3rd"), 3);
/// assert_eq!(parse_index_permissive("name"), 0);
/// assert_eq!(parse_index_permissive("-1"), usize::MAX);
/// ```
pub fn parse_index_permissive(segment: &str) -> usize {
    let s = segment.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: usize = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(b - b'0')))
        {
            Some(v) => v,
            None => return usize::MAX,
        };
    }
    if negative && value != 0 {
        usize::MAX
    } else {
        value
    }
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("a.b.c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(split_path(".a..b.").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(split_path("").count(), 0);
        assert_eq!(split_path("...").count(), 0);
    }

    #[test]
    fn test_truncate_path_str() {
        assert_eq!(truncate_path_str("abc", 4), ("abc", false));
        assert_eq!(truncate_path_str("abcd", 4), ("abc", true));
        // 'é' is two bytes; the cut must not split it.
        assert_eq!(truncate_path_str("aé", 3), ("a", true));
    }

    #[test]
    fn test_parse_index_permissive() {
        assert_eq!(parse_index_permissive("0"), 0);
        assert_eq!(parse_index_permissive("007"), 7);
        assert_eq!(parse_index_permissive("+5"), 5);
        assert_eq!(parse_index_permissive("2abc"), 2);
        assert_eq!(parse_index_permissive(""), 0);
        assert_eq!(parse_index_permissive("abc"), 0);
        assert_eq!(parse_index_permissive("-0"), 0);
        assert_eq!(parse_index_permissive("-3"), usize::MAX);
        assert_eq!(
            parse_index_permissive("999999999999999999999999999"),
            usize::MAX
        );
    }

    #[test]
    fn test_parse_index_strict() {
        assert_eq!(parse_index("3", IndexPolicy::Strict), Some(3));
        assert_eq!(parse_index("03", IndexPolicy::Strict), Some(3));
        assert_eq!(parse_index("3a", IndexPolicy::Strict), None);
        assert_eq!(parse_index("", IndexPolicy::Strict), None);
        assert_eq!(parse_index("-1", IndexPolicy::Strict), None);
        assert_eq!(parse_index("x", IndexPolicy::Permissive), Some(0));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("123"));
        assert!(!is_integer("-1"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer(""));
        assert!(!is_integer("abc"));
    }
}

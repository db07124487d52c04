use std::path::Path;

use regex::{Regex, escape};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// A literal search query, compiled once and reused for every match of an
/// operation.
///
/// Case-insensitive matching uses Unicode simple case folding, and the same
/// rule decides both where Find lands and whether Replace accepts a
/// selection.
pub struct TextMatcher {
    literal: String,
    folded: Option<(Regex, Regex)>,
}

impl TextMatcher {
    /// Returns None for an empty query.
    pub fn new(search: &str, case_sensitive: bool) -> Option<Self> {
        if search.is_empty() {
            return None;
        }
        let folded = if case_sensitive {
            None
        } else {
            let escaped = escape(search);
            let anywhere = Regex::new(&format!("(?i){}", escaped)).ok()?;
            let whole = Regex::new(&format!("(?i)^(?:{})$", escaped)).ok()?;
            Some((anywhere, whole))
        };
        Some(Self {
            literal: search.to_string(),
            folded,
        })
    }

    /// Byte range of the first match at or after `start_pos`.
    ///
    /// A case-insensitive match may differ in length from the query, so the
    /// end is returned explicitly.
    pub fn find_at(&self, text: &str, start_pos: usize) -> Option<(usize, usize)> {
        if start_pos >= text.len() || !text.is_char_boundary(start_pos) {
            return None;
        }
        match &self.folded {
            None => text[start_pos..]
                .find(&self.literal)
                .map(|pos| (start_pos + pos, start_pos + pos + self.literal.len())),
            Some((anywhere, _)) => anywhere.find_at(text, start_pos).map(|m| (m.start(), m.end())),
        }
    }

    /// Is `candidate` exactly one match of the query?
    pub fn matches_exactly(&self, candidate: &str) -> bool {
        match &self.folded {
            None => candidate == self.literal,
            Some((_, whole)) => whole.is_match(candidate),
        }
    }

    /// Replace every match; returns (new_text, count_of_replacements).
    ///
    /// Replaced text is never rescanned, so a replacement that contains the
    /// query cannot loop.
    pub fn replace_all(&self, text: &str, replace: &str) -> (String, usize) {
        let mut result = String::with_capacity(text.len());
        let mut count = 0;
        let mut pos = 0;

        while let Some((start, end)) = self.find_at(text, pos) {
            result.push_str(&text[pos..start]);
            result.push_str(replace);
            pos = end;
            count += 1;
        }
        result.push_str(&text[pos..]);

        (result, count)
    }
}

/// Find next occurrence of search string in text
///
/// Returns the byte range of the match, or None if not found.
pub fn find_in_text(
    text: &str,
    search: &str,
    start_pos: usize,
    case_sensitive: bool,
) -> Option<(usize, usize)> {
    TextMatcher::new(search, case_sensitive)?.find_at(text, start_pos)
}

/// Replace all occurrences of search string with replacement
///
/// Returns (new_text, count_of_replacements)
pub fn replace_all_in_text(
    text: &str,
    search: &str,
    replace: &str,
    case_sensitive: bool,
) -> (String, usize) {
    match TextMatcher::new(search, case_sensitive) {
        Some(matcher) => matcher.replace_all(text, replace),
        None => (text.to_string(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/test.txt"), "test.txt");
        assert_eq!(extract_filename("test.txt"), "test.txt");
        assert_eq!(extract_filename("/path/with/many/levels/file.rs"), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename("/home/user/"), "user");
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_find_case_insensitive() {
        let text = "Hello world, hello Rust";
        assert_eq!(find_in_text(text, "hello", 0, false), Some((0, 5)));
        assert_eq!(find_in_text(text, "hello", 1, false), Some((13, 18)));
    }

    #[test]
    fn test_find_case_sensitive() {
        let text = "Hello world, hello Rust";
        assert_eq!(find_in_text(text, "hello", 0, true), Some((13, 18)));
        assert_eq!(find_in_text(text, "RUST", 0, true), None);
    }

    #[test]
    fn test_find_non_ascii_ignores_case() {
        assert_eq!(find_in_text("Élan", "élan", 0, false), Some((0, 5)));
        assert_eq!(find_in_text("ΣΟΦΙΑ", "σοφια", 0, false), Some((0, 10)));
        assert_eq!(find_in_text("Élan", "élan", 0, true), None);
    }

    #[test]
    fn test_find_and_exact_match_agree_on_non_ascii() {
        let matcher = TextMatcher::new("élan", false).unwrap();
        let text = "ÉLAN élan";
        let (start, end) = matcher.find_at(text, 0).unwrap();
        assert!(matcher.matches_exactly(&text[start..end]));
        assert!(matcher.matches_exactly("Élan"));
        assert!(!matcher.matches_exactly("Élans"));

        let strict = TextMatcher::new("élan", true).unwrap();
        assert!(!strict.matches_exactly("Élan"));
        assert!(strict.matches_exactly("élan"));
    }

    #[test]
    fn test_find_treats_query_literally() {
        let text = "a.b axb (c)";
        assert_eq!(find_in_text(text, "x.", 0, false), None);
        assert_eq!(find_in_text(text, "(C)", 0, false), Some((8, 11)));
    }

    #[test]
    fn test_find_from_position_and_past_end() {
        let text = "cat dog cat mouse cat";
        assert_eq!(find_in_text(text, "cat", 10, true), Some((18, 21)));
        assert_eq!(find_in_text(text, "cat", 100, true), None);
        assert_eq!(find_in_text(text, "", 0, true), None);
    }

    #[test]
    fn test_find_rejects_mid_character_start() {
        let text = "\u{00e9}t\u{00e9}";
        assert_eq!(find_in_text(text, "t", 1, true), None);
        assert_eq!(find_in_text(text, "t", 2, true), Some((2, 3)));
    }

    #[test]
    fn test_replace_all_simple() {
        assert_eq!(replace_all_in_text("cat cat cat", "cat", "dog", false), ("dog dog dog".to_string(), 3));
    }

    #[test]
    fn test_replace_all_respects_case() {
        assert_eq!(replace_all_in_text("Cat cat CAT", "cat", "dog", true), ("Cat dog CAT".to_string(), 1));
        assert_eq!(replace_all_in_text("Cat cat CAT", "cat", "dog", false), ("dog dog dog".to_string(), 3));
    }

    #[test]
    fn test_replace_all_non_ascii() {
        assert_eq!(replace_all_in_text("ÉLAN élan", "élan", "x", false), ("x x".to_string(), 2));
    }

    #[test]
    fn test_replace_all_many_matches_with_one_matcher() {
        let text = "Ab ".repeat(10_000);
        let matcher = TextMatcher::new("ab", false).unwrap();
        let (new_text, count) = matcher.replace_all(&text, "x");
        assert_eq!(count, 10_000);
        assert_eq!(new_text, "x ".repeat(10_000));
    }

    #[test]
    fn test_replace_all_replacement_contains_query() {
        assert_eq!(replace_all_in_text("a a", "a", "aa", true), ("aa aa".to_string(), 2));
    }

    #[test]
    fn test_replace_all_no_matches_and_empty_replacement() {
        assert_eq!(replace_all_in_text("hello world", "rust", "x", false), ("hello world".to_string(), 0));
        assert_eq!(replace_all_in_text("hello world hello", "hello", "", false), (" world ".to_string(), 2));
        assert_eq!(replace_all_in_text("hello", "", "x", false), ("hello".to_string(), 0));
    }
}

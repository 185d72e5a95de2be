//! Whole-word, case-insensitive occurrence counting.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Count whole-word occurrences of `word` in `text`, ignoring case.
///
/// A match counts only when the characters on either side are not word
/// characters (alphanumerics and `_`), so `cat` does not match inside
/// `concatenate`. A rejected match does not hide a later one that starts
/// inside it.
pub fn count_occurrences(text: &str, word: &str) -> usize {
    let needle = word.to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    let haystack = text.to_lowercase();

    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = haystack[pos..].find(&needle) {
        let start = pos + offset;
        let end = start + needle.len();

        let before_ok = haystack[..start].chars().next_back().is_none_or(|c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().is_none_or(|c| !is_word_char(c));

        if before_ok && after_ok {
            count += 1;
            pos = end;
        } else {
            // Step one character past the rejected start.
            pos = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_only() {
        assert_eq!(count_occurrences("The cat sat, concatenate", "cat"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_occurrences("Cat CAT cat cAt", "cat"), 4);
        assert_eq!(count_occurrences("cat", "CAT"), 1);
    }

    #[test]
    fn test_punctuation_boundaries() {
        assert_eq!(count_occurrences("(cat) cat. cat's \"cat\"", "cat"), 4);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(count_occurrences("cat_1 cat1 1cat cat", "cat"), 1);
    }

    #[test]
    fn test_rejected_match_does_not_hide_next() {
        assert_eq!(count_occurrences("aaa aa", "aa"), 1);
        assert_eq!(count_occurrences("xaa aa", "aa"), 1);
    }

    #[test]
    fn test_no_match_and_empty() {
        assert_eq!(count_occurrences("dog", "cat"), 0);
        assert_eq!(count_occurrences("", "cat"), 0);
        assert_eq!(count_occurrences("cat", ""), 0);
    }
}

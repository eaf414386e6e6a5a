//! Word splitting for indexing and querying
//!
//! Documents and queries are sequences of space-delimited words. Runs of
//! spaces collapse to nothing, so leading, trailing, and repeated spaces
//! never produce empty tokens. No case folding or punctuation stripping is
//! performed.
//!
//! Only the space byte separates words. Other whitespace (tab, newline) is
//! below 0x20 and therefore a control character; validation rejects it
//! instead of treating it as a separator.

/// Split `text` into non-empty space-delimited words.
///
/// # Example
///
/// ```
/// use lexis_search::tokenizer::split_into_words;
///
/// let words: Vec<&str> = split_into_words("  white  cat ").collect();
/// assert_eq!(words, vec!["white", "cat"]);
/// ```
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// True when `text` contains a byte below 0x20.
pub(crate) fn has_control_characters(text: &str) -> bool {
    text.bytes().any(|byte| byte < b' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        split_into_words(text).collect()
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(words("white cat long tail"), vec!["white", "cat", "long", "tail"]);
    }

    #[test]
    fn test_split_collapses_space_runs() {
        assert_eq!(words("  fluffy   cat  "), vec!["fluffy", "cat"]);
    }

    #[test]
    fn test_split_single_word() {
        assert_eq!(words("cat"), vec!["cat"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(words("").is_empty());
    }

    #[test]
    fn test_split_only_spaces() {
        assert!(words("     ").is_empty());
    }

    #[test]
    fn test_split_keeps_punctuation_and_case() {
        assert_eq!(words("Well-groomed DOG!"), vec!["Well-groomed", "DOG!"]);
    }

    #[test]
    fn test_control_character_detection() {
        assert!(has_control_characters("ca\tt"));
        assert!(has_control_characters("line\nbreak"));
        assert!(has_control_characters("\u{1}"));
        assert!(!has_control_characters("plain words"));
        assert!(!has_control_characters(""));
    }

    #[test]
    fn test_multibyte_text_is_not_flagged() {
        assert!(!has_control_characters("пушистый кот"));
    }
}

//! Splits a spoken shopping list ("milk and eggs AND bread") into items.

/// Split `text` into phrases on every whitespace token equal to "and"
/// (case-insensitive).
///
/// Runs of "and" never produce empty phrases, and absent or blank input
/// yields no items. Tokens inside a phrase are re-joined with single spaces.
pub fn split_on_and(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut phrases = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        if word.eq_ignore_ascii_case("and") {
            if !current.is_empty() {
                phrases.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(word);
        }
    }

    if !current.is_empty() {
        phrases.push(current.join(" "));
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_each_and() {
        assert_eq!(split_on_and(Some("a and b and c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn consecutive_ands_collapse() {
        assert_eq!(split_on_and(Some("a and and b")), vec!["a", "b"]);
    }

    #[test]
    fn leading_and_trailing_and_are_dropped() {
        assert_eq!(split_on_and(Some("and a")), vec!["a"]);
        assert_eq!(split_on_and(Some("a and")), vec!["a"]);
        assert!(split_on_and(Some("and AND and")).is_empty());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            split_on_and(Some("Milk AND eggs And bread")),
            vec!["Milk", "eggs", "bread"]
        );
    }

    #[test]
    fn multi_word_items_keep_their_case() {
        assert_eq!(
            split_on_and(Some("Peanut Butter and chocolate chip muffins")),
            vec!["Peanut Butter", "chocolate chip muffins"]
        );
    }

    #[test]
    fn and_inside_a_word_does_not_split() {
        assert_eq!(
            split_on_and(Some("candy and sandwich bread")),
            vec!["candy", "sandwich bread"]
        );
    }

    #[test]
    fn no_and_returns_trimmed_input() {
        assert_eq!(split_on_and(Some("  paper towels ")), vec!["paper towels"]);
    }

    #[test]
    fn empty_and_absent_inputs() {
        assert!(split_on_and(Some("")).is_empty());
        assert!(split_on_and(Some("   ")).is_empty());
        assert!(split_on_and(None).is_empty());
    }
}

//! Property-based tests for tokenizing and rendering.

use proptest::prelude::*;
use recase::{render, tokenize_spans, tokenize_str, NamingConvention};

fn kebab(text: &str) -> String {
    render(&tokenize_str(text), NamingConvention::Kebab)
}

proptest! {
    #[test]
    fn kebab_rendering_is_idempotent(s in "\\PC{0,40}") {
        let once = kebab(&s);
        prop_assert_eq!(kebab(&once), once);
    }

    #[test]
    fn tokenizer_never_panics_on_arbitrary_text(s in any::<String>()) {
        let words = tokenize_str(&s);
        prop_assert!(words.iter().all(|w| !w.as_str().is_empty()));
    }

    #[test]
    fn plain_runs_keep_their_count(
        runs in prop::collection::vec("[a-z]{1,8}|[0-9]{1,8}", 1..8),
        delimiter in "[ _.@-]{1,3}",
    ) {
        // Neighbouring runs of the same class must not merge, so separate
        // them all with a delimiter.
        let text = runs.join(&delimiter);
        prop_assert_eq!(tokenize_str(&text).len(), runs.len());
    }

    #[test]
    fn kebab_round_trip_preserves_words(s in "[a-zA-Z0-9]{1,6}([ _-][a-zA-Z0-9]{1,6}){0,5}") {
        let words = tokenize_str(&s);
        prop_assert_eq!(tokenize_str(&kebab(&s)), words);
    }

    #[test]
    fn spans_cover_all_alphanumeric_content(s in "\\PC{0,40}") {
        let covered: String = tokenize_spans(&s)
            .iter()
            .map(|span| &s[span.range()])
            .collect();
        let expected: String = s.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        prop_assert_eq!(covered, expected);
    }

    #[test]
    fn words_are_lowercase_ascii(s in "\\PC{0,40}") {
        for word in tokenize_str(&s).iter() {
            prop_assert!(word
                .as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}

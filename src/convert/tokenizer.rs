use crate::convert::normalizer::NormalizedText;
use std::fmt;
use std::ops::{Deref, Range};

/// One lowercase run of ASCII letters or ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character uppercased, the rest left lowercase.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A word together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub word: Word,
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Words in left-to-right source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence(Vec<Word>);

impl WordSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_vec(self) -> Vec<Word> {
        self.0
    }

    /// Owned copies of the words, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|w| w.0.clone()).collect()
    }
}

impl Deref for WordSequence {
    type Target = [Word];

    fn deref(&self) -> &[Word] {
        &self.0
    }
}

impl FromIterator<Word> for WordSequence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for WordSequence {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Delimiter,
    Lower,
    Upper,
    Digit,
}

/// Split normalized text into words.
pub fn tokenize(text: &NormalizedText) -> WordSequence {
    tokenize_str(text.as_str())
}

/// Split any string into words, without trimming or coercion.
pub fn tokenize_str(text: &str) -> WordSequence {
    tokenize_spans(text).into_iter().map(|span| span.word).collect()
}

/// Split `text` into words, keeping the byte range of each.
///
/// Runs of anything other than ASCII letters and digits separate words and
/// are dropped. Inside a run, a new word starts:
/// - at an uppercase letter following a lowercase letter or digit (`fooBar`)
/// - at the last letter of an uppercase run followed by lowercase (`HTTPServer`)
/// - wherever letters and digits meet (`foo123bar`)
pub fn tokenize_spans(text: &str) -> Vec<WordSpan> {
    let mut spans = Vec::new();
    let mut state = State::Delimiter;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        let next = classify(ch);

        match (state, next) {
            (_, State::Delimiter) => {
                if state != State::Delimiter {
                    push_span(&mut spans, text, start, i);
                }
            }
            (State::Delimiter, _) => start = i,
            (State::Lower, State::Lower)
            | (State::Upper, State::Upper)
            | (State::Digit, State::Digit) => {}
            // The upper run is all ASCII, so `i - start` is its length.
            (State::Upper, State::Lower) => {
                if i - start >= 2 {
                    push_span(&mut spans, text, start, i - 1);
                    start = i - 1;
                }
            }
            _ => {
                push_span(&mut spans, text, start, i);
                start = i;
            }
        }

        state = next;
    }

    if state != State::Delimiter {
        push_span(&mut spans, text, start, text.len());
    }

    spans
}

fn classify(ch: char) -> State {
    if ch.is_ascii_lowercase() {
        State::Lower
    } else if ch.is_ascii_uppercase() {
        State::Upper
    } else if ch.is_ascii_digit() {
        State::Digit
    } else {
        State::Delimiter
    }
}

fn push_span(spans: &mut Vec<WordSpan>, text: &str, start: usize, end: usize) {
    if start < end {
        spans.push(WordSpan {
            word: Word(text[start..end].to_ascii_lowercase()),
            start,
            end,
        });
    }
}

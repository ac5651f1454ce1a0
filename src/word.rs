//! Words as seen by the line breaker.
//!
//! Width is approximated by character count (monospaced rendering), so a
//! [`Word`] only needs its text, its display length and whether it closes a
//! sentence. Forced line breaks travel through the same sequence as
//! zero-length tokens of kind [`WordKind::ForcedBreak`].

use std::fmt;

/// Characters that end a sentence and earn an extra unit of trailing space.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Distinguishes ordinary text tokens from forced-break markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordKind {
    Text,
    ForcedBreak,
}

/// An immutable token of the paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    display_length: usize,
    ends_sentence: bool,
    kind: WordKind,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let display_length = text.chars().count();
        let ends_sentence = text.ends_with(SENTENCE_TERMINATORS);
        Self {
            text,
            display_length,
            ends_sentence,
            kind: WordKind::Text,
        }
    }

    /// A mandatory line break. Occupies no width.
    pub fn forced_break() -> Self {
        Self {
            text: String::new(),
            display_length: 0,
            ends_sentence: false,
            kind: WordKind::ForcedBreak,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn display_length(&self) -> usize {
        self.display_length
    }

    #[inline]
    pub fn ends_sentence(&self) -> bool {
        self.ends_sentence
    }

    #[inline]
    pub fn kind(&self) -> WordKind {
        self.kind
    }

    #[inline]
    pub fn is_forced_break(&self) -> bool {
        self.kind == WordKind::ForcedBreak
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Word::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WordKind::Text => f.write_str(&self.text),
            WordKind::ForcedBreak => f.write_str("\\n"),
        }
    }
}

/// How source newlines turn into forced breaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BreakPolicy {
    /// Every newline in the source is a forced break.
    #[default]
    Newline,
    /// Only blank lines (two or more consecutive newlines) force a break;
    /// single newlines are ordinary whitespace.
    BlankLine,
}

/// Split `text` into words, inserting forced-break tokens per `policy`.
///
/// Leading and trailing forced breaks are dropped since they would only
/// produce empty lines at the paragraph edges.
pub fn tokenize(text: &str, policy: BreakPolicy) -> Vec<Word> {
    let mut words = Vec::new();
    let segments: Vec<&str> = match policy {
        BreakPolicy::Newline => text.split('\n').collect(),
        BreakPolicy::BlankLine => split_on_blank_lines(text),
    };

    for segment in segments {
        words.extend(segment.split_whitespace().map(Word::new));
        words.push(Word::forced_break());
    }

    let leading = words.iter().take_while(|w| w.is_forced_break()).count();
    words.drain(..leading);
    while words.last().is_some_and(Word::is_forced_break) {
        words.pop();
    }
    words
}

fn split_on_blank_lines(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut pending_newlines = 0usize;
    let mut run_start = 0usize;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            if pending_newlines == 0 {
                run_start = idx;
            }
            pending_newlines += 1;
        } else if !ch.is_whitespace() {
            if pending_newlines >= 2 {
                segments.push(&text[start..run_start]);
                start = idx;
            }
            pending_newlines = 0;
        }
    }
    segments.push(&text[start..]);
    segments
}

// Copyright 2026 the Keywell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text-insertion heuristics: auto-period, smart quotes, auto-capitalization.
//!
//! The keyboard never touches the document directly; the host applies
//! [`Intent`](crate::intent::Intent)s to its own text store and then runs
//! this module over it. [`TextAssist`] inspects the context before the
//! caret through the [`Document`] trait and performs the small rewrites the
//! reference platform keyboards do:
//!
//! - **auto-period**: a second space within 330 ms after a word character
//!   collapses `"x  "` into `"x. "`.
//! - **smart quotes**: a straight `'` or `"` becomes an opening curly quote
//!   at a word start and a closing one otherwise.
//! - **auto-capitalization**: a space after `.`, `!` or `?` (or an empty
//!   document) suggests engaging shift; the caller applies the suggestion
//!   via [`KeyboardSurface::apply_capitalization`](crate::surface::KeyboardSurface::apply_capitalization),
//!   which never overrides caps lock.
//!
//! External document edits (selection moves, host-side changes) are noisy;
//! [`TextAssist::document_changed`] routes the recapitalization check
//! through a 150 ms settle window pumped by [`TextAssist::poll`].

use keywell_modifier::Debounce;

/// The caret-relative view of the host's text store.
pub trait Document {
    /// The text before the caret (a bounded suffix is sufficient).
    fn context_before(&self) -> &str;
    /// Insert `text` at the caret.
    fn insert(&mut self, text: &str);
    /// Delete one unit backward from the caret.
    fn delete_backward(&mut self);
}

/// Which heuristics are enabled; all on by default.
#[derive(Copy, Clone, Debug)]
pub struct TextRules {
    /// Double-space inserts a period.
    pub period_shortcut: bool,
    /// Straight quotes become curly quotes.
    pub smart_quotes: bool,
    /// Sentence starts engage shift.
    pub auto_capitalization: bool,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            period_shortcut: true,
            smart_quotes: true,
            auto_capitalization: true,
        }
    }
}

/// Applies the heuristics around host-performed edits.
#[derive(Clone, Debug)]
pub struct TextAssist {
    rules: TextRules,
    last_space_time: Option<u64>,
    recheck: Debounce<()>,
}

impl TextAssist {
    /// Two spaces closer than this collapse to a period (milliseconds).
    pub const PERIOD_WINDOW_MS: u64 = 330;

    /// Create an assist with every heuristic enabled.
    pub fn new() -> Self {
        Self::with_rules(TextRules::default())
    }

    /// Create an assist with explicit rules.
    pub fn with_rules(rules: TextRules) -> Self {
        Self {
            rules,
            last_space_time: None,
            recheck: Debounce::new(),
        }
    }

    /// The active rules.
    pub fn rules(&self) -> TextRules {
        self.rules
    }

    /// Run the heuristics after the host inserted `c` at `now`.
    ///
    /// May rewrite the document (auto-period, smart quotes). Returns the
    /// auto-capitalization suggestion: `Some(true)` to engage shift,
    /// `Some(false)` to spend it, `None` for no opinion.
    pub fn after_insert<D: Document>(&mut self, doc: &mut D, c: char, now: u64) -> Option<bool> {
        self.auto_period(doc, c, now);
        self.smart_quotes(doc, c);
        if !self.rules.auto_capitalization || c != ' ' {
            return None;
        }
        Some(capitalize_opinion(doc.context_before()))
    }

    /// Recheck capitalization after the host deleted backward.
    pub fn after_delete<D: Document>(&mut self, doc: &D) -> Option<bool> {
        if !self.rules.auto_capitalization {
            return None;
        }
        Some(capitalize_opinion(doc.context_before()))
    }

    /// The document changed outside the keyboard; recheck after a settle
    /// window.
    pub fn document_changed(&mut self, now: u64) {
        self.recheck.push((), now);
    }

    /// Pump the settle window; yields the capitalization suggestion when
    /// a queued recheck comes due.
    pub fn poll<D: Document>(&mut self, doc: &D, now: u64) -> Option<bool> {
        self.recheck.poll(now)?;
        if !self.rules.auto_capitalization {
            return None;
        }
        Some(capitalize_opinion(doc.context_before()))
    }

    /// Collapse `"x  "` into `"x. "` for a quick double space.
    fn auto_period<D: Document>(&mut self, doc: &mut D, c: char, now: u64) {
        if !self.rules.period_shortcut || c != ' ' {
            return;
        }
        let within = self
            .last_space_time
            .is_some_and(|last| now.saturating_sub(last) < Self::PERIOD_WINDOW_MS);
        self.last_space_time = Some(now);
        if !within {
            return;
        }
        let mut tail = doc.context_before().chars().rev();
        if tail.next() != Some(' ') || tail.next() != Some(' ') {
            return;
        }
        let Some(before) = tail.next() else {
            return;
        };
        if before.is_whitespace() || is_punctuation(before) {
            return;
        }
        // Remove both spaces, then restore as ". ".
        doc.delete_backward();
        doc.delete_backward();
        doc.insert(".");
        doc.insert(" ");
    }

    /// Replace a just-typed straight quote with the curly form.
    fn smart_quotes<D: Document>(&mut self, doc: &mut D, c: char) {
        if !self.rules.smart_quotes {
            return;
        }
        let (open, close) = match c {
            '\'' => ("\u{2018}", "\u{2019}"),
            '"' => ("\u{201C}", "\u{201D}"),
            _ => return,
        };
        let mut tail = doc.context_before().chars().rev();
        if tail.next() != Some(c) {
            return;
        }
        // Opening at the start of the document or after whitespace.
        let opening = tail.next().is_none_or(char::is_whitespace);
        doc.delete_backward();
        doc.insert(if opening { open } else { close });
    }
}

impl Default for TextAssist {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the context before the caret is a sentence start.
///
/// True for an empty document and for a space that follows sentence-ending
/// punctuation; a trailing non-space character always reads as mid-word.
fn capitalize_opinion(context: &str) -> bool {
    let mut tail = context.chars().rev();
    match tail.next() {
        None => true,
        Some(' ') => {
            let last = tail.find(|ch| !ch.is_whitespace());
            matches!(last, Some('.' | '!' | '?'))
        }
        Some(_) => false,
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}')
}

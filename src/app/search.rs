use fltk::text::TextBuffer;

use super::buffer_utils::buffer_text;
use super::text_ops::TextMatcher;

/// A match located by [`SearchState::find_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub start: usize,
    pub end: usize,
    /// The search ran off the end of the text and restarted at the top.
    pub wrapped: bool,
}

/// What the Find and Replace dialogs last searched for.
///
/// Shared between both dialogs and Edit/Find Next, so F3 repeats whatever
/// was typed into either of them.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub replacement: String,
    pub case_sensitive: bool,
}

impl SearchState {
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    fn matcher(&self) -> Option<TextMatcher> {
        TextMatcher::new(&self.query, self.case_sensitive)
    }

    /// Forward search from `cursor`, wrapping to the beginning once.
    pub fn find_next(&self, text: &str, cursor: usize) -> Option<SearchHit> {
        let matcher = self.matcher()?;
        if let Some((start, end)) = matcher.find_at(text, cursor) {
            return Some(SearchHit { start, end, wrapped: false });
        }
        if cursor == 0 {
            return None;
        }
        matcher
            .find_at(text, 0)
            .map(|(start, end)| SearchHit { start, end, wrapped: true })
    }

    /// Replace the buffer's selection when it is exactly one match.
    ///
    /// Returns the position just past the inserted replacement, where the
    /// next search should start, or None when nothing was replaced.
    pub fn replace_selection(&self, buffer: &mut TextBuffer) -> Option<usize> {
        let matcher = self.matcher()?;
        let (start, end) = buffer.selection_position()?;
        if start == end || !matcher.matches_exactly(&buffer.selection_text()) {
            return None;
        }
        buffer.replace_selection(&self.replacement);
        Some(start.max(0) as usize + self.replacement.len())
    }

    /// Replace every match in the buffer; returns how many were replaced.
    ///
    /// The buffer is only touched when something matched, so a fruitless
    /// Replace All leaves the document clean.
    pub fn replace_all(&self, buffer: &mut TextBuffer) -> usize {
        let Some(matcher) = self.matcher() else {
            return 0;
        };
        let (new_text, count) = matcher.replace_all(&buffer_text(buffer), &self.replacement);
        if count > 0 {
            buffer.set_text(&new_text);
        }
        count
    }
}

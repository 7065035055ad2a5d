//! Boundary-aware shortening of text.
//!
//! All lengths are counted in `char`s. A cut prefers, in order, a paragraph
//! break, the end of a sentence, then any whitespace, searching only the
//! last 30% of the budget. Without a boundary in that window the text is
//! hard-cut. The continuation marker is appended to every shortened result.

use std::borrow::Cow;

/// Marker appended to shortened text unless a platform supplies its own.
pub const DEFAULT_MARKER: &str = "...";

/// Share of the budget, counted from the end, searched for a boundary.
const BOUNDARY_WINDOW: f64 = 0.3;

const SENTENCE_ENDS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncator {
    marker: String,
    marker_len: usize,
}

impl Default for Truncator {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Truncator {
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        let marker_len = marker.chars().count();
        Self { marker, marker_len }
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Length of the marker in chars.
    #[must_use]
    pub fn marker_len(&self) -> usize {
        self.marker_len
    }

    /// Shorten `text` to at most `max_len` chars of content plus the marker.
    ///
    /// Returns the input unchanged (borrowed) when it already fits.
    #[must_use]
    pub fn truncate<'a>(&self, text: &'a str, max_len: usize) -> Cow<'a, str> {
        let Some(cut_end) = byte_offset(text, max_len) else {
            return Cow::Borrowed(text);
        };

        let cut = find_cut(text, max_len, cut_end);
        let mut out = String::with_capacity(cut + self.marker.len());
        out.push_str(text[..cut].trim_end());
        out.push_str(&self.marker);
        Cow::Owned(out)
    }

    /// Shorten `text` so the result, marker included, is at most `limit` chars.
    ///
    /// When `limit` cannot even hold the marker the text is hard-cut without one.
    #[must_use]
    pub fn fit<'a>(&self, text: &'a str, limit: usize) -> Cow<'a, str> {
        if byte_offset(text, limit).is_none() {
            return Cow::Borrowed(text);
        }
        if limit < self.marker_len {
            let end = byte_offset(text, limit).unwrap_or(text.len());
            return Cow::Owned(text[..end].to_string());
        }
        self.truncate(text, limit - self.marker_len)
    }
}

/// Shorten with the default `...` marker.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> Cow<'_, str> {
    Truncator::default().truncate(text, max_len)
}

/// Byte offset of char number `n`, or `None` when the text has `n` chars or fewer.
fn byte_offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices().nth(n).map(|(i, _)| i)
}

/// Byte offset to cut at. `cut_end` is the byte offset of char `max_len`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn find_cut(text: &str, max_len: usize, cut_end: usize) -> usize {
    let window = (max_len as f64 * BOUNDARY_WINDOW).ceil() as usize;
    let floor_chars = max_len.saturating_sub(window);
    let floor = byte_offset(text, floor_chars).unwrap_or(cut_end);
    let head = &text[..cut_end];

    if let Some(pos) = head.rfind("\n\n") {
        if pos >= floor && pos > 0 {
            return pos;
        }
    }

    // Sentence end: punctuation followed by whitespace (or the end of the
    // budget). Full-width marks need no trailing space.
    let mut sentence_cut = None;
    let mut chars = text[..cut_end].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !SENTENCE_ENDS.contains(&c) {
            continue;
        }
        let after = i + c.len_utf8();
        let next = chars
            .peek()
            .map(|&(_, n)| n)
            .or_else(|| text[after..].chars().next());
        let boundary = !c.is_ascii() || next.is_none_or(char::is_whitespace);
        if boundary && i >= floor {
            sentence_cut = Some(after);
        }
    }
    if let Some(cut) = sentence_cut {
        return cut;
    }

    // Whitespace at or before char `max_len`; a space right at the limit
    // keeps the whole budget.
    let ws_scan_end = text[cut_end..]
        .chars()
        .next()
        .map_or(cut_end, |c| cut_end + c.len_utf8());
    if let Some((pos, _)) = text[..ws_scan_end]
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace())
    {
        if pos >= floor && pos > 0 {
            return pos;
        }
    }

    cut_end
}

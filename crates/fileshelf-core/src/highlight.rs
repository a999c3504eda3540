//! Match highlighting for the search field.
//!
//! Splits a rendered cell into plain and matched segments for the active
//! query. The query is always a literal: matching is a case-folded substring
//! scan over a byte-offset map back into the original text, so regex
//! metacharacters in user input have no special meaning and need no escaping.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub content: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(content: &str) -> Self {
        Self {
            content: content.to_string(),
            is_match: false,
        }
    }

    fn matched(content: &str) -> Self {
        Self {
            content: content.to_string(),
            is_match: true,
        }
    }
}

/// Segments `text` by non-overlapping, case-insensitive occurrences of
/// `query`, in order, preserving the original text exactly. An empty query
/// yields a single unmarked segment.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle: String = query.chars().flat_map(char::to_lowercase).collect();
    let (lowered, offsets) = fold_with_offsets(text);

    let mut segments = Vec::new();
    let mut search_from = 0usize;
    let mut emitted_up_to = 0usize;

    while let Some(found) = lowered[search_from..].find(&needle) {
        let match_start = search_from + found;
        let match_end = match_start + needle.len();

        let orig_start = offsets[match_start];
        // End of the original char containing the last matched folded byte.
        // Folding can expand one char into several bytes, and a match may end
        // inside such an expansion; the whole char is marked in that case.
        let orig_end = char_end(text, offsets[match_end - 1]);

        if orig_start > emitted_up_to {
            segments.push(Segment::plain(&text[emitted_up_to..orig_start]));
        }
        if orig_end > orig_start.max(emitted_up_to) {
            segments.push(Segment::matched(&text[orig_start.max(emitted_up_to)..orig_end]));
            emitted_up_to = orig_end;
        }

        // Skip any remaining folded bytes of the last marked char.
        search_from = match_end;
        while search_from < lowered.len() && offsets[search_from] < emitted_up_to {
            search_from += 1;
        }
    }

    if emitted_up_to < text.len() {
        segments.push(Segment::plain(&text[emitted_up_to..]));
    }
    if segments.is_empty() {
        segments.push(Segment::plain(text));
    }
    segments
}

/// Lowercases `text`, recording for every folded byte the byte offset of the
/// original char it came from.
fn fold_with_offsets(text: &str) -> (String, Vec<usize>) {
    let mut lowered = String::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());
    for (index, ch) in text.char_indices() {
        for folded in ch.to_lowercase() {
            for _ in 0..folded.len_utf8() {
                offsets.push(index);
            }
            lowered.push(folded);
        }
    }
    (lowered, offsets)
}

fn char_end(text: &str, char_start: usize) -> usize {
    text[char_start..]
        .chars()
        .next()
        .map_or(text.len(), |ch| char_start + ch.len_utf8())
}

/// Returns the centered substring of at most `max_length` characters.
///
/// Lengths are counted in characters, not bytes. When `text` is longer than
/// `max_length`, the window starts at `(len - max_length) / 2`.
pub fn select_window(text: &str, max_length: usize) -> &str {
    let len = text.chars().count();
    if len <= max_length {
        return text;
    }

    let start = (len - max_length) / 2;
    slice_chars(text, start, max_length)
}

/// Returns at most the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    slice_chars(text, 0, max_chars)
}

fn slice_chars(text: &str, start: usize, count: usize) -> &str {
    let begin = byte_offset(text, start);
    let end = begin + byte_offset(&text[begin..], count);
    &text[begin..end]
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

//! Summary post-processing: terminator normalization and bullet formatting

/// Ensure summary ends with a proper sentence terminator.
///
/// Trims surrounding whitespace and appends a literal `...` when the text
/// does not already end in `.`, `!`, or `?`. Idempotent.
pub fn normalize_terminator(summary: &str) -> String {
    let trimmed = summary.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}...", trimmed)
    }
}

/// Split text into sentences.
///
/// A sentence boundary is a `.`, `!`, or `?` followed by one or more
/// spaces; the punctuation stays with the preceding sentence and the
/// spaces are consumed as the delimiter.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let is_terminator = matches!(bytes[i], b'.' | b'!' | b'?');
        if is_terminator && i + 1 < bytes.len() && bytes[i + 1] == b' ' {
            sentences.push(&text[start..=i]);
            i += 1;
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Render a summary as bullet points, one sentence per line.
///
/// Output starts with a newline so the first bullet lands on its own line.
pub fn format_bullets(summary: &str) -> String {
    let points: Vec<&str> = split_sentences(summary)
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    format!("\n• {}", points.join("\n• "))
}

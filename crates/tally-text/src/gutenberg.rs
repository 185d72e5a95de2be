//! Project Gutenberg header/footer stripping.
//!
//! The markers are matched literally. They are shorter than the boilerplate
//! real Gutenberg files carry (which names the book after `PROJECT`), so
//! those files pass through untrimmed.

/// Line marker that ends the header.
pub const START_MARKER: &str = "*** START OF THE PROJECT ***";

/// Line marker that starts the footer.
pub const END_MARKER: &str = "*** END OF THE PROJECT ***";

/// Return the body between the start and end marker lines.
///
/// Everything up to and including the first line containing
/// [`START_MARKER`] is dropped; then the first following line containing
/// [`END_MARKER`] and everything after it is dropped. A missing start
/// marker keeps the text from the beginning, a missing end marker keeps it
/// through the end.
pub fn trim(text: &str) -> &str {
    let body = match find_marker_line(text, START_MARKER) {
        Some((_, line_end)) => &text[line_end..],
        None => text,
    };
    match find_marker_line(body, END_MARKER) {
        Some((line_start, _)) => &body[..line_start],
        None => body,
    }
}

/// Byte range of the first line containing `marker`, including its newline.
fn find_marker_line(text: &str, marker: &str) -> Option<(usize, usize)> {
    let hit = text.find(marker)?;
    let line_start = text[..hit].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[hit..]
        .find('\n')
        .map_or(text.len(), |i| hit + i + 1);
    Some((line_start, line_end))
}

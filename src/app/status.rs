use fltk::text::TextBuffer;

/// 1-based line and column of byte position `pos`.
///
/// Reads only the text of the cursor's own line, so it stays cheap on every
/// keystroke in a large buffer. Columns count characters, not bytes.
pub fn cursor_line_column(buffer: &TextBuffer, pos: i32) -> (usize, usize) {
    let pos = pos.clamp(0, buffer.length());
    let line = buffer.count_lines(0, pos).max(0) as usize + 1;
    let line_start = buffer.line_start(pos);
    let column = buffer
        .text_range(line_start, pos)
        .unwrap_or_default()
        .chars()
        .count()
        + 1;
    (line, column)
}

/// Status bar label for the current document and cursor.
pub fn status_text(line: usize, column: usize, display_name: &str, dirty: bool) -> String {
    let mut label = format!("  Line {}, Col {}  |  {}", line, column, display_name);
    if dirty {
        label.push_str("  |  Modified");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> TextBuffer {
        let mut buf = TextBuffer::default();
        buf.set_text(text);
        buf
    }

    #[test]
    fn test_clean_document() {
        assert_eq!(status_text(1, 1, "Untitled", false), "  Line 1, Col 1  |  Untitled");
    }

    #[test]
    fn test_dirty_document_with_cursor() {
        assert_eq!(
            status_text(2, 3, "notes.txt", true),
            "  Line 2, Col 3  |  notes.txt  |  Modified"
        );
    }

    #[test]
    fn test_cursor_line_column() {
        let buf = buffer("one\ntwo\n\nfour");
        assert_eq!(cursor_line_column(&buf, 0), (1, 1));
        assert_eq!(cursor_line_column(&buf, 3), (1, 4));
        assert_eq!(cursor_line_column(&buf, 4), (2, 1));
        assert_eq!(cursor_line_column(&buf, 6), (2, 3));
        assert_eq!(cursor_line_column(&buf, 8), (3, 1));
        assert_eq!(cursor_line_column(&buf, 13), (4, 5));
    }

    #[test]
    fn test_cursor_line_column_empty_buffer() {
        assert_eq!(cursor_line_column(&buffer(""), 0), (1, 1));
    }

    #[test]
    fn test_cursor_line_column_counts_characters() {
        // "é" is two bytes
        let buf = buffer("x\n\u{00e9}t\u{00e9}");
        assert_eq!(cursor_line_column(&buf, 5), (2, 3));
    }

    #[test]
    fn test_cursor_line_column_clamps_out_of_range() {
        let buf = buffer("ab\ncd");
        assert_eq!(cursor_line_column(&buf, -4), (1, 1));
        assert_eq!(cursor_line_column(&buf, 99), (2, 3));
    }
}

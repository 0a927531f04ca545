//! Shared rendering helpers and constants.

/// Gutter: 1 (cursor) + 2 × 4 (line numbers) + 2 (separators) + 2 (marker) = 13 chars
pub const GUTTER_WIDTH: usize = 13;

/// Tab stop width for display alignment.
pub const TAB_WIDTH: usize = 4;

/// Sanitize control characters. A carriage return is shown as `␍`.
pub fn sanitize_char(c: char) -> char {
    match c {
        '\r' => '\u{240D}',
        '\x00'..='\x1f' | '\x7f' => '\u{FFFD}',
        _ => c,
    }
}

/// Right-aligned 1-based line number, blank when absent.
pub fn format_line_number(line: Option<usize>) -> String {
    match line {
        Some(n) => format!("{:>4}", n + 1),
        None => "    ".to_string(),
    }
}

/// Visible slice of a line after horizontal scroll, tabs expanded.
pub fn visible_text(text: &str, scroll_x: usize, max_width: usize) -> String {
    let mut out = String::with_capacity(max_width);
    let mut col = 0usize;
    let mut width = 0usize;

    for ch in text.chars() {
        if width >= max_width {
            break;
        }
        if ch == '\t' {
            let advance = TAB_WIDTH - (col % TAB_WIDTH);
            for _ in 0..advance {
                if col >= scroll_x && width < max_width {
                    out.push(' ');
                    width += 1;
                }
                col += 1;
            }
            continue;
        }
        if col >= scroll_x {
            out.push(sanitize_char(ch));
            width += 1;
        }
        col += 1;
    }
    out
}

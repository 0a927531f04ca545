//! Documents split into the lines that get compared.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::Arc;

/// Bytes inspected when sniffing for binary content.
const BINARY_SNIFF_LEN: usize = 8000;

/// A document held as raw bytes plus the byte range of every line.
///
/// Lines are the segments between `\n` bytes and nothing else is normalized.
/// A `\r` before the newline stays in the line text and a trailing newline
/// leaves an empty last line, so line-ending edits show up as changes.
/// An empty buffer has no lines at all.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    bytes: Arc<[u8]>,
    lines: Vec<Range<usize>>,
}

impl TextBuffer {
    /// Split `input` into lines.
    pub fn new(input: &[u8]) -> Self {
        Self {
            bytes: Arc::from(input),
            lines: split_lines(input),
        }
    }

    /// The empty document.
    pub fn empty() -> Self {
        Self {
            bytes: Arc::from(&[][..]),
            lines: Vec::new(),
        }
    }

    /// NUL byte near the start, the same heuristic git uses.
    pub fn is_binary(&self) -> bool {
        let sniff = self.bytes.len().min(BINARY_SNIFF_LEN);
        self.bytes[..sniff].contains(&0)
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line texts for diffing; invalid UTF-8 becomes U+FFFD.
    pub fn lines(&self) -> Vec<Cow<'_, str>> {
        self.lines
            .iter()
            .map(|range| String::from_utf8_lossy(&self.bytes[range.clone()]))
            .collect()
    }

    /// Line texts as owned strings.
    pub fn owned_lines(&self) -> Vec<String> {
        self.lines().into_iter().map(Cow::into_owned).collect()
    }

    /// Whole document as lossy UTF-8 text.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-byte document.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

fn split_lines(bytes: &[u8]) -> Vec<Range<usize>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' {
            lines.push(start..i);
            start = i + 1;
        }
    }
    lines.push(start..bytes.len());
    lines
}

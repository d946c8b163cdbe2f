//! Paragraph splitting
//!
//! A paragraph is a run of lines ended by an empty line (or end of input).
//! Its lines are joined with single spaces and the result is trimmed.
//! Whitespace-only lines do not end a paragraph.

use std::str::Lines;

/// Lazy iterator over the non-empty paragraphs of a text.
pub struct Paragraphs<'a> {
    lines: Lines<'a>,
}

impl<'a> Paragraphs<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl Iterator for Paragraphs<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut buffer = String::new();
        let mut saw_line = false;

        loop {
            match self.lines.next() {
                Some("") => {
                    let paragraph = buffer.trim();
                    if !paragraph.is_empty() {
                        return Some(paragraph.to_string());
                    }
                    buffer.clear();
                }
                Some(line) => {
                    saw_line = true;
                    buffer.push_str(line);
                    buffer.push(' ');
                }
                None => {
                    if !saw_line {
                        return None;
                    }
                    let paragraph = buffer.trim();
                    return (!paragraph.is_empty()).then(|| paragraph.to_string());
                }
            }
        }
    }
}

/// Collect every non-empty paragraph of `text` in order.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    Paragraphs::new(text).collect()
}

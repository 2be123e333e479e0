//! Markdown parsing utilities using pulldown-cmark
//!
//! Extracts the heading outline of a note together with the line each
//! heading starts on, which is what section slicing works with.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// One entry of a document's heading outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// Heading text content
    pub text: String,
    /// Heading level (1-6)
    pub level: u8,
    /// 0-based line the heading starts on
    pub line: usize,
}

impl HeadingEntry {
    pub fn new(text: impl Into<String>, level: u8, line: usize) -> Self {
        Self {
            text: text.into(),
            level,
            line,
        }
    }
}

/// Extract the heading outline from markdown content, in document order
///
/// A leading `---` front-matter block is treated as metadata, so its closing
/// delimiter is not mistaken for a setext heading underline.
pub fn extract_outline(content: &str) -> Vec<HeadingEntry> {
    let line_starts = line_starts(content);
    let mut headings = Vec::new();
    let mut current: Option<(u8, usize, String)> = None;

    let parser = Parser::new_ext(content, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let line = line_of(&line_starts, range.start);
                current = Some((heading_level(level), line, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, line, text)) = current.take() {
                    headings.push(HeadingEntry::new(text.trim(), level, line));
                }
            }
            _ => {}
        }
    }

    headings
}

/// Number of lines in `content` when split on `\n`
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Byte offsets at which each line begins
fn line_starts(content: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(content.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

fn line_of(line_starts: &[usize], offset: usize) -> usize {
    match line_starts.binary_search(&offset) {
        Ok(line) => line,
        Err(next) => next.saturating_sub(1),
    }
}

//! Text normalization and word counting
//!
//! Notes are stripped of front matter, comments and markup before their
//! words are counted. The cleaned text is only used for counting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading `---` front-matter block
static FRONTMATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:.*?\r?\n)?---[ \t]*(?:\r?\n|\z)")
        .expect("valid frontmatter regex")
});

/// `%% comment %%` spans, possibly across lines
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)%%.*?%%").expect("valid comment regex"));

static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").expect("valid newline regex"));

static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid space regex"));

/// `[[target]]`, `[[target|alias]]` and embeds, content included
static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[[^\]]*\]\]").expect("valid wiki link regex"));

/// Heading and emphasis markers
static MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"#|\*|==").expect("valid marker regex"));

/// A single CJK character, or a run of letters/digits/hyphens/apostrophes
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\p{Han}\p{Hiragana}\p{Katakana}]|(?:[0-9]+(?:[.,][0-9]+)*|[-'’\p{L}\p{M}&&[^\p{Han}\p{Hiragana}\p{Katakana}]])+",
    )
    .expect("valid word regex")
});

const EM_DASH: char = '\u{2014}';

/// Strip structure and markup noise from note text
///
/// Front matter and comments are removed while line structure still exists;
/// everything after that works on a single space-separated line. Removing
/// markers can bring new comment pairs or double spaces together, so passes
/// repeat until the text is stable.
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_pass(raw);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let text = FRONTMATTER.replace(text, "");
    let text = COMMENT.replace_all(&text, "");
    let text = text.replace(EM_DASH, "");
    let text = NEWLINES.replace_all(&text, " ");
    let text = SPACES.replace_all(&text, " ");
    let text = WIKI_LINK.replace_all(&text, "");
    let text = MARKERS.replace_all(&text, "");
    text.trim().to_string()
}

/// Count words in already normalized text
///
/// Digit groups like `1,000.50` count once. Chinese and Japanese text is
/// counted per character. Runs of punctuation alone (a bare `-`) are not
/// words.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text)
        .filter(|m| m.as_str().chars().any(char::is_alphanumeric))
        .count()
}

/// Normalize then count
pub fn word_count(raw: &str) -> usize {
    count_words(&normalize(raw))
}

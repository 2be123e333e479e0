//! Word count to dot quantization

use crate::constants as C;
use crate::metadata::DotSpec;

/// Result of quantizing a word count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantized {
    /// Word counting is switched off (`words_per_dot <= 0`)
    Disabled,
    /// The note exists but has no words
    Empty,
    /// Between 1 and 5 dots
    Dots(u8),
}

impl Quantized {
    /// Numeric form: 0 when disabled, -1 for an empty note, otherwise the dot count
    pub fn value(self) -> i32 {
        match self {
            Quantized::Disabled => 0,
            Quantized::Empty => -1,
            Quantized::Dots(n) => i32::from(n),
        }
    }

    /// Expand into the dots the calendar renders
    pub fn dots(self) -> Vec<DotSpec> {
        match self {
            Quantized::Disabled => Vec::new(),
            Quantized::Empty => vec![DotSpec::empty_marker()],
            Quantized::Dots(n) => vec![DotSpec::normal(); usize::from(n)],
        }
    }
}

/// Map a word count onto the 1..=5 dot scale
///
/// Any non-zero count yields at least one dot, even below `words_per_dot`.
pub fn quantize(word_count: usize, words_per_dot: i64) -> Quantized {
    if words_per_dot <= 0 {
        return Quantized::Disabled;
    }
    if word_count == 0 {
        return Quantized::Empty;
    }

    // words_per_dot > 0 here, so the conversion only fails on 16-bit targets
    let per_dot = usize::try_from(words_per_dot).unwrap_or(usize::MAX);
    let dots = (word_count / per_dot).clamp(1, C::MAX_DOTS);
    Quantized::Dots(dots as u8)
}

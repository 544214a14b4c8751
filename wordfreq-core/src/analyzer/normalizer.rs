use smallvec::SmallVec;

/// Maps every byte to its lowercase ASCII letter, or 0 when the byte is not
/// a Latin letter.
const LETTER_TABLE: [u8; 256] = build_letter_table();

const fn build_letter_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut b = b'a';
    while b <= b'z' {
        table[b as usize] = b;
        table[(b - b'a' + b'A') as usize] = b;
        b += 1;
    }
    table
}

/// Inline capacity of the per-token scratch buffer. Longer words spill to
/// the heap.
const SCRATCH_INLINE: usize = 24;

/// Configuration options for word normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Minimum length a cleaned word needs to survive.
    pub min_len: usize,
    /// Keeps the article "a" even though it is shorter than `min_len`.
    pub keep_article: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_len: 2,
            keep_article: true,
        }
    }
}

/// Turns raw tokens into counting keys.
///
/// For every token:
/// - lowercases it
/// - drops every character that is not `a..=z` afterwards
/// - keeps the result only if it has at least `min_len` letters, or it is
///   exactly `"a"` and `keep_article` is set
///
/// Tokens are never split or merged, and survivors keep their input order.
///
/// ASCII bytes go through a lookup table. Anything else is lowercased with
/// full Unicode rules and survives only if it lowercases to a Latin letter,
/// so `"\u{212A}ing"` (KELVIN SIGN) becomes `"king"`.
///
/// # Examples
///
/// ```
/// use wordfreq_core::analyzer::WordNormalizer;
///
/// let normalizer = WordNormalizer::default();
/// let words = normalizer.normalize(["Cheese!", "a", "I", "the", "THE"]);
/// assert_eq!(words, ["cheese", "a", "the", "the"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer {
    config: NormalizerConfig,
}

impl WordNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline(always)]
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes a single token, returning `None` if it is discarded.
    #[inline]
    pub fn normalize_word(&self, token: &str) -> Option<String> {
        let mut scratch: SmallVec<[u8; SCRATCH_INLINE]> = SmallVec::new();

        let bytes = token.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            let b = bytes[i];
            if b < 128 {
                let letter = LETTER_TABLE[b as usize];
                if letter != 0 {
                    scratch.push(letter);
                }
                i += 1;
                continue;
            }

            // Non-ASCII: decode one char and fold it.
            let Some(ch) = token[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();

            for lowered in ch.to_lowercase() {
                if lowered.is_ascii_lowercase() {
                    scratch.push(lowered as u8);
                }
            }
        }

        if !self.keeps(&scratch) {
            return None;
        }

        // Only `a..=z` was ever pushed.
        Some(scratch.iter().map(|&b| b as char).collect())
    }

    /// Normalizes a token sequence.
    pub fn normalize<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens.into_iter();
        let mut out = Vec::with_capacity(tokens.size_hint().0);
        for token in tokens {
            if let Some(word) = self.normalize_word(token.as_ref()) {
                out.push(word);
            }
        }
        out
    }

    #[inline(always)]
    fn keeps(&self, cleaned: &[u8]) -> bool {
        if cleaned.is_empty() {
            return false;
        }
        cleaned.len() >= self.config.min_len || (self.config.keep_article && cleaned == b"a")
    }
}

/// Normalizes tokens with the default configuration.
pub fn normalize<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WordNormalizer::default().normalize(tokens)
}

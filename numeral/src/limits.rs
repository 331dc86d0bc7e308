/// Limits on the size of a single phrase.
///
/// Real phrases are a handful of words; the defaults are generous enough for
/// every legitimate input while keeping per-call work bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum phrase length in bytes
    /// Real usage: ~100 bytes, Limit: 4KB
    pub max_phrase_bytes: usize,

    /// Maximum number of tokens after splitting
    /// Real usage: ~10 tokens, Limit: 256
    pub max_tokens: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_phrase_bytes: 4 * 1024,
            max_tokens: 256,
        }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }
}

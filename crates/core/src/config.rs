/// Which of the decoding-dependent counters a [`Counter`](crate::Counter) has to compute.
///
/// Newlines and bytes are always counted; they come for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountConfig {
    pub count_words: bool,
    pub count_chars: bool,
    pub count_max_line_length: bool,
}

impl CountConfig {
    /// Everything enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            count_words: true,
            count_chars: true,
            count_max_line_length: true,
        }
    }

    /// Only newlines and bytes.
    #[must_use]
    pub const fn lines_and_bytes() -> Self {
        Self {
            count_words: false,
            count_chars: false,
            count_max_line_length: false,
        }
    }

    /// `true` when the input has to be decoded as UTF-8.
    #[must_use]
    pub const fn needs_decoding(&self) -> bool {
        self.count_words || self.count_chars || self.count_max_line_length
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::all()
    }
}

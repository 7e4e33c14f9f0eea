use crate::config::CountConfig;
use crate::stats::Counts;
use crate::width::{char_width, next_tab_stop};

/// Longest prefix of a UTF-8 sequence that can still be waiting for more input.
const MAX_PENDING: usize = 3;

/// Streaming counter fed with arbitrary byte chunks.
///
/// UTF-8 sequences split across two `update` calls are carried over and
/// decoded once complete, so the result does not depend on how the input was
/// chunked.
#[derive(Debug, Clone)]
pub struct Counter {
    config: CountConfig,
    counts: Counts,
    in_word: bool,
    column: usize,
    pending: [u8; MAX_PENDING],
    pending_len: usize,
}

impl Counter {
    #[must_use]
    pub fn new(config: CountConfig) -> Self {
        Self {
            config,
            counts: Counts::new(),
            in_word: false,
            column: 0,
            pending: [0; MAX_PENDING],
            pending_len: 0,
        }
    }

    /// Feed the next chunk of input.
    pub fn update(&mut self, input: &[u8]) {
        self.counts.bytes += input.len();

        if !self.config.needs_decoding() {
            self.counts.lines += bytecount::count(input, b'\n');
            return;
        }

        let mut rest = input;
        if self.pending_len > 0 {
            let pending_len = self.pending_len;
            let take = rest.len().min(MAX_PENDING);
            let mut joined = [0u8; 2 * MAX_PENDING];
            joined[..pending_len].copy_from_slice(&self.pending[..pending_len]);
            joined[pending_len..pending_len + take].copy_from_slice(&rest[..take]);
            let len = pending_len + take;
            self.pending_len = 0;

            let tail = self.scan(&joined[..len]);
            if tail > take {
                // The carried sequence is still incomplete and the chunk is used up.
                self.stash(&joined[len - tail..len]);
                return;
            }
            rest = &rest[take - tail..];
        }

        let tail = self.scan(rest);
        self.stash(&rest[rest.len() - tail..]);
    }

    /// Flush carried-over bytes and return the final counts.
    #[must_use]
    pub fn finish(mut self) -> Counts {
        if self.pending_len > 0 {
            self.pending_len = 0;
            self.scan_invalid();
        }
        self.end_line();
        self.counts
    }

    /// Scans `bytes` and returns the length of a truncated UTF-8 sequence
    /// at its end, which is left unprocessed.
    fn scan(&mut self, bytes: &[u8]) -> usize {
        let mut chunks = bytes.utf8_chunks().peekable();
        while let Some(chunk) = chunks.next() {
            self.scan_str(chunk.valid());

            let invalid = chunk.invalid();
            if invalid.is_empty() {
                continue;
            }
            if chunks.peek().is_none() && is_truncated(invalid) {
                return invalid.len();
            }
            self.scan_invalid();
        }
        0
    }

    fn scan_str(&mut self, text: &str) {
        let track_width = self.config.count_max_line_length;

        for c in text.chars() {
            self.counts.chars += 1;
            match c {
                '\n' => {
                    self.counts.lines += 1;
                    self.in_word = false;
                    self.end_line();
                }
                '\r' | '\x0c' => {
                    self.in_word = false;
                    self.end_line();
                }
                '\t' => {
                    self.in_word = false;
                    if track_width {
                        self.column = next_tab_stop(self.column);
                    }
                }
                c if c.is_whitespace() => {
                    self.in_word = false;
                    if track_width {
                        self.column += char_width(c);
                    }
                }
                c => {
                    if !self.in_word {
                        self.in_word = true;
                        self.counts.words += 1;
                    }
                    if track_width {
                        self.column += char_width(c);
                    }
                }
            }
        }
    }

    /// Encoding errors are not characters, but they do belong to a word.
    fn scan_invalid(&mut self) {
        if !self.in_word {
            self.in_word = true;
            self.counts.words += 1;
        }
    }

    fn end_line(&mut self) {
        self.counts.max_line_length = self.counts.max_line_length.max(self.column);
        self.column = 0;
    }

    fn stash(&mut self, tail: &[u8]) {
        self.pending[..tail.len()].copy_from_slice(tail);
        self.pending_len = tail.len();
    }
}

/// `true` if `bytes` is a valid UTF-8 prefix cut short by the end of input.
fn is_truncated(bytes: &[u8]) -> bool {
    core::str::from_utf8(bytes).is_err_and(|e| e.error_len().is_none())
}

/// Count an in-memory buffer in one go.
#[must_use]
pub fn count_bytes(input: &[u8], config: &CountConfig) -> Counts {
    let mut counter = Counter::new(*config);
    counter.update(input);
    counter.finish()
}

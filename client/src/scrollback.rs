//! Bounded text log.

/// Accumulated log text, trimmed from the front when it grows too long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrollback {
    text: String,
    max_len: usize,
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new(25_000)
    }
}

impl Scrollback {
    /// Creates an empty scrollback holding at most `max_len` characters.
    #[must_use]
    pub const fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn push(&mut self, text: &str) {
        self.text.push_str(text);
        self.trim();
    }

    /// Appends a server error on its own line.
    pub fn push_error(&mut self, message: &str) {
        self.push(&format!("ERROR: {message}\n"));
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    // Drops the oldest 30% once over the limit.
    fn trim(&mut self) {
        let chars = self.text.chars().count();
        if chars <= self.max_len {
            return;
        }
        let drop = chars * 3 / 10;
        let cut = self
            .text
            .char_indices()
            .nth(drop)
            .map_or(self.text.len(), |(index, _)| index);
        self.text.drain(..cut);
    }
}

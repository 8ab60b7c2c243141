//! Requests sent from the client to the server.
//!
//! Requests are bracketed, space-separated token lists such as `["go" 3]`.
//! Strings are JSON-quoted; numbers and booleans are written bare.

use std::fmt;

/// A request with a fixed encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Request {
    /// Asks the server for the next display frame.
    Display,
}

impl Request {
    #[must_use]
    pub const fn encode(self) -> &'static str {
        match self {
            Self::Display => r#"["disp"]"#,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode())
    }
}

/// Turns typed command lines into requests.
///
/// Remembers the last command body so an empty line can repeat it.
#[derive(Debug, Clone, Default)]
pub struct CommandEncoder {
    last: Option<String>,
}

impl CommandEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `line` as a request.
    ///
    /// Tokens are separated by spaces or commas. A line with no tokens repeats
    /// the previous command, and yields `None` if nothing was sent yet.
    pub fn encode(&mut self, line: &str) -> Option<String> {
        let body = line
            .split([' ', ','])
            .filter(|token| !token.is_empty())
            .map(encode_token)
            .collect::<Vec<_>>()
            .join(" ");
        if !body.is_empty() {
            self.last = Some(body);
        }
        self.last.as_ref().map(|body| format!("[{body}]"))
    }

    /// The last command body sent, without brackets.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

fn encode_token(token: &str) -> String {
    if is_bare(token) {
        token.to_owned()
    } else {
        serde_json::Value::from(token).to_string()
    }
}

fn is_bare(token: &str) -> bool {
    matches!(token, "true" | "false") || token.parse::<f64>().is_ok_and(f64::is_finite)
}

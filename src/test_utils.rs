//! Helpers shared by the test modules.

use crate::response::Response;

/// A response that is nothing but a status line and a body.
///
/// `Default` gives `200 OK` with an empty body, which is what most response types start out as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockResponse {
    /// The status code, unchecked.
    pub code: u16,
    /// The reason phrase, unchecked.
    pub reason: String,
    /// Carried through untouched by `with_status`.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a new `MockResponse` with the given status and an empty body.
    #[inline]
    pub fn new(code: u16, reason: &str) -> MockResponse {
        MockResponse {
            code,
            reason: reason.to_owned(),
            body: Vec::new(),
        }
    }
}

impl Default for MockResponse {
    fn default() -> MockResponse {
        MockResponse::new(200, "OK")
    }
}

impl Response for MockResponse {
    #[inline]
    fn status_code(&self) -> u16 { self.code }

    #[inline]
    fn reason_phrase(&self) -> &str { &self.reason }

    fn with_status(self, code: u16, reason_phrase: &str) -> MockResponse {
        MockResponse {
            code,
            reason: reason_phrase.to_owned(),
            ..self
        }
    }
}

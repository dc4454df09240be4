//! The view of an HTTP response that a `StatusCode` reads from and writes to.
//!
//! This crate does not model responses; implement `Response` for whatever response type you
//! already have. Only the status line is touched.

/// An HTTP response, as far as its status is concerned.
///
/// Updates follow value semantics: `with_status` takes the response and hands back the updated
/// one, rather than changing it behind some other binding’s back.
///
/// ```rust
/// use httpstatus::{Response, StatusCode};
///
/// struct Reply {
///     code: u16,
///     reason: String,
///     body: Vec<u8>,
/// }
///
/// impl Response for Reply {
///     fn status_code(&self) -> u16 { self.code }
///
///     fn reason_phrase(&self) -> &str { &self.reason }
///
///     fn with_status(self, code: u16, reason_phrase: &str) -> Reply {
///         Reply { code, reason: reason_phrase.to_owned(), ..self }
///     }
/// }
///
/// let reply = Reply { code: 200, reason: "OK".to_owned(), body: b"hello".to_vec() };
/// let reply = StatusCode::new(404).unwrap().apply_to(reply);
/// assert_eq!((reply.code, &*reply.reason, &*reply.body), (404, "Not Found", &b"hello"[..]));
/// ```
pub trait Response: Sized {
    /// The numeric status code of the response.
    ///
    /// Nothing obliges this to be in the range 100–599; `StatusCode::from_response` checks.
    fn status_code(&self) -> u16;

    /// The reason phrase of the response; empty if there is none.
    fn reason_phrase(&self) -> &str;

    /// Produce the response with its status replaced.
    fn with_status(self, code: u16, reason_phrase: &str) -> Self;
}

//! HTTP status codes.

use std::borrow::Cow;
use std::fmt;
use std::str::{self, FromStr};

use tracing::trace;

use crate::error::{InvalidArgument, Result};
use crate::grammar::core::{is_digit, SP};
use crate::grammar::reason_phrase::is_reason_phrase;
use crate::registry;
use crate::response::Response;

/// An HTTP status code (`status-code` in RFC 7230 et al.) together with its `reason-phrase`.
///
/// The code is always in the range 100–599; the reason phrase may be anything at all, including
/// empty. Neither can be changed once the value exists: `with_reason_phrase` and
/// `with_default_reason_phrase` produce new values and leave the original alone.
///
/// ```rust
/// # use httpstatus::StatusCode;
/// let not_found = StatusCode::new(404).unwrap();
/// assert_eq!(not_found.reason_phrase(), "Not Found");
/// assert!(not_found.is_client_error());
///
/// let gone_fishing = not_found.with_reason_phrase("Gone Fishing");
/// assert_eq!(gone_fishing.to_string(), "404 Gone Fishing");
/// assert_eq!(not_found.to_string(), "404 Not Found");
/// ```
///
/// If you encounter a status code that you do not know how to deal with, you should treat it as
/// the `x00` status code of its class, e.g. treat 471 as 400 (Bad Request). This can be achieved
/// with `self.class().default_code()`:
///
/// ```rust
/// # use httpstatus::StatusCode;
/// let status = StatusCode::new(471).unwrap();
/// assert!(status.is_custom());
/// assert_eq!(status.class().default_code(), StatusCode::new(400).unwrap());
/// ```
///
/// Equality takes the reason phrase into account; compare `as_u16()` if you only care about the
/// code, which is what you should nearly always care about.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawStatusCode"))]
pub struct StatusCode {
    code: u16,
    reason_phrase: Cow<'static, str>,
}

impl StatusCode {
    /// The lowest legal status code.
    pub const MIN: u16 = 100;

    /// The highest legal status code.
    pub const MAX: u16 = 599;

    /// Create a status code with its canonical reason phrase, or an empty one if it has none.
    ///
    /// ```rust
    /// # use httpstatus::{InvalidArgument, StatusCode};
    /// assert_eq!(StatusCode::new(200).unwrap().reason_phrase(), "OK");
    /// assert_eq!(StatusCode::new(199).unwrap().reason_phrase(), "");
    /// assert_eq!(StatusCode::new(600), Err(InvalidArgument::OutOfBounds(600)));
    /// ```
    pub fn new(code: u16) -> Result<StatusCode> {
        Ok(StatusCode {
            code: check_bounds(code)?,
            reason_phrase: default_reason_phrase(code),
        })
    }

    /// Create a status code with the given reason phrase, which is kept exactly as it is.
    pub fn from_parts<P>(code: u16, reason_phrase: P) -> Result<StatusCode>
    where
        P: Into<Cow<'static, str>>,
    {
        Ok(StatusCode {
            code: check_bounds(code)?,
            reason_phrase: reason_phrase.into(),
        })
    }

    /// Create a status code, with the canonical reason phrase standing in for `None`.
    ///
    /// This is `from_parts` for `Some` and `new` for `None`; it is convenient where the reason
    /// phrase is optional to begin with.
    ///
    /// ```rust
    /// # use httpstatus::StatusCode;
    /// assert_eq!(StatusCode::create(200, None::<String>).unwrap().reason_phrase(), "OK");
    /// assert_eq!(StatusCode::create(200, Some("")).unwrap().reason_phrase(), "");
    /// ```
    pub fn create<P>(code: u16, reason_phrase: Option<P>) -> Result<StatusCode>
    where
        P: Into<Cow<'static, str>>,
    {
        match reason_phrase {
            Some(reason_phrase) => StatusCode::from_parts(code, reason_phrase),
            None => StatusCode::new(code),
        }
    }

    /// Read the status of a response.
    ///
    /// The response is not obliged to hold a legal status code, so this can fail just as
    /// `from_parts` can.
    pub fn from_response<R: Response>(response: &R) -> Result<StatusCode> {
        let code = response.status_code();
        let reason_phrase = response.reason_phrase();
        trace!(code, reason_phrase, "reading status from response");
        StatusCode::from_parts(code, reason_phrase.to_owned())
    }

    /// Parse the `status-code [ SP reason-phrase ]` part of a status line, i.e. everything after
    /// the `HTTP-version SP` and before the CRLF
    /// ([RFC 7230, section 3.1.2](https://tools.ietf.org/html/rfc7230#section-3.1.2)).
    ///
    /// The status code must be all digits and the reason phrase must satisfy the `reason-phrase`
    /// rule and be UTF-8. A bare status code gets an empty reason phrase, not the canonical one,
    /// so that this is the inverse of the `Display` implementation.
    ///
    /// ```rust
    /// # use httpstatus::{InvalidArgument, StatusCode};
    /// let status = StatusCode::from_status_line(b"418 I'm a teapot").unwrap();
    /// assert_eq!((status.as_u16(), status.reason_phrase()), (418, "I'm a teapot"));
    ///
    /// assert_eq!(StatusCode::from_status_line(b"204").unwrap().reason_phrase(), "");
    /// assert_eq!(StatusCode::from_status_line(b"2xx Whatever"), Err(InvalidArgument::NotAnInteger));
    /// assert_eq!(StatusCode::from_status_line(b"200 OK\r\n"),
    ///            Err(InvalidArgument::ReasonPhraseNotString));
    /// ```
    pub fn from_status_line(line: &[u8]) -> Result<StatusCode> {
        let (code, reason_phrase) = match line.iter().position(|&o| o == SP) {
            Some(i) => (&line[..i], &line[i + 1..]),
            None => (line, &b""[..]),
        };
        let code = parse_code(code)?;
        if !is_reason_phrase(reason_phrase) {
            return Err(InvalidArgument::ReasonPhraseNotString);
        }
        let reason_phrase = str::from_utf8(reason_phrase)
            .map_err(|_| InvalidArgument::ReasonPhraseNotString)?;
        StatusCode::from_parts(code, reason_phrase.to_owned())
    }

    /// The numeric status code, 100–599.
    #[inline]
    pub fn as_u16(&self) -> u16 {
        self.code
    }

    /// The reason phrase; possibly empty.
    ///
    /// The reason phrase is defined as being exclusively for human readers. You should avoid
    /// deriving any meaning from it at all costs.
    #[inline]
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// Get the standardised `reason-phrase` for this status code, regardless of the reason phrase
    /// this value actually carries.
    ///
    /// Bear in mind also that in HTTP/2 the reason phrase is abolished from transmission, and so
    /// this canonical reason phrase really is the only reason phrase you’ll find.
    #[inline]
    pub fn canonical_reason(&self) -> Option<&'static str> {
        registry::canonical_reason(self.code)
    }

    /// Determine the class of a status code, based on its first digit.
    #[inline]
    pub fn class(&self) -> StatusClass {
        StatusClass::of(self.code)
    }

    /// Whether this is a 1xx (Informational) status code.
    #[inline]
    pub fn is_informational(&self) -> bool {
        self.class() == StatusClass::Informational
    }

    /// Whether this is a 2xx (Successful) status code.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.class() == StatusClass::Successful
    }

    /// Whether this is a 3xx (Redirection) status code.
    #[inline]
    pub fn is_redirection(&self) -> bool {
        self.class() == StatusClass::Redirection
    }

    /// Whether this is a 4xx (Client Error) status code.
    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.class() == StatusClass::ClientError
    }

    /// Whether this is a 5xx (Server Error) status code.
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.class() == StatusClass::ServerError
    }

    /// Whether the status code has no canonical reason phrase, i.e. is not one this library
    /// knows by name.
    ///
    /// ```rust
    /// # use httpstatus::StatusCode;
    /// assert!(!StatusCode::new(200).unwrap().is_custom());
    /// assert!(StatusCode::new(599).unwrap().is_custom());
    /// ```
    #[inline]
    pub fn is_custom(&self) -> bool {
        !registry::is_registered(self.code)
    }

    /// Whether the status code is one of those defined by
    /// [RFC 2616, section 10](https://tools.ietf.org/html/rfc2616#section-10), as opposed to a
    /// later extension such as 102 (Processing), 308 (Permanent Redirect) or 429 (Too Many
    /// Requests).
    ///
    /// ```rust
    /// # use httpstatus::StatusCode;
    /// assert!(StatusCode::new(200).unwrap().is_baseline());
    /// assert!(!StatusCode::new(102).unwrap().is_baseline());
    /// ```
    #[inline]
    pub fn is_baseline(&self) -> bool {
        registry::is_rfc2616(self.code)
    }

    /// Produce the same status code with a different reason phrase.
    pub fn with_reason_phrase<P>(&self, reason_phrase: P) -> StatusCode
    where
        P: Into<Cow<'static, str>>,
    {
        StatusCode {
            code: self.code,
            reason_phrase: reason_phrase.into(),
        }
    }

    /// Produce the same status code with a reason phrase given as raw octets, which must be UTF-8.
    ///
    /// ```rust
    /// # use httpstatus::{InvalidArgument, StatusCode};
    /// let ok = StatusCode::new(200).unwrap();
    /// assert_eq!(ok.with_reason_phrase_bytes(b"Fine").unwrap().reason_phrase(), "Fine");
    /// assert_eq!(ok.with_reason_phrase_bytes(b"\xff"), Err(InvalidArgument::ReasonPhraseNotString));
    /// ```
    pub fn with_reason_phrase_bytes(&self, reason_phrase: &[u8]) -> Result<StatusCode> {
        let reason_phrase = str::from_utf8(reason_phrase)
            .map_err(|_| InvalidArgument::ReasonPhraseNotString)?;
        Ok(self.with_reason_phrase(reason_phrase.to_owned()))
    }

    /// Produce the same status code with its canonical reason phrase, or an empty one if it has
    /// none.
    ///
    /// ```rust
    /// # use httpstatus::StatusCode;
    /// let all_right = StatusCode::from_parts(200, "All Right").unwrap();
    /// assert_eq!(all_right.with_default_reason_phrase().reason_phrase(), "OK");
    ///
    /// let custom = StatusCode::from_parts(599, "Custom Reason").unwrap();
    /// assert_eq!(custom.with_default_reason_phrase().reason_phrase(), "");
    /// ```
    pub fn with_default_reason_phrase(&self) -> StatusCode {
        StatusCode {
            code: self.code,
            reason_phrase: default_reason_phrase(self.code),
        }
    }

    /// Set this status on a response, producing the updated response.
    pub fn apply_to<R: Response>(&self, response: R) -> R {
        trace!(code = self.code, reason_phrase = %self.reason_phrase, "applying status to response");
        response.with_status(self.code, &self.reason_phrase)
    }
}

#[inline]
fn check_bounds(code: u16) -> Result<u16> {
    if (StatusCode::MIN..=StatusCode::MAX).contains(&code) {
        Ok(code)
    } else {
        Err(InvalidArgument::OutOfBounds(code.into()))
    }
}

#[inline]
fn default_reason_phrase(code: u16) -> Cow<'static, str> {
    Cow::Borrowed(registry::canonical_reason(code).unwrap_or(""))
}

/// Read a run of digits as a status code.
fn parse_code(digits: &[u8]) -> Result<u16> {
    if digits.is_empty() || !digits.iter().all(|&o| is_digit(o)) {
        return Err(InvalidArgument::NotAnInteger);
    }
    let value = digits.iter().fold(0i128, |n, &o| {
        n.saturating_mul(10).saturating_add(i128::from(o - b'0'))
    });
    match u16::try_from(value) {
        Ok(code) => check_bounds(code),
        Err(_) => Err(InvalidArgument::OutOfBounds(value)),
    }
}

/// Formats the status code and reason phrase, separated by a space; just the code if the reason
/// phrase is empty.
///
/// ```rust
/// # use httpstatus::StatusCode;
/// assert_eq!(StatusCode::new(418).unwrap().to_string(), "418 I'm a teapot");
/// assert_eq!(StatusCode::new(123).unwrap().to_string(), "123");
/// ```
///
/// If you wish to just include the number, use `as_u16()` instead.
impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.reason_phrase.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.reason_phrase)
        }
    }
}

impl FromStr for StatusCode {
    type Err = InvalidArgument;

    #[inline]
    fn from_str(s: &str) -> Result<StatusCode> {
        StatusCode::from_status_line(s.as_bytes())
    }
}

macro_rules! try_from_integer {
    ($($int:ty)*) => {$(
        impl TryFrom<$int> for StatusCode {
            type Error = InvalidArgument;

            /// Convert an integer to a `StatusCode` with its canonical reason phrase, if it is in
            /// the legal range (100–599).
            #[inline]
            fn try_from(n: $int) -> Result<StatusCode> {
                match u16::try_from(n) {
                    Ok(code) => StatusCode::new(code),
                    Err(_) => Err(InvalidArgument::OutOfBounds(n as i128)),
                }
            }
        }
    )*}
}

try_from_integer!(u32 u64 usize i16 i32 i64 isize);

impl TryFrom<u16> for StatusCode {
    type Error = InvalidArgument;

    #[inline]
    fn try_from(code: u16) -> Result<StatusCode> {
        StatusCode::new(code)
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(status: StatusCode) -> u16 {
        status.code
    }
}

impl PartialEq<u16> for StatusCode {
    #[inline]
    fn eq(&self, other: &u16) -> bool {
        self.code == *other
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStatusCode {
    code: u16,
    reason_phrase: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStatusCode> for StatusCode {
    type Error = InvalidArgument;

    fn try_from(raw: RawStatusCode) -> Result<StatusCode> {
        StatusCode::create(raw.code, raw.reason_phrase)
    }
}

/// The class of an HTTP `status-code`.
///
/// [RFC 7231, section 6 (Response Status Codes)](https://tools.ietf.org/html/rfc7231#section-6):
///
/// > The first digit of the status-code defines the class of response.
/// > The last two digits do not have any categorization role.
///
/// And:
///
/// > HTTP status codes are extensible.  HTTP clients are not required to
/// > understand the meaning of all registered status codes, though such
/// > understanding is obviously desirable.  However, a client MUST
/// > understand the class of any status code, as indicated by the first
/// > digit, and treat an unrecognized status code as being equivalent to
/// > the x00 status code of that class, with the exception that a
/// > recipient MUST NOT cache a response with an unrecognized status code.
///
/// This can be used in cases where a status code’s meaning is unknown, also,
/// to get the appropriate *category* of status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusClass {
    /// 1xx (Informational): The request was received, continuing process
    Informational = 100,

    /// 2xx (Successful): The request was successfully received, understood, and accepted
    Successful = 200,

    /// 3xx (Redirection): Further action needs to be taken in order to complete the request
    Redirection = 300,

    /// 4xx (Client Error): The request contains bad syntax or cannot be fulfilled
    ClientError = 400,

    /// 5xx (Server Error): The server failed to fulfill an apparently valid request
    ServerError = 500,
}

impl StatusClass {
    /// Determine the class of a numeric status code, based on its first digit.
    ///
    /// Codes below 200 count as informational and codes from 500 up as server errors, so every
    /// legal code (100–599) lands in exactly one class.
    pub fn of(code: u16) -> StatusClass {
        // We could match 100..=199 &c., but this way we avoid unreachable!() at the end.
        if code < 200 {
            StatusClass::Informational
        } else if code < 300 {
            StatusClass::Successful
        } else if code < 400 {
            StatusClass::Redirection
        } else if code < 500 {
            StatusClass::ClientError
        } else {
            StatusClass::ServerError
        }
    }

    /// Get the default status code for the class.
    ///
    /// This produces the x00 status code with its canonical reason phrase; thus, for
    /// `ClientError` (4xx), for example, this will produce 400 Bad Request:
    ///
    /// ```rust
    /// # use httpstatus::StatusClass;
    /// assert_eq!(StatusClass::ClientError.default_code().to_string(), "400 Bad Request");
    /// ```
    #[inline]
    pub fn default_code(self) -> StatusCode {
        let code = self as u16;
        StatusCode {
            code,
            reason_phrase: default_reason_phrase(code),
        }
    }
}

/// Formats the class as `1xx`, `2xx` and so forth.
impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}xx", *self as u16 / 100)
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::error::InvalidArgument;
    use crate::status::StatusCode;

    proptest! {
        #[test]
        fn prop_parts_are_kept(code in 100u16..=599, reason in ".*") {
            let status = StatusCode::from_parts(code, reason.clone()).unwrap();
            prop_assert_eq!(status.as_u16(), code);
            prop_assert_eq!(status.reason_phrase(), reason.as_str());
        }

        #[test]
        fn prop_out_of_bounds_is_rejected(
            code in prop_oneof![i64::MIN..100i64, 600i64..=i64::MAX],
        ) {
            prop_assert_eq!(StatusCode::try_from(code),
                            Err(InvalidArgument::OutOfBounds(i128::from(code))));
        }

        #[test]
        fn prop_exactly_one_class(code in 100u16..=599) {
            let status = StatusCode::new(code).unwrap();
            let classes = [
                status.is_informational(),
                status.is_success(),
                status.is_redirection(),
                status.is_client_error(),
                status.is_server_error(),
            ];
            prop_assert_eq!(classes.iter().filter(|&&b| b).count(), 1);
            prop_assert_eq!(status.class() as u16, code / 100 * 100);
        }

        #[test]
        fn prop_default_reason_phrase_is_idempotent(code in 100u16..=599, reason in ".*") {
            let status = StatusCode::from_parts(code, reason.clone()).unwrap();
            let once = status.with_default_reason_phrase();
            prop_assert_eq!(once.with_default_reason_phrase(), once.clone());
            prop_assert_eq!(once, StatusCode::new(code).unwrap());
            prop_assert_eq!(status.reason_phrase(), reason.as_str());
        }

        #[test]
        fn prop_display_parses_back(code in 100u16..=599, reason in "[ -~\t]*") {
            let status = StatusCode::from_parts(code, reason).unwrap();
            prop_assert_eq!(status.to_string().parse::<StatusCode>(), Ok(status));
        }

        #[test]
        fn prop_custom_means_no_canonical_reason(code in 100u16..=599) {
            let status = StatusCode::new(code).unwrap();
            prop_assert_eq!(status.is_custom(), status.canonical_reason().is_none());
            if status.is_baseline() {
                prop_assert!(!status.is_custom());
            }
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let status = StatusCode::from_parts(404, "Lost").unwrap();
        assert_eq!(serde_json::to_string(&status).unwrap(), r#"{"code":404,"reason_phrase":"Lost"}"#);
        assert_eq!(serde_json::to_string(&StatusClass::ClientError).unwrap(), r#""ClientError""#);
    }

    #[test]
    fn test_deserialize() {
        let status: StatusCode = serde_json::from_str(r#"{"code":404,"reason_phrase":"Lost"}"#).unwrap();
        assert_eq!(status, StatusCode::from_parts(404, "Lost").unwrap());

        let status: StatusCode = serde_json::from_str(r#"{"code":404}"#).unwrap();
        assert_eq!(status.reason_phrase(), "Not Found");

        let status: StatusCode = serde_json::from_str(r#"{"code":404,"reason_phrase":null}"#).unwrap();
        assert_eq!(status.reason_phrase(), "Not Found");
    }

    #[test]
    fn test_deserialize_out_of_bounds() {
        let err = serde_json::from_str::<StatusCode>(r#"{"code":600}"#).unwrap_err();
        assert!(err.to_string().contains("status code out of bounds: 600"), "{}", err);
    }
}

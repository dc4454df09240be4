//! The static tables behind `StatusCode`: canonical reason phrases and the RFC 2616 code set.
//!
//! Both are perfect hash tables built at compile time, so there is nothing to initialise and
//! nothing that can ever be written to.

use phf::{phf_map, phf_set};

/// Canonical reason phrases, keyed by status code.
///
/// A code that is not a key here is *custom* (see `StatusCode::is_custom`).
///
/// Keys carry the `u16` suffix because the macro hashes unsuffixed integer literals as `i32`.
static REASON_PHRASES: phf::Map<u16, &'static str> = phf_map! {
    100u16 => "Continue",
    101u16 => "Switching Protocols",
    102u16 => "Processing",
    200u16 => "OK",
    201u16 => "Created",
    202u16 => "Accepted",
    203u16 => "Non-Authoritative Information",
    204u16 => "No Content",
    205u16 => "Reset Content",
    206u16 => "Partial Content",
    207u16 => "Multi-Status",
    208u16 => "Already Reported",
    226u16 => "IM Used",
    300u16 => "Multiple Choices",
    301u16 => "Moved Permanently",
    302u16 => "Found",
    303u16 => "See Other",
    304u16 => "Not Modified",
    305u16 => "Use Proxy",
    306u16 => "Switch Proxy",  // deprecated
    307u16 => "Temporary Redirect",
    308u16 => "Permanent Redirect",
    400u16 => "Bad Request",
    401u16 => "Unauthorized",
    402u16 => "Payment Required",
    403u16 => "Forbidden",
    404u16 => "Not Found",
    405u16 => "Method Not Allowed",
    406u16 => "Not Acceptable",
    407u16 => "Proxy Authentication Required",
    408u16 => "Request Time-out",
    409u16 => "Conflict",
    410u16 => "Gone",
    411u16 => "Length Required",
    412u16 => "Precondition Failed",
    413u16 => "Request Entity Too Large",
    414u16 => "Request-URI Too Large",
    415u16 => "Unsupported Media Type",
    416u16 => "Requested range not satisfiable",
    417u16 => "Expectation Failed",
    418u16 => "I'm a teapot",
    // FIXME: the IANA registry names 421 "Misdirected Request". Kept as "Permanent Redirect"
    // until somebody confirms which one callers depend on.
    421u16 => "Permanent Redirect",
    422u16 => "Unprocessable Entity",
    423u16 => "Locked",
    424u16 => "Failed Dependency",
    425u16 => "Unordered Collection",
    426u16 => "Upgrade Required",
    428u16 => "Precondition Required",
    429u16 => "Too Many Requests",
    431u16 => "Request Header Fields Too Large",
    451u16 => "Unavailable For Legal Reasons",
    500u16 => "Internal Server Error",
    501u16 => "Not Implemented",
    502u16 => "Bad Gateway",
    503u16 => "Service Unavailable",
    504u16 => "Gateway Time-out",
    505u16 => "HTTP Version not supported",
    506u16 => "Variant Also Negotiates",
    507u16 => "Insufficient Storage",
    508u16 => "Loop Detected",
    510u16 => "Not Extended",
    511u16 => "Network Authentication Required",
};

/// The status codes defined by [RFC 2616, section 10](https://tools.ietf.org/html/rfc2616#section-10).
static RFC2616_CODES: phf::Set<u16> = phf_set! {
    100u16, 101u16,
    200u16, 201u16, 202u16, 203u16, 204u16, 205u16, 206u16,
    300u16, 301u16, 302u16, 303u16, 304u16, 305u16, 307u16,
    400u16, 401u16, 402u16, 403u16, 404u16, 405u16, 406u16, 407u16, 408u16, 409u16,
    410u16, 411u16, 412u16, 413u16, 414u16, 415u16, 416u16, 417u16,
    500u16, 501u16, 502u16, 503u16, 504u16, 505u16,
};

/// The canonical reason phrase for a code, if it has one.
#[inline]
pub fn canonical_reason(code: u16) -> Option<&'static str> {
    REASON_PHRASES.get(&code).copied()
}

/// Whether the code has a canonical reason phrase.
#[inline]
pub fn is_registered(code: u16) -> bool {
    REASON_PHRASES.contains_key(&code)
}

/// Whether the code is one of those defined by RFC 2616.
#[inline]
pub fn is_rfc2616(code: u16) -> bool {
    RFC2616_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(REASON_PHRASES.len(), 62);
        assert_eq!(RFC2616_CODES.len(), 40);
    }

    #[test]
    fn test_rfc2616_codes_are_registered() {
        for &code in RFC2616_CODES.iter() {
            assert!(is_registered(code), "{} is in RFC 2616 but has no phrase", code);
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(canonical_reason(200), Some("OK"));
        assert_eq!(canonical_reason(418), Some("I'm a teapot"));
        assert_eq!(canonical_reason(421), Some("Permanent Redirect"));
        assert_eq!(canonical_reason(199), None);
        assert_eq!(canonical_reason(599), None);

        assert!(is_rfc2616(200));
        assert!(is_rfc2616(417));
        assert!(!is_rfc2616(102));
        assert!(!is_rfc2616(226));
        assert!(!is_rfc2616(306));
        assert!(!is_rfc2616(308));
        assert!(!is_rfc2616(429));
    }

    #[test]
    fn test_phrases_are_within_bounds() {
        for (&code, phrase) in REASON_PHRASES.entries() {
            assert!(code >= 100 && code <= 599);
            assert!(!phrase.is_empty());
        }
    }
}

//! The core syntax rules defined in [RFC 7230, section 1.2 Syntax Notation]
//! (https://tools.ietf.org/html/rfc7230#section-1.2), those of them that a status line uses:
//!
//! ```ignore
//! The following core rules are included by reference, as defined in
//! [RFC5234], Appendix B.1: ALPHA (letters), CR (carriage return), CRLF
//! (CR LF), CTL (controls), DIGIT (decimal 0-9), DQUOTE (double quote),
//! HEXDIG (hexadecimal 0-9/A-F/a-f), HTAB (horizontal tab), LF (line
//! feed), OCTET (any 8-bit sequence of data), SP (space), and VCHAR (any
//! visible [USASCII] character).
//! ```
//!
//! `obs-text` comes from [RFC 7230, section 3.2.6](https://tools.ietf.org/html/rfc7230#section-3.2.6).

/// DIGIT: decimal 0-9
#[inline]
pub fn is_digit(octet: u8) -> bool {
    octet.is_ascii_digit()
}

/// HTAB: horizontal tab
pub const HTAB: u8 = b'\t';

/// SP: US-ASCII SP, space (32)
pub const SP: u8 = b' ';

/// VCHAR: any visible US-ASCII character
#[inline]
pub fn is_vchar(octet: u8) -> bool {
    (0x21..=0x7e).contains(&octet)
}

/// obs-text: %x80-FF
#[inline]
pub fn is_obs_text(octet: u8) -> bool {
    octet >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit() {
        assert!(is_digit(b'0'));
        assert!(is_digit(b'9'));
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
        assert!(!is_digit(b'a'));
    }

    #[test]
    fn test_vchar() {
        assert!(is_vchar(b'!'));
        assert!(is_vchar(b'~'));
        assert!(!is_vchar(SP));
        assert!(!is_vchar(HTAB));
        assert!(!is_vchar(0x7f));
        assert!(!is_vchar(0x80));
    }

    #[test]
    fn test_obs_text() {
        assert!(is_obs_text(0x80));
        assert!(is_obs_text(0xff));
        assert!(!is_obs_text(b'~'));
    }
}

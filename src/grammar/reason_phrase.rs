//! Things pertaining to the RFC 7230 `reason-phrase` grammar rule.
//!
//! RFC 7230 grammar:
//!
//! ```abnf
//! reason-phrase  = *( HTAB / SP / VCHAR / obs-text )
//! ```
//!
//! Note that this admits the empty string, and that `obs-text` admits any octet from 0x80, so a
//! reason phrase that satisfies the rule need not be UTF-8.

use super::core::{is_obs_text, is_vchar, HTAB, SP};

/// Whether an octet may appear in a `reason-phrase`.
#[inline]
pub fn is_reason_phrase_char(o: u8) -> bool {
    o == HTAB || o == SP || is_vchar(o) || is_obs_text(o)
}

/// Whether the octets make up a `reason-phrase`.
#[inline]
pub fn is_reason_phrase(bytes: &[u8]) -> bool {
    bytes.iter().all(|&o| is_reason_phrase_char(o))
}

//! Grammar rules from RFC 7230 needed to read a status line.

pub mod core;
pub mod reason_phrase;

//! An HTTP status code and its reason phrase, as an immutable value.
//!
//! `StatusCode` pairs a code in the range 100–599 with a reason phrase, classifies it (see
//! `StatusClass`), knows whether it is one of the codes RFC 2616 defined and whether it is one
//! this library knows by name at all, and can be read from or set on any response type that
//! implements `Response`.
//!
//! ```rust
//! use httpstatus::{StatusClass, StatusCode};
//!
//! let status: StatusCode = "503 Service Unavailable".parse().unwrap();
//! assert_eq!(status.class(), StatusClass::ServerError);
//! assert!(status.is_baseline());
//! assert!(!status.is_custom());
//! ```

#![warn(non_upper_case_globals, missing_docs, unused_results)]

pub mod error;
pub mod grammar;
pub mod registry;
pub mod response;
pub mod status;

#[cfg(test)]
mod test_utils;

pub use crate::error::{InvalidArgument, Result};
pub use crate::response::Response;
pub use crate::status::{StatusClass, StatusCode};

//! Shared building blocks for HTTP error values
//!
//! The status registry, the error-kind family derived from it, the
//! property bag carried by errors, and the [`StatusError`] capability.

#![allow(clippy::must_use_candidate)]

mod error;
pub mod kind;
pub mod props;
pub mod status;

pub use error::StatusError;
pub use kind::ErrorKind;
pub use props::Props;
pub use status::{STATUS_CODES, Status};

//! Create HTTP error values from a status, a message, an existing error
//! and property bags, in any combination.
//!
//! ```
//! use http_errors::{Arg, Props, create_error};
//!
//! let err = create_error!(404, Props::new().with("id", 1)).unwrap();
//! assert_eq!(err.message(), "Not Found");
//! assert_eq!(err.name(), "NotFoundError");
//! assert!(err.expose());
//!
//! let err = http_errors::create_error([Arg::from("disk full")]).unwrap();
//! assert_eq!(err.status(), 500);
//! assert!(!err.expose());
//! ```

#![allow(clippy::must_use_candidate)]

mod arg;
mod config;
mod constructor;
mod error;
mod factory;
mod http_error;
mod plain;
#[cfg(feature = "axum")]
mod response;

pub use arg::Arg;
pub use config::FactoryConfig;
pub use constructor::ErrorConstructor;
pub use error::{ArgumentError, FactoryError, Result};
pub use factory::{ErrorFactory, create_error};
pub use http_error::{HttpError, is_http_error};
pub use http_errors_core::{ErrorKind, Props, STATUS_CODES, Status, StatusError, status};
pub use plain::PlainError;

use std::error::Error;

use http_errors_core::{ErrorKind, Props};

use crate::arg::{Arg, Classified};
use crate::error::{ArgumentError, FactoryError, Result};
use crate::http_error::HttpError;

/// Named error constructors, one per kind, plus the abstract base
///
/// [`ErrorConstructor::HttpError`] stands for "any HTTP error" and can only
/// be used for [`is_instance`](ErrorConstructor::is_instance) checks;
/// constructing it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorConstructor {
    /// Abstract base of every HTTP error
    HttpError,
    /// Concrete constructor for one status kind
    Kind(ErrorKind),
}

impl ErrorConstructor {
    /// Constructor used for a status, with the 4xx/5xx bracket fallback
    pub fn for_status(code: i64) -> Self {
        Self::Kind(ErrorKind::for_status(code))
    }

    /// Constructor name (e.g. `NotFoundError`)
    pub fn name(self) -> &'static str {
        match self {
            Self::HttpError => "HttpError",
            Self::Kind(kind) => kind.name(),
        }
    }

    /// Build an error of this kind
    ///
    /// Accepts messages and property bags in any order; the last message
    /// wins and bags merge like in the factory.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::AbstractConstruction`] for the abstract base,
    /// or an argument error for statuses, error values and unsupported
    /// values.
    pub fn construct<I>(self, args: I) -> Result<HttpError>
    where
        I: IntoIterator<Item = Arg>,
    {
        let Self::Kind(kind) = self else {
            return Err(FactoryError::AbstractConstruction);
        };

        let mut message = None;
        let mut props: Option<Props> = None;

        for (position, arg) in args.into_iter().enumerate() {
            match arg.classify(position)? {
                Classified::Message(m) => message = Some(m),
                Classified::Props(p) => props.get_or_insert_with(Props::new).merge(p),
                Classified::Skip => {}
                other => {
                    return Err(ArgumentError::NotAccepted {
                        position,
                        found: other.describe(),
                        constructor: kind.name(),
                    }
                    .into());
                }
            }
        }

        let mut err = HttpError::new(kind);
        if let Some(message) = message {
            err.set_message(message);
        }
        if let Some(props) = props {
            err.apply_props(props);
        }

        Ok(err)
    }

    /// Whether an error was produced as this constructor
    ///
    /// The abstract base matches every [`HttpError`]; a kind matches the
    /// errors allocated as that kind, not adopted ones.
    pub fn is_instance(self, err: &(dyn Error + 'static)) -> bool {
        let Some(err) = err.downcast_ref::<HttpError>() else {
            return false;
        };

        match self {
            Self::HttpError => true,
            Self::Kind(kind) => err.kind() == Some(kind),
        }
    }
}

impl From<ErrorKind> for ErrorConstructor {
    fn from(kind: ErrorKind) -> Self {
        Self::Kind(kind)
    }
}

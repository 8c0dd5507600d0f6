use http_errors_core::Props;
use http_errors_core::status::{DEFAULT_STATUS, is_valid};

use crate::arg::{Arg, Base, Classified};
use crate::config::FactoryConfig;
use crate::error::{ArgumentError, Result};
use crate::http_error::HttpError;

/// Builds [`HttpError`] values from loosely ordered arguments
#[derive(Debug, Clone, Default)]
pub struct ErrorFactory {
    config: FactoryConfig,
}

/// Arguments gathered in call order, before any defaults apply
#[derive(Debug, Default)]
struct Collected {
    status: Option<i64>,
    message: Option<String>,
    base: Option<Base>,
    props: Option<Props>,
}

impl Collected {
    fn gather<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arg>,
    {
        let mut collected = Self::default();

        for (position, arg) in args.into_iter().enumerate() {
            match arg.classify(position)? {
                Classified::Status(status) => collected.status = Some(status),
                Classified::Message(message) => collected.message = Some(message),
                Classified::Error(base) => {
                    if collected.base.is_some() {
                        return Err(ArgumentError::DuplicateError { position }.into());
                    }
                    collected.base = Some(base);
                }
                Classified::Props(props) => collected.props.get_or_insert_with(Props::new).merge(props),
                Classified::Skip => {}
            }
        }

        Ok(collected)
    }
}

impl ErrorFactory {
    /// Create a factory with the given configuration
    pub const fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Resolve arguments into a single error
    ///
    /// Status comes from the last status argument, then the existing
    /// error's own status, then 500; anything outside 400-599 becomes 500.
    /// An explicit message beats the existing error's message, which beats
    /// the registry phrase. An [`Arg::Error`] is enriched and returned as
    /// the same value, an [`Arg::Plain`] is adopted, and otherwise a fresh
    /// error of the status's kind is allocated. Property bags are copied on
    /// last, except their `status` and `statusCode` keys.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Argument`](crate::FactoryError::Argument) for
    /// unsupported or non-integer values, a second error value, or a
    /// reserved property of the wrong type.
    pub fn create<I>(&self, args: I) -> Result<HttpError>
    where
        I: IntoIterator<Item = Arg>,
    {
        let Collected {
            status,
            message,
            base,
            props,
        } = Collected::gather(args)?;

        let status = self.resolve_status(status.or_else(|| base.as_ref().and_then(Base::status)));

        let mut err = match base {
            Some(Base::Http(mut err)) => {
                tracing::debug!(name = err.name(), status, "enriching existing http error");
                if let Some(message) = message {
                    err.set_message(message);
                }
                err.set_status(status);
                err
            }
            Some(Base::Plain(plain)) => {
                tracing::debug!(name = plain.name(), status, "adopting plain error");
                HttpError::adopt(plain, status, message)
            }
            None => HttpError::allocate(status, message),
        };

        if let Some(props) = props {
            err.apply_props(props);
        }

        Ok(err)
    }

    fn resolve_status(&self, requested: Option<i64>) -> u16 {
        let Some(code) = requested else {
            return DEFAULT_STATUS;
        };

        match u16::try_from(code) {
            Ok(valid) if is_valid(code) => valid,
            _ => {
                if self.config.warn_on_invalid_status {
                    tracing::warn!(
                        status = code,
                        "non-error status code; use only 4xx or 5xx status codes"
                    );
                }
                DEFAULT_STATUS
            }
        }
    }
}

/// Create an error with the default factory
///
/// See [`ErrorFactory::create`] for how arguments combine.
///
/// # Errors
///
/// Returns an error when an argument is misused
pub fn create_error<I>(args: I) -> Result<HttpError>
where
    I: IntoIterator<Item = Arg>,
{
    ErrorFactory::default().create(args)
}

/// Create an error from any mix of values convertible to [`Arg`]
///
/// ```
/// use http_errors::create_error;
///
/// let err = create_error!(404, "user 7 not found").unwrap();
/// assert_eq!(err.status(), 404);
/// assert_eq!(err.name(), "NotFoundError");
/// ```
#[macro_export]
macro_rules! create_error {
    ($($arg:expr),* $(,)?) => {
        $crate::create_error([$($crate::Arg::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use http_errors_core::ErrorKind;
    use serde_json::json;

    use super::*;
    use crate::{FactoryError, PlainError};

    fn create(args: Vec<Arg>) -> HttpError {
        ErrorFactory::default().create(args).unwrap()
    }

    #[test]
    fn zero_arguments_default_to_internal_error() {
        let err = create(vec![]);
        assert_eq!(err.status(), 500);
        assert_eq!(err.message(), "Internal Server Error");
        assert_eq!(err.name(), "InternalServerError");
        assert!(!err.expose());
    }

    #[test]
    fn last_status_and_message_win() {
        let err = create(vec![Arg::from(400), Arg::from("first"), Arg::from(409), Arg::from("second")]);
        assert_eq!(err.status(), 409);
        assert_eq!(err.kind(), Some(ErrorKind::Conflict));
        assert_eq!(err.message(), "second");
    }

    #[test]
    fn bags_merge_with_last_winning() {
        let err = create(vec![
            Arg::from(Props::new().with("id", 1).with("a", "x")),
            Arg::from(json!({"id": 2})),
        ]);
        assert_eq!(err.prop("id"), Some(&json!(2)));
        assert_eq!(err.prop("a"), Some(&json!("x")));
    }

    #[test]
    fn invalid_status_is_coerced() {
        for code in [-1, 0, 200, 399, 600, 999] {
            let err = create(vec![Arg::from(code)]);
            assert_eq!(err.status(), 500, "code {code}");
            assert!(!err.expose());
        }
    }

    #[test]
    fn coercion_without_warning() {
        let factory = ErrorFactory::new(FactoryConfig {
            warn_on_invalid_status: false,
        });
        let err = factory.create([Arg::from(302)]).unwrap();
        assert_eq!(err.status(), 500);
        assert!(!factory.config().warn_on_invalid_status);
    }

    #[test]
    fn plain_status_code_is_used_when_status_missing() {
        let err = create(vec![Arg::from(PlainError::new("gone").with_status_code(410))]);
        assert_eq!(err.status(), 410);
        assert!(err.expose());
    }

    #[test]
    fn http_base_keeps_expose_when_status_unchanged() {
        let base = HttpError::new(ErrorKind::NotFound).with_expose(false);
        let err = create(vec![Arg::from(base), Arg::from("still hidden")]);
        assert!(!err.expose());
        assert_eq!(err.message(), "still hidden");
    }

    #[test]
    fn http_base_recomputes_expose_on_new_status() {
        let base = HttpError::new(ErrorKind::NotFound);
        let err = create(vec![Arg::from(503), Arg::from(base)]);
        assert_eq!(err.status(), 503);
        assert_eq!(err.name(), "NotFoundError");
        assert_eq!(err.message(), "Not Found");
        assert!(!err.expose());
    }

    #[test]
    fn second_error_is_rejected() {
        let result = ErrorFactory::default().create([
            Arg::from(PlainError::new("one")),
            Arg::from(404),
            Arg::from(PlainError::new("two")),
        ]);
        assert!(matches!(
            result,
            Err(FactoryError::Argument(ArgumentError::DuplicateError { position: 2 }))
        ));
    }

    #[test]
    fn null_is_ignored() {
        let err = create(vec![Arg::Value(serde_json::Value::Null)]);
        assert_eq!(err.status(), 500);
        assert_eq!(err.name(), "InternalServerError");
    }

    #[test]
    fn macro_accepts_mixed_values() {
        let err = create_error!(ErrorKind::TooManyRequests, Props::new().with("retry_after", 30)).unwrap();
        assert_eq!(err.status(), 429);
        assert_eq!(err.prop("retry_after"), Some(&json!(30)));

        let err = create_error!().unwrap();
        assert_eq!(err.status(), 500);
    }
}

use http_errors_core::{ErrorKind, Props};
use serde_json::Value;

use crate::error::ArgumentError;
use crate::http_error::{HttpError, validate_props};
use crate::plain::PlainError;

/// One argument to the error factory
///
/// Arguments may come in any order; each is classified by its variant.
/// [`Arg::Value`] holds dynamically typed input (e.g. decoded JSON) and is
/// classified when the factory runs.
#[derive(Debug, Clone)]
pub enum Arg {
    /// Status code, valid or not
    Status(i64),
    /// Message that overrides every default
    Message(String),
    /// Existing HTTP error, enriched and returned as the same value
    Error(HttpError),
    /// Existing generic error, adopted into an [`HttpError`]
    Plain(PlainError),
    /// Extra properties to copy onto the error
    Props(Props),
    /// Untyped value: numbers, strings, objects and null are accepted
    Value(Value),
}

/// Existing error handed to the factory
#[derive(Debug)]
pub(crate) enum Base {
    Http(HttpError),
    Plain(PlainError),
}

impl Base {
    pub(crate) fn status(&self) -> Option<i64> {
        match self {
            Self::Http(err) => Some(i64::from(err.status())),
            Self::Plain(err) => err.status(),
        }
    }
}

/// An argument after classification
#[derive(Debug)]
pub(crate) enum Classified {
    Status(i64),
    Message(String),
    Error(Base),
    Props(Props),
    Skip,
}

impl Classified {
    pub(crate) const fn describe(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Message(_) => "message",
            Self::Error(_) => "error",
            Self::Props(_) => "property bag",
            Self::Skip => "null",
        }
    }
}

impl Arg {
    pub(crate) fn classify(self, position: usize) -> Result<Classified, ArgumentError> {
        let classified = match self {
            Self::Status(status) => Classified::Status(status),
            Self::Message(message) => Classified::Message(message),
            Self::Error(err) => Classified::Error(Base::Http(err)),
            Self::Plain(err) => Classified::Error(Base::Plain(err)),
            Self::Props(props) => {
                validate_props(&props, position)?;
                Classified::Props(props)
            }
            Self::Value(value) => return classify_value(value, position),
        };

        Ok(classified)
    }
}

fn classify_value(value: Value, position: usize) -> Result<Classified, ArgumentError> {
    match value {
        Value::Null => Ok(Classified::Skip),
        Value::Number(number) => {
            if let Some(status) = number.as_i64() {
                Ok(Classified::Status(status))
            } else if number.is_u64() {
                // Beyond i64 but still an integer; coerced like any invalid code
                Ok(Classified::Status(i64::MAX))
            } else {
                Err(ArgumentError::NonIntegerStatus {
                    position,
                    value: number.to_string(),
                })
            }
        }
        Value::String(message) => Ok(Classified::Message(message)),
        Value::Object(map) => {
            let props = Props::from(map);
            validate_props(&props, position)?;
            Ok(Classified::Props(props))
        }
        Value::Bool(_) => Err(ArgumentError::UnsupportedType {
            position,
            found: "boolean",
        }),
        Value::Array(_) => Err(ArgumentError::UnsupportedType {
            position,
            found: "array",
        }),
    }
}

impl From<i64> for Arg {
    fn from(status: i64) -> Self {
        Self::Status(status)
    }
}

impl From<i32> for Arg {
    fn from(status: i32) -> Self {
        Self::Status(i64::from(status))
    }
}

impl From<u16> for Arg {
    fn from(status: u16) -> Self {
        Self::Status(i64::from(status))
    }
}

impl From<http::StatusCode> for Arg {
    fn from(status: http::StatusCode) -> Self {
        Self::Status(i64::from(status.as_u16()))
    }
}

impl From<ErrorKind> for Arg {
    fn from(kind: ErrorKind) -> Self {
        Self::Status(i64::from(kind.code()))
    }
}

impl From<&str> for Arg {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<String> for Arg {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<HttpError> for Arg {
    fn from(err: HttpError) -> Self {
        Self::Error(err)
    }
}

impl From<PlainError> for Arg {
    fn from(err: PlainError) -> Self {
        Self::Plain(err)
    }
}

impl From<Props> for Arg {
    fn from(props: Props) -> Self {
        Self::Props(props)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

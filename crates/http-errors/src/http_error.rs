use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use http::StatusCode;
use http_errors_core::status::{DEFAULT_STATUS, is_valid, lookup};
use http_errors_core::{ErrorKind, Props, StatusError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::ArgumentError;
use crate::plain::PlainError;

/// An error carrying an HTTP status, a message and extra properties
///
/// `status` and `status_code` always report the same value; both spellings
/// are kept, including in the serialized form.
#[derive(Debug, Clone)]
pub struct HttpError {
    kind: Option<ErrorKind>,
    name: Cow<'static, str>,
    message: String,
    status: u16,
    expose: bool,
    props: Props,
    source: Option<Arc<dyn Error + Send + Sync>>,
}

/// Whether a status is exposed to end users by default
fn default_expose(status: u16) -> bool {
    (400..500).contains(&status)
}

impl HttpError {
    /// Allocate an error of the given kind with its canonical message
    pub fn new(kind: ErrorKind) -> Self {
        Self::allocate(kind.code(), None)
    }

    /// Allocate an error for an already validated status
    pub(crate) fn allocate(status: u16, message: Option<String>) -> Self {
        let kind = ErrorKind::for_status(i64::from(status));

        Self {
            kind: Some(kind),
            name: Cow::Borrowed(kind.name()),
            message: message.unwrap_or_else(|| kind.message().to_owned()),
            status,
            expose: default_expose(status),
            props: Props::new(),
            source: None,
        }
    }

    /// Turn a generic error into an HTTP error, keeping its identity
    pub(crate) fn adopt(plain: PlainError, status: u16, message: Option<String>) -> Self {
        let PlainError {
            name,
            message: own_message,
            expose,
            props,
            source,
            ..
        } = plain;

        let mut err = Self {
            kind: None,
            name: name.unwrap_or(Cow::Borrowed(PlainError::DEFAULT_NAME)),
            message: own_message.unwrap_or_else(|| lookup(i64::from(status)).message.to_owned()),
            status,
            expose: expose.unwrap_or_else(|| default_expose(status)),
            props: Props::new(),
            source,
        };
        err.apply_props(props);
        // An explicit message outranks anything the plain error carried
        if let Some(message) = message {
            err.message = message;
        }
        err
    }

    /// Replace the message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Override whether the message is shown to end users
    #[must_use]
    pub fn with_expose(mut self, expose: bool) -> Self {
        self.expose = expose;
        self
    }

    /// Attach a property, following [`HttpError::insert_prop`] rules
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_prop(key, value);
        self
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    /// Kind this error was allocated as, `None` for adopted errors
    pub const fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Same value as [`HttpError::status`]
    pub const fn status_code(&self) -> u16 {
        self.status
    }

    pub const fn expose(&self) -> bool {
        self.expose
    }

    /// Extra properties, without the built-in fields
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Get an extra property by key
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_expose(&mut self, expose: bool) {
        self.expose = expose;
    }

    /// Set both `status` and `status_code`
    ///
    /// Codes outside 400-599 become 500. When the status actually changes,
    /// `expose` is reset to the default for the new status.
    pub fn set_status(&mut self, status: u16) {
        let status = if is_valid(i64::from(status)) {
            status
        } else {
            tracing::debug!(status, "replacing non-error status with {DEFAULT_STATUS}");
            DEFAULT_STATUS
        };

        if status != self.status {
            self.expose = default_expose(status);
        }
        self.status = status;
    }

    /// Set a property with the rules the factory applies to property bags
    ///
    /// `status` and `statusCode` are ignored (use [`HttpError::set_status`]).
    /// `expose`, `message` and `name` update their fields when given a
    /// boolean or string respectively and are dropped otherwise. Anything
    /// else becomes an extra property.
    pub fn insert_prop(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        let dropped = match key.as_str() {
            "status" | "statusCode" => None,
            "expose" => match value {
                Value::Bool(expose) => {
                    self.expose = expose;
                    None
                }
                other => Some(other),
            },
            "message" => match value {
                Value::String(message) => {
                    self.message = message;
                    None
                }
                other => Some(other),
            },
            "name" => match value {
                Value::String(name) => {
                    self.name = Cow::Owned(name);
                    None
                }
                other => Some(other),
            },
            _ => {
                self.props.insert(key, value);
                return;
            }
        };

        if let Some(value) = dropped {
            tracing::debug!(key = %key, %value, "dropping reserved property with unexpected type");
        }
    }

    pub(crate) fn apply_props(&mut self, props: Props) {
        for (key, value) in props {
            self.insert_prop(key, value);
        }
    }
}

/// Check a property bag's reserved keys before it is applied
pub(crate) fn validate_props(props: &Props, position: usize) -> Result<(), ArgumentError> {
    let invalid = |key: &str, expected| ArgumentError::InvalidProperty {
        position,
        key: key.to_owned(),
        expected,
    };

    for (key, value) in props.iter() {
        match (key, value) {
            ("expose", value) if !value.is_boolean() => return Err(invalid(key, "boolean")),
            ("message" | "name", value) if !value.is_string() => return Err(invalid(key, "string")),
            _ => {}
        }
    }

    Ok(())
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for HttpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}

impl StatusError for HttpError {
    fn http_status(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn expose(&self) -> bool {
        self.expose
    }
}

impl From<ErrorKind> for HttpError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(5 + self.props.len()))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("statusCode", &self.status)?;
        map.serialize_entry("expose", &self.expose)?;
        for (key, value) in self.props.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Whether an error value was produced by this crate
pub fn is_http_error(err: &(dyn Error + 'static)) -> bool {
    err.is::<HttpError>()
}

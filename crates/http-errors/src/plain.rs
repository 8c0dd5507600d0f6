use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use http_errors_core::Props;
use serde_json::Value;

/// A generic error value with no HTTP classification yet
///
/// Carries whatever an arbitrary error carries: a name, an optional
/// message, possibly a raw status that may not even be valid. Passing it
/// to the factory adopts it into an [`HttpError`](crate::HttpError) that
/// keeps its name, message, properties and wrapped source.
#[derive(Debug, Clone, Default)]
pub struct PlainError {
    pub(crate) name: Option<Cow<'static, str>>,
    pub(crate) message: Option<String>,
    pub(crate) status: Option<i64>,
    pub(crate) status_code: Option<i64>,
    pub(crate) expose: Option<bool>,
    pub(crate) props: Props,
    pub(crate) source: Option<Arc<dyn Error + Send + Sync>>,
}

impl PlainError {
    /// Name reported when none was set
    pub const DEFAULT_NAME: &'static str = "Error";

    /// Create an error with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Wrap any error, using its `Display` output as the message
    pub fn wrap<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: Some(err.to_string()),
            source: Some(Arc::new(err)),
            ..Self::default()
        }
    }

    /// Override the error name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a raw `status`, valid or not
    #[must_use]
    pub fn with_status(mut self, status: i64) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach a raw `statusCode`, consulted when `status` is absent
    #[must_use]
    pub fn with_status_code(mut self, status_code: i64) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Decide explicitly whether the message may be shown to users
    #[must_use]
    pub fn with_expose(mut self, expose: bool) -> Self {
        self.expose = Some(expose);
        self
    }

    /// Attach an extra property
    ///
    /// Reserved keys set their field instead, so the last call wins:
    /// `status` and `statusCode` take an integer, `expose` a boolean, and
    /// `message` and `name` a string. A reserved key with any other value
    /// is dropped.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();

        match key.as_str() {
            "status" => {
                if let Some(status) = value.as_i64() {
                    self.status = Some(status);
                    return self;
                }
            }
            "statusCode" => {
                if let Some(status_code) = value.as_i64() {
                    self.status_code = Some(status_code);
                    return self;
                }
            }
            "expose" => {
                if let Some(expose) = value.as_bool() {
                    self.expose = Some(expose);
                    return self;
                }
            }
            "message" => {
                if let Some(message) = value.as_str() {
                    self.message = Some(message.to_owned());
                    return self;
                }
            }
            "name" => {
                if let Some(name) = value.as_str() {
                    self.name = Some(Cow::Owned(name.to_owned()));
                    return self;
                }
            }
            _ => {
                self.props.insert(key, value);
                return self;
            }
        }

        tracing::debug!(key = %key, %value, "dropping reserved property with unexpected type");
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(Self::DEFAULT_NAME)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Raw status, preferring `status` over `statusCode`
    pub fn status(&self) -> Option<i64> {
        self.status.or(self.status_code)
    }

    pub const fn expose(&self) -> Option<bool> {
        self.expose
    }

    pub const fn props(&self) -> &Props {
        &self.props
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(self.name()),
        }
    }
}

impl Error for PlainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}

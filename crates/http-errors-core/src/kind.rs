//! HTTP error kinds, one per registered status code

use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::status::{self, Status};

/// One error kind per registered status code
///
/// The variant name is the identifier of the reason phrase; the kind name
/// reported on errors adds the `Error` suffix (`NotFound` -> `NotFoundError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[repr(u16)]
pub enum ErrorKind {
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    URITooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    TooEarly = 425,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HTTPVersionNotSupported = 505,
    VariantAlsoNegotiates = 506,
    InsufficientStorage = 507,
    LoopDetected = 508,
    BandwidthLimitExceeded = 509,
    NotExtended = 510,
    NetworkAuthenticationRequired = 511,
}

impl ErrorKind {
    /// Status code of this kind
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Kind registered for exactly this code
    pub fn from_code(code: i64) -> Option<Self> {
        Self::iter().find(|kind| i64::from(kind.code()) == code)
    }

    /// Kind used to allocate an error for any status
    ///
    /// Unregistered codes take the bracket fallback: [`ErrorKind::BadRequest`]
    /// for 4xx, [`ErrorKind::InternalServerError`] for everything else.
    pub fn for_status(code: i64) -> Self {
        Self::from_code(code).unwrap_or(if (status::MIN_ERROR_STATUS..500).contains(&code) {
            Self::BadRequest
        } else {
            Self::InternalServerError
        })
    }

    /// Registry entry for this kind
    pub fn status(self) -> &'static Status {
        status::lookup(i64::from(self.code()))
    }

    /// Canonical reason phrase
    pub fn message(self) -> &'static str {
        self.status().message
    }

    /// Error-kind name (e.g. "NotFoundError")
    pub fn name(self) -> &'static str {
        &self.status().name
    }

    /// Bare identifier without the `Error` suffix (e.g. "NotFound")
    pub fn identifier(self) -> &'static str {
        self.into()
    }

    /// Whether this kind is a 4xx status
    pub const fn is_client_error(self) -> bool {
        self.code() < 500
    }

    /// Equivalent `http` status code
    pub fn http_status(self) -> http::StatusCode {
        http::StatusCode::from_u16(self.code()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

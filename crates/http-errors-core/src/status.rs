//! Canonical registry of HTTP error statuses
//!
//! Maps every registered 4xx and 5xx code to its reason phrase and to the
//! error-kind name derived from that phrase. Codes without an entry fall
//! back to the generic entry of their hundred-bracket.

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Lowest valid error status
pub const MIN_ERROR_STATUS: i64 = 400;

/// Highest valid error status
pub const MAX_ERROR_STATUS: i64 = 599;

/// Status used whenever no valid status is available
pub const DEFAULT_STATUS: u16 = 500;

/// Registered error status codes and their reason phrases
pub const STATUS_CODES: &[(u16, &str)] = &[
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a Teapot"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Entity"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Too Early"),
    (426, "Upgrade Required"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (508, "Loop Detected"),
    (509, "Bandwidth Limit Exceeded"),
    (510, "Not Extended"),
    (511, "Network Authentication Required"),
];

/// A registered status with its canonical message and error-kind name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Numeric status code
    pub code: u16,
    /// Reason phrase (e.g. "Not Found")
    pub message: &'static str,
    /// Error-kind name (e.g. "NotFoundError")
    pub name: String,
}

impl Status {
    fn new(code: u16, message: &'static str) -> Self {
        Self {
            code,
            message,
            name: kind_name(message),
        }
    }

    /// Whether this is a 4xx status
    pub const fn is_client_error(&self) -> bool {
        self.code >= 400 && self.code < 500
    }
}

struct Registry {
    statuses: BTreeMap<u16, Status>,
    bad_request: Status,
    internal_server_error: Status,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry {
        statuses: STATUS_CODES
            .iter()
            .map(|&(code, message)| (code, Status::new(code, message)))
            .collect(),
        bad_request: Status::new(400, "Bad Request"),
        internal_server_error: Status::new(500, "Internal Server Error"),
    })
}

/// Look up the message and kind name for a status code
///
/// Unregistered 4xx codes resolve to the 400 entry; everything else
/// without an entry, including codes outside 400-599, resolves to 500.
pub fn lookup(code: i64) -> &'static Status {
    if let Some(status) = get(code) {
        return status;
    }

    let registry = registry();
    if (MIN_ERROR_STATUS..500).contains(&code) {
        &registry.bad_request
    } else {
        &registry.internal_server_error
    }
}

/// Look up a registered status without bracket fallback
pub fn get(code: i64) -> Option<&'static Status> {
    let code = u16::try_from(code).ok()?;
    registry().statuses.get(&code)
}

/// Iterate all registered statuses in ascending code order
pub fn statuses() -> impl Iterator<Item = &'static Status> {
    registry().statuses.values()
}

/// Whether a code lies in the inclusive error range 400-599
pub const fn is_valid(code: i64) -> bool {
    code >= MIN_ERROR_STATUS && code <= MAX_ERROR_STATUS
}

/// Convert a reason phrase into a `PascalCase` identifier
///
/// Each space-separated word gets its first character upper-cased, the
/// words are joined, and anything other than ASCII alphanumerics and `_`
/// is dropped ("I'm a Teapot" becomes "ImATeapot").
pub fn to_identifier(phrase: &str) -> String {
    phrase
        .split(' ')
        .flat_map(|word| {
            let mut chars = word.chars();
            let first = chars.next().into_iter().flat_map(char::to_uppercase);
            first.chain(chars)
        })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Derive the error-kind name for a reason phrase
pub fn kind_name(phrase: &str) -> String {
    let identifier = to_identifier(phrase);
    if identifier.ends_with("Error") {
        identifier
    } else {
        format!("{identifier}Error")
    }
}

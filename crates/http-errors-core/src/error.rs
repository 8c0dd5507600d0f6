use http::StatusCode;

/// Capability shared by every HTTP error value
///
/// Implemented by the factory's concrete error type and open to domain
/// error enums, so a server layer can turn any of them into a response
/// without knowing the concrete type.
pub trait StatusError: std::error::Error {
    /// HTTP status code for this error
    fn http_status(&self) -> StatusCode;

    /// Error-kind name (e.g. `NotFoundError`)
    fn name(&self) -> &str;

    /// Whether the message is safe to show to end users
    fn expose(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// Message safe to expose to API consumers
    ///
    /// The error's own message when exposed, otherwise the canonical
    /// reason phrase of its status.
    fn client_message(&self) -> String {
        if self.expose() {
            self.to_string()
        } else {
            crate::status::lookup(i64::from(self.http_status().as_u16()))
                .message
                .to_owned()
        }
    }
}

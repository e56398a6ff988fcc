//! Error taxonomy for the portal. `Display` output is shown to the user
//! verbatim, either in the full-screen load error or in a toast.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity token is empty")]
    EmptyToken,
    #[error("identity token has no payload segment")]
    MissingPayload,
    #[error("identity payload is not valid base64: {0}")]
    Encoding(String),
    #[error("identity payload is not valid JSON: {0}")]
    Payload(String),
    #[error("sign-in widget unavailable: {0}")]
    Widget(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Malformed(String),
    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a student.")]
    MissingStudent,
    #[error("Unknown student '{0}'.")]
    UnknownStudent(String),
    #[error("Please choose a date.")]
    MissingDate,
    #[error("'{0}' is not a valid date.")]
    InvalidDate(String),
}

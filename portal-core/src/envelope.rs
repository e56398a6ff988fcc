//! The backend answers every request with `{status, data?, error?}`.

use crate::dto::PortalSnapshot;
use crate::error::{ActionError, FetchError};
use serde::Deserialize;

pub const STATUS_SUCCESS: &str = "success";
pub const GENERIC_BACKEND_ERROR: &str = "Invalid data from backend.";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: String,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Envelope<T> {
    fn backend_message(&self) -> String {
        match self.error.as_deref().map(str::trim) {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => GENERIC_BACKEND_ERROR.to_string(),
        }
    }
}

pub fn parse_envelope(body: &str) -> Result<PortalSnapshot, FetchError> {
    let envelope: Envelope<PortalSnapshot> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if envelope.status != STATUS_SUCCESS {
        return Err(FetchError::Backend(envelope.backend_message()));
    }
    let message = envelope.backend_message();
    envelope.data.ok_or(FetchError::Backend(message))
}

/// Acknowledgement check for actions whose response is readable. `data` is
/// ignored; only `status` and `error` matter.
pub fn parse_ack(body: &str) -> Result<(), ActionError> {
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ActionError::Rejected(e.to_string()))?;
    if envelope.status == STATUS_SUCCESS {
        Ok(())
    } else {
        Err(ActionError::Rejected(envelope.backend_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_snapshot() {
        let body = serde_json::json!({
            "status": "success",
            "data": { "students": [{ "uniqueStudentId": "s1", "studentName": "Ada" }] }
        })
        .to_string();
        let snapshot = parse_envelope(&body).expect("snapshot");
        assert_eq!(snapshot.students.len(), 1);
    }

    #[test]
    fn backend_error_is_verbatim() {
        let body = r#"{"status":"error","error":"User not authorized."}"#;
        assert_eq!(
            parse_envelope(body),
            Err(FetchError::Backend("User not authorized.".into()))
        );
    }

    #[test]
    fn missing_data_falls_back_to_generic_message() {
        for body in [
            r#"{"status":"success"}"#,
            r#"{"status":"success","data":null}"#,
            r#"{"status":"oops"}"#,
            r#"{"status":"error","error":"  "}"#,
        ] {
            assert_eq!(
                parse_envelope(body),
                Err(FetchError::Backend(GENERIC_BACKEND_ERROR.into())),
                "{body}"
            );
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            parse_envelope("<html>Sign in</html>"),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn ack_requires_success_status() {
        assert_eq!(parse_ack(r#"{"status":"success"}"#), Ok(()));
        assert_eq!(
            parse_ack(r#"{"status":"error","error":"closed"}"#),
            Err(ActionError::Rejected("closed".into()))
        );
    }

    #[test]
    fn ack_rejects_non_json_body() {
        assert!(matches!(
            parse_ack("<!DOCTYPE html><title>Error</title>"),
            Err(ActionError::Rejected(_))
        ));
    }
}

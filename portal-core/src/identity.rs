//! Sign-in session and display-only profile decoding. The token is never
//! verified here; the backend does that on every request.

use crate::error::IdentityError;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine};
use serde::Deserialize;

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: String,
}

impl Profile {
    pub fn greeting_name(&self) -> &str {
        if self.given_name.is_empty() {
            &self.name
        } else {
            &self.given_name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    identity_token: String,
    pub profile: Profile,
}

impl Session {
    pub fn sign_in(token: impl Into<String>) -> Result<Self, IdentityError> {
        let identity_token = token.into();
        let profile = decode_profile(&identity_token)?;
        Ok(Self {
            identity_token,
            profile,
        })
    }

    pub fn token(&self) -> &str {
        &self.identity_token
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome, {}!", self.profile.greeting_name())
    }
}

pub fn decode_profile(token: &str) -> Result<Profile, IdentityError> {
    if token.trim().is_empty() {
        return Err(IdentityError::EmptyToken);
    }
    let payload = token
        .split('.')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or(IdentityError::MissingPayload)?;
    let bytes = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| IdentityError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| IdentityError::Payload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_for(payload: serde_json::Value) -> String {
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("eyJhbGciOiJSUzI1NiJ9.{body}.signature")
    }

    #[test]
    fn decodes_profile_fields() {
        let token = token_for(serde_json::json!({
            "name": "Grace Hopper",
            "given_name": "Grace",
            "email": "grace@example.org",
            "picture": "https://example.org/g.png",
            "sub": "123"
        }));
        let session = Session::sign_in(token.clone()).expect("session");
        assert_eq!(session.token(), token);
        assert_eq!(session.profile.email, "grace@example.org");
        assert_eq!(session.welcome_message(), "Welcome, Grace!");
    }

    #[test]
    fn accepts_padded_payload() {
        let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"name":"Al"}"#);
        let profile = decode_profile(&format!("h.{body}.s")).expect("profile");
        assert_eq!(profile.name, "Al");
        assert_eq!(profile.greeting_name(), "Al");
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(decode_profile(""), Err(IdentityError::EmptyToken));
        assert_eq!(decode_profile("opaque"), Err(IdentityError::MissingPayload));
        assert!(matches!(decode_profile("h.!!!.s"), Err(IdentityError::Encoding(_))));
        let not_json = URL_SAFE_NO_PAD.encode("plain text");
        assert!(matches!(
            decode_profile(&format!("h.{not_json}.s")),
            Err(IdentityError::Payload(_))
        ));
    }
}

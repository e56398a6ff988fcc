use serde::Deserialize;

pub const DEFAULT_WEB_APP_URL: &str = "https://script.google.com/macros/s/AKfycbx3LGShhqFBG5Y2TocWHYYgg8Sp-mK2YbkZ2x6tWJwf6li0teEvIYYXa5zNxDKtV4U7/exec";
pub const DEFAULT_CLIENT_ID: &str =
    "14216824305-v19ecsmrhk1muaglrlhjceqjk5oeqr4n.apps.googleusercontent.com";
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub web_app_url: String,
    pub client_id: String,
    pub toast_duration_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            web_app_url: DEFAULT_WEB_APP_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl PortalConfig {
    /// GET target for a snapshot. `encoded_token` must already be
    /// URI-component encoded by the caller.
    pub fn snapshot_url(&self, encoded_token: &str) -> String {
        let sep = if self.web_app_url.contains('?') { '&' } else { '?' };
        format!("{}{sep}token={encoded_token}", self.web_app_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: PortalConfig =
            serde_json::from_value(serde_json::json!({ "toast_duration_ms": 500 }))
                .expect("config");
        assert_eq!(cfg.toast_duration_ms, 500);
        assert_eq!(cfg.client_id, DEFAULT_CLIENT_ID);
    }

    #[test]
    fn snapshot_url_appends_token() {
        let cfg = PortalConfig {
            web_app_url: "https://example.test/exec".into(),
            ..PortalConfig::default()
        };
        assert_eq!(cfg.snapshot_url("abc"), "https://example.test/exec?token=abc");

        let cfg = PortalConfig {
            web_app_url: "https://example.test/exec?v=2".into(),
            ..PortalConfig::default()
        };
        assert_eq!(cfg.snapshot_url("abc"), "https://example.test/exec?v=2&token=abc");
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a section waits after mounting before it looks up its elements.
pub const SETUP_DELAY: Duration = Duration::from_millis(200);
/// Grace period between unmount and releasing a section's animations.
pub const RELEASE_DELAY: Duration = Duration::from_millis(200);

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const DEFAULT_SERVICE_ID: &str = "service_8hwgdcl";
pub const DEFAULT_TEMPLATE_ID: &str = "template_4qtj5xs";
pub const DEFAULT_PUBLIC_KEY: &str = "ZC7WbftNbqWHfFlsR";
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account the contact form delivers through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl RelayConfig {
    /// Defaults with any of `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    /// `EMAILJS_PUBLIC_KEY` and `EMAILJS_ENDPOINT` taken from `lookup`.
    /// Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };
        let defaults = Self::default();
        Self {
            service_id: var("EMAILJS_SERVICE_ID", defaults.service_id),
            template_id: var("EMAILJS_TEMPLATE_ID", defaults.template_id),
            public_key: var("EMAILJS_PUBLIC_KEY", defaults.public_key),
            endpoint: var("EMAILJS_ENDPOINT", defaults.endpoint),
        }
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_fixed_account() {
        let config = RelayConfig::default();
        assert_eq!(config.service_id, "service_8hwgdcl");
        assert_eq!(config.template_id, "template_4qtj5xs");
        assert_eq!(config.public_key, "ZC7WbftNbqWHfFlsR");
        assert!(config.endpoint.starts_with("https://api.emailjs.com/"));
    }

    #[test]
    fn test_lookup_overrides_and_ignores_blank() {
        let config = RelayConfig::from_lookup(|key| match key {
            "EMAILJS_SERVICE_ID" => Some("service_other".to_string()),
            "EMAILJS_PUBLIC_KEY" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.service_id, "service_other");
        assert_eq!(config.public_key, DEFAULT_PUBLIC_KEY);
        assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
    }
}

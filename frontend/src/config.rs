use log::Level;

pub const CALENDLY_LINK: &str = "https://calendly.com/stratusmarketingllc/30min";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/stratusmarketingllc/";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=61578807435287";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/stratus.marketing";
pub const STRATUS_WEBSITES_URL: &str = "http://stratuswebsites.com/";

pub const CONTACT_PHONE: &str = "(305) 414-1772";
pub const CONTACT_EMAIL: &str = "info@stratusmarketingllc.com";

pub const LEAD_WEBHOOK_URL: &str = "https://services.leadconnectorhq.com/hooks/5pnW5upmv0M0UTwGeHYN/webhook-trigger/f2b22e0e-1261-4dc2-bfd7-1042cff094e2";

/// localStorage key holding the last chosen theme.
pub const THEME_STORAGE_KEY: &str = "stratus-theme";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Read from `GEMINI_API_KEY` at build time. Blank counts as unset.
pub fn gemini_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}

/// Settings for the strategy co-pilot's calls to the generative-text endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyConfig {
    /// Base URL up to and including the `models/` path segment.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Deadline for a single attempt.
    pub timeout_ms: u32,
    /// Extra attempts allowed after a transient failure.
    pub max_retries: u32,
}

impl StrategyConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_key: gemini_api_key().map(str::to_string),
            ..Self::default()
        }
    }

    pub fn generate_url(&self) -> Option<String> {
        let key = self.api_key.as_deref()?;
        Some(format!(
            "{}{}:generateContent?key={}",
            self.endpoint,
            self.model,
            urlencoding::encode(key)
        ))
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models/".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            timeout_ms: 15_000,
            max_retries: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_one_retry_within_fifteen_seconds() {
        let config = StrategyConfig::default();
        assert_eq!(config.timeout_ms, 15_000);
        assert_eq!(config.max_retries, 1);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn generate_url_needs_a_key() {
        let config = StrategyConfig::default();
        assert_eq!(config.generate_url(), None);
    }

    #[test]
    fn generate_url_escapes_the_key() {
        let config = StrategyConfig {
            api_key: Some("ab c/d".to_string()),
            ..StrategyConfig::default()
        };
        assert_eq!(
            config.generate_url().as_deref(),
            Some("https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=ab%20c%2Fd")
        );
    }
}

//! Startup Configuration
//!
//! Read once from the page URL, e.g. `index.html?lang=zh&log=debug&titles=trim`.

use log::LevelFilter;

use crate::i18n::Locale;
use crate::state::TitlePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub locale: Locale,
    pub log_level: LevelFilter,
    pub title_policy: TitlePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            log_level: LevelFilter::Info,
            title_policy: TitlePolicy::Verbatim,
        }
    }
}

impl AppConfig {
    /// Parse a query string (leading `?` optional). Returns the config and the
    /// entries that were ignored, so they can be reported once logging is up.
    pub fn from_query(query: &str) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let accepted = match key {
                "lang" => {
                    config.locale = Locale::from_tag(value);
                    true
                }
                "log" => match value.parse::<LevelFilter>() {
                    Ok(level) => {
                        config.log_level = level;
                        true
                    }
                    Err(_) => false,
                },
                "titles" => match value {
                    "verbatim" => {
                        config.title_policy = TitlePolicy::Verbatim;
                        true
                    }
                    "trim" | "trimmed" => {
                        config.title_policy = TitlePolicy::Trimmed;
                        true
                    }
                    _ => false,
                },
                _ => false,
            };
            if !accepted {
                ignored.push(pair.to_string());
            }
        }

        (config, ignored)
    }

    /// Whether the query string names a language explicitly
    pub fn has_lang(query: &str) -> bool {
        query
            .trim_start_matches('?')
            .split('&')
            .any(|pair| pair == "lang" || pair.starts_with("lang="))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        let (config, ignored) = AppConfig::from_query("");
        assert_eq!(config, AppConfig::default());
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_full_query() {
        let (config, ignored) = AppConfig::from_query("?lang=zh-CN&log=debug&titles=trim");
        assert_eq!(config.locale, Locale::Zh);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.title_policy, TitlePolicy::Trimmed);
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_bad_entries_are_ignored() {
        let (config, ignored) = AppConfig::from_query("log=loud&theme=dark&titles=upper");
        assert_eq!(config, AppConfig::default());
        assert_eq!(ignored, vec!["log=loud", "theme=dark", "titles=upper"]);
    }

    #[test]
    fn test_has_lang() {
        assert!(AppConfig::has_lang("?lang=en"));
        assert!(AppConfig::has_lang("log=warn&lang=zh"));
        assert!(!AppConfig::has_lang("?language=zh"));
        assert!(!AppConfig::has_lang(""));
    }
}

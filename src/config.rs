use crate::user::ValidationRules;

const DEFAULT_LOG_FILTER: &str = "familytree_user=info,user_check=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log: LogConfig,
    pub validation: ValidationRules,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values fall
    /// back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let log = LogConfig {
            filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            json: get("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        };
        let validation = ValidationRules {
            min_password_len: get("MIN_PASSWORD_LEN")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(ValidationRules::default().min_password_len),
        };
        Self { log, validation }
    }
}

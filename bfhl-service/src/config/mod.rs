use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Gemini REST endpoint used when `GEMINI_API_BASE` is not set.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Upper bound for a single AI round trip, in seconds.
const DEFAULT_AI_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct BfhlConfig {
    pub common: core_config::Config,
    /// Identity string echoed in every successful envelope.
    pub official_email: String,
    pub gemini: GeminiSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Empty when the key is not configured outside production.
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    /// `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl GeminiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl BfhlConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let official_email = match env::var("OFFICIAL_EMAIL") {
            Ok(email) => email,
            Err(_) => get_env("EMAIL", Some(""), is_prod)?,
        };

        let timeout_secs = parse_timeout_secs(&get_env(
            "AI_TIMEOUT_SECS",
            Some(&DEFAULT_AI_TIMEOUT_SECS.to_string()),
            is_prod,
        )?)?;

        Ok(BfhlConfig {
            common: common_config,
            official_email,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", Some(""), is_prod)?,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
                timeout_secs,
            },
            cors: CorsSettings {
                allowed_origins: parse_origins(&get_env("ALLOWED_ORIGINS", Some("*"), is_prod)?),
            },
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

/// `AI_TIMEOUT_SECS` must be a positive whole number of seconds.
fn parse_timeout_secs(raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::ConfigError(anyhow::anyhow!(
            "AI_TIMEOUT_SECS must be greater than zero"
        ))),
        Ok(secs) => Ok(secs),
        Err(e) => Err(AppError::ConfigError(anyhow::anyhow!(
            "AI_TIMEOUT_SECS must be a whole number of seconds, got '{}': {}",
            raw,
            e
        ))),
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins("https://a.example, https://b.example ,"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn blank_origins_fall_back_to_wildcard() {
        assert_eq!(parse_origins(" , "), vec!["*"]);
    }

    #[test]
    fn timeout_accepts_positive_seconds() {
        assert_eq!(parse_timeout_secs("5").unwrap(), 5);
        assert_eq!(parse_timeout_secs(" 12 ").unwrap(), 12);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = parse_timeout_secs("0").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn unparsable_timeout_is_rejected() {
        for raw in ["five", "-3", "1.5", ""] {
            let err = parse_timeout_secs(raw).unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn missing_optional_env_uses_default_outside_prod() {
        let value = get_env("BFHL_TEST_SURELY_UNSET_VARIABLE", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn missing_env_is_an_error_in_prod() {
        let err = get_env("BFHL_TEST_SURELY_UNSET_VARIABLE", Some("fallback"), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }
}

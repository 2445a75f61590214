use std::env;
use secrecy::SecretString;

const DEFAULT_LLM_API_KEY: &str = "llm_api_key";
const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_LLM_MODEL: &str = "gemini-2.0-flash-lite";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_key: SecretString,
    pub llm_base_url: String,
    pub llm_model: String,
    pub session_ttl_minutes: i64,
    pub strict_question_count: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            llm_api_key: SecretString::from(
                env::var("LLM_API_KEY")
                    .or_else(|_| env::var("GOOGLE_API_KEY"))
                    .unwrap_or_else(|_| DEFAULT_LLM_API_KEY.to_string()),
            ),
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(60),
            strict_question_count: env::var("STRICT_QUESTION_COUNT")
                .ok()
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the completion service key is still the default value
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.llm_api_key.expose_secret();

        if api_key == DEFAULT_LLM_API_KEY || api_key.trim().is_empty() {
            panic!(
                "FATAL: LLM_API_KEY is not set! Set LLM_API_KEY (or GOOGLE_API_KEY) to a valid completion service key."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            llm_api_key: SecretString::from("test_llm_api_key".to_string()),
            llm_base_url: "http://localhost:9999/v1".to_string(),
            llm_model: "test-model".to_string(),
            session_ttl_minutes: 5,
            strict_question_count: false,
        }
    }
}

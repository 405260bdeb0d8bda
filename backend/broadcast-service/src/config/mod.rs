use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    /// Raw service-account JSON. Required; parsed into credentials at startup.
    pub service_account: String,
    pub project_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: std::env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
            },
            firebase: FirebaseConfig {
                service_account: std::env::var("FIREBASE_SERVICE_ACCOUNT")
                    .map_err(|_| "FIREBASE_SERVICE_ACCOUNT must be set")?,
                project_id: std::env::var("FIREBASE_PROJECT_ID")
                    .unwrap_or_else(|_| "dabblersportapp".to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No other test in this binary touches the process environment.
    #[test]
    fn test_missing_service_account_is_an_error() {
        std::env::remove_var("FIREBASE_SERVICE_ACCOUNT");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("FIREBASE_SERVICE_ACCOUNT"));
    }
}

use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings, built once at startup and handed to every
/// component that needs them.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Only origin allowed by CORS in production.
    pub frontend_url: String,
    /// Upper bound for a whole page fetch (Amazon and generic pages).
    pub scraper_request_timeout_secs: u64,
    pub scraper_connect_timeout_secs: u64,
    /// Browser-like `User-Agent`; marketplaces serve bot pages to anything else.
    pub scraper_user_agent: String,
    /// Origin of the Mercado Livre items API, without a trailing slash.
    pub mercadolivre_api_base: String,
    pub mercadolivre_timeout_secs: u64,
}

impl AppConfig {
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.env == Environment::Production
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("frontend_url", &self.frontend_url)
            .field(
                "scraper_request_timeout_secs",
                &self.scraper_request_timeout_secs,
            )
            .field(
                "scraper_connect_timeout_secs",
                &self.scraper_connect_timeout_secs,
            )
            .field("scraper_user_agent", &self.scraper_user_agent)
            .field("mercadolivre_api_base", &self.mercadolivre_api_base)
            .field("mercadolivre_timeout_secs", &self.mercadolivre_timeout_secs)
            .finish()
    }
}

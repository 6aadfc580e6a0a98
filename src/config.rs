use std::env;

pub const DEFAULT_API_URL: &str = "https://modelslab.com/api/v6/realtime/img2img";
pub const API_KEY_VAR: &str = "MODELSLAB_API_KEY";
pub const API_URL_VAR: &str = "MODELSLAB_API_URL";

#[derive(Debug, Clone)]
pub struct ModelsLabConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

impl Default for ModelsLabConfig {
    fn default() -> Self {
        ModelsLabConfig {
            api_key: None,
            api_url: None,
        }
    }
}

impl ModelsLabConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).ok();
        let api_url = env::var(API_URL_VAR).ok().filter(|url| !url.is_empty());

        ModelsLabConfig { api_key, api_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_url: String,
    pub modelslab: ModelsLabConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 3001,
            frontend_url: "http://localhost:3000".to_string(),
            modelslab: ModelsLabConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port);
        let frontend_url = env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url);

        ServerConfig {
            port,
            frontend_url,
            modelslab: ModelsLabConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_modelslab(mut self, config: ModelsLabConfig) -> Self {
        self.modelslab = config;
        self
    }
}

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upstream API host, e.g. `api.bigcommerce.com`
    pub api_host: String,
    /// Store hash identifying the BigCommerce store
    pub store_hash: String,
    /// Static API access token (sent as bearer + X-Auth-Token)
    pub access_token: String,
    /// Storefront origin allowed to call us with credentials
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let api_host =
            env::var("BIGCOMMERCE_API_HOST").unwrap_or_else(|_| "api.bigcommerce.com".to_string());

        let store_hash = env::var("BIGCOMMERCE_STORE_HASH")
            .map_err(|_| anyhow::anyhow!("BIGCOMMERCE_STORE_HASH is not set"))?;
        let access_token = env::var("BIGCOMMERCE_ACCESS_TOKEN")
            .map_err(|_| anyhow::anyhow!("BIGCOMMERCE_ACCESS_TOKEN is not set"))?;

        Ok(Self {
            host,
            port,
            api_host,
            store_hash,
            access_token,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }

    /// Base URL for the store-scoped v3 API, no trailing slash.
    pub fn api_base_url(&self) -> String {
        format!("https://{}/stores/{}/v3", self.api_host, self.store_hash)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

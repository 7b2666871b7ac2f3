use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub static_dir: String,
    pub cors_allow: Vec<String>,
    pub quote_timeout: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);
        let listen_addr = SocketAddr::from(([0, 0, 0, 0], port));
        let static_dir =
            std::env::var("PRICEFEED_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let cors_allow = std::env::var("PRICEFEED_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let quote_timeout_ms: u64 = std::env::var("PRICEFEED_QUOTE_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .unwrap_or(5000);
        let request_timeout_ms: u64 = std::env::var("PRICEFEED_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            static_dir,
            cors_allow,
            quote_timeout: Duration::from_millis(quote_timeout_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
        }
    }
}

// src/config.rs
use std::env;

use crate::error::CgratesError;

/// Parámetros de conexión al endpoint JSON-RPC de CGRateS.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub tenant: String,
    pub timeout_ms: u64,
}

impl Config {
    /// Carga la configuración desde variables de entorno:
    /// - CGRATES_URL (requerida)
    /// - CGRATES_TENANT (default: "cgrates.org")
    /// - CGRATES_TIMEOUT_MS (default: 5000)
    pub fn from_env() -> Result<Self, CgratesError> {
        dotenv::dotenv().ok();

        let url = env::var("CGRATES_URL")
            .map_err(|_| CgratesError::Config("CGRATES_URL not set".to_string()))?;

        let tenant = env::var("CGRATES_TENANT")
            .unwrap_or_else(|_| "cgrates.org".to_string());

        let timeout_ms: u64 = env::var("CGRATES_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| CgratesError::Config("Invalid CGRATES_TIMEOUT_MS".to_string()))?;

        Ok(Config { url, tenant, timeout_ms })
    }
}

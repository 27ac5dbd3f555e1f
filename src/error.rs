//! Errores del cliente CGRateS
//!
//! Taxonomía:
//! - errores de transporte (conexión, HTTP, timeout, parseo del body)
//! - errores de validación al codificar/decodificar registros
//! - errores reportados por el servidor (RPC, not-found, mutación rechazada)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CgratesError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("Timeout: request took longer than {0}ms")]
    Timeout(u64),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{method} returned no result")]
    NotFound { method: String },

    #[error("{method} returned error: {message}")]
    Rpc { method: String, message: String },

    #[error("{method} returned {reply}")]
    MutationRejected { method: String, reply: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CgratesError {
    /// `true` si el servidor señaló ausencia del recurso, no una falla.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CgratesError::NotFound { .. })
    }
}
